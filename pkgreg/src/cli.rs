use std::path::PathBuf;

use clap::{ArgAction, Parser};
use eyre::Result;
use pkgreg_pipeline::BuildInputs;

use crate::{
    ops::{self, BuildOptions},
    reports::{QuietOutput, Report, TerminalOutput},
};

/// Extension trait for exiting on input errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> Result<T>;
}

impl<T> UnwrapOrExit<T> for Result<T> {
    fn unwrap_or_exit(self) -> Result<T> {
        self.or_else(|report| match report.downcast::<pkgreg_input::Error>() {
            Ok(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
            Err(report) => Err(report),
        })
    }
}

#[derive(Parser)]
#[command(name = "pkgreg")]
#[command(version)]
#[command(about = "Generate a size-ordered package registry from handler directories")]
pub(crate) struct Cli {
    /// Folder with one directory per handler, each holding a packages.txt
    pub handlers_dir: PathBuf,

    /// Package size table, one '<package>:<size>' entry per line
    pub sizes_file: PathBuf,

    /// Where to write the registry
    #[arg(short, long, default_value = "registry.json")]
    pub output: PathBuf,

    /// Print the registry JSON instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Fail on malformed lines and stray files instead of warning
    #[arg(long)]
    pub strict: bool,

    /// Only print warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, num_args = 0..)]
    _rest: Vec<String>,
}

impl Cli {
    /// Build the registry and print the report
    pub fn run(&self) -> Result<()> {
        let inputs = BuildInputs::new(&self.handlers_dir, &self.sizes_file).strict(self.strict);
        let report = ops::build(
            inputs,
            BuildOptions {
                output: &self.output,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit()?;

        if self.quiet {
            report.render(&mut QuietOutput::new());
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pkgreg", "handlers", "sizes.txt"]).unwrap();

        assert_eq!(cli.handlers_dir, PathBuf::from("handlers"));
        assert_eq!(cli.sizes_file, PathBuf::from("sizes.txt"));
        assert_eq!(cli.output, PathBuf::from("registry.json"));
        assert!(!cli.dry_run && !cli.strict && !cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "pkgreg", "h", "s", "-o", "out/reg.json", "--dry-run", "--strict", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.output, PathBuf::from("out/reg.json"));
        assert!(cli.dry_run && cli.strict);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_extra_positionals_ignored() {
        let cli = Cli::try_parse_from(["pkgreg", "handlers", "sizes.txt", "extra"]).unwrap();

        assert_eq!(cli.handlers_dir, PathBuf::from("handlers"));
        assert_eq!(cli.sizes_file, PathBuf::from("sizes.txt"));
        assert_eq!(cli.output, PathBuf::from("registry.json"));
    }

    #[test]
    fn test_missing_positionals_is_usage_error() {
        assert!(Cli::try_parse_from(["pkgreg"]).is_err());
        assert!(Cli::try_parse_from(["pkgreg", "handlers"]).is_err());
    }
}
