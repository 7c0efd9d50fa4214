use std::{cmp::Reverse, collections::HashMap};

/// Size weight of a package. Only meaningful for ordering.
///
/// Signed: a negative size ranks below packages with no entry.
pub type Size = i64;

/// Lookup table from package name to size.
///
/// Built once from the size file, then only read. Packages without an
/// entry resolve to a size of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeTable {
    sizes: HashMap<String, Size>,
}

impl SizeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the size of a package, replacing any earlier value.
    ///
    /// Returns the replaced size, if there was one.
    pub fn insert(&mut self, name: impl Into<String>, size: Size) -> Option<Size> {
        self.sizes.insert(name.into(), size)
    }

    /// Get the recorded size of a package.
    pub fn get(&self, name: &str) -> Option<Size> {
        self.sizes.get(name).copied()
    }

    /// Size of a package, or zero when the table has no entry for it.
    pub fn size_of(&self, name: &str) -> Size {
        self.get(name).unwrap_or(0)
    }

    /// Check whether a package has a recorded size.
    pub fn contains(&self, name: &str) -> bool {
        self.sizes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sort package names by descending size.
    ///
    /// The sort is stable: packages of equal size keep their relative order.
    pub fn sort_desc(&self, pkgs: &mut [String]) {
        pkgs.sort_by_key(|pkg| Reverse(self.size_of(pkg)));
    }
}

impl<K: Into<String>> FromIterator<(K, Size)> for SizeTable {
    fn from_iter<I: IntoIterator<Item = (K, Size)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, size) in iter {
            table.insert(name, size);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pkgs: &[&str]) -> Vec<String> {
        pkgs.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_size_of_missing_is_zero() {
        let table: SizeTable = [("a", 10)].into_iter().collect();

        assert_eq!(table.size_of("a"), 10);
        assert_eq!(table.size_of("b"), 0);
        assert!(!table.contains("b"));
    }

    #[test]
    fn test_insert_last_wins() {
        let mut table = SizeTable::new();

        assert_eq!(table.insert("a", 1), None);
        assert_eq!(table.insert("a", 7), Some(1));
        assert_eq!(table.get("a"), Some(7));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_sort_desc() {
        let table: SizeTable = [("a", 10), ("b", 5), ("c", 20)].into_iter().collect();
        let mut pkgs = names(&["a", "b", "c"]);

        table.sort_desc(&mut pkgs);

        assert_eq!(pkgs, names(&["c", "a", "b"]));
    }

    #[test]
    fn test_sort_desc_keeps_tie_order() {
        let table: SizeTable = [("big", 100), ("x", 3), ("y", 3)].into_iter().collect();
        let mut pkgs = names(&["y", "unknown", "x", "big", "other"]);

        table.sort_desc(&mut pkgs);

        assert_eq!(pkgs, names(&["big", "y", "x", "unknown", "other"]));
    }

    #[test]
    fn test_sort_desc_negative_after_missing() {
        let table: SizeTable = [("neg", -4), ("a", 1)].into_iter().collect();
        let mut pkgs = names(&["neg", "ghost", "a"]);

        table.sort_desc(&mut pkgs);

        assert_eq!(pkgs, names(&["a", "ghost", "neg"]));
    }

    #[test]
    fn test_sort_desc_empty_table() {
        let table = SizeTable::new();
        let mut pkgs = names(&["x", "y"]);

        table.sort_desc(&mut pkgs);

        assert_eq!(pkgs, names(&["x", "y"]));
    }
}
