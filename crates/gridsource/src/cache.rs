//! Two-level sparse cell content cache.
//!
//! The cache is the leaf primitive of the data-source layer: a column-major
//! sparse store holding every cell value that has ever been generated or
//! edited. It is keyed by canonical column index, so reordering columns on
//! screen never invalidates or relocates entries.
//!
//! There is no eviction: the cache grows for the lifetime of its owning
//! source, which is acceptable at demo scale. A bounded wrapper could be
//! layered on top without changing the resolver contract.

use std::collections::HashMap;

use crate::cell::CellValue;

/// Sparse store of previously produced or edited cell values.
///
/// Keyed by (canonical column index, row index). Absent means "never
/// generated". The cache is exclusively owned by the data-source layer; the
/// rendering widget only reaches it through the resolver and edit sink.
#[derive(Debug, Default)]
pub struct ContentCache {
    /// column -> row -> value
    cells: HashMap<usize, HashMap<usize, CellValue>>,
}

impl ContentCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value at the coordinate, if any.
    pub fn get(&self, column: usize, row: usize) -> Option<&CellValue> {
        self.cells.get(&column)?.get(&row)
    }

    /// Returns `true` if the coordinate has a cached value.
    pub fn contains(&self, column: usize, row: usize) -> bool {
        self.get(column, row).is_some()
    }

    /// Stores a value at the coordinate, replacing any previous entry.
    pub fn insert(&mut self, column: usize, row: usize, value: CellValue) {
        self.cells.entry(column).or_default().insert(row, value);
    }

    /// Returns the total number of cached cells.
    pub fn len(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no cell has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cells.values().all(HashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellPayload;

    fn text(s: &str) -> CellValue {
        CellValue::new(CellPayload::from(s))
    }

    #[test]
    fn test_empty_cache() {
        let cache = ContentCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.get(0, 0).is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = ContentCache::new();
        cache.insert(2, 7, text("hello"));

        assert!(cache.contains(2, 7));
        assert_eq!(cache.get(2, 7).map(|v| v.display()), Some("hello"));
        assert!(!cache.contains(7, 2)); // Coordinates are (column, row)
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut cache = ContentCache::new();
        cache.insert(0, 0, text("first"));
        cache.insert(0, 0, text("second"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(0, 0).map(|v| v.display()), Some("second"));
    }

    #[test]
    fn test_sparse_columns() {
        let mut cache = ContentCache::new();
        cache.insert(0, 0, text("a"));
        cache.insert(100, 9999, text("b"));
        cache.insert(100, 0, text("c"));

        assert_eq!(cache.len(), 3);
        assert!(cache.contains(100, 9999));
        assert!(!cache.contains(50, 0));
    }
}
