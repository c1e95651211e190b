//! Error types for the data-source layer.
//!
//! Failures here are local to the data source and never reach the rendering
//! widget as panics: out-of-range coordinates and stale column identities are
//! reported as errors, while rejected edits (non-editable payload kinds) are
//! defined no-ops on [`crate::GridSource::edit_cell`].

use crate::column::ColumnId;

/// A specialized Result type for data-source operations.
pub type Result<T> = std::result::Result<T, GridSourceError>;

/// Errors that can occur in the data-source layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridSourceError {
    /// A canonical column index was outside the registry bounds.
    #[error("column index {column} out of range (column count {count})")]
    ColumnOutOfRange { column: usize, count: usize },

    /// A row index was outside the advertised row count.
    #[error("row index {row} out of range (row count {count})")]
    RowOutOfRange { row: usize, count: usize },

    /// A column identity did not resolve to a live descriptor, e.g. after
    /// the registry was rebuilt.
    #[error("no column with id {0:?} in this registry")]
    ColumnNotFound(ColumnId),

    /// A display-order position was outside the permutation bounds.
    #[error("display index {index} out of range (column count {count})")]
    DisplayIndexOutOfRange { index: usize, count: usize },
}
