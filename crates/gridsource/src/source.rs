//! The data source: lazy cell resolver, memoization, and edit sink.
//!
//! [`GridSource`] is the object a virtualized grid widget talks to. It owns
//! the column registry and the content cache, resolves cell requests lazily
//! (invoking a column's generation rule at most once per coordinate), accepts
//! edits, and announces changes through [`SourceSignals`].
//!
//! All methods take `&self`; interior mutability follows the usual pattern of
//! `RwLock`-wrapped state so a source can sit behind an `Arc` shared between
//! the widget and application code.

use std::sync::atomic::{AtomicBool, Ordering};

use gridsource_core::Signal;
use parking_lot::RwLock;

use crate::cache::ContentCache;
use crate::cell::{CellPayload, CellValue};
use crate::column::{ColumnHeader, ColumnId, ColumnRegistry, ColumnSpec};
use crate::error::{GridSourceError, Result};

/// Signals emitted by a [`GridSource`].
///
/// Coordinates in signal arguments are always canonical; a reordering layer
/// translates them for display.
pub struct SourceSignals {
    /// Emitted after an edit lands in the cache, with the canonical
    /// `(column, row)` coordinate.
    pub cell_changed: Signal<(usize, usize)>,
    /// Emitted after a column width changes, with the column id and the new
    /// width.
    pub column_resized: Signal<(ColumnId, u32)>,
    /// Emitted after the column registry is rebuilt. Previously issued
    /// column ids are stale once this fires.
    pub columns_reset: Signal<()>,
    /// Emitted when the source-wide editability flag changes.
    pub editable_changed: Signal<bool>,
}

impl SourceSignals {
    fn new() -> Self {
        Self {
            cell_changed: Signal::new(),
            column_resized: Signal::new(),
            columns_reset: Signal::new(),
            editable_changed: Signal::new(),
        }
    }

    pub(crate) fn emit_cell_changed(&self, column: usize, row: usize) {
        self.cell_changed.emit((column, row));
    }

    pub(crate) fn emit_column_resized(&self, id: ColumnId, width: u32) {
        self.column_resized.emit((id, width));
    }

    pub(crate) fn emit_columns_reset(&self) {
        self.columns_reset.emit(());
    }

    pub(crate) fn emit_editable_changed(&self, editable: bool) {
        self.editable_changed.emit(editable);
    }
}

/// A lazily populated, memoized data source for a virtualized grid.
///
/// Content is produced on demand: the first request for a coordinate runs the
/// column's generation rule and caches the result; every later request (and
/// every edit) goes through the cache. The widget therefore sees a stable
/// world even though nothing is materialized up front.
///
/// # Editability
///
/// The source carries a single `editable` flag. It does not gate the edit
/// sink; it is projected onto outbound values as the `readonly` flag, which
/// is what the widget consults before opening an editor. Cached values are
/// never mutated by the projection, so toggling the flag back restores the
/// original behavior without touching content.
pub struct GridSource {
    columns: RwLock<ColumnRegistry>,
    cache: RwLock<ContentCache>,
    row_count: usize,
    editable: AtomicBool,
    signals: SourceSignals,
}

impl GridSource {
    /// Creates a source over the given columns and row count.
    ///
    /// The source starts non-editable; see [`GridSource::set_editable`].
    pub fn new(specs: Vec<ColumnSpec>, row_count: usize) -> Self {
        Self {
            columns: RwLock::new(ColumnRegistry::from_specs(specs)),
            cache: RwLock::new(ContentCache::new()),
            row_count,
            editable: AtomicBool::new(false),
            signals: SourceSignals::new(),
        }
    }

    /// Returns the number of rows this source advertises.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.read().len()
    }

    /// Returns `true` if the source currently accepts overlay editing.
    pub fn is_editable(&self) -> bool {
        self.editable.load(Ordering::SeqCst)
    }

    /// Sets the source-wide editability flag.
    ///
    /// Affects only the `readonly` projection on outbound values; cached
    /// content is untouched.
    pub fn set_editable(&self, editable: bool) {
        let previous = self.editable.swap(editable, Ordering::SeqCst);
        if previous != editable {
            tracing::debug!(target: "gridsource::source", editable, "editability changed");
            self.signals.emit_editable_changed(editable);
        }
    }

    /// Returns the signals emitted by this source.
    pub fn signals(&self) -> &SourceSignals {
        &self.signals
    }

    /// Resolves the cell at the canonical coordinate.
    ///
    /// On first access the column's generation rule runs and the result is
    /// cached; afterwards the cached value is returned unchanged until an
    /// edit replaces it. The returned copy has its `readonly` flag projected
    /// from the source's editability and the payload kind.
    pub fn cell_content(&self, column: usize, row: usize) -> Result<CellValue> {
        self.check_row(row)?;
        // Checked up front: after a registry rebuild shrank the column set,
        // stale cache entries may exist past the current bounds.
        self.check_column(column)?;

        if let Some(value) = self.cache.read().get(column, row) {
            return Ok(self.project(value));
        }

        let mut cache = self.cache.write();
        // Re-check under the write lock so the rule runs at most once per
        // coordinate even with concurrent readers.
        if let Some(value) = cache.get(column, row) {
            return Ok(self.project(value));
        }

        let value = self.columns.read().generate(column, row)?;
        tracing::trace!(target: "gridsource::source", column, row, "cell generated");
        let projected = self.project(&value);
        cache.insert(column, row, value);
        Ok(projected)
    }

    /// Applies an edit to the cell at the canonical coordinate.
    ///
    /// The edit is merged into the cached entry: payload and display text are
    /// replaced, kind and flags are preserved. Rejected edits are silent
    /// no-ops, never errors:
    ///
    /// - payloads of a non-editable kind are dropped;
    /// - payloads whose kind differs from the cached entry's are dropped,
    ///   since a cell's kind never changes in place.
    ///
    /// If the coordinate was never resolved, a fresh entry is created from
    /// the payload alone. [`SourceSignals::cell_changed`] fires only when the
    /// cache actually changed.
    pub fn edit_cell(&self, column: usize, row: usize, payload: CellPayload) -> Result<()> {
        self.check_row(row)?;
        self.check_column(column)?;

        if !payload.kind().is_editable() {
            tracing::trace!(
                target: "gridsource::source",
                column,
                row,
                kind = ?payload.kind(),
                "edit dropped: kind is not editable"
            );
            return Ok(());
        }

        {
            let mut cache = self.cache.write();
            match cache.get(column, row) {
                Some(existing) => {
                    if existing.kind() != payload.kind() {
                        tracing::debug!(
                            target: "gridsource::source",
                            column,
                            row,
                            cached = ?existing.kind(),
                            incoming = ?payload.kind(),
                            "edit dropped: kind mismatch"
                        );
                        return Ok(());
                    }
                    let merged = existing.merged_with(payload);
                    cache.insert(column, row, merged);
                }
                // Edit before first resolution: store the payload directly so
                // the generation rule never overwrites user input.
                None => cache.insert(column, row, CellValue::new(payload)),
            }
        }

        tracing::debug!(target: "gridsource::source", column, row, "cell edited");
        self.signals.emit_cell_changed(column, row);
        Ok(())
    }

    /// Changes the width of the identified column.
    ///
    /// Width is the only attribute that changes; position, title, and cached
    /// content are untouched.
    pub fn resize_column(&self, id: ColumnId, width: u32) -> Result<()> {
        self.columns.write().resize(id, width)?;
        self.signals.emit_column_resized(id, width);
        Ok(())
    }

    /// Returns a header snapshot for the canonical position.
    pub fn header(&self, column: usize) -> Result<ColumnHeader> {
        self.columns.read().header(column)
    }

    /// Returns header snapshots in canonical order.
    pub fn headers(&self) -> Vec<ColumnHeader> {
        self.columns.read().headers()
    }

    /// Returns the id of the column at the canonical position.
    pub fn column_id_at(&self, column: usize) -> Result<ColumnId> {
        self.columns.read().id_at(column)
    }

    /// Replaces the column registry with fresh descriptors.
    ///
    /// The content cache is kept: entries are keyed by canonical index, so
    /// position `i` of the new registry inherits whatever position `i` of the
    /// old one had cached. Previously issued column ids become stale.
    pub fn reset_columns(&self, specs: Vec<ColumnSpec>) {
        self.columns.write().rebuild(specs);
        self.signals.emit_columns_reset();
    }

    /// Returns `true` if the coordinate has a cached value.
    pub fn is_cached(&self, column: usize, row: usize) -> bool {
        self.cache.read().contains(column, row)
    }

    /// Returns the number of cached cells.
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Projects the source-wide editability onto an outbound copy.
    ///
    /// Non-editable kinds are always read-only; everything else follows the
    /// source flag. The cached value is never modified.
    fn project(&self, value: &CellValue) -> CellValue {
        let readonly = !self.is_editable() || !value.kind().is_editable();
        value.projected_readonly(readonly)
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.row_count {
            return Err(GridSourceError::RowOutOfRange {
                row,
                count: self.row_count,
            });
        }
        Ok(())
    }

    fn check_column(&self, column: usize) -> Result<()> {
        let count = self.columns.read().len();
        if column >= count {
            return Err(GridSourceError::ColumnOutOfRange { column, count });
        }
        Ok(())
    }
}
