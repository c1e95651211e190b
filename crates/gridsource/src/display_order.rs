//! Display-order permutation over a data source.
//!
//! A [`GridSource`] addresses columns by canonical index, which is what the
//! content cache is keyed by. When the user drags columns around, only the
//! mapping between what is on screen and the canonical order changes; content
//! never moves. [`DisplayOrder`] holds that permutation, and
//! [`ReorderableSource`] wraps a source so the widget can keep talking in
//! display coordinates.

use gridsource_core::{ConnectionGuard, Signal};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::cell::{CellPayload, CellValue};
use crate::column::{ColumnHeader, ColumnId};
use crate::error::{GridSourceError, Result};
use crate::source::GridSource;

/// Bijective mapping between display positions and canonical column indices.
///
/// Maintains both directions so lookups are O(1) either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOrder {
    display_to_canonical: Vec<usize>,
    canonical_to_display: Vec<usize>,
}

impl DisplayOrder {
    /// Creates the identity permutation over `count` columns.
    pub fn identity(count: usize) -> Self {
        Self {
            display_to_canonical: (0..count).collect(),
            canonical_to_display: (0..count).collect(),
        }
    }

    /// Returns the number of columns covered by the permutation.
    pub fn len(&self) -> usize {
        self.display_to_canonical.len()
    }

    /// Returns `true` if the permutation covers no columns.
    pub fn is_empty(&self) -> bool {
        self.display_to_canonical.is_empty()
    }

    /// Returns `true` if display order matches canonical order.
    pub fn is_identity(&self) -> bool {
        self.display_to_canonical.iter().enumerate().all(|(d, &c)| d == c)
    }

    /// Maps a display position to its canonical column index.
    pub fn to_canonical(&self, display: usize) -> Result<usize> {
        self.display_to_canonical
            .get(display)
            .copied()
            .ok_or(GridSourceError::DisplayIndexOutOfRange {
                index: display,
                count: self.display_to_canonical.len(),
            })
    }

    /// Maps a canonical column index to its current display position.
    pub fn to_display(&self, canonical: usize) -> Result<usize> {
        self.canonical_to_display
            .get(canonical)
            .copied()
            .ok_or(GridSourceError::DisplayIndexOutOfRange {
                index: canonical,
                count: self.canonical_to_display.len(),
            })
    }

    /// Moves the column at display position `from` so it lands at `to`,
    /// shifting the columns in between.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<()> {
        let count = self.display_to_canonical.len();
        if from >= count {
            return Err(GridSourceError::DisplayIndexOutOfRange { index: from, count });
        }
        if to >= count {
            return Err(GridSourceError::DisplayIndexOutOfRange { index: to, count });
        }
        if from == to {
            return Ok(());
        }

        let canonical = self.display_to_canonical.remove(from);
        self.display_to_canonical.insert(to, canonical);
        self.rebuild_reverse();

        tracing::debug!(
            target: "gridsource::display_order",
            from,
            to,
            canonical,
            "column moved"
        );
        Ok(())
    }

    fn rebuild_reverse(&mut self) {
        self.canonical_to_display = vec![0; self.display_to_canonical.len()];
        for (display, &canonical) in self.display_to_canonical.iter().enumerate() {
            self.canonical_to_display[canonical] = display;
        }
    }
}

/// A [`GridSource`] viewed through a display-order permutation.
///
/// Every column coordinate crossing this type is a display position; the
/// wrapper translates to canonical indices before delegating, so the
/// underlying cache stays put no matter how columns are dragged around.
pub struct ReorderableSource {
    // Declared before `source` so the scoped connection is dropped while the
    // signal it points into is still alive.
    _reset_guard: ConnectionGuard<()>,
    order: Arc<RwLock<DisplayOrder>>,
    source: Arc<GridSource>,
    /// Emitted after a move with the `(from, to)` display positions.
    pub columns_moved: Signal<(usize, usize)>,
}

impl ReorderableSource {
    /// Wraps a source with an identity display order.
    ///
    /// When the underlying source rebuilds its columns, the permutation
    /// resets to identity over the new column count.
    pub fn new(source: Arc<GridSource>) -> Self {
        let order = Arc::new(RwLock::new(DisplayOrder::identity(source.column_count())));

        let order_for_reset = order.clone();
        let source_for_reset = source.clone();
        let reset_guard = source.signals().columns_reset.connect_scoped(move |_| {
            let count = source_for_reset.column_count();
            *order_for_reset.write() = DisplayOrder::identity(count);
            tracing::debug!(
                target: "gridsource::display_order",
                column_count = count,
                "display order reset to identity"
            );
        });

        Self {
            _reset_guard: reset_guard,
            order,
            source,
            columns_moved: Signal::new(),
        }
    }

    /// Returns the wrapped source.
    pub fn source(&self) -> &Arc<GridSource> {
        &self.source
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.source.row_count()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.order.read().len()
    }

    /// Maps a display position to the canonical column index.
    pub fn to_canonical(&self, display: usize) -> Result<usize> {
        self.order.read().to_canonical(display)
    }

    /// Maps a canonical column index to its display position.
    pub fn to_display(&self, canonical: usize) -> Result<usize> {
        self.order.read().to_display(canonical)
    }

    /// Resolves the cell at the display coordinate.
    pub fn cell_content(&self, display: usize, row: usize) -> Result<CellValue> {
        let canonical = self.to_canonical(display)?;
        self.source.cell_content(canonical, row)
    }

    /// Applies an edit at the display coordinate.
    pub fn edit_cell(&self, display: usize, row: usize, payload: CellPayload) -> Result<()> {
        let canonical = self.to_canonical(display)?;
        self.source.edit_cell(canonical, row, payload)
    }

    /// Returns a header snapshot for the display position.
    pub fn header(&self, display: usize) -> Result<ColumnHeader> {
        let canonical = self.to_canonical(display)?;
        self.source.header(canonical)
    }

    /// Returns header snapshots in display order.
    pub fn headers(&self) -> Vec<ColumnHeader> {
        let order = self.order.read();
        (0..order.len())
            .filter_map(|display| {
                let canonical = order.to_canonical(display).ok()?;
                self.source.header(canonical).ok()
            })
            .collect()
    }

    /// Returns the id of the column at the display position.
    pub fn column_id_at(&self, display: usize) -> Result<ColumnId> {
        let canonical = self.to_canonical(display)?;
        self.source.column_id_at(canonical)
    }

    /// Changes the width of the identified column.
    ///
    /// Ids are position-independent, so this delegates directly.
    pub fn resize_column(&self, id: ColumnId, width: u32) -> Result<()> {
        self.source.resize_column(id, width)
    }

    /// Moves the column at display position `from` to `to`.
    ///
    /// Only the permutation changes: cached content, column ids, and widths
    /// all stay with their canonical columns.
    pub fn move_column(&self, from: usize, to: usize) -> Result<()> {
        self.order.write().move_column(from, to)?;
        if from != to {
            self.columns_moved.emit((from, to));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::column::{ColumnSpec, HeaderIcon};

    fn lettered_source(calls: Arc<AtomicUsize>) -> Arc<GridSource> {
        let specs = ["A", "B", "C", "D"]
            .into_iter()
            .map(|title| {
                let calls = calls.clone();
                ColumnSpec::new(title, HeaderIcon::Text, move |row| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    CellValue::new(CellPayload::from(format!("{title}{row}")))
                })
            })
            .collect();
        Arc::new(GridSource::new(specs, 10))
    }

    #[test]
    fn test_identity_permutation() {
        let order = DisplayOrder::identity(3);
        assert!(order.is_identity());
        assert_eq!(order.to_canonical(2), Ok(2));
        assert_eq!(order.to_display(0), Ok(0));
        assert_eq!(
            order.to_canonical(3),
            Err(GridSourceError::DisplayIndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn test_move_shifts_between() {
        let mut order = DisplayOrder::identity(4);
        order.move_column(0, 2).unwrap();

        // Display order is now B C A D.
        assert_eq!(order.to_canonical(0), Ok(1));
        assert_eq!(order.to_canonical(1), Ok(2));
        assert_eq!(order.to_canonical(2), Ok(0));
        assert_eq!(order.to_canonical(3), Ok(3));
        assert_eq!(order.to_display(0), Ok(2));
        assert!(!order.is_identity());
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let mut order = DisplayOrder::identity(3);
        order.move_column(1, 1).unwrap();
        assert!(order.is_identity());
    }

    #[test]
    fn test_reordered_reads_route_to_canonical() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = lettered_source(calls.clone());
        let view = ReorderableSource::new(source);

        let before = view.cell_content(0, 5).unwrap();
        assert_eq!(before.display(), "A5");

        view.move_column(0, 3).unwrap();

        // Column A now sits at display position 3, content intact and served
        // from cache without rerunning its rule.
        assert_eq!(view.cell_content(3, 5).unwrap(), before);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(view.cell_content(0, 5).unwrap().display(), "B5");
    }

    #[test]
    fn test_edit_through_display_coordinates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = lettered_source(calls);
        let view = ReorderableSource::new(source.clone());

        view.move_column(0, 3).unwrap(); // A now at display 3
        view.cell_content(3, 0).unwrap();
        view.edit_cell(3, 0, CellPayload::from("edited")).unwrap();

        // The edit landed on canonical column 0.
        assert_eq!(
            source.cell_content(0, 0).unwrap().payload().as_text(),
            Some("edited")
        );
        assert_eq!(view.cell_content(3, 0).unwrap().display(), "edited");
    }

    #[test]
    fn test_headers_follow_display_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let view = ReorderableSource::new(lettered_source(calls));

        view.move_column(2, 0).unwrap();

        let titles: Vec<String> = view.headers().into_iter().map(|h| h.title).collect();
        assert_eq!(titles, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_columns_moved_signal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let view = ReorderableSource::new(lettered_source(calls));
        let moves = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let moves_clone = moves.clone();
        view.columns_moved.connect(move |&mv| {
            moves_clone.lock().push(mv);
        });

        view.move_column(1, 3).unwrap();
        view.move_column(2, 2).unwrap(); // No-op, no emit

        assert_eq!(*moves.lock(), vec![(1, 3)]);
    }

    #[test]
    fn test_reset_restores_identity() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = lettered_source(calls);
        let view = ReorderableSource::new(source.clone());

        view.move_column(0, 3).unwrap();
        source.reset_columns(vec![ColumnSpec::new("X", HeaderIcon::Text, |_| {
            CellValue::new(CellPayload::from("x"))
        })]);

        assert_eq!(view.column_count(), 1);
        assert_eq!(view.to_canonical(0), Ok(0));
    }
}
