//! Multi-column selection with a keyboard-extend modifier.
//!
//! The hosting widget reports header clicks to a [`ColumnSelection`]; whether
//! a click replaces the selection or toggles membership depends on an
//! [`ExtendModifier`] tracking the platform's extend key (Ctrl, or Cmd on
//! macOS). The widget owns key events and pushes state changes in; the
//! selection only reads the current state at click time.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridsource_core::Signal;

/// Observed state of the keyboard extend modifier.
///
/// Shared between the widget's key handling and a [`ColumnSelection`] behind
/// an `Arc`.
#[derive(Default)]
pub struct ExtendModifier {
    held: AtomicBool,
    /// Emitted when the held state flips.
    pub changed: Signal<bool>,
}

impl ExtendModifier {
    /// Creates a modifier in the released state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the extend key is held.
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    /// Records a key-down or key-up of the extend key.
    pub fn set_held(&self, held: bool) {
        let previous = self.held.swap(held, Ordering::SeqCst);
        if previous != held {
            tracing::trace!(target: "gridsource::selection", held, "extend modifier changed");
            self.changed.emit(held);
        }
    }
}

/// Set of selected column positions, in selection order.
///
/// Without the extend modifier a click replaces the whole selection with the
/// clicked column; with it, the click toggles that column's membership and
/// leaves the rest alone.
pub struct ColumnSelection {
    selected: HashSet<usize>,
    /// Selection order, oldest first. Mirrors `selected`.
    order: Vec<usize>,
    modifier: Arc<ExtendModifier>,
    /// Emitted after every change with `(selected, deselected)` position
    /// lists describing the delta.
    pub changed: Signal<(Vec<usize>, Vec<usize>)>,
}

impl ColumnSelection {
    /// Creates an empty selection observing the given modifier.
    pub fn new(modifier: Arc<ExtendModifier>) -> Self {
        Self {
            selected: HashSet::new(),
            order: Vec::new(),
            modifier,
            changed: Signal::new(),
        }
    }

    /// Handles a header click on the given column position.
    ///
    /// Modifier held: toggles the column, preserving the rest. Modifier
    /// released: the selection becomes exactly the clicked column, even if it
    /// was already part of a larger selection.
    pub fn click(&mut self, index: usize) {
        if self.modifier.is_held() {
            self.toggle(index);
        } else {
            self.replace(index);
        }
    }

    /// Toggles membership of one column without touching the rest.
    pub fn toggle(&mut self, index: usize) {
        if self.selected.remove(&index) {
            self.order.retain(|&i| i != index);
            self.emit_changed(vec![], vec![index]);
        } else {
            self.selected.insert(index);
            self.order.push(index);
            self.emit_changed(vec![index], vec![]);
        }
    }

    /// Replaces the whole selection with one column.
    pub fn replace(&mut self, index: usize) {
        let deselected: Vec<usize> = self
            .order
            .iter()
            .copied()
            .filter(|&i| i != index)
            .collect();
        let newly = if self.selected.contains(&index) {
            vec![]
        } else {
            vec![index]
        };

        self.selected.clear();
        self.selected.insert(index);
        self.order.clear();
        self.order.push(index);

        if !newly.is_empty() || !deselected.is_empty() {
            self.emit_changed(newly, deselected);
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        if self.order.is_empty() {
            return;
        }
        let deselected = std::mem::take(&mut self.order);
        self.selected.clear();
        self.emit_changed(vec![], deselected);
    }

    /// Returns `true` if the column position is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Returns the selected positions in selection order, oldest first.
    pub fn selected(&self) -> &[usize] {
        &self.order
    }

    /// Returns the number of selected columns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn emit_changed(&self, selected: Vec<usize>, deselected: Vec<usize>) {
        tracing::trace!(
            target: "gridsource::selection",
            selected = ?selected,
            deselected = ?deselected,
            total = self.order.len(),
            "selection changed"
        );
        self.changed.emit((selected, deselected));
    }
}
