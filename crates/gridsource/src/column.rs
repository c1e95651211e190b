//! Column registry: an ordered sequence of column descriptors.
//!
//! Columns are addressed two ways. The *canonical index* is a column's
//! position in the registry, fixed for the registry's lifetime and used as
//! the content cache key. The [`ColumnId`] is a stable synthetic identity
//! assigned at creation and used for identity-based operations like resize,
//! so duplicate titles can never corrupt a lookup; titles are display-only.

use std::fmt;
use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};

use crate::cell::CellValue;
use crate::error::{GridSourceError, Result};

new_key_type! {
    /// Stable identity of one column, assigned when the registry is built.
    ///
    /// Ids are invalidated only by a full registry rebuild; resize and
    /// reorder never change them.
    pub struct ColumnId;
}

/// Icon hint displayed in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderIcon {
    /// Generic text column.
    #[default]
    Text,
    /// Image content.
    Image,
    /// Link / URI content.
    Uri,
    /// Numeric content.
    Number,
}

/// The content-generation rule for one column.
///
/// A pure function from a row index to a cell value, invoked only on cache
/// miss. It must be referentially transparent with respect to the row index
/// for caching to be sound: only the first call for a coordinate ever
/// reaches the rule, and its result determines the value until edited.
pub type CellGenerator = Arc<dyn Fn(usize) -> CellValue + Send + Sync>;

/// Input description of one column, consumed by [`ColumnRegistry::from_specs`].
#[derive(Clone)]
pub struct ColumnSpec {
    title: String,
    width: u32,
    icon: HeaderIcon,
    has_menu: bool,
    generator: CellGenerator,
}

impl ColumnSpec {
    /// Default column width in pixels.
    pub const DEFAULT_WIDTH: u32 = 120;

    /// Creates a spec with the default width and no header menu.
    pub fn new<F>(title: impl Into<String>, icon: HeaderIcon, generator: F) -> Self
    where
        F: Fn(usize) -> CellValue + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            width: Self::DEFAULT_WIDTH,
            icon,
            has_menu: false,
            generator: Arc::new(generator),
        }
    }

    /// Sets the initial display width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the header menu visibility flag.
    pub fn with_menu(mut self, has_menu: bool) -> Self {
        self.has_menu = has_menu;
        self
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("icon", &self.icon)
            .field("has_menu", &self.has_menu)
            .finish_non_exhaustive()
    }
}

/// One live column descriptor inside a registry.
pub struct Column {
    title: String,
    width: u32,
    icon: HeaderIcon,
    has_menu: bool,
    generator: CellGenerator,
}

impl Column {
    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current display width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the header icon hint.
    pub fn icon(&self) -> HeaderIcon {
        self.icon
    }

    /// Returns `true` if the header shows a menu.
    pub fn has_menu(&self) -> bool {
        self.has_menu
    }

    /// Invokes the content-generation rule for the given row.
    pub fn generate(&self, row: usize) -> CellValue {
        (self.generator)(row)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("icon", &self.icon)
            .field("has_menu", &self.has_menu)
            .finish_non_exhaustive()
    }
}

/// Display metadata snapshot for the hosting widget.
///
/// Carries everything the widget needs to paint a header, without the
/// content generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Stable identity, used for resize callbacks.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
    /// Current display width.
    pub width: u32,
    /// Header icon hint.
    pub icon: HeaderIcon,
    /// Header menu visibility.
    pub has_menu: bool,
}

/// Ordered sequence of column descriptors, addressed by canonical position.
///
/// Descriptors are created when the registry is built, mutated in place by
/// resize, and destroyed only by rebuilding the whole registry.
#[derive(Debug, Default)]
pub struct ColumnRegistry {
    columns: SlotMap<ColumnId, Column>,
    /// Canonical order; never reordered after build.
    order: Vec<ColumnId>,
}

impl ColumnRegistry {
    /// Builds a registry from the given specs, assigning fresh ids.
    pub fn from_specs(specs: Vec<ColumnSpec>) -> Self {
        let mut registry = Self::default();
        registry.rebuild(specs);
        registry
    }

    /// Replaces every descriptor with fresh ones built from `specs`.
    ///
    /// All previously issued [`ColumnId`]s become stale and will fail
    /// identity lookups with [`GridSourceError::ColumnNotFound`].
    pub fn rebuild(&mut self, specs: Vec<ColumnSpec>) {
        self.columns.clear();
        self.order.clear();
        for spec in specs {
            let id = self.columns.insert(Column {
                title: spec.title,
                width: spec.width,
                icon: spec.icon,
                has_menu: spec.has_menu,
                generator: spec.generator,
            });
            self.order.push(id);
        }
        tracing::debug!(
            target: "gridsource::column",
            column_count = self.order.len(),
            "registry rebuilt"
        );
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the registry has no columns.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the id of the column at the canonical position.
    pub fn id_at(&self, canonical: usize) -> Result<ColumnId> {
        self.order
            .get(canonical)
            .copied()
            .ok_or(GridSourceError::ColumnOutOfRange {
                column: canonical,
                count: self.order.len(),
            })
    }

    /// Returns the canonical position of the column with the given id.
    pub fn index_of(&self, id: ColumnId) -> Option<usize> {
        self.order.iter().position(|&c| c == id)
    }

    /// Returns the descriptor with the given id, if it is still live.
    pub fn get(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Returns the descriptor at the canonical position.
    pub fn at(&self, canonical: usize) -> Result<&Column> {
        let id = self.id_at(canonical)?;
        Ok(&self.columns[id])
    }

    /// Replaces the width of the identified column, preserving its position
    /// and every other attribute.
    pub fn resize(&mut self, id: ColumnId, width: u32) -> Result<()> {
        let column = self
            .columns
            .get_mut(id)
            .ok_or(GridSourceError::ColumnNotFound(id))?;
        tracing::debug!(
            target: "gridsource::column",
            title = column.title.as_str(),
            old_width = column.width,
            new_width = width,
            "column resized"
        );
        column.width = width;
        Ok(())
    }

    /// Invokes the content-generation rule of the column at `canonical`.
    pub fn generate(&self, canonical: usize, row: usize) -> Result<CellValue> {
        Ok(self.at(canonical)?.generate(row))
    }

    /// Returns a header snapshot for the canonical position.
    pub fn header(&self, canonical: usize) -> Result<ColumnHeader> {
        let id = self.id_at(canonical)?;
        let column = &self.columns[id];
        Ok(ColumnHeader {
            id,
            title: column.title.clone(),
            width: column.width,
            icon: column.icon,
            has_menu: column.has_menu,
        })
    }

    /// Returns header snapshots in canonical order.
    pub fn headers(&self) -> Vec<ColumnHeader> {
        self.order
            .iter()
            .map(|&id| {
                let column = &self.columns[id];
                ColumnHeader {
                    id,
                    title: column.title.clone(),
                    width: column.width,
                    icon: column.icon,
                    has_menu: column.has_menu,
                }
            })
            .collect()
    }

    /// Iterates descriptors in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &Column)> {
        self.order.iter().map(|&id| (id, &self.columns[id]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellPayload;

    fn spec(title: &str) -> ColumnSpec {
        let title_owned = title.to_string();
        ColumnSpec::new(title, HeaderIcon::Text, move |row| {
            CellValue::new(CellPayload::from(format!("{title_owned} {row}")))
        })
    }

    #[test]
    fn test_build_and_lookup() {
        let registry = ColumnRegistry::from_specs(vec![spec("A"), spec("B"), spec("C")]);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.at(1).unwrap().title(), "B");

        let id = registry.id_at(2).unwrap();
        assert_eq!(registry.index_of(id), Some(2));
        assert_eq!(registry.get(id).unwrap().title(), "C");
    }

    #[test]
    fn test_out_of_range_lookup() {
        let registry = ColumnRegistry::from_specs(vec![spec("A")]);

        assert_eq!(
            registry.id_at(1),
            Err(GridSourceError::ColumnOutOfRange { column: 1, count: 1 })
        );
        assert!(registry.at(5).is_err());
    }

    #[test]
    fn test_resize_isolation() {
        let mut registry = ColumnRegistry::from_specs(vec![spec("A"), spec("B"), spec("C")]);
        let id = registry.id_at(1).unwrap();

        registry.resize(id, 300).unwrap();

        assert_eq!(registry.at(1).unwrap().width(), 300);
        assert_eq!(registry.at(0).unwrap().width(), ColumnSpec::DEFAULT_WIDTH);
        assert_eq!(registry.at(2).unwrap().width(), ColumnSpec::DEFAULT_WIDTH);
        // Position and title survive the resize.
        assert_eq!(registry.index_of(id), Some(1));
        assert_eq!(registry.at(1).unwrap().title(), "B");
    }

    #[test]
    fn test_resize_duplicate_titles() {
        // Identity is the id, so duplicate titles cannot corrupt a resize.
        let mut registry = ColumnRegistry::from_specs(vec![spec("Dup"), spec("Dup")]);
        let second = registry.id_at(1).unwrap();

        registry.resize(second, 250).unwrap();

        assert_eq!(registry.at(0).unwrap().width(), ColumnSpec::DEFAULT_WIDTH);
        assert_eq!(registry.at(1).unwrap().width(), 250);
    }

    #[test]
    fn test_stale_id_after_rebuild() {
        let mut registry = ColumnRegistry::from_specs(vec![spec("A")]);
        let stale = registry.id_at(0).unwrap();

        registry.rebuild(vec![spec("A"), spec("B")]);

        assert_eq!(
            registry.resize(stale, 200),
            Err(GridSourceError::ColumnNotFound(stale))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_generate() {
        let registry = ColumnRegistry::from_specs(vec![spec("A"), spec("B")]);
        let value = registry.generate(1, 7).unwrap();
        assert_eq!(value.display(), "B 7");
    }

    #[test]
    fn test_headers_snapshot() {
        let registry =
            ColumnRegistry::from_specs(vec![spec("A").with_width(90), spec("B").with_menu(true)]);
        let headers = registry.headers();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].title, "A");
        assert_eq!(headers[0].width, 90);
        assert!(!headers[0].has_menu);
        assert!(headers[1].has_menu);
    }
}
