//! Lazily populated, memoized data-source layer for virtualized grid widgets.
//!
//! A virtualized grid only ever asks for the cells scrolled into view. This
//! crate supplies the model side of that contract: a [`GridSource`] resolves
//! cell requests on demand, runs each column's generation rule at most once
//! per coordinate, memoizes the result, and accepts edits that replace the
//! cached value in place. Column metadata lives in a registry addressed by
//! stable [`ColumnId`]s, so resizing survives duplicate titles and
//! reordering, and [`ReorderableSource`] remaps display positions to
//! canonical indices so dragging columns around never touches the cache.
//!
//! Change notifications use the signal/slot system from `gridsource-core`;
//! connect to [`SourceSignals`] to repaint on edits, resizes, and resets.
//!
//! # Example
//!
//! ```
//! use gridsource::demo::DemoSourceBuilder;
//! use gridsource::CellPayload;
//!
//! # fn main() -> gridsource::Result<()> {
//! let source = DemoSourceBuilder::new().rows(50).editable(true).build();
//!
//! // First access generates and caches; later accesses hit the cache.
//! let cell = source.cell_content(1, 0)?;
//! assert_eq!(source.cell_content(1, 0)?, cell);
//!
//! // Edits replace payload and display text, preserving the kind.
//! source.edit_cell(1, 0, CellPayload::from("Grace"))?;
//! assert_eq!(source.cell_content(1, 0)?.display(), "Grace");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cell;
pub mod column;
pub mod demo;
pub mod display_order;
pub mod error;
pub mod selection;
pub mod source;

pub use cache::ContentCache;
pub use cell::{CellKind, CellPayload, CellValue};
pub use column::{CellGenerator, Column, ColumnHeader, ColumnId, ColumnRegistry, ColumnSpec, HeaderIcon};
pub use display_order::{DisplayOrder, ReorderableSource};
pub use error::{GridSourceError, Result};
pub use selection::{ColumnSelection, ExtendModifier};
pub use source::{GridSource, SourceSignals};
