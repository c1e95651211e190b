//! Ready-made demo columns for exercising a grid widget.
//!
//! Provides a people-directory dataset (avatar, names, email, company, a
//! markdown info column) padded with generic columns to any width, plus
//! [`DemoSourceBuilder`] for wiring it into a [`GridSource`].
//!
//! All content is a pure function of the row index, so a coordinate always
//! produces the same value no matter when or in what order it is first
//! resolved. That property is what makes lazy generation indistinguishable
//! from an up-front dataset.

use crate::cell::{CellPayload, CellValue};
use crate::column::{ColumnSpec, HeaderIcon};
use crate::source::GridSource;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carmen", "Dmitri", "Elena", "Farid", "Greta", "Hugo", "Ingrid", "Jonas",
    "Keiko", "Lars", "Mireille", "Nadia", "Omar", "Petra", "Quentin", "Rosa", "Stefan", "Tamsin",
];

const LAST_NAMES: &[&str] = &[
    "Albrecht", "Bianchi", "Castellanos", "Dubois", "Eriksen", "Fontaine", "Grimaldi", "Haugen",
    "Ivanova", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quispe", "Rossi", "Svensson", "Takahashi",
];

const COMPANIES: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne", "Tyrell", "Cyberdyne", "Aperture",
    "Wonka",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "tempor",
    "incididunt", "labore", "dolore", "magna", "aliqua", "veniam",
];

/// Mixes a row index and a per-column salt into a well-spread table index.
fn mix(row: usize, salt: usize) -> usize {
    let mut x = row.wrapping_add(salt.wrapping_mul(0x9E37_79B9));
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^= x >> 16;
    x
}

fn pick(table: &'static [&'static str], row: usize, salt: usize) -> &'static str {
    table[mix(row, salt) % table.len()]
}

/// First name for the given row.
pub fn first_name(row: usize) -> &'static str {
    pick(FIRST_NAMES, row, 1)
}

/// Last name for the given row.
pub fn last_name(row: usize) -> &'static str {
    pick(LAST_NAMES, row, 2)
}

/// Company name for the given row.
pub fn company(row: usize) -> &'static str {
    pick(COMPANIES, row, 3)
}

/// Email address derived from the row's name and company.
pub fn email(row: usize) -> String {
    format!(
        "{}.{}@{}.com",
        first_name(row).to_lowercase(),
        last_name(row).to_lowercase(),
        company(row).to_lowercase()
    )
}

/// Avatar image URI for the given row.
pub fn avatar_uri(row: usize) -> String {
    format!("https://picsum.photos/seed/{row}/64/64")
}

/// Short markdown blurb for the given row.
pub fn more_info(row: usize) -> String {
    format!(
        "## {}\n\n{} {} {} {}",
        company(row),
        pick(WORDS, row, 10),
        pick(WORDS, row, 11),
        pick(WORDS, row, 12),
        pick(WORDS, row, 13),
    )
}

/// Builds `count` demo columns.
///
/// The first six are the shaped people-directory columns; beyond that,
/// generic text columns titled `Column 7`, `Column 8`, ... pad the set out.
/// All columns use the default width.
pub fn demo_columns(count: usize) -> Vec<ColumnSpec> {
    let shaped = [
        ColumnSpec::new("Avatar", HeaderIcon::Image, |row| {
            CellValue::new(CellPayload::Image(vec![avatar_uri(row)]))
        }),
        ColumnSpec::new("First name", HeaderIcon::Text, |row| {
            CellValue::new(CellPayload::from(first_name(row)))
        }),
        ColumnSpec::new("Last name", HeaderIcon::Text, |row| {
            CellValue::new(CellPayload::from(last_name(row)))
        }),
        ColumnSpec::new("Email", HeaderIcon::Uri, |row| {
            CellValue::new(CellPayload::from(email(row)))
        }),
        ColumnSpec::new("Company", HeaderIcon::Text, |row| {
            CellValue::new(CellPayload::from(company(row)))
        }),
        ColumnSpec::new("More Info", HeaderIcon::Text, |row| {
            CellValue::new(CellPayload::Markdown(more_info(row)))
        }),
    ];

    let mut specs: Vec<ColumnSpec> = shaped.into_iter().take(count).collect();
    for index in specs.len()..count {
        let title = format!("Column {}", index + 1);
        specs.push(ColumnSpec::new(title, HeaderIcon::Text, move |row| {
            CellValue::new(CellPayload::from(format!(
                "{} {}",
                pick(WORDS, row, 100 + index),
                pick(WORDS, row, 200 + index)
            )))
        }));
    }
    specs
}

/// Builder for a demo-backed [`GridSource`].
///
/// Defaults match the typical showcase setup: six columns, fifty rows,
/// editing off.
#[derive(Debug, Clone)]
pub struct DemoSourceBuilder {
    columns: usize,
    rows: usize,
    editable: bool,
}

impl Default for DemoSourceBuilder {
    fn default() -> Self {
        Self {
            columns: 6,
            rows: 50,
            editable: false,
        }
    }
}

impl DemoSourceBuilder {
    /// Creates a builder with the default dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of columns.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the number of rows.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the initial editability flag.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Builds the source.
    pub fn build(self) -> GridSource {
        let source = GridSource::new(demo_columns(self.columns), self.rows);
        source.set_editable(self.editable);
        source
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cell::CellKind;
    use crate::display_order::ReorderableSource;

    #[test]
    fn test_content_is_deterministic() {
        let a = DemoSourceBuilder::new().build();
        let b = DemoSourceBuilder::new().build();

        for row in [0, 7, 49] {
            for column in 0..6 {
                assert_eq!(
                    a.cell_content(column, row).unwrap(),
                    b.cell_content(column, row).unwrap(),
                    "column {column}, row {row}"
                );
            }
        }
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let source = DemoSourceBuilder::new().build();

        let first: Vec<_> = (0..50)
            .map(|row| source.cell_content(1, row).unwrap())
            .collect();
        let second: Vec<_> = (0..50)
            .map(|row| source.cell_content(1, row).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(source.cached_len(), 50);
    }

    #[test]
    fn test_shaped_column_kinds() {
        let source = DemoSourceBuilder::new().build();

        assert_eq!(source.cell_content(0, 0).unwrap().kind(), CellKind::Image);
        assert_eq!(source.cell_content(1, 0).unwrap().kind(), CellKind::Text);
        assert_eq!(source.cell_content(5, 0).unwrap().kind(), CellKind::Markdown);

        let email = source.cell_content(3, 4).unwrap();
        let text = email.payload().as_text().unwrap().to_string();
        assert!(text.contains('@') && text.ends_with(".com"), "{text}");
    }

    #[test]
    fn test_padding_columns() {
        let source = GridSource::new(demo_columns(10), 5);
        assert_eq!(source.header(5).unwrap().title, "More Info");
        assert_eq!(source.header(6).unwrap().title, "Column 7");
        assert_eq!(source.header(9).unwrap().title, "Column 10");
        assert_eq!(source.header(9).unwrap().width, ColumnSpec::DEFAULT_WIDTH);
    }

    #[test]
    fn test_resize_one_of_fifty() {
        let source = DemoSourceBuilder::new().columns(50).build();
        let id = source.column_id_at(20).unwrap();

        source.resize_column(id, 300).unwrap();

        for column in 0..50 {
            let expected = if column == 20 { 300 } else { ColumnSpec::DEFAULT_WIDTH };
            assert_eq!(source.header(column).unwrap().width, expected);
        }
    }

    #[test]
    fn test_reorder_keeps_resolved_content() {
        let source = Arc::new(DemoSourceBuilder::new().build());
        let view = ReorderableSource::new(source.clone());

        // Resolve everything, then drag the avatar column to the far side.
        let snapshot: Vec<Vec<_>> = (0..6)
            .map(|c| (0..50).map(|r| view.cell_content(c, r).unwrap()).collect())
            .collect();
        let cached_before = source.cached_len();

        view.move_column(0, 3).unwrap();

        // Nothing regenerated, and each column's content followed it.
        assert_eq!(source.cached_len(), cached_before);
        for row in 0..50 {
            assert_eq!(view.cell_content(3, row).unwrap(), snapshot[0][row]);
            assert_eq!(view.cell_content(0, row).unwrap(), snapshot[1][row]);
            // Canonical addressing on the wrapped source is unaffected.
            assert_eq!(source.cell_content(0, row).unwrap(), snapshot[0][row]);
        }
    }

    #[test]
    fn test_builder_editable() {
        let locked = DemoSourceBuilder::new().build();
        assert!(!locked.is_editable());
        assert!(locked.cell_content(1, 0).unwrap().is_readonly());

        let open = DemoSourceBuilder::new().editable(true).build();
        assert!(open.is_editable());
        assert!(!open.cell_content(1, 0).unwrap().is_readonly());
    }
}
