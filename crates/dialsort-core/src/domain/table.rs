use crate::domain::cell::CellValue;
use std::collections::HashMap;
use tracing::warn;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Column names of a sheet with a name → position lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    /// Builds a header; repeated names get a `.N` suffix so every column stays addressable.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header = Header::default();
        for name in names {
            let name = name.into();
            let mut unique = name.clone();
            let mut suffix = 1;
            while header.index.contains_key(&unique) {
                unique = format!("{name}.{suffix}");
                suffix += 1;
            }
            if unique != name {
                warn!(column = %name, renamed = %unique, "duplicate column name");
            }
            header.index.insert(unique.clone(), header.names.len());
            header.names.push(unique);
        }
        header
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An in-memory sheet: one header plus rows of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    header: Header,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Rows are padded with empty cells or cut to the header width.
    pub fn new(header: Header, rows: Vec<Vec<CellValue>>) -> Self {
        let width = header.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { header, rows }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        self.rows.get(index).map(|cells| RowRef {
            header: &self.header,
            cells,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(|cells| RowRef {
            header: &self.header,
            cells,
        })
    }

    /// Keeps the header and the rows at the given positions, in that order.
    pub fn select_rows(&self, positions: &[usize]) -> Table {
        let rows = positions
            .iter()
            .filter_map(|&idx| self.rows.get(idx).cloned())
            .collect();
        Table {
            header: self.header.clone(),
            rows,
        }
    }
}

/// Borrowed view of one row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    header: &'a Header,
    cells: &'a [CellValue],
}

impl<'a> RowRef<'a> {
    pub fn contains(&self, column: &str) -> bool {
        self.header.contains(column)
    }

    /// `None` when the column is absent from the sheet.
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        let position = self.header.position(column)?;
        Some(self.cells.get(position).unwrap_or(&EMPTY_CELL))
    }

    /// Cell text with absent columns and nulls both rendered as `""`.
    pub fn text_or_empty(&self, column: &str) -> String {
        self.get(column)
            .map(CellValue::to_output)
            .unwrap_or_default()
    }

    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }
}
