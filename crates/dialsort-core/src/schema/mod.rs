//! Fixed external layouts for the cleaned and discard files.

pub mod mapper;

pub use mapper::{ColumnRename, NameFallback, SchemaMapper, DEFAULT_RENAMES};

pub const FIRST_NAME: &str = "FirstName";
pub const LAST_NAME: &str = "LastName";
pub const EMAIL: &str = "Email";
pub const PROPERTY_STATE: &str = "PropertyState";
pub const PROPERTY_COUNTY: &str = "PropertyCounty";

pub const CLEANED_COLUMNS: [&str; 17] = [
    "FirstName",
    "LastName",
    "Email",
    "MailingAddress",
    "MailingCity",
    "MailingState",
    "MailingZip",
    "PropertyAddress",
    "PropertyCity",
    "PropertyState",
    "PropertyZip",
    "Phone1",
    "Phone2",
    "Phone3",
    "APN",
    "PropertyCounty",
    "Acreage",
];

pub const DISCARD_COLUMNS: [&str; 24] = [
    "FirstName",
    "LastName",
    "Email",
    "MailingAddress",
    "MailingCity",
    "MailingState",
    "MailingZip",
    "PropertyAddress",
    "PropertyCity",
    "PropertyState",
    "PropertyZip",
    "Phone1",
    "Phone1_Type",
    "Phone2",
    "Phone2_Type",
    "Phone3",
    "Phone3_Type",
    "Phone4",
    "Phone4_Type",
    "Phone5",
    "Phone5_Type",
    "APN",
    "PropertyCounty",
    "Acreage",
];

pub const QA_DETAIL_COLUMNS: [&str; 6] = [
    "FirstName",
    "LastName",
    "Phone 1",
    "Phone 2",
    "Phone 3",
    "APN",
];

/// An ordered output column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSchema {
    pub columns: &'static [&'static str],
}

impl OutputSchema {
    pub const CLEANED: OutputSchema = OutputSchema {
        columns: &CLEANED_COLUMNS,
    };
    pub const DISCARD: OutputSchema = OutputSchema {
        columns: &DISCARD_COLUMNS,
    };
    pub const QA_DETAIL: OutputSchema = OutputSchema {
        columns: &QA_DETAIL_COLUMNS,
    };

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| *name == column)
    }
}

/// A string-valued table laid out by an [`OutputSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    schema: OutputSchema,
    rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn new(schema: OutputSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Appends a row; it must be as wide as the schema.
    pub(crate) fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.schema.columns.len());
        self.rows.push(row);
    }

    pub fn schema(&self) -> OutputSchema {
        self.schema
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.schema.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `column` in row `index`, if both exist.
    pub fn value(&self, index: usize, column: &str) -> Option<&str> {
        let position = self.schema.position(column)?;
        self.rows
            .get(index)
            .and_then(|row| row.get(position))
            .map(String::as_str)
    }

    /// First non-blank value of a column, scanning rows top to bottom.
    pub fn first_value(&self, column: &str) -> Option<&str> {
        let position = self.schema.position(column)?;
        self.rows
            .iter()
            .filter_map(|row| row.get(position))
            .map(String::as_str)
            .find(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputSchema, OutputTable};

    #[test]
    fn discard_layout_interleaves_types() {
        let columns = OutputSchema::DISCARD.columns;
        assert_eq!(&columns[11..13], &["Phone1", "Phone1_Type"]);
        assert_eq!(&columns[21..], &["APN", "PropertyCounty", "Acreage"]);
    }

    #[test]
    fn first_value_skips_blanks() {
        let mut table = OutputTable::new(OutputSchema::QA_DETAIL);
        table.push(vec![String::new(); 6]);
        let mut row = vec![String::new(); 6];
        row[5] = "12-34".to_string();
        table.push(row);
        assert_eq!(table.first_value("APN"), Some("12-34"));
        assert_eq!(table.first_value("FirstName"), None);
        assert_eq!(table.value(1, "APN"), Some("12-34"));
    }
}
