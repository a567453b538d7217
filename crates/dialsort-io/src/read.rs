//! Loads the first sheet of a CSV or spreadsheet file into a [`Table`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use dialsort_core::domain::{CellValue, Header, Table};
use tracing::debug;

use crate::error::{Result, TableError};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads `path`, choosing the loader from the file extension.
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(TableError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let table = match extension.as_str() {
        "csv" => read_csv(path)?,
        ext if WORKBOOK_EXTENSIONS.contains(&ext) => read_workbook(path)?,
        _ => {
            return Err(TableError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            })
        }
    };

    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.header().len(),
        "input loaded"
    );
    Ok(table)
}

pub fn read_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TableError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TableError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let csv_error = |source| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let names: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let name = if idx == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name
            };
            column_name(idx, name)
        })
        .collect();
    if names.is_empty() {
        return Err(TableError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(csv_cell).collect());
    }
    Ok(Table::new(Header::new(names), rows))
}

pub fn read_workbook(path: &Path) -> Result<Table> {
    let workbook_error = |source| TableError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TableError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(workbook_error)?;

    let mut rows = range.rows();
    let header_cells = rows.next().ok_or_else(|| TableError::MissingHeader {
        path: path.to_path_buf(),
    })?;
    let names: Vec<String> = header_cells
        .iter()
        .enumerate()
        .map(|(idx, data)| column_name(idx, &sheet_cell(data).to_output()))
        .collect();
    let body = rows
        .map(|cells| cells.iter().map(sheet_cell).collect())
        .collect();
    Ok(Table::new(Header::new(names), body))
}

fn column_name(idx: usize, raw: &str) -> String {
    if raw.trim().is_empty() {
        format!("Unnamed: {idx}")
    } else {
        raw.to_string()
    }
}

/// CSV carries no cell types: every non-empty field stays text.
fn csv_cell(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else {
        CellValue::text(field)
    }
}

fn sheet_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(value) if value.is_empty() => CellValue::Empty,
        Data::String(value) => CellValue::text(value.as_str()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        other => CellValue::text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{csv_cell, read_table, sheet_cell};
    use calamine::{CellErrorType, Data};
    use crate::error::TableError;
    use dialsort_core::domain::CellValue;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn csv_fields_stay_text() {
        assert_eq!(csv_cell(""), CellValue::Empty);
        assert_eq!(csv_cell("0123.40"), CellValue::text("0123.40"));
        assert_eq!(csv_cell("5551234567.0"), CellValue::text("5551234567.0"));
        assert_eq!(csv_cell(" "), CellValue::text(" "));
    }

    #[test]
    fn sheet_errors_and_blank_strings_read_as_empty() {
        assert_eq!(sheet_cell(&Data::Error(CellErrorType::Div0)), CellValue::Empty);
        assert_eq!(sheet_cell(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(sheet_cell(&Data::Float(5551234567.0)), CellValue::Float(5551234567.0));
        assert_eq!(sheet_cell(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(
            sheet_cell(&Data::DateTimeIso("2024-10-18".to_string())),
            CellValue::text("2024-10-18")
        );
    }

    #[test]
    fn reads_csv_with_bom_and_ragged_rows() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("contacts.csv");
        fs::write(
            &path,
            "\u{feff}Phone,Phone (Line Type),\n5551234567.0,Mobile,x\n4445556666\n",
        )
        .expect("write csv");

        let table = read_table(&path).expect("read");
        assert_eq!(
            table.header().names(),
            &["Phone", "Phone (Line Type)", "Unnamed: 2"]
        );
        assert_eq!(table.len(), 2);
        let first = table.row(0).expect("row");
        assert_eq!(first.get("Phone"), Some(&CellValue::text("5551234567.0")));
        let second = table.row(1).expect("row");
        assert_eq!(second.get("Phone (Line Type)"), Some(&CellValue::Empty));
    }

    #[test]
    fn rejects_missing_and_unknown_files() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("nope.csv");
        assert!(matches!(
            read_table(&missing),
            Err(TableError::FileNotFound { .. })
        ));

        let text = temp.path().join("notes.txt");
        fs::write(&text, "hello").expect("write");
        assert!(matches!(
            read_table(&text),
            Err(TableError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn empty_csv_has_no_header() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("empty.csv");
        fs::write(&path, "").expect("write");
        assert!(matches!(
            read_table(&path),
            Err(TableError::MissingHeader { .. })
        ));
    }
}
