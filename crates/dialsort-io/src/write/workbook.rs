use std::path::Path;

use dialsort_core::domain::{CellValue, Table};
use dialsort_core::qa::{QaReport, QA_CHECK_HEADER, QA_RESULT_HEADER};
use dialsort_core::schema::OutputTable;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};

use crate::error::{Result, TableError};

pub const SUMMARY_SHEET: &str = "Summary";
pub const DETAILS_SHEET: &str = "Missing Phones";

type SheetResult<T = ()> = std::result::Result<T, XlsxError>;

pub(super) fn write_output_table(path: &Path, table: &OutputTable) -> Result<()> {
    let mut workbook = Workbook::new();
    fill_text_sheet(workbook.add_worksheet(), table.columns(), table.rows())
        .map_err(|source| workbook_error(path, source))?;
    save(workbook, path)
}

pub(super) fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook = Workbook::new();
    fill_typed_sheet(workbook.add_worksheet(), table)
        .map_err(|source| workbook_error(path, source))?;
    save(workbook, path)
}

pub(super) fn write_qa_report(path: &Path, report: &QaReport) -> Result<()> {
    let mut workbook = Workbook::new();
    fill_qa_sheets(&mut workbook, report).map_err(|source| workbook_error(path, source))?;
    save(workbook, path)
}

fn fill_qa_sheets(workbook: &mut Workbook, report: &QaReport) -> SheetResult {
    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET)?;
    fill_text_sheet(
        summary,
        [QA_CHECK_HEADER, QA_RESULT_HEADER],
        report
            .summary
            .iter()
            .map(|row| [row.check.as_str(), row.result.as_str()]),
    )?;

    if !report.details.is_empty() {
        let details = workbook.add_worksheet();
        details.set_name(DETAILS_SHEET)?;
        fill_text_sheet(details, report.details.columns(), report.details.rows())?;
    }
    Ok(())
}

/// Blank strings are left as empty cells.
fn fill_text_sheet<H, R, C>(sheet: &mut Worksheet, header: H, rows: R) -> SheetResult
where
    H: IntoIterator,
    H::Item: AsRef<str>,
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    write_header(sheet, header)?;
    for (row_idx, row) in rows.into_iter().enumerate() {
        let row_num = row_number(row_idx)?;
        for (col_idx, value) in row.into_iter().enumerate() {
            let value = value.as_ref();
            if !value.is_empty() {
                sheet.write_string(row_num, column_number(col_idx)?, value)?;
            }
        }
    }
    Ok(())
}

fn fill_typed_sheet(sheet: &mut Worksheet, table: &Table) -> SheetResult {
    write_header(sheet, table.header().names())?;
    for (row_idx, row) in table.rows().enumerate() {
        let row_num = row_number(row_idx)?;
        for (col_idx, cell) in row.cells().iter().enumerate() {
            let col_num = column_number(col_idx)?;
            match cell {
                CellValue::Empty => {}
                CellValue::Text(value) if value.is_empty() => {}
                CellValue::Text(value) => {
                    sheet.write_string(row_num, col_num, value.as_str())?;
                }
                CellValue::Int(value) => {
                    sheet.write_number(row_num, col_num, *value as f64)?;
                }
                CellValue::Float(value) if value.is_nan() => {}
                CellValue::Float(value) => {
                    sheet.write_number(row_num, col_num, *value)?;
                }
                CellValue::Bool(value) => {
                    sheet.write_boolean(row_num, col_num, *value)?;
                }
            }
        }
    }
    Ok(())
}

fn write_header<H>(sheet: &mut Worksheet, header: H) -> SheetResult
where
    H: IntoIterator,
    H::Item: AsRef<str>,
{
    let bold = Format::new().set_bold();
    for (col_idx, name) in header.into_iter().enumerate() {
        sheet.write_string_with_format(0, column_number(col_idx)?, name.as_ref(), &bold)?;
    }
    Ok(())
}

/// Data rows start below the header.
fn row_number(row_idx: usize) -> SheetResult<RowNum> {
    RowNum::try_from(row_idx + 1).map_err(|_| XlsxError::RowColumnLimitError)
}

fn column_number(col_idx: usize) -> SheetResult<ColNum> {
    ColNum::try_from(col_idx).map_err(|_| XlsxError::RowColumnLimitError)
}

fn save(mut workbook: Workbook, path: &Path) -> Result<()> {
    workbook
        .save(path)
        .map_err(|source| workbook_error(path, source))
}

fn workbook_error(path: &Path, source: XlsxError) -> TableError {
    TableError::WriteWorkbook {
        path: path.to_path_buf(),
        source,
    }
}
