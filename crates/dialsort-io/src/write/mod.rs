//! Output writers: workbooks by default, CSV on request.

mod delimited;
mod workbook;

use std::path::Path;

use dialsort_core::domain::Table;
use dialsort_core::qa::QaReport;
use dialsort_core::schema::OutputTable;
use tracing::debug;

use crate::error::Result;

pub use workbook::{DETAILS_SHEET, SUMMARY_SHEET};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

pub fn write_output_table(path: &Path, table: &OutputTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Xlsx => workbook::write_output_table(path, table)?,
        OutputFormat::Csv => delimited::write_output_table(path, table)?,
    }
    debug!(path = %path.display(), rows = table.len(), "output written");
    Ok(())
}

/// Writes rows with the input's own columns, in input order.
pub fn write_table(path: &Path, table: &Table, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Xlsx => workbook::write_table(path, table)?,
        OutputFormat::Csv => delimited::write_table(path, table)?,
    }
    debug!(path = %path.display(), rows = table.len(), "output written");
    Ok(())
}

/// A workbook gets a summary sheet plus a details sheet when the details
/// have rows. CSV holds the summary only; details go to their own file.
pub fn write_qa_report(path: &Path, report: &QaReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Xlsx => workbook::write_qa_report(path, report)?,
        OutputFormat::Csv => delimited::write_qa_summary(path, report)?,
    }
    debug!(
        path = %path.display(),
        rows = report.summary.len(),
        details = report.details.len(),
        "QA report written"
    );
    Ok(())
}
