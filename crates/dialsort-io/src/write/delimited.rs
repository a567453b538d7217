use std::fs::File;
use std::path::Path;

use dialsort_core::domain::Table;
use dialsort_core::qa::{QaReport, QA_CHECK_HEADER, QA_RESULT_HEADER};
use dialsort_core::schema::OutputTable;
use crate::error::{Result, TableError};

pub(super) fn write_output_table(path: &Path, table: &OutputTable) -> Result<()> {
    let mut writer = create_writer(path)?;
    let write_error = |source| TableError::Write {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(table.columns()).map_err(write_error)?;
    for row in table.rows() {
        writer.write_record(row).map_err(write_error)?;
    }
    finish(writer, path)
}

pub(super) fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = create_writer(path)?;
    let write_error = |source| TableError::Write {
        path: path.to_path_buf(),
        source,
    };
    writer
        .write_record(table.header().names())
        .map_err(write_error)?;
    for row in table.rows() {
        writer
            .write_record(row.cells().iter().map(|cell| cell.to_output()))
            .map_err(write_error)?;
    }
    finish(writer, path)
}

/// Two-column summary, blank separator rows included.
pub(super) fn write_qa_summary(path: &Path, report: &QaReport) -> Result<()> {
    let mut writer = create_writer(path)?;
    let write_error = |source| TableError::Write {
        path: path.to_path_buf(),
        source,
    };
    writer
        .write_record([QA_CHECK_HEADER, QA_RESULT_HEADER])
        .map_err(write_error)?;
    for row in &report.summary {
        writer
            .write_record([row.check.as_str(), row.result.as_str()])
            .map_err(write_error)?;
    }
    finish(writer, path)
}

fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    csv::Writer::from_path(path).map_err(|source| TableError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn finish(mut writer: csv::Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| TableError::Write {
        path: path.to_path_buf(),
        source: source.into(),
    })
}
