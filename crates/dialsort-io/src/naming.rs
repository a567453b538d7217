//! Output file names derived from the processed data.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dialsort_core::schema::{OutputTable, PROPERTY_COUNTY, PROPERTY_STATE};

use crate::write::OutputFormat;

const UNKNOWN: &str = "Unknown";

/// Names for one `process` run: `{State}{County}{MonDD}` plus a fixed suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    prefix: String,
    extension: &'static str,
}

impl OutputNames {
    pub fn for_run(cleaned: &OutputTable, date: NaiveDate, format: OutputFormat) -> Self {
        let state = cleaned
            .first_value(PROPERTY_STATE)
            .map(str::trim)
            .unwrap_or(UNKNOWN);
        let county: String = cleaned
            .first_value(PROPERTY_COUNTY)
            .map(|county| county.chars().filter(|c| !c.is_whitespace()).collect())
            .unwrap_or_else(|| UNKNOWN.to_string());
        Self {
            prefix: format!("{state}{county}{}", date_tag(date)),
            extension: format.extension(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn cleaned(&self, dir: &Path) -> PathBuf {
        self.file(dir, "LCT")
    }

    pub fn discard(&self, dir: &Path) -> PathBuf {
        self.file(dir, "LandlinesNoNumber")
    }

    pub fn qa_summary(&self, dir: &Path) -> PathBuf {
        self.file(dir, "QAReport")
    }

    /// Separate details file; workbooks carry the details as a sheet instead.
    pub fn qa_details(&self, dir: &Path) -> PathBuf {
        self.file(dir, "QAMissingPhones")
    }

    fn file(&self, dir: &Path, suffix: &str) -> PathBuf {
        dir.join(format!("{}{suffix}.{}", self.prefix, self.extension))
    }
}

/// `Oct18` style tag.
pub fn date_tag(date: NaiveDate) -> String {
    date.format("%b%d").to_string()
}

/// Kept/removed paths for a `scrub` run, next to the input unless a
/// directory is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubNames {
    pub kept: PathBuf,
    pub removed: PathBuf,
}

impl ScrubNames {
    pub fn for_input(input: &Path, out_dir: Option<&Path>, format: OutputFormat) -> Self {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contacts".to_string());
        let dir = out_dir
            .map(Path::to_path_buf)
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        let extension = format.extension();
        Self {
            kept: dir.join(format!("{stem}_cleaned.{extension}")),
            removed: dir.join(format!("{stem}_removed.{extension}")),
        }
    }
}
