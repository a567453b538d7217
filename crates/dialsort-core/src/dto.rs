use crate::qa::QaRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReportDto {
    pub input: String,
    pub original_rows: usize,
    pub cleaned_rows: usize,
    pub discard_rows: usize,
    pub counts_match: bool,
    pub cleaned_output: String,
    pub discard_output: String,
    pub qa_output: String,
    pub qa_summary: Vec<QaRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrubReportDto {
    pub input: String,
    pub column: String,
    pub original_rows: usize,
    pub removed_rows: usize,
    pub remaining_rows: usize,
    pub kept_output: String,
    pub removed_output: String,
    pub removed_names: Vec<String>,
}
