pub mod error;
pub mod naming;
pub mod read;
pub mod write;

pub use error::{Result, TableError};
pub use naming::{OutputNames, ScrubNames};
pub use read::{read_csv, read_table, read_workbook};
pub use write::{
    write_output_table, write_qa_report, write_table, OutputFormat, DETAILS_SHEET, SUMMARY_SHEET,
};
