pub mod domain;
pub mod dto;
pub mod error;
pub mod pipeline;
pub mod qa;
pub mod rules;
pub mod schema;
pub mod scrub;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use pipeline::{process_table, ProcessOptions, ProcessOutput, DEFAULT_PROGRESS_INTERVAL};
pub use qa::{build_qa_report, QaReport, QaRow};
pub use rules::*;
pub use schema::{OutputSchema, OutputTable, SchemaMapper};
pub use scrub::{detect_name_column, scrub_table, ScrubOutcome, ScrubPatterns};
