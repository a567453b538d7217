use crate::domain::Table;
use crate::error::CoreError;
use crate::qa::{build_qa_report, QaReport};
use crate::rules::{classify_row, Classification, PhonePolicy};
use crate::schema::{OutputSchema, OutputTable, SchemaMapper};
use tracing::{debug, info};

pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub policy: PhonePolicy,
    pub mapper: SchemaMapper,
    /// Rows between progress events.
    pub progress_interval: usize,
}

impl ProcessOptions {
    pub fn new(policy: PhonePolicy, progress_interval: usize) -> Result<Self, CoreError> {
        if progress_interval == 0 {
            return Err(CoreError::InvalidProgressInterval(progress_interval));
        }
        Ok(Self {
            policy,
            mapper: SchemaMapper::default(),
            progress_interval,
        })
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            policy: PhonePolicy::default(),
            mapper: SchemaMapper::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub cleaned: OutputTable,
    pub discard: OutputTable,
    pub qa: QaReport,
}

/// Splits a contact sheet into cleaned and discard records and reconciles
/// the result against the input.
pub fn process_table(table: &Table, options: &ProcessOptions) -> ProcessOutput {
    let mut cleaned = OutputTable::new(OutputSchema::CLEANED);
    let mut discard = OutputTable::new(OutputSchema::DISCARD);
    let interval = options.progress_interval.max(1);

    for (idx, row) in table.rows().enumerate() {
        match classify_row(&row, &options.policy) {
            Classification::Cleaned(phones) => {
                cleaned.push(options.mapper.cleaned_row(&row, &phones));
            }
            Classification::Discard(phones) => {
                discard.push(options.mapper.discard_row(&row, &phones));
            }
        }
        if (idx + 1) % interval == 0 {
            debug!(processed = idx + 1, total = table.len(), "classifying rows");
        }
    }

    info!(
        cleaned = cleaned.len(),
        discard = discard.len(),
        "rows partitioned"
    );

    let qa = build_qa_report(table, &options.policy.slots, &cleaned, &discard);
    ProcessOutput {
        cleaned,
        discard,
        qa,
    }
}
