use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("line type label is required")]
    EmptyLineType,
    #[error("line type set is empty")]
    EmptyLineTypeSet,
    #[error("line type {0} is both allowed and discardable")]
    OverlappingLineType(String),
    #[error("invalid scrub pattern: {0}")]
    InvalidScrubPattern(String),
    #[error("invalid progress interval: {0}")]
    InvalidProgressInterval(usize),
}
