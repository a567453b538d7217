use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_ALLOWED_TYPES: [&str; 2] = ["mobile", "voip"];
pub const DEFAULT_DISCARDABLE_TYPES: [&str; 3] = ["landline", "pager", "specialservice"];

/// A set of carrier line-type labels, stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineTypeSet(BTreeSet<String>);

impl LineTypeSet {
    pub fn new<I, S>(labels: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for label in labels {
            set.insert(normalize_line_type(label.as_ref())?);
        }
        if set.is_empty() {
            return Err(CoreError::EmptyLineTypeSet);
        }
        Ok(Self(set))
    }

    pub fn allowed_default() -> Self {
        Self(DEFAULT_ALLOWED_TYPES.iter().map(|s| s.to_string()).collect())
    }

    pub fn discardable_default() -> Self {
        Self(
            DEFAULT_DISCARDABLE_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    /// Case-insensitive, whitespace-tolerant membership test for a raw label.
    pub fn matches(&self, raw: &str) -> bool {
        let key = raw.trim().to_lowercase();
        !key.is_empty() && self.0.contains(&key)
    }

    pub fn overlap<'a>(&'a self, other: &'a LineTypeSet) -> impl Iterator<Item = &'a str> {
        self.0.intersection(&other.0).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

pub fn normalize_line_type(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyLineType);
    }
    Ok(trimmed.to_lowercase())
}
