//! Owner-name scrubbing: drops rows whose name looks like an organization
//! rather than a person.

use crate::domain::{CellValue, Header, Table};
use crate::error::CoreError;
use regex::RegexSet;

pub const DEFAULT_SCRUB_PATTERNS: &[&str] = &[
    // gas, utility, energy
    r"\bgas\b",
    r"\bgas company\b",
    r"\bgas co\b",
    r"\bgas utility\b",
    r"\butility\b",
    r"\butilities co\b",
    r"\bmunicipal utility\b",
    r"\bmunicipal electric\b",
    r"\belectric co\b",
    r"\belectric company\b",
    r"\belectric utility\b",
    r"\belectric authority\b",
    r"\belectric corp\b",
    r"\bpower co\b",
    r"\bpower company\b",
    r"\bpower authority\b",
    r"\bpower & light\b",
    r"\bpower corp\b",
    r"\benergy co\b",
    r"\benergy company\b",
    r"\brural electric\b",
    r"\brural co-op\b",
    r"\belectric co-op\b",
    r"\bwater authority\b",
    r"\bwater dept\b",
    r"\bpwr\b",
    r"\bpwr co\b",
    r"\belec\b",
    r"\btel co\b",
    r"\btelco\b",
    r"\btelephone co\b",
    // government
    r"\bborough of\b",
    r"\btwp\b",
    r"\btownship\b",
    r"\btown of\b",
    r"\bcity of\b",
    r"\bcounty of\b",
    r"\bcounty\b",
    r"\bcommonwealth of\b",
    r"\bstate dep\b",
    r"\bstate highway\b",
    r"\bdepartment of\b",
    r"\bdept of\b",
    r"\bdept\b",
    r"\bmunicipal\b",
    r"\bboard of\b",
    r"\bcommission\b",
    r"\bdevelopment district\b",
    r"\broad commission\b",
    // schools
    r"\bschool district\b",
    r"\bschool dist\b",
    r"\bsch dis\b",
    r"\bcity schools\b",
    r"\bschool system\b",
    // fire and emergency
    r"\bfire co\b",
    r"\bfire company\b",
    r"\bvolunteer fire\b",
    // rail
    r"\brail car co\b",
    r"\brailway\b",
    r"\brr\b",
    r"\bhospital\b",
    // cemeteries, conservancies
    r"\bcemetery\b",
    r"\bconservation authority\b",
    r"\bconservancy\b",
    r"\bwaste management\b",
    // churches
    r"\bchurch\b",
    r"\bcommunity church\b",
    r"\bfamily church\b",
    r"\bchurch of\b",
    r"\bbaptist\b",
    r"\bmethodist\b",
    // public works, development
    r"\bpublic works\b",
    r"\bpub works\b",
    r"\bdevl\b",
    r"\bdevl co\b",
    r"\bindustrial\b",
];

const NAME_COLUMN_HINTS: [&str; 3] = ["owner", "name", "mail"];

/// Compiled organization-name patterns, matched against lower-cased names.
#[derive(Debug, Clone)]
pub struct ScrubPatterns {
    set: RegexSet,
}

impl ScrubPatterns {
    /// Default patterns plus one whole-word pattern per extra keyword.
    /// Blank keywords are ignored.
    pub fn new<I, S>(extra_keywords: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<String> = DEFAULT_SCRUB_PATTERNS
            .iter()
            .map(|pattern| pattern.to_string())
            .collect();
        for keyword in extra_keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }
            patterns.push(keyword_pattern(keyword));
        }

        let set = RegexSet::new(&patterns)
            .map_err(|err| CoreError::InvalidScrubPattern(err.to_string()))?;
        Ok(Self { set })
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Null names never match.
    pub fn matches(&self, name: &CellValue) -> bool {
        match name.as_text() {
            Some(text) => self.set.is_match(&text.to_lowercase()),
            None => false,
        }
    }
}

pub fn keyword_pattern(keyword: &str) -> String {
    format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()))
}

/// First column whose name mentions an owner, name or mailing field, else
/// the first column.
pub fn detect_name_column(header: &Header) -> Option<&str> {
    header
        .names()
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            NAME_COLUMN_HINTS.iter().any(|hint| lower.contains(hint))
        })
        .or_else(|| header.names().first())
        .map(String::as_str)
}

#[derive(Debug, Clone)]
pub struct ScrubOutcome {
    pub kept: Table,
    pub removed: Table,
    pub removed_names: Vec<String>,
}

/// Splits `table` on whether `column` matches a scrub pattern.
///
/// Rows keep their original columns and order. An absent column removes
/// nothing.
pub fn scrub_table(table: &Table, column: &str, patterns: &ScrubPatterns) -> ScrubOutcome {
    let mut kept = Vec::new();
    let mut removed = Vec::new();
    let mut removed_names = Vec::new();

    for (idx, row) in table.rows().enumerate() {
        match row.get(column) {
            Some(name) if patterns.matches(name) => {
                removed.push(idx);
                removed_names.push(name.to_output());
            }
            _ => kept.push(idx),
        }
    }

    ScrubOutcome {
        kept: table.select_rows(&kept),
        removed: table.select_rows(&removed),
        removed_names,
    }
}
