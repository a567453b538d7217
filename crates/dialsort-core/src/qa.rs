//! Reconciliation report recomputed from the original sheet and both outputs.

use crate::domain::{PhoneSlot, Table};
use crate::rules::{scan_slots, LineTypeFilter};
use crate::schema::{OutputSchema, OutputTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const QA_CHECK_HEADER: &str = "QA CHECK";
pub const QA_RESULT_HEADER: &str = "RESULT";

const DISCARD_PHONE_COLUMNS: [(&str, &str); 5] = [
    ("Phone1", "Phone1_Type"),
    ("Phone2", "Phone2_Type"),
    ("Phone3", "Phone3_Type"),
    ("Phone4", "Phone4_Type"),
    ("Phone5", "Phone5_Type"),
];

/// One line of the two-column summary. Blank rows separate groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRow {
    pub check: String,
    pub result: String,
}

impl QaRow {
    fn new(check: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            result: result.into(),
        }
    }

    fn blank() -> Self {
        Self::new("", "")
    }

    pub fn is_blank(&self) -> bool {
        self.check.is_empty() && self.result.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaReport {
    pub original_rows: usize,
    pub cleaned_rows: usize,
    pub discard_rows: usize,
    pub total_phones: usize,
    /// Keyed by the label exactly as written in the sheet.
    pub phones_by_type: BTreeMap<String, usize>,
    pub discard_mobile_contacts: usize,
    pub discard_mobile_phones: usize,
    pub summary: Vec<QaRow>,
    #[serde(skip)]
    pub details: OutputTable,
}

impl QaReport {
    pub fn processed_rows(&self) -> usize {
        self.cleaned_rows + self.discard_rows
    }

    pub fn counts_match(&self) -> bool {
        self.processed_rows() == self.original_rows
    }
}

pub fn build_qa_report(
    original: &Table,
    slots: &[PhoneSlot],
    cleaned: &OutputTable,
    discard: &OutputTable,
) -> QaReport {
    let mut phones_by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_phones = 0;
    for row in original.rows() {
        for hit in scan_slots(&row, slots, LineTypeFilter::AnyLabel, None) {
            total_phones += 1;
            *phones_by_type.entry(hit.line_type).or_insert(0) += 1;
        }
    }

    let (discard_mobile_contacts, discard_mobile_phones) = count_discard_mobiles(discard);

    let mut report = QaReport {
        original_rows: original.len(),
        cleaned_rows: cleaned.len(),
        discard_rows: discard.len(),
        total_phones,
        phones_by_type,
        discard_mobile_contacts,
        discard_mobile_phones,
        summary: Vec::new(),
        details: OutputTable::new(OutputSchema::QA_DETAIL),
    };
    report.summary = summary_rows(&report);
    report
}

fn count_discard_mobiles(discard: &OutputTable) -> (usize, usize) {
    let mut contacts = 0;
    let mut phones = 0;
    for index in 0..discard.len() {
        let mobiles = DISCARD_PHONE_COLUMNS
            .iter()
            .filter(|(number_col, type_col)| {
                let number = discard.value(index, number_col).unwrap_or_default();
                let line_type = discard.value(index, type_col).unwrap_or_default();
                !number.is_empty() && line_type.trim().eq_ignore_ascii_case("mobile")
            })
            .count();
        if mobiles > 0 {
            contacts += 1;
            phones += mobiles;
        }
    }
    (contacts, phones)
}

fn summary_rows(report: &QaReport) -> Vec<QaRow> {
    let verification = if report.counts_match() {
        "MATCH"
    } else {
        "MISMATCH"
    };

    let mut rows = vec![
        QaRow::new(
            "Total Contacts in Original File",
            format_count(report.original_rows),
        ),
        QaRow::new("Contacts in Cleaned File", format_count(report.cleaned_rows)),
        QaRow::new("Contacts in Discard File", format_count(report.discard_rows)),
        QaRow::new(
            "Total Contacts Processed",
            format_count(report.processed_rows()),
        ),
        QaRow::new("Contact Count Verification", verification),
        QaRow::blank(),
        QaRow::new(
            "Total Phone Numbers (All Types)",
            format_count(report.total_phones),
        ),
    ];

    for (line_type, count) in &report.phones_by_type {
        rows.push(QaRow::new(
            format!("{line_type} Phone Numbers"),
            format_count(*count),
        ));
    }

    rows.push(QaRow::blank());
    rows.push(QaRow::new(
        "Contacts with Mobile Phones in Discard File",
        format_count(report.discard_mobile_contacts),
    ));
    rows.push(QaRow::new(
        "Total Mobile Phone Numbers in Discard File",
        format_count(report.discard_mobile_phones),
    ));
    rows
}

/// `1234567` → `"1,234,567"`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{build_qa_report, format_count};
    use crate::domain::{CellValue, Header, Table, DEFAULT_PHONE_SLOTS};
    use crate::schema::{OutputSchema, OutputTable};

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn tallies_use_exact_labels_sorted() {
        let header = Header::new([
            "Phone",
            "Phone (Line Type)",
            "Alt Phone 1",
            "Alt Phone 1 (Line Type)",
        ]);
        let rows = vec![
            vec![
                CellValue::text("5551112222"),
                CellValue::text("Mobile"),
                CellValue::text("5553334444"),
                CellValue::text("mobile"),
            ],
            vec![
                CellValue::text("5551112222"),
                CellValue::text("Landline"),
                CellValue::text("12"),
                CellValue::text("Mobile"),
            ],
            vec![
                CellValue::text("5551112222"),
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
            ],
        ];
        let original = Table::new(header, rows);
        let report = build_qa_report(
            &original,
            &DEFAULT_PHONE_SLOTS,
            &OutputTable::new(OutputSchema::CLEANED),
            &OutputTable::new(OutputSchema::DISCARD),
        );

        assert_eq!(report.total_phones, 3);
        let labels: Vec<(&str, usize)> = report
            .phones_by_type
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        assert_eq!(labels, vec![("Landline", 1), ("Mobile", 1), ("mobile", 1)]);
        assert_eq!(
            report.phones_by_type.values().sum::<usize>(),
            report.total_phones
        );
        assert!(!report.counts_match());
        assert_eq!(report.summary[4].result, "MISMATCH");
        assert!(report.details.is_empty());
        assert_eq!(report.details.columns().len(), 6);
    }

    #[test]
    fn discard_mobile_leakage_counts_contacts_and_numbers() {
        let mut discard = OutputTable::new(OutputSchema::DISCARD);
        let mut row = vec![String::new(); OutputSchema::DISCARD.columns.len()];
        let schema = OutputSchema::DISCARD;
        row[schema.position("Phone1").unwrap()] = "5551112222".to_string();
        row[schema.position("Phone1_Type").unwrap()] = "Mobile".to_string();
        row[schema.position("Phone2").unwrap()] = "5553334444".to_string();
        row[schema.position("Phone2_Type").unwrap()] = " mobile ".to_string();
        row[schema.position("Phone3_Type").unwrap()] = "Mobile".to_string();
        discard.push(row);
        discard.push(vec![String::new(); OutputSchema::DISCARD.columns.len()]);

        let original = Table::new(Header::new(["APN"]), vec![vec![], vec![]]);
        let report = build_qa_report(
            &original,
            &DEFAULT_PHONE_SLOTS,
            &OutputTable::new(OutputSchema::CLEANED),
            &discard,
        );
        assert_eq!(report.discard_mobile_contacts, 1);
        assert_eq!(report.discard_mobile_phones, 2);
        assert!(report.counts_match());
        assert_eq!(report.summary[4].result, "MATCH");
        let last = report.summary.last().expect("summary rows");
        assert_eq!(last.check, "Total Mobile Phone Numbers in Discard File");
        assert_eq!(last.result, "2");
    }
}
