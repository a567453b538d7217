use crate::domain::RowRef;
use crate::rules::{DiscardPhones, QualifyingPhones};
use crate::schema::{OutputSchema, EMAIL, FIRST_NAME, LAST_NAME};
use std::collections::HashMap;

/// Source column → external column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRename {
    pub source: &'static str,
    pub target: &'static str,
}

const fn rename(source: &'static str, target: &'static str) -> ColumnRename {
    ColumnRename { source, target }
}

pub const DEFAULT_RENAMES: [ColumnRename; 13] = [
    rename("Owner 1 First Name", "FirstName"),
    rename("Owner 1 Last Name", "LastName"),
    rename("Mail Full Address", "MailingAddress"),
    rename("Mail City", "MailingCity"),
    rename("Mail State", "MailingState"),
    rename("Mail Zip", "MailingZip"),
    rename("Parcel Full Address", "PropertyAddress"),
    rename("Parcel City", "PropertyCity"),
    rename("Parcel State", "PropertyState"),
    rename("Parcel Zip", "PropertyZip"),
    rename("APN", "APN"),
    rename("Parcel County", "PropertyCounty"),
    rename("Lot Acres", "Acreage"),
];

/// When both split-name targets end up blank, `source` fills `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameFallback {
    pub first: &'static str,
    pub last: &'static str,
    pub source: &'static str,
}

impl Default for NameFallback {
    fn default() -> Self {
        Self {
            first: FIRST_NAME,
            last: LAST_NAME,
            source: "Owner 1 Full Name",
        }
    }
}

/// Declarative row → external record mapping shared by both output layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMapper {
    pub renames: Vec<ColumnRename>,
    pub name_fallback: NameFallback,
    /// Targets the source never supplies; always written blank.
    pub placeholders: Vec<&'static str>,
}

impl Default for SchemaMapper {
    fn default() -> Self {
        Self {
            renames: DEFAULT_RENAMES.to_vec(),
            name_fallback: NameFallback::default(),
            placeholders: vec![EMAIL],
        }
    }
}

impl SchemaMapper {
    /// Builds one output row laid out by `schema`.
    ///
    /// `extra` carries already-computed target values (the phone slots) and
    /// wins over renamed source columns. Targets nothing fills are blank.
    pub fn map_row(
        &self,
        row: &RowRef<'_>,
        extra: &[(&str, String)],
        schema: OutputSchema,
    ) -> Vec<String> {
        let mut values: HashMap<&str, String> = HashMap::new();

        for entry in &self.renames {
            if let Some(cell) = row.get(entry.source) {
                values.insert(entry.target, cell.to_output());
            }
        }
        for (target, value) in extra {
            values.insert(*target, value.clone());
        }

        let fallback = &self.name_fallback;
        let first_blank = values.get(fallback.first).map_or(true, |v| v.is_empty());
        let last_blank = values.get(fallback.last).map_or(true, |v| v.is_empty());
        if first_blank && last_blank && row.contains(fallback.source) {
            values.insert(fallback.first, row.text_or_empty(fallback.source));
        }

        for target in &self.placeholders {
            values.insert(*target, String::new());
        }

        schema
            .columns
            .iter()
            .map(|column| values.remove(column).unwrap_or_default())
            .collect()
    }

    pub fn cleaned_row(&self, row: &RowRef<'_>, phones: &QualifyingPhones) -> Vec<String> {
        let extra: Vec<(&str, String)> = ["Phone1", "Phone2", "Phone3"]
            .into_iter()
            .zip(phones.0.iter())
            .map(|(column, phone)| (column, phone.clone().unwrap_or_default()))
            .collect();
        self.map_row(row, &extra, OutputSchema::CLEANED)
    }

    pub fn discard_row(&self, row: &RowRef<'_>, phones: &DiscardPhones) -> Vec<String> {
        const SLOTS: [(&str, &str); 5] = [
            ("Phone1", "Phone1_Type"),
            ("Phone2", "Phone2_Type"),
            ("Phone3", "Phone3_Type"),
            ("Phone4", "Phone4_Type"),
            ("Phone5", "Phone5_Type"),
        ];

        let mut extra = Vec::with_capacity(SLOTS.len() * 2);
        for ((number_col, type_col), phone) in SLOTS.into_iter().zip(phones.0.iter()) {
            let (number, line_type) = match phone {
                Some(phone) => (phone.number.clone(), phone.line_type.clone()),
                None => (String::new(), String::new()),
            };
            extra.push((number_col, number));
            extra.push((type_col, line_type));
        }
        self.map_row(row, &extra, OutputSchema::DISCARD)
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaMapper;
    use crate::domain::{CellValue, Header, Table};
    use crate::rules::{DiscardPhones, QualifyingPhones, TypedPhone};
    use crate::schema::OutputSchema;

    fn single_row(columns: &[&str], values: Vec<CellValue>) -> Table {
        Table::new(Header::new(columns.iter().copied()), vec![values])
    }

    fn get<'a>(schema: OutputSchema, row: &'a [String], column: &str) -> &'a str {
        &row[schema.position(column).expect("column in schema")]
    }

    #[test]
    fn full_name_fills_first_name_when_split_names_missing() {
        let table = single_row(&["Owner 1 Full Name"], vec![CellValue::text("Jane Q Public")]);
        let row = table.row(0).expect("row");
        let mapped = SchemaMapper::default().cleaned_row(&row, &QualifyingPhones::default());
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "FirstName"), "Jane Q Public");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "LastName"), "");
    }

    #[test]
    fn full_name_ignored_when_last_name_present() {
        let table = single_row(
            &["Owner 1 Full Name", "Owner 1 First Name", "Owner 1 Last Name"],
            vec![
                CellValue::text("Jane Q Public"),
                CellValue::Empty,
                CellValue::text("Public"),
            ],
        );
        let row = table.row(0).expect("row");
        let mapped = SchemaMapper::default().cleaned_row(&row, &QualifyingPhones::default());
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "FirstName"), "");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "LastName"), "Public");
    }

    #[test]
    fn cleaned_row_follows_external_layout() {
        let table = single_row(
            &[
                "Parcel County",
                "Owner 1 First Name",
                "Parcel State",
                "Lot Acres",
                "Unrelated",
            ],
            vec![
                CellValue::text("Erie"),
                CellValue::text("Ada"),
                CellValue::text("PA"),
                CellValue::Float(12.5),
                CellValue::text("ignored"),
            ],
        );
        let row = table.row(0).expect("row");
        let phones = QualifyingPhones([Some("5551112222".to_string()), None, None]);
        let mapped = SchemaMapper::default().cleaned_row(&row, &phones);

        assert_eq!(mapped.len(), 17);
        assert_eq!(mapped[0], "Ada");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "Email"), "");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "PropertyState"), "PA");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "Phone1"), "5551112222");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "Phone2"), "");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "PropertyCounty"), "Erie");
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "Acreage"), "12.5");
        assert!(!mapped.iter().any(|value| value == "ignored"));
    }

    #[test]
    fn discard_row_pairs_numbers_with_types() {
        let table = single_row(&["APN"], vec![CellValue::text("001-002")]);
        let row = table.row(0).expect("row");
        let mut phones = DiscardPhones::default();
        phones.0[0] = Some(TypedPhone {
            number: "4445556666".to_string(),
            line_type: "Landline".to_string(),
        });
        let mapped = SchemaMapper::default().discard_row(&row, &phones);

        assert_eq!(mapped.len(), 24);
        assert_eq!(get(OutputSchema::DISCARD, &mapped, "Phone1"), "4445556666");
        assert_eq!(get(OutputSchema::DISCARD, &mapped, "Phone1_Type"), "Landline");
        assert_eq!(get(OutputSchema::DISCARD, &mapped, "Phone2"), "");
        assert_eq!(get(OutputSchema::DISCARD, &mapped, "Phone5_Type"), "");
        assert_eq!(get(OutputSchema::DISCARD, &mapped, "APN"), "001-002");
    }

    #[test]
    fn email_placeholder_overrides_source() {
        let table = single_row(&["Email"], vec![CellValue::text("owner@example.com")]);
        let row = table.row(0).expect("row");
        let mapper = SchemaMapper::default();
        let mapped = mapper.map_row(&row, &[("Email", "x".to_string())], OutputSchema::CLEANED);
        assert_eq!(get(OutputSchema::CLEANED, &mapped, "Email"), "");
    }
}
