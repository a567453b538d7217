use crate::domain::{normalize_phone, LineTypeSet, PhoneSlot, RowRef};

#[derive(Debug, Clone, Copy)]
pub enum LineTypeFilter<'a> {
    AnyLabel,
    OneOf(&'a LineTypeSet),
}

impl LineTypeFilter<'_> {
    fn accepts(&self, label: &str) -> bool {
        match self {
            LineTypeFilter::AnyLabel => !label.is_empty(),
            LineTypeFilter::OneOf(set) => set.matches(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotHit {
    pub slot: PhoneSlot,
    pub number: String,
    pub line_type: String,
}

pub fn scan_slots(
    row: &RowRef<'_>,
    slots: &[PhoneSlot],
    filter: LineTypeFilter<'_>,
    limit: Option<usize>,
) -> Vec<SlotHit> {
    let mut hits = Vec::new();
    if limit == Some(0) {
        return hits;
    }

    for slot in slots {
        let (Some(number_cell), Some(type_cell)) = (row.get(slot.number), row.get(slot.line_type))
        else {
            continue;
        };

        let Some(number) = normalize_phone(number_cell) else {
            continue;
        };
        let line_type = type_cell
            .as_text()
            .map(|label| label.trim().to_string())
            .unwrap_or_default();
        if !filter.accepts(&line_type) {
            continue;
        }

        hits.push(SlotHit {
            slot: *slot,
            number,
            line_type,
        });
        if limit.is_some_and(|max| hits.len() >= max) {
            break;
        }
    }

    hits
}
