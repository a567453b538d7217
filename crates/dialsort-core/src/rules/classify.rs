use crate::domain::{LineTypeSet, PhoneSlot, RowRef, DEFAULT_PHONE_SLOTS};
use crate::error::CoreError;
use crate::rules::scan::{scan_slots, LineTypeFilter};

pub const QUALIFYING_PHONE_CAP: usize = 3;
pub const DISCARD_PHONE_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonePolicy {
    pub slots: Vec<PhoneSlot>,
    pub allowed: LineTypeSet,
    pub discardable: LineTypeSet,
}

impl PhonePolicy {
    pub fn new(allowed: LineTypeSet, discardable: LineTypeSet) -> Result<Self, CoreError> {
        if let Some(label) = allowed.overlap(&discardable).next() {
            return Err(CoreError::OverlappingLineType(label.to_string()));
        }
        Ok(Self {
            slots: DEFAULT_PHONE_SLOTS.to_vec(),
            allowed,
            discardable,
        })
    }
}

impl Default for PhonePolicy {
    fn default() -> Self {
        Self {
            slots: DEFAULT_PHONE_SLOTS.to_vec(),
            allowed: LineTypeSet::allowed_default(),
            discardable: LineTypeSet::discardable_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifyingPhones(pub [Option<String>; QUALIFYING_PHONE_CAP]);

impl QualifyingPhones {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedPhone {
    pub number: String,
    pub line_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPhones(pub [Option<TypedPhone>; DISCARD_PHONE_CAP]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Cleaned(QualifyingPhones),
    Discard(DiscardPhones),
}

pub fn has_qualifying_phone(row: &RowRef<'_>, policy: &PhonePolicy) -> bool {
    !scan_slots(
        row,
        &policy.slots,
        LineTypeFilter::OneOf(&policy.allowed),
        Some(1),
    )
    .is_empty()
}

pub fn extract_qualifying_phones(row: &RowRef<'_>, policy: &PhonePolicy) -> QualifyingPhones {
    let hits = scan_slots(
        row,
        &policy.slots,
        LineTypeFilter::OneOf(&policy.allowed),
        Some(QUALIFYING_PHONE_CAP),
    );
    let mut phones = QualifyingPhones::default();
    for (slot, hit) in phones.0.iter_mut().zip(hits) {
        *slot = Some(hit.number);
    }
    phones
}

pub fn extract_discardable_phones(row: &RowRef<'_>, policy: &PhonePolicy) -> DiscardPhones {
    let hits = scan_slots(
        row,
        &policy.slots,
        LineTypeFilter::OneOf(&policy.discardable),
        Some(DISCARD_PHONE_CAP),
    );
    let mut phones = DiscardPhones::default();
    for (slot, hit) in phones.0.iter_mut().zip(hits) {
        *slot = Some(TypedPhone {
            number: hit.number,
            line_type: hit.line_type,
        });
    }
    phones
}

pub fn classify_row(row: &RowRef<'_>, policy: &PhonePolicy) -> Classification {
    let qualifying = extract_qualifying_phones(row, policy);
    if qualifying.is_empty() {
        Classification::Discard(extract_discardable_phones(row, policy))
    } else {
        Classification::Cleaned(qualifying)
    }
}
