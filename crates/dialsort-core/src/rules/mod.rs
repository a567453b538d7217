pub mod classify;
pub mod scan;

pub use classify::{
    classify_row, extract_discardable_phones, extract_qualifying_phones, has_qualifying_phone,
    Classification, DiscardPhones, PhonePolicy, QualifyingPhones, TypedPhone, DISCARD_PHONE_CAP,
    QUALIFYING_PHONE_CAP,
};
pub use scan::{scan_slots, LineTypeFilter, SlotHit};
