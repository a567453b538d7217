use crate::domain::cell::CellValue;

/// One `(number column, line type column)` pair of the input sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneSlot {
    pub number: &'static str,
    pub line_type: &'static str,
}

impl PhoneSlot {
    pub const fn new(number: &'static str, line_type: &'static str) -> Self {
        Self { number, line_type }
    }
}

/// Slot order is scan priority.
pub const DEFAULT_PHONE_SLOTS: [PhoneSlot; 6] = [
    PhoneSlot::new("Phone", "Phone (Line Type)"),
    PhoneSlot::new("Alt Phone 1", "Alt Phone 1 (Line Type)"),
    PhoneSlot::new("Alt Phone 2", "Alt Phone 2 (Line Type)"),
    PhoneSlot::new("Alt Phone 3", "Alt Phone 3 (Line Type)"),
    PhoneSlot::new("Alt Phone 4", "Alt Phone 4 (Line Type)"),
    PhoneSlot::new("Alt Phone 5", "Alt Phone 5 (Line Type)"),
];

const PHONE_DIGITS: usize = 10;

/// Reduces a raw cell to a bare 10-digit North American number.
///
/// Floats are truncated to an integer before formatting so spreadsheet
/// numbers like `5551234567.0` keep their digits; the same number exported
/// as text loses its zero fraction. An 11-digit value with a leading `1`
/// loses its country code. Everything else yields `None`.
pub fn normalize_phone(value: &CellValue) -> Option<String> {
    let raw = match value {
        CellValue::Empty => return None,
        CellValue::Text(text) if text.is_empty() => return None,
        CellValue::Text(text) => strip_zero_fraction(text.trim()).to_string(),
        CellValue::Int(number) => number.to_string(),
        CellValue::Float(number) => truncate_float(*number)?.to_string(),
        CellValue::Bool(flag) => flag.to_string(),
    };

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        PHONE_DIGITS => Some(digits),
        len if len == PHONE_DIGITS + 1 && digits.starts_with('1') => {
            Some(digits[1..].to_string())
        }
        _ => None,
    }
}

fn strip_zero_fraction(text: &str) -> &str {
    match text.split_once('.') {
        Some((whole, fraction))
            if !whole.is_empty()
                && !fraction.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.bytes().all(|b| b == b'0') =>
        {
            whole
        }
        _ => text,
    }
}

fn truncate_float(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}
