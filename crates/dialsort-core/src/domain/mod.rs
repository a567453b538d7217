pub mod cell;
pub mod line_type;
pub mod phone;
pub mod table;

pub use cell::CellValue;
pub use line_type::{normalize_line_type, LineTypeSet};
pub use phone::{normalize_phone, PhoneSlot, DEFAULT_PHONE_SLOTS};
pub use table::{Header, RowRef, Table};
