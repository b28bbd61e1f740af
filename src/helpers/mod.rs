pub mod diff;
pub mod offsets;
pub mod text;

pub use diff::{SnapshotChange, changed_span};
pub use offsets::{byte_to_utf16, utf16_len, utf16_to_byte};
