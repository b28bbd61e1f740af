//! Common helpers for integration tests.
//!
//! Edits are addressed the way a user sees them in the editor: by how far the
//! cursor sits from the end of the document, in UTF-16 units.

#![allow(dead_code)]

pub mod fixtures;

use codingtext::helpers::utf16_len;
use codingtext::{EditRange, FormattedEdit, format_edit};

/// Result of one typed edit, seen from the end of the document.
#[derive(Debug)]
pub struct Typed {
    pub text: String,
    pub cursor_from_end: usize,
    pub result: FormattedEdit,
}

impl Typed {
    fn new(result: FormattedEdit) -> Self {
        let cursor_from_end = utf16_len(&result.text) - result.cursor.location;
        Self { text: result.text.clone(), cursor_from_end, result }
    }
}

/// Type `input` with the cursor `from_end` units before the end of `text`.
pub fn type_at(text: &str, from_end: usize, input: &str) -> Typed {
    let location = utf16_len(text) - from_end;
    Typed::new(format_edit(text, EditRange::cursor(location), input))
}

/// Type `input` at the end of `text`.
pub fn type_at_end(text: &str, input: &str) -> Typed {
    type_at(text, 0, input)
}

/// What a plain editor would produce: `proposed` spliced over `range`.
pub fn naive_splice(text: &str, range: EditRange, proposed: &str) -> String {
    let bytes = range.to_byte_range(text).expect("range fits");
    format!("{}{}{}", &text[..bytes.start], proposed, &text[bytes.end..])
}
