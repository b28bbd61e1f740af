//! Conversion between the host's UTF-16 code-unit offsets and the UTF-8 byte
//! offsets every scan in this crate works with.

use crate::error::{Error, Result};

/// Number of UTF-16 code units in `text`.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Byte offset of the UTF-16 offset `units`.
///
/// `None` when `units` is past the end of `text` or lands between the two halves
/// of a surrogate pair.
pub fn utf16_to_byte(text: &str, units: usize) -> Option<usize> {
    utf16_to_byte_checked(text, units).ok()
}

/// Like [`utf16_to_byte`], reporting why the offset was rejected.
pub fn utf16_to_byte_checked(text: &str, units: usize) -> Result<usize> {
    let mut seen = 0;
    for (byte, ch) in text.char_indices() {
        if seen == units {
            return Ok(byte);
        }
        seen += ch.len_utf16();
        if seen > units {
            return Err(Error::SplitSurrogate { offset: units });
        }
    }

    if seen == units {
        Ok(text.len())
    } else {
        Err(Error::OutOfBounds { offset: units, len: seen })
    }
}

/// UTF-16 offset of the byte offset `byte`.
///
/// Offsets past the end clamp to the end; offsets inside a multi-byte character
/// round down to its first byte.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    let mut byte = byte.min(text.len());
    while !text.is_char_boundary(byte) {
        byte -= 1;
    }
    utf16_len(&text[..byte])
}
