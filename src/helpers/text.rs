//! Primitive text queries used by the classifier and the generator.
//!
//! Offsets and ranges are UTF-8 byte offsets. Offsets that overrun the text or
//! split a character yield "no match" rather than a panic.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

pub const TAB: char = '\t';
pub const NEWLINE: &str = "\n";

/// Characters skipped when looking for the neighbour of an edit.
pub const SPACES: &[char] = &[' '];
pub const SPACES_AND_TABS: &[char] = &[' ', TAB];

fn is_ignored(grapheme: &str, ignoring: &[char]) -> bool {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => ignoring.contains(&ch),
        _ => false,
    }
}

/// First character at or after `offset` that is not in `ignoring`.
pub fn char_at<'a>(text: &'a str, offset: usize, ignoring: &[char]) -> Option<&'a str> {
    text.get(offset..)?.graphemes(true).find(|g| !is_ignored(g, ignoring))
}

/// First character before `offset`, scanning backward, that is not in `ignoring`.
pub fn char_before<'a>(text: &'a str, offset: usize, ignoring: &[char]) -> Option<&'a str> {
    text.get(..offset)?.graphemes(true).rev().find(|g| !is_ignored(g, ignoring))
}

/// Nearest match of `needle` lying entirely before `position`.
pub fn nearest_range_before(text: &str, needle: &str, position: usize) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let start = text.get(..position)?.rfind(needle)?;
    Some(start..start + needle.len())
}

/// Nearest match of `needle` starting at or after `position`.
pub fn nearest_range_after(text: &str, needle: &str, position: usize) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let start = position + text.get(position..)?.find(needle)?;
    Some(start..start + needle.len())
}

/// The line around `offset`, excluding its newline.
pub fn line_range(text: &str, offset: usize) -> Range<usize> {
    let offset = offset.min(text.len());
    let start = nearest_range_before(text, NEWLINE, offset).map_or(0, |r| r.end);
    let end = nearest_range_after(text, NEWLINE, offset).map_or(text.len(), |r| r.start);
    start..end
}

/// Number of leading tabs on `line`.
pub fn indentation_level(text: &str, line: Range<usize>) -> usize {
    text.get(line).map_or(0, |line| line.chars().take_while(|&ch| ch == TAB).count())
}

/// Non-overlapping occurrences of `needle` within `range`.
pub fn count_occurrences(text: &str, needle: &str, range: Range<usize>) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.get(range).map_or(0, |haystack| haystack.matches(needle).count())
}

/// Non-overlapping occurrences of `needle` in the whole text.
pub fn count_in_document(text: &str, needle: &str) -> usize {
    count_occurrences(text, needle, 0..text.len())
}

/// `line` with every whitespace character removed.
pub fn distill(line: &str) -> String {
    line.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Replace the leading tabs of `line` with exactly `level` tabs.
///
/// Returns the rewritten text and the change in length, in bytes.
pub fn set_indentation(text: &str, line: Range<usize>, level: usize) -> Option<(String, isize)> {
    let content = text.get(line.clone())?;
    let existing = content.len() - content.trim_start_matches(TAB).len();

    let mut rewritten = String::with_capacity(text.len() + level);
    rewritten.push_str(&text[..line.start]);
    rewritten.push_str(&tabs(level));
    rewritten.push_str(&text[line.start + existing..]);

    Some((rewritten, level as isize - existing as isize))
}

pub fn tabs(count: usize) -> String {
    TAB.to_string().repeat(count)
}
