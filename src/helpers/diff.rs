//! Recovers a single edit from two snapshots of a buffer, for hosts that report
//! the text after a change instead of the change itself.
//!
//! Ranges are UTF-8 byte offsets and always fall on character boundaries.

use std::ops::Range;

/// The one contiguous change between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotChange {
    /// Span of the earlier snapshot that was replaced.
    pub replaced: Range<usize>,
    /// Span of the later snapshot that replaced it.
    pub inserted: Range<usize>,
}

/// Smallest change turning `before` into `after`, `None` when they are equal.
///
/// Equal leading characters are kept first, then equal trailing characters of
/// what remains, so an ambiguous insertion is placed as late as possible.
pub fn changed_span(before: &str, after: &str) -> Option<SnapshotChange> {
    if before == after {
        return None;
    }

    let prefix = common_prefix_len(before, after);
    let suffix = common_suffix_len(&before[prefix..], &after[prefix..]);

    Some(SnapshotChange {
        replaced: prefix..before.len() - suffix,
        inserted: prefix..after.len() - suffix,
    })
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(ch, _)| ch.len_utf8())
        .sum()
}

fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(ch, _)| ch.len_utf8())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(replaced: Range<usize>, inserted: Range<usize>) -> Option<SnapshotChange> {
        Some(SnapshotChange { replaced, inserted })
    }

    #[test]
    fn identical_snapshots_have_no_change() {
        assert_eq!(changed_span("same", "same"), None);
    }

    #[test]
    fn typed_character_in_the_middle() {
        assert_eq!(changed_span("Hello", "Hellao"), change(4..4, 4..5));
    }

    #[test]
    fn backspace_over_a_selection() {
        assert_eq!(changed_span("test abc", "test bc"), change(5..6, 5..5));
    }

    #[test]
    fn typing_over_a_selection() {
        assert_eq!(changed_span("call x;", "call (;"), change(5..6, 5..6));
    }

    #[test]
    fn completion_appended_at_the_end() {
        assert_eq!(changed_span("f {", "f {\n\t\n}"), change(3..3, 3..7));
    }

    #[test]
    fn multibyte_change_stays_on_boundaries() {
        // é and è share their first byte.
        assert_eq!(changed_span("é", "è"), change(0..2, 0..2));
        assert_eq!(changed_span("aé", "aè!"), change(1..3, 1..4));
    }
}
