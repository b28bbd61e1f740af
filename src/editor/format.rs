use std::ops::Range;

use crate::error::{Error, Result};
use crate::helpers::offsets::{byte_to_utf16, utf16_len, utf16_to_byte_checked};
use crate::helpers::text::{indentation_level, line_range, nearest_range_before, set_indentation};
use crate::state::settings::EngineSettings;

use super::scenario::{EditContext, Scenario, classify, unbalanced_closer};

/// Half-open range of UTF-16 code units, as reported by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EditRange {
    pub location: usize,
    pub length: usize,
}

impl EditRange {
    pub fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Zero-length range at `location`.
    pub fn cursor(location: usize) -> Self {
        Self { location, length: 0 }
    }

    /// One past the last unit, `None` when `location + length` overflows.
    pub fn end(&self) -> Option<usize> {
        self.location.checked_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Byte range of this range in `text`, `None` when it does not fit.
    pub fn to_byte_range(&self, text: &str) -> Option<Range<usize>> {
        self.to_byte_range_checked(text).ok()
    }

    /// Like [`EditRange::to_byte_range`], reporting why the range was rejected.
    pub fn to_byte_range_checked(&self, text: &str) -> Result<Range<usize>> {
        let Some(end) = self.end() else {
            return Err(Error::OutOfBounds { offset: usize::MAX, len: utf16_len(text) });
        };
        let start = utf16_to_byte_checked(text, self.location)?;
        let end = utf16_to_byte_checked(text, end)?;
        Ok(start..end)
    }

    /// Host range covering the bytes `range` of `text`.
    pub fn from_byte_range(text: &str, range: Range<usize>) -> Self {
        let location = byte_to_utf16(text, range.start);
        Self { location, length: byte_to_utf16(text, range.end) - location }
    }
}

/// Out-of-band notice about an edit. Never blocks the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditWarning {
    /// A closer was typed with no opener left to match it.
    UnbalancedCloser(char),
}

/// Outcome of one edit: the new document and where the cursor goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEdit {
    pub text: String,
    pub cursor: EditRange,
    pub scenario: Scenario,
    pub warning: Option<EditWarning>,
}

impl FormattedEdit {
    fn unchanged(document: &str, range: EditRange) -> Self {
        Self {
            text: document.to_string(),
            cursor: range,
            scenario: Scenario::Normal,
            warning: None,
        }
    }
}

/// Formats edits according to a set of [`EngineSettings`].
#[derive(Debug, Clone, Default)]
pub struct CompletionEngine {
    settings: EngineSettings,
}

impl CompletionEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Replace `range` of `document` with `proposed`, completing it as code.
    ///
    /// A range that does not fit the document returns the document and range
    /// unchanged.
    pub fn format_edit(&self, document: &str, range: EditRange, proposed: &str) -> FormattedEdit {
        let Some(edit) = range.to_byte_range(document) else {
            log::debug!(
                "Edit range {:?} outside document of {} units, passing through",
                range,
                utf16_len(document)
            );
            return FormattedEdit::unchanged(document, range);
        };

        let ctx = EditContext::new(document, edit.clone());
        let scenario = classify(proposed, &ctx, &self.settings);
        let completion = scenario.complete(proposed, ctx.indentation);
        log::debug!("Edit {:?} at {:?} classified as {:?}", proposed, range, scenario);

        let warning = if self.settings.warn_unbalanced_closers {
            unbalanced_closer(proposed, &ctx, scenario).map(EditWarning::UnbalancedCloser)
        } else {
            None
        };
        if let Some(EditWarning::UnbalancedCloser(closer)) = warning {
            log::warn!("Too many closed brackets: {closer} typed at {}", range.location);
        }

        let mut text = String::with_capacity(
            document.len() - (edit.end - edit.start) + completion.insertion.len(),
        );
        text.push_str(&document[..edit.start]);
        text.push_str(&completion.insertion);
        text.push_str(&document[edit.end..]);
        let mut cursor = edit.start + completion.cursor_offset;

        if scenario == Scenario::ColonAfterCaseOrDefault
            && let Some((aligned, aligned_cursor)) = align_case_label(&text, edit.start, cursor)
        {
            text = aligned;
            cursor = aligned_cursor;
        }

        let location = byte_to_utf16(&text, cursor);
        FormattedEdit { text, cursor: EditRange::cursor(location), scenario, warning }
    }
}

/// Format an edit with every feature enabled.
pub fn format_edit(document: &str, range: EditRange, proposed: &str) -> FormattedEdit {
    CompletionEngine::default().format_edit(document, range, proposed)
}

/// Re-indent the label line around `position` to the level of the nearest
/// preceding `switch`. `text` is the document after the colon was spliced in.
///
/// Returns the rewritten text and the moved cursor, `None` when nothing changes.
fn align_case_label(text: &str, position: usize, cursor: usize) -> Option<(String, usize)> {
    let switch = nearest_range_before(text, "switch", position)?;
    let switch_level = indentation_level(text, line_range(text, switch.start));

    let line = line_range(text, position);
    let label_level = indentation_level(text, line.clone());
    if label_level == switch_level {
        return None;
    }

    let (aligned, delta) = set_indentation(text, line, switch_level)?;
    log::debug!("Aligned case label from {label_level} to {switch_level} tabs");
    Some((aligned, cursor.checked_add_signed(delta)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_range_byte_conversion() {
        let text = "a😀b";
        assert_eq!(EditRange::new(1, 2).to_byte_range(text), Some(1..5));
        assert_eq!(EditRange::new(3, 2).to_byte_range(text), None);
        assert_eq!(EditRange::from_byte_range(text, 1..5), EditRange::new(1, 2));
    }

    #[test]
    fn checked_conversion_reports_reason() {
        assert!(EditRange::new(2, 0).to_byte_range_checked("a😀").is_err());
        assert_eq!(EditRange::new(0, 3).to_byte_range_checked("a😀").ok(), Some(0..5));
    }

    #[test]
    fn overflowing_range_has_no_end() {
        assert_eq!(EditRange::new(1, usize::MAX).end(), None);
        assert_eq!(EditRange::new(usize::MAX, 0).end(), Some(usize::MAX));
        assert_eq!(EditRange::new(1, usize::MAX).to_byte_range("abc"), None);
        assert!(matches!(
            EditRange::new(1, usize::MAX).to_byte_range_checked("abc"),
            Err(Error::OutOfBounds { offset: usize::MAX, len: 3 })
        ));
    }

    #[test]
    fn align_case_label_moves_line_and_cursor() {
        let text = "\tswitch x {\n\t\t\tcase 1:\n\t}";
        let position = text.find(':').expect("colon");
        let (aligned, cursor) = align_case_label(text, position, position + 1).expect("aligned");
        assert_eq!(aligned, "\tswitch x {\n\tcase 1:\n\t}");
        assert_eq!(cursor, position - 1);
    }

    #[test]
    fn align_case_label_raises_shallow_label() {
        let text = "\t\tswitch x {\ndefault:";
        let position = text.len() - 1;
        let (aligned, cursor) = align_case_label(text, position, text.len()).expect("aligned");
        assert_eq!(aligned, "\t\tswitch x {\n\t\tdefault:");
        assert_eq!(cursor, aligned.len());
    }

    #[test]
    fn align_case_label_noop_when_level_matches() {
        let text = "switch x {\ncase 1:";
        assert_eq!(align_case_label(text, text.len() - 1, text.len()), None);
    }

    #[test]
    fn align_case_label_without_switch() {
        assert_eq!(align_case_label("\t\tcase:", 6, 7), None);
    }

    #[test]
    fn engine_reports_unbalanced_closer() {
        let result = format_edit("test", EditRange::cursor(4), ")");
        assert_eq!(result.text, "test)");
        assert_eq!(result.warning, Some(EditWarning::UnbalancedCloser(')')));
    }

    #[test]
    fn engine_can_silence_warnings() {
        let settings = EngineSettings { warn_unbalanced_closers: false, ..Default::default() };
        let result = CompletionEngine::new(settings).format_edit("test", EditRange::cursor(4), ")");
        assert_eq!(result.text, "test)");
        assert_eq!(result.warning, None);
    }
}
