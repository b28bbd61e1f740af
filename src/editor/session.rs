use crate::error::Result;
use crate::helpers::diff::changed_span;
use crate::helpers::offsets::utf16_len;

use super::format::{CompletionEngine, EditRange, EditWarning, FormattedEdit};
use super::scenario::Scenario;

/// What an applied edit did, beyond the new text and cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedEdit {
    pub scenario: Scenario,
    pub warning: Option<EditWarning>,
}

/// Host-side buffer: owns the text and selection and routes every edit through
/// the completion engine.
#[derive(Debug, Clone)]
pub struct EditorSession {
    engine: CompletionEngine,
    text: String,
    selection: EditRange,
}

impl EditorSession {
    /// New session with the cursor at the end of `initial_text`.
    pub fn new(initial_text: &str) -> Self {
        Self::with_engine(CompletionEngine::default(), initial_text)
    }

    pub fn with_engine(engine: CompletionEngine, initial_text: &str) -> Self {
        Self {
            engine,
            text: initial_text.to_string(),
            selection: EditRange::cursor(utf16_len(initial_text)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> EditRange {
        self.selection
    }

    pub fn engine(&self) -> &CompletionEngine {
        &self.engine
    }

    /// Move the selection. Rejects ranges that do not fit the text.
    pub fn select(&mut self, range: EditRange) -> Result<()> {
        range.to_byte_range_checked(&self.text)?;
        self.selection = range;
        Ok(())
    }

    /// Replace `range` with `proposed`, letting the engine complete it.
    pub fn apply_edit(&mut self, range: EditRange, proposed: &str) -> Result<AppliedEdit> {
        range.to_byte_range_checked(&self.text)?;
        log::trace!("Applying {:?} at {:?}", proposed, range);

        let FormattedEdit { text, cursor, scenario, warning } =
            self.engine.format_edit(&self.text, range, proposed);
        self.text = text;
        self.selection = cursor;
        Ok(AppliedEdit { scenario, warning })
    }

    /// Type `proposed` over the current selection.
    pub fn type_text(&mut self, proposed: &str) -> Result<AppliedEdit> {
        self.apply_edit(self.selection, proposed)
    }

    /// Call for hosts that only report the text after a change. Returns the
    /// applied edit, or `None` when nothing changed.
    ///
    /// The change is derived by diffing against the tracked text and then replayed
    /// through the engine against that previous snapshot.
    pub fn observe_change(&mut self, current: &str) -> Option<AppliedEdit> {
        let change = changed_span(&self.text, current)?;
        let proposed = current.get(change.inserted)?.to_string();
        let range = EditRange::from_byte_range(&self.text, change.replaced);
        self.apply_edit(range, &proposed).ok()
    }

    /// Sync tracked text after external changes (reload, undo, etc.)
    pub fn sync(&mut self, text: &str) {
        self.text = text.to_string();
        if self.selection.to_byte_range(text).is_none() {
            self.selection = EditRange::cursor(utf16_len(text));
        }
    }
}
