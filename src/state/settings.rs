//! Engine settings with persistence.

use serde::{Deserialize, Serialize};

/// Feature toggles for the completion engine.
///
/// A disabled feature turns its edits into plain pass-through insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Keep indentation on new lines, open and close `{` blocks.
    #[serde(default = "default_true")]
    pub auto_indent: bool,
    /// Insert `)` / `]` after a typed `(` / `[`.
    #[serde(default = "default_true")]
    pub close_brackets: bool,
    /// Insert a second `"` after a typed one.
    #[serde(default = "default_true")]
    pub close_quotes: bool,
    /// Move over an existing closer instead of typing a duplicate.
    #[serde(default = "default_true")]
    pub step_over_closers: bool,
    /// Re-indent `case`/`default` labels to their `switch` when `:` is typed.
    #[serde(default = "default_true")]
    pub align_case_labels: bool,
    /// Report closers typed with no opener left to match.
    #[serde(default = "default_true")]
    pub warn_unbalanced_closers: bool,
}

impl EngineSettings {
    /// Every feature off: edits are applied exactly as proposed.
    pub fn raw() -> Self {
        Self {
            auto_indent: false,
            close_brackets: false,
            close_quotes: false,
            step_over_closers: false,
            align_case_labels: false,
            warn_unbalanced_closers: false,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            auto_indent: true,
            close_brackets: true,
            close_quotes: true,
            step_over_closers: true,
            align_case_labels: true,
            warn_unbalanced_closers: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert!(settings.auto_indent);
        assert!(settings.close_brackets);
        assert!(settings.close_quotes);
        assert!(settings.step_over_closers);
        assert!(settings.align_case_labels);
        assert!(settings.warn_unbalanced_closers);
    }

    #[test]
    fn test_missing_fields_default_to_enabled() {
        let settings: EngineSettings =
            serde_json::from_str(r#"{ "close_quotes": false }"#).expect("should deserialize");
        assert!(!settings.close_quotes);
        assert!(settings.auto_indent);
        assert!(settings.align_case_labels);
    }

    #[test]
    fn test_raw_disables_everything() {
        let raw = EngineSettings::raw();
        assert_ne!(raw, EngineSettings::default());
        assert!(!raw.auto_indent && !raw.close_brackets && !raw.close_quotes);
        assert!(!raw.step_over_closers && !raw.align_case_labels && !raw.warn_unbalanced_closers);
    }
}
