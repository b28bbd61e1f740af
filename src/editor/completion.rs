//! Builds the text that replaces a proposed edit, given its scenario.

use crate::helpers::text::tabs;

use super::scenario::Scenario;

/// Replacement text and the cursor offset from the start of the edit, in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub insertion: String,
    pub cursor_offset: usize,
}

impl Completion {
    /// Cursor lands after the whole insertion.
    fn cursor_at_end(insertion: String) -> Self {
        let cursor_offset = insertion.len();
        Self { insertion, cursor_offset }
    }
}

impl Scenario {
    /// Completion for typing `input` on a line indented by `indentation` tabs.
    pub fn complete(self, input: &str, indentation: usize) -> Completion {
        let n = indentation;
        match self {
            Scenario::Normal | Scenario::ColonAfterCaseOrDefault => {
                Completion::cursor_at_end(input.to_string())
            }
            Scenario::NewLine | Scenario::NewLineAfterCurlyBraceAlreadyClosedAfterSwitch => {
                Completion::cursor_at_end(format!("{input}{}", tabs(n)))
            }
            Scenario::NewLineAfterCurlyBraceAlreadyClosed
            | Scenario::NewLineAfterColonAfterCaseOrDefault => {
                Completion::cursor_at_end(format!("{input}{}", tabs(n + 1)))
            }
            Scenario::NewLineAfterCurlyBrace => Completion {
                insertion: format!("{input}{}\n{}}}", tabs(n + 1), tabs(n)),
                cursor_offset: input.len() + n + 1,
            },
            Scenario::NewLineBetweenCurlyBraces => Completion {
                insertion: format!("{input}{}\n{}", tabs(n + 1), tabs(n)),
                cursor_offset: input.len() + n + 1,
            },
            Scenario::NewLineAfterCurlyBraceAfterSwitch => Completion {
                insertion: format!("{input}{}\n{}}}", tabs(n), tabs(n)),
                cursor_offset: input.len() + n,
            },
            Scenario::NewLineBetweenCurlyBracesAfterSwitch => Completion {
                insertion: format!("{input}{}\n{}", tabs(n), tabs(n)),
                cursor_offset: input.len() + n,
            },
            Scenario::OpenRoundBracket => {
                Completion { insertion: format!("{input})"), cursor_offset: input.len() }
            }
            Scenario::OpenSquareBracket => {
                Completion { insertion: format!("{input}]"), cursor_offset: input.len() }
            }
            Scenario::QuotationMark => {
                Completion { insertion: format!("{input}\""), cursor_offset: input.len() }
            }
            Scenario::ClosedBracketBeforeClosedBracket(_)
            | Scenario::QuotationMarkBeforeQuotationMark => {
                Completion { insertion: String::new(), cursor_offset: input.len() }
            }
        }
    }
}
