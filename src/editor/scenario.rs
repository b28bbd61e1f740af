//! Classifies a proposed edit from the characters around it and the line it
//! lands on. Pure: no editor state, fully testable.

use std::ops::Range;

use crate::helpers::text::{
    SPACES, SPACES_AND_TABS, char_at, char_before, count_in_document, distill, indentation_level,
    line_range, nearest_range_before,
};
use crate::state::settings::EngineSettings;

const SWITCH: &str = "switch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Round,
    Square,
    Curly,
}

impl Bracket {
    pub fn from_open(input: &str) -> Option<Self> {
        match input {
            "(" => Some(Bracket::Round),
            "[" => Some(Bracket::Square),
            "{" => Some(Bracket::Curly),
            _ => None,
        }
    }

    pub fn from_close(input: &str) -> Option<Self> {
        match input {
            ")" => Some(Bracket::Round),
            "]" => Some(Bracket::Square),
            "}" => Some(Bracket::Curly),
            _ => None,
        }
    }

    pub fn open(self) -> &'static str {
        match self {
            Bracket::Round => "(",
            Bracket::Square => "[",
            Bracket::Curly => "{",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Bracket::Round => ")",
            Bracket::Square => "]",
            Bracket::Curly => "}",
        }
    }
}

/// What kind of edit the user is making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Inserted as typed.
    Normal,
    /// `\n` that keeps the current indentation.
    NewLine,
    /// `\n` after an unmatched `{`: indented line plus a new `}`.
    NewLineAfterCurlyBrace,
    /// `\n` between `{` and `}`.
    NewLineBetweenCurlyBraces,
    /// `\n` after `{` when the document already closes every brace.
    NewLineAfterCurlyBraceAlreadyClosed,
    /// Switch variants keep `case` labels level with the `switch`.
    NewLineAfterCurlyBraceAfterSwitch,
    NewLineBetweenCurlyBracesAfterSwitch,
    NewLineAfterCurlyBraceAlreadyClosedAfterSwitch,
    /// `\n` after `case …:` or `default:`.
    NewLineAfterColonAfterCaseOrDefault,
    /// `:` completing a `case`/`default` label inside a `switch`.
    ColonAfterCaseOrDefault,
    OpenRoundBracket,
    OpenSquareBracket,
    /// A closer typed right before the same closer: step over it.
    ClosedBracketBeforeClosedBracket(Bracket),
    QuotationMark,
    QuotationMarkBeforeQuotationMark,
}

/// Everything the classifier reads about the document around an edit.
#[derive(Debug, Clone)]
pub struct EditContext<'a> {
    pub text: &'a str,
    /// Replaced range, in bytes.
    pub edit: Range<usize>,
    /// Character before the edit, spaces skipped.
    pub previous: Option<&'a str>,
    /// Character before the edit, spaces and tabs skipped.
    pub previous_significant: Option<&'a str>,
    /// Character after the edit, spaces skipped.
    pub next: Option<&'a str>,
    /// Character directly after the edit.
    pub next_adjacent: Option<&'a str>,
    /// Line around the start of the edit, whitespace removed.
    pub distilled_line: String,
    /// Leading tabs of the line around the start of the edit.
    pub indentation: usize,
}

impl<'a> EditContext<'a> {
    pub fn new(text: &'a str, edit: Range<usize>) -> Self {
        let line = line_range(text, edit.start);
        Self {
            text,
            previous: char_before(text, edit.start, SPACES),
            previous_significant: char_before(text, edit.start, SPACES_AND_TABS),
            next: char_at(text, edit.end, SPACES),
            next_adjacent: char_at(text, edit.end, &[]),
            distilled_line: text.get(line.clone()).map(distill).unwrap_or_default(),
            indentation: indentation_level(text, line),
            edit,
        }
    }

    fn count(&self, needle: &str) -> usize {
        count_in_document(self.text, needle)
    }

    /// The line opens a `switch` block (a bare `switch{` does not count).
    fn opens_switch(&self) -> bool {
        self.distilled_line.starts_with(SWITCH) && self.distilled_line != "switch{"
    }

    /// The line is a finished `case …:` or `default:` label.
    fn is_finished_case_label(&self) -> bool {
        let line = self.distilled_line.as_str();
        (line.starts_with("case") && line != "case:") || line == "default:"
    }

    /// The line is a `case`/`default` label still waiting for its colon.
    fn is_open_case_label(&self) -> bool {
        let line = self.distilled_line.as_str();
        line.starts_with("case") || line == "default"
    }

    fn follows_switch(&self) -> bool {
        nearest_range_before(self.text, SWITCH, self.edit.start).is_some()
    }

    fn can_step_over(&self, closer: &str) -> bool {
        self.edit.is_empty() && self.next_adjacent == Some(closer)
    }
}

/// Pick the scenario for typing `input` over `ctx.edit`. First match wins.
pub fn classify(input: &str, ctx: &EditContext<'_>, settings: &EngineSettings) -> Scenario {
    match input {
        "\n" if settings.auto_indent => classify_new_line(ctx),
        ":" if settings.align_case_labels
            && ctx.is_open_case_label()
            && ctx.follows_switch() =>
        {
            Scenario::ColonAfterCaseOrDefault
        }
        "(" | "[" if settings.close_brackets => {
            let Some(bracket) = Bracket::from_open(input) else {
                return Scenario::Normal;
            };
            if ctx.count(bracket.open()) < ctx.count(bracket.close()) {
                return Scenario::Normal;
            }
            match bracket {
                Bracket::Square => Scenario::OpenSquareBracket,
                _ => Scenario::OpenRoundBracket,
            }
        }
        ")" | "]" | "}" if settings.step_over_closers => {
            let Some(bracket) = Bracket::from_close(input) else {
                return Scenario::Normal;
            };
            if ctx.can_step_over(input) && ctx.count(bracket.open()) <= ctx.count(bracket.close())
            {
                Scenario::ClosedBracketBeforeClosedBracket(bracket)
            } else {
                Scenario::Normal
            }
        }
        "\"" => classify_quotation_mark(ctx, settings),
        _ => Scenario::Normal,
    }
}

fn classify_new_line(ctx: &EditContext<'_>) -> Scenario {
    if ctx.previous == Some("{") {
        let between = ctx.next == Some("}");
        let already_closed = ctx.count("}") >= ctx.count("{");
        return match (ctx.opens_switch(), between, already_closed) {
            (false, true, _) => Scenario::NewLineBetweenCurlyBraces,
            (false, false, true) => Scenario::NewLineAfterCurlyBraceAlreadyClosed,
            (false, false, false) => Scenario::NewLineAfterCurlyBrace,
            (true, true, _) => Scenario::NewLineBetweenCurlyBracesAfterSwitch,
            (true, false, true) => Scenario::NewLineAfterCurlyBraceAlreadyClosedAfterSwitch,
            (true, false, false) => Scenario::NewLineAfterCurlyBraceAfterSwitch,
        };
    }

    if ctx.previous_significant == Some(":") && ctx.is_finished_case_label() {
        return Scenario::NewLineAfterColonAfterCaseOrDefault;
    }

    Scenario::NewLine
}

fn classify_quotation_mark(ctx: &EditContext<'_>, settings: &EngineSettings) -> Scenario {
    // An odd count means the typed mark closes an open string.
    if ctx.count("\"") % 2 != 0 {
        return Scenario::Normal;
    }
    if settings.step_over_closers && ctx.can_step_over("\"") {
        return Scenario::QuotationMarkBeforeQuotationMark;
    }
    if settings.close_quotes {
        return Scenario::QuotationMark;
    }
    Scenario::Normal
}

/// The closer typed by `input` has no opener left to match.
///
/// Only reported for closers that were not stepped over.
pub fn unbalanced_closer(input: &str, ctx: &EditContext<'_>, scenario: Scenario) -> Option<char> {
    if matches!(scenario, Scenario::ClosedBracketBeforeClosedBracket(_)) {
        return None;
    }
    let bracket = Bracket::from_close(input)?;
    if ctx.count(bracket.close()) < ctx.count(bracket.open()) {
        return None;
    }
    input.chars().next()
}
