//! Test fixtures for integration tests.

#![allow(dead_code)]

/// Lines with `levels[i]` leading tabs each, joined by newlines.
pub fn indented_lines(levels: &[usize], body: &str) -> String {
    levels
        .iter()
        .map(|&level| format!("{}{}", "\t".repeat(level), body))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A switch block at `switch_level` holding one unfinished `label` at `label_level`,
/// followed by the closing brace line.
pub fn switch_with_label(switch_level: usize, label_level: usize, label: &str) -> String {
    format!(
        "{}switch value {{\n{}{}\n{}}}",
        "\t".repeat(switch_level),
        "\t".repeat(label_level),
        label,
        "\t".repeat(switch_level)
    )
}

/// Documents with balanced `(`/`)` counts.
pub const BALANCED_ROUND: &[&str] = &["", "test", "f(x)", "a(b(c)) + d()", "()\n\t(())"];

/// Characters no completion rule reacts to.
pub const PLAIN_INPUTS: &[&str] = &["a", "Z", "7", " ", "\t", ";", ",", ".", "é", "😀", "let x"];
