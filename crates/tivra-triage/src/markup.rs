// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Markup removal for raw model replies.
//!
//! Replies may embed a `<think>...</think>` reasoning block and arbitrary
//! other pseudo-HTML tags. Both are stripped before any matching runs. The
//! two passes stay separate: the thinking pass removes whole delimited
//! blocks, the tag pass removes remaining bare tags, and an unterminated
//! `<think>` never swallows the rest of the reply.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a complete `<think>...</think>` block, non-greedy, across lines.
static THINKING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").unwrap());

/// Matches a single angle-bracket tag with no nested brackets.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]+>").unwrap());

/// Removes every complete `<think>...</think>` block, content included.
///
/// A `<think>` with no matching close is left in place; its content survives
/// for the later stages to inspect.
pub fn strip_thinking(text: &str) -> String {
    THINKING_RE.replace_all(text, "").into_owned()
}

/// Removes every remaining angle-bracket tag token.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Strips thinking blocks, then bare tags, then surrounding whitespace.
pub fn strip_markup(text: &str) -> String {
    strip_tags(&strip_thinking(text)).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_thinking_block() {
        assert_eq!(
            strip_thinking("<think>some reasoning</think>Urgent"),
            "Urgent"
        );
    }

    #[test]
    fn strips_multiline_thinking_block() {
        let input = "<think>line one\nline two\nline three</think>\nRoutine";
        assert_eq!(strip_thinking(input), "\nRoutine");
    }

    #[test]
    fn strips_every_thinking_block() {
        let input = "<think>a</think>mid<think>b</think>end";
        assert_eq!(strip_thinking(input), "midend");
    }

    #[test]
    fn unterminated_thinking_block_is_not_consumed() {
        let input = "<think>no close tag here, urgent";
        assert_eq!(strip_thinking(input), input);
    }

    #[test]
    fn thinking_pass_is_non_greedy() {
        // Only up to the first close marker goes; the dangling close is a
        // bare tag for the second pass.
        let input = "<think>outer<think>inner</think>tail</think>ok";
        assert_eq!(strip_thinking(input), "tail</think>ok");
        assert_eq!(strip_markup(input), "tailok");
    }

    #[test]
    fn strips_generic_tags() {
        assert_eq!(strip_tags("<b>moderate</b>"), "moderate");
        assert_eq!(strip_tags("a <br/> b"), "a  b");
    }

    #[test]
    fn bracket_without_close_is_left_alone() {
        assert_eq!(strip_tags("value < threshold"), "value < threshold");
        assert_eq!(strip_tags("<think with no close bracket"), "<think with no close bracket");
    }

    #[test]
    fn strip_markup_trims_whitespace() {
        assert_eq!(strip_markup("<think>cold, probably</think>\n  Urgent  "), "Urgent");
    }

    #[test]
    fn strip_markup_handles_empty_input() {
        assert_eq!(strip_markup(""), "");
        assert_eq!(strip_markup("<think>only markup</think>"), "");
    }
}
