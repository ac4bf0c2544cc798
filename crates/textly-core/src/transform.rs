//! Whitespace cleanup and case conversion.
//!
//! Pure, stateless functions over strings. Nothing here fails: every input
//! string maps to an output string.

use regex::Regex;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Regex for runs of spaces and tabs.
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Regex for three or more line breaks, with optional interleaved whitespace.
static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("valid regex"));

/// Regex for sentence-ending punctuation runs.
static SENTENCE_DELIMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Available case conversion styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CaseStyle {
    /// ALL UPPERCASE.
    Upper,
    /// all lowercase.
    Lower,
    /// First Letter Of Every Word.
    Title,
    /// First letter of every sentence.
    Sentence,
}

impl CaseStyle {
    /// Returns the style name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Title => "title",
            Self::Sentence => "sentence",
        }
    }

    /// Apply this conversion to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Upper => to_upper(text),
            Self::Lower => to_lower(text),
            Self::Title => to_title(text),
            Self::Sentence => to_sentence(text),
        }
    }
}

impl std::fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize whitespace.
///
/// Collapses runs of spaces/tabs to a single space, collapses three or
/// more consecutive line breaks to exactly two, trims every line, and
/// trims the result. Idempotent.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn remove_extra_spaces(text: &str) -> String {
    let collapsed = SPACE_RUN.replace_all(text, " ");
    let collapsed = EXCESS_BLANK_LINES.replace_all(&collapsed, "\n\n");
    let lines: Vec<&str> = collapsed.lines().map(str::trim).collect();
    lines.join("\n").trim().to_string()
}

/// Convert to uppercase.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Convert to lowercase.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Convert to Title Case.
///
/// Capitalizes the first letter of every whitespace-delimited word and
/// lowercases the rest, preserving the original whitespace.
pub fn to_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Convert to Sentence case.
///
/// Splits at `.`/`!`/`?` runs, keeping the delimiters. Each text segment is
/// trimmed, its first character uppercased, and the remainder lowercased
/// (single-character segments are fully uppercased). Segments and
/// delimiters are concatenated back in their original order.
pub fn to_sentence(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for delim in SENTENCE_DELIMS.find_iter(text) {
        out.push_str(&capitalize_segment(&text[last..delim.start()]));
        out.push_str(delim.as_str());
        last = delim.end();
    }
    out.push_str(&capitalize_segment(&text[last..]));
    out
}

fn capitalize_segment(segment: &str) -> String {
    let segment = segment.trim();
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        let rest = chars.as_str();
        let mut result: String = first.to_uppercase().collect();
        result.push_str(&rest.to_lowercase());
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_tabs() {
        assert_eq!(remove_extra_spaces("hello   world\t\tfoo"), "hello world foo");
    }

    #[test]
    fn collapses_excess_blank_lines_to_one() {
        assert_eq!(remove_extra_spaces("line1\n\n\n\nline2"), "line1\n\nline2");
    }

    #[test]
    fn trims_every_line_and_the_whole_string() {
        assert_eq!(remove_extra_spaces("  a  \n  b  "), "a\nb");
        assert_eq!(remove_extra_spaces("  a \n\n b  "), "a\n\nb");
    }

    #[test]
    fn whitespace_only_blank_lines_collapse() {
        assert_eq!(remove_extra_spaces("a\n \n \n \nb"), "a\n\nb");
    }

    #[test]
    fn remove_extra_spaces_is_idempotent() {
        for input in ["  a  b \n\n\n c ", "x\t y\n \n \nz", "", "   ", "one\ntwo"] {
            let once = remove_extra_spaces(input);
            assert_eq!(remove_extra_spaces(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn upper_and_lower() {
        assert_eq!(to_upper("Hello, World!"), "HELLO, WORLD!");
        assert_eq!(to_lower("Hello, World!"), "hello, world!");
    }

    #[test]
    fn case_round_trip() {
        let s = "MiXeD Case Input";
        assert_eq!(to_upper(&to_lower(s)), to_upper(s));
    }

    #[test]
    fn title_case_per_whitespace_word() {
        assert_eq!(to_title("hello world"), "Hello World");
        assert_eq!(to_title("DON'T shout"), "Don't Shout");
        assert_eq!(to_title("two  spaces"), "Two  Spaces");
    }

    #[test]
    fn sentence_case_capitalizes_each_sentence() {
        assert_eq!(to_sentence("hello. world"), "Hello.World");
        assert_eq!(to_sentence("WHAT?! yes"), "What?!Yes");
    }

    #[test]
    fn sentence_case_single_char_segment() {
        assert_eq!(to_sentence("a. b"), "A.B");
    }

    #[test]
    fn sentence_case_trailing_delimiter() {
        assert_eq!(to_sentence("done."), "Done.");
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(remove_extra_spaces(""), "");
        assert_eq!(to_title(""), "");
        assert_eq!(to_sentence(""), "");
    }

    #[test]
    fn styles_apply() {
        assert_eq!(CaseStyle::Upper.apply("hi"), "HI");
        assert_eq!(CaseStyle::Title.apply("hi there"), "Hi There");
        assert_eq!(CaseStyle::Sentence.as_str(), "sentence");
    }
}
