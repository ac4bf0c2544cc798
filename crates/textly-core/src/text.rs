//! Tokenization and segmentation.
//!
//! Splits raw text into words, sentences, and paragraphs for the metrics
//! calculator. [`AnalyzedText`] wraps an input string and memoizes each
//! view on first access; the free functions do the actual splitting.

use regex::Regex;
use std::sync::{LazyLock, OnceLock};

/// Regex for a maximal run of word characters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Regex for sentence-ending punctuation runs.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Regex for blank-line paragraph separators.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// An immutable input string with lazily computed derived views.
///
/// Words, sentences, and paragraphs are each computed once on first access
/// and cached for the lifetime of the instance. The instance is otherwise
/// read-only; it holds no other state.
#[derive(Debug)]
pub struct AnalyzedText {
    text: String,
    words: OnceLock<Vec<String>>,
    sentences: OnceLock<Vec<String>>,
    paragraphs: OnceLock<Vec<String>>,
}

impl AnalyzedText {
    /// Wrap `text` for analysis. No work happens until a view is requested.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            words: OnceLock::new(),
            sentences: OnceLock::new(),
            paragraphs: OnceLock::new(),
        }
    }

    /// The original input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased words, in order of appearance.
    pub fn words(&self) -> &[String] {
        self.words.get_or_init(|| extract_words(&self.text))
    }

    /// Trimmed sentences, split at `.`/`!`/`?` runs.
    pub fn sentences(&self) -> &[String] {
        self.sentences.get_or_init(|| split_sentences(&self.text))
    }

    /// Trimmed paragraphs, split at blank lines.
    pub fn paragraphs(&self) -> &[String] {
        self.paragraphs.get_or_init(|| split_paragraphs(&self.text))
    }
}

/// Extract words from text: case-folded, word-character runs only.
///
/// Punctuation, symbols, and whitespace are separators and are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences at every run of `.`, `!`, or `?`.
///
/// Segments keep their internal line breaks; each is trimmed and empty
/// segments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Split text into paragraphs separated by blank lines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text.trim())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn extract_words_keeps_digits_and_underscores() {
        let words = extract_words("version 2 of snake_case");
        assert_eq!(words, vec!["version", "2", "of", "snake_case"]);
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "This is a sentence");
        assert_eq!(sentences[1], "This is another sentence");
    }

    #[test]
    fn punctuation_runs_split_once() {
        let sentences = split_sentences("Are you serious?! I can't believe it... Amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn sentences_keep_internal_line_breaks() {
        let sentences = split_sentences("First half\ncontinues here. Second.");
        assert_eq!(sentences[0], "First half\ncontinues here");
    }

    #[test]
    fn split_paragraphs_basic() {
        let text = "First paragraph.\n\nSecond paragraph.\n\nThird.";
        let paras = split_paragraphs(text);
        assert_eq!(paras.len(), 3);
    }

    #[test]
    fn blank_lines_with_whitespace_still_separate() {
        let paras = split_paragraphs("one\n   \ntwo");
        assert_eq!(paras, vec!["one", "two"]);
    }

    #[test]
    fn empty_input() {
        assert!(extract_words("").is_empty());
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs(" \n \n ").is_empty());
    }

    #[test]
    fn views_are_memoized_and_deterministic() {
        let doc = AnalyzedText::new("One two. Three!");
        let first = doc.words().as_ptr();
        let second = doc.words().as_ptr();
        assert_eq!(first, second);
        assert_eq!(doc.words().len(), 3);
        assert_eq!(doc.sentences().len(), 2);
    }

    #[test]
    fn word_count_matches_extracted_words() {
        let text = "The quick brown fox jumps over the lazy dog. The dog barks.";
        let doc = AnalyzedText::new(text);
        assert_eq!(doc.words().len(), extract_words(text).len());
        assert_eq!(doc.words().len(), 12);
    }
}
