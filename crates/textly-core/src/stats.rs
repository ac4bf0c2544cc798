//! Derived text metrics: counts, time estimates, and keyword density.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::AnalyzedText;

/// Average reading speed, in words per minute.
const READING_WPM: usize = 225;

/// Average speaking speed, in words per minute.
const SPEAKING_WPM: usize = 155;

/// Minimum word length considered for keyword density.
const MIN_KEYWORD_LEN: usize = 3;

/// Number of keyword entries reported.
const TOP_KEYWORDS: usize = 10;

/// Common English words excluded from keyword density.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this", "but",
        "they", "have", "had", "what", "said", "each", "which", "she", "do", "how", "their", "if",
        "up", "out", "many", "then", "them", "these", "so", "some", "her", "would", "make", "like",
        "into", "him", "time", "two", "more", "go", "no", "way", "could", "my", "than", "first",
        "been", "call", "who", "now", "find", "long", "down", "day", "did", "get", "come", "made",
        "may", "part",
    ]
    .into_iter()
    .collect()
});

/// A duration estimate in whole minutes and seconds.
///
/// `minutes` is `ceil(word_count / wpm)`, so it is zero only for empty
/// input; `seconds` is computed only in that case and is otherwise zero.
/// This matches the historical behavior downstream consumers rely on —
/// whole-minute texts report zero seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeEstimate {
    /// Whole minutes, rounded up.
    pub minutes: u64,
    /// Remainder seconds; only nonzero when `minutes` is zero.
    pub seconds: u64,
}

/// One entry in the keyword density ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordEntry {
    /// The (lowercased) word.
    pub word: String,
    /// Occurrences among the filtered words.
    pub count: usize,
    /// Share of the filtered words, as a percentage rounded to 2 decimals.
    pub density: f64,
}

/// Full statistics derived from one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of words.
    pub word_count: usize,
    /// Number of characters, including whitespace.
    pub character_count: usize,
    /// Number of characters with literal spaces removed.
    pub character_count_no_spaces: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Estimated silent reading time.
    pub reading_time: TimeEstimate,
    /// Estimated speaking time.
    pub speaking_time: TimeEstimate,
    /// Top keywords by frequency, at most ten entries.
    pub keyword_density: Vec<KeywordEntry>,
}

impl TextStats {
    /// Compute all statistics from an [`AnalyzedText`].
    #[tracing::instrument(skip_all, fields(text_len = doc.text().len()))]
    pub fn from_analyzed(doc: &AnalyzedText) -> Self {
        let words = doc.words();
        let text = doc.text();

        Self {
            word_count: words.len(),
            character_count: text.chars().count(),
            character_count_no_spaces: text.chars().filter(|&c| c != ' ').count(),
            sentence_count: doc.sentences().len(),
            paragraph_count: doc.paragraphs().len(),
            reading_time: reading_time(words.len()),
            speaking_time: speaking_time(words.len()),
            keyword_density: keyword_density(words),
        }
    }
}

/// Estimate silent reading time at 225 words per minute.
pub fn reading_time(word_count: usize) -> TimeEstimate {
    time_estimate(word_count, READING_WPM)
}

/// Estimate speaking time at 155 words per minute.
pub fn speaking_time(word_count: usize) -> TimeEstimate {
    time_estimate(word_count, SPEAKING_WPM)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn time_estimate(word_count: usize, wpm: usize) -> TimeEstimate {
    let exact_minutes = word_count as f64 / wpm as f64;
    let minutes = exact_minutes.ceil() as u64;
    // Seconds only when the rounded minutes are zero; see TimeEstimate docs.
    let seconds = if minutes == 0 {
        ((exact_minutes * 60.0).ceil() as u64) % 60
    } else {
        0
    };
    TimeEstimate { minutes, seconds }
}

/// Rank keywords by frequency among the filtered words.
///
/// Words shorter than three characters and [`STOPWORDS`] are excluded.
/// Ties keep first-encountered order. Returns at most ten entries; density
/// is each word's share of the filtered total, rounded to 2 decimals.
pub fn keyword_density(words: &[String]) -> Vec<KeywordEntry> {
    let filtered: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN && !STOPWORDS.contains(w))
        .collect();

    if filtered.is_empty() {
        return Vec::new();
    }
    let total = filtered.len();

    // Count in first-encounter order so the stable sort below preserves it
    // for equal counts.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for word in filtered {
        if let Some(&i) = index.get(word) {
            counts[i].1 += 1;
        } else {
            index.insert(word, counts.len());
            counts.push((word, 1));
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(word, count)| KeywordEntry {
            word: word.to_string(),
            count,
            density: round2(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
