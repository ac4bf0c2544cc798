//! Request-level operations: analyze-text and process-file.
//!
//! These wrap the analysis core with the boundary validation a delivery
//! surface needs: length and size limits, extension dispatch, and preview
//! truncation. The core itself never fails on analysis input; every
//! rejection happens here, before analysis starts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExtractionError, InputError, InputResult, ProcessResult};
use crate::extract::{self, FileKind};
use crate::stats::TextStats;
use crate::text::AnalyzedText;

/// Default maximum accepted text length, in characters.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 50_000;

/// Default maximum accepted upload size, in bytes (5 MiB).
pub const DEFAULT_MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Default length of the extracted-text preview, in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 10_000;

/// Boundary limits applied before the analysis core is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum text length for [`analyze_text`], in characters.
    pub max_text_chars: usize,
    /// Maximum upload size for [`process_file`], in bytes.
    pub max_file_bytes: usize,
    /// Preview truncation length, in characters.
    pub preview_chars: usize,
    /// Whether PDF extraction is available.
    pub pdf_enabled: bool,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            pdf_enabled: cfg!(feature = "pdf"),
        }
    }
}

/// Result of processing one uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileReport {
    /// The original filename.
    pub filename: String,
    /// Extracted text, truncated for preview display.
    pub text: String,
    /// Statistics computed over the full (untruncated) extracted text.
    pub stats: TextStats,
}

/// Analyze a text submission.
///
/// The text is trimmed first; empty or oversized submissions are rejected
/// without touching the analysis core.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_text(text: &str, limits: &Limits) -> InputResult<TextStats> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let len = trimmed.chars().count();
    if len > limits.max_text_chars {
        return Err(InputError::TooLong {
            len,
            max: limits.max_text_chars,
        });
    }

    debug!(chars = len, "analyzing text");
    Ok(TextStats::from_analyzed(&AnalyzedText::new(trimmed)))
}

/// Process an uploaded file: validate, extract, analyze.
///
/// Statistics cover the full extracted text; only the returned preview is
/// truncated to [`Limits::preview_chars`] characters.
#[tracing::instrument(skip(bytes), fields(size = bytes.len()))]
pub fn process_file(filename: &str, bytes: &[u8], limits: &Limits) -> ProcessResult<FileReport> {
    if bytes.len() > limits.max_file_bytes {
        return Err(InputError::FileTooLarge {
            size: bytes.len(),
            max: limits.max_file_bytes,
        }
        .into());
    }

    let kind = FileKind::from_filename(filename).ok_or_else(|| InputError::UnsupportedType {
        extension: extension_of(filename),
    })?;

    if kind == FileKind::Pdf && !limits.pdf_enabled {
        return Err(ExtractionError::PdfDisabled.into());
    }

    let text = extract::extract_text(kind, bytes)?;
    if text.trim().is_empty() {
        return Err(InputError::NoTextInFile.into());
    }

    debug!(kind = %kind, extracted_chars = text.chars().count(), "file extracted");
    let stats = TextStats::from_analyzed(&AnalyzedText::new(text.as_str()));
    let preview: String = text.chars().take(limits.preview_chars).collect();

    Ok(FileReport {
        filename: filename.to_string(),
        text: preview,
        stats,
    })
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessError;

    #[test]
    fn analyze_rejects_empty_and_whitespace() {
        let limits = Limits::default();
        assert!(matches!(analyze_text("", &limits), Err(InputError::Empty)));
        assert!(matches!(analyze_text("  \n ", &limits), Err(InputError::Empty)));
    }

    #[test]
    fn analyze_rejects_oversized_text() {
        let limits = Limits::default();
        let text = "a".repeat(DEFAULT_MAX_TEXT_CHARS + 1);
        assert!(matches!(
            analyze_text(&text, &limits),
            Err(InputError::TooLong { len: 50_001, .. })
        ));
    }

    #[test]
    fn analyze_accepts_text_at_the_limit() {
        let limits = Limits::default();
        let text = "a ".repeat(DEFAULT_MAX_TEXT_CHARS / 2);
        let stats = analyze_text(&text, &limits).unwrap();
        // Trailing space is trimmed before counting.
        assert_eq!(stats.character_count, DEFAULT_MAX_TEXT_CHARS - 1);
    }

    #[test]
    fn analyze_runs_are_deterministic() {
        let limits = Limits::default();
        let first = analyze_text("One fish, two fish.", &limits).unwrap();
        let second = analyze_text("One fish, two fish.", &limits).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn process_rejects_oversized_file() {
        let limits = Limits {
            max_file_bytes: 8,
            ..Limits::default()
        };
        let err = process_file("big.txt", b"123456789", &limits).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Input(InputError::FileTooLarge { size: 9, max: 8 })
        ));
    }

    #[test]
    fn process_rejects_unknown_extension() {
        let err = process_file("notes.rtf", b"hello", &Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Input(InputError::UnsupportedType { .. })
        ));
        assert!(err.to_string().contains("Use TXT, DOCX, or PDF"));
    }

    #[test]
    fn process_rejects_empty_extraction() {
        let err = process_file("blank.txt", b"   \n  ", &Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Input(InputError::NoTextInFile)
        ));
    }

    #[test]
    fn process_txt_reports_full_stats_and_preview() {
        let limits = Limits {
            preview_chars: 5,
            ..Limits::default()
        };
        let report = process_file("essay.txt", b"Hello brave new world", &limits).unwrap();
        assert_eq!(report.filename, "essay.txt");
        assert_eq!(report.text, "Hello");
        // Stats cover the untruncated text.
        assert_eq!(report.stats.word_count, 4);
    }

    #[test]
    fn process_corrupt_docx_surfaces_extraction_error() {
        let err = process_file("broken.docx", b"not really a docx", &Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Extraction(ExtractionError::Docx(_))
        ));
    }

    #[test]
    fn process_pdf_rejected_when_disabled() {
        let limits = Limits {
            pdf_enabled: false,
            ..Limits::default()
        };
        let err = process_file("doc.pdf", b"%PDF-1.4", &limits).unwrap_err();
        assert_eq!(err.to_string(), "PDF support is not enabled");
    }
}
