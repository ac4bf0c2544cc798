//! Plain-text extraction from uploaded documents.
//!
//! Each supported format maps raw bytes to plain text, or fails with an
//! [`ExtractionError`] carrying the underlying cause. Dispatch is by file
//! extension; the whole upload is held in memory, so dropping the parsed
//! document on any exit path releases everything.

use crate::error::{ExtractionError, ExtractionResult};

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Plain text (`.txt`).
    Txt,
    /// Word-processing document (`.docx`).
    Docx,
    /// Portable Document Format (`.pdf`).
    Pdf,
}

impl FileKind {
    /// Case-insensitive lookup from a file extension, without the dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Dispatch on the last dot-separated component of `filename`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        filename.rsplit('.').next().and_then(Self::from_extension)
    }

    /// Returns the canonical extension for this format.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract plain text from `bytes` according to `kind`.
#[tracing::instrument(skip(bytes), fields(kind = %kind, size = bytes.len()))]
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> ExtractionResult<String> {
    match kind {
        FileKind::Txt => extract_txt(bytes),
        FileKind::Docx => extract_docx(bytes),
        FileKind::Pdf => extract_pdf(bytes),
    }
}

/// Decode as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback is total and this extractor cannot fail in practice.
fn extract_txt(bytes: &[u8]) -> ExtractionResult<String> {
    std::str::from_utf8(bytes).map_or_else(
        |_| Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        |s| Ok(s.to_string()),
    )
}

/// Parse a DOCX document and join its paragraph texts with newlines.
fn extract_docx(bytes: &[u8]) -> ExtractionResult<String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for para_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }
    Ok(paragraphs.join("\n"))
}

/// Extract PDF text page by page, in document order, joined with newlines.
#[cfg(feature = "pdf")]
fn extract_pdf(bytes: &[u8]) -> ExtractionResult<String> {
    let document =
        lopdf::Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut pages = Vec::new();
    for page_number in document.get_pages().keys() {
        let page_text = document
            .extract_text(&[*page_number])
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        pages.push(page_text);
    }
    Ok(pages.join("\n"))
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_bytes: &[u8]) -> ExtractionResult<String> {
    Err(ExtractionError::PdfDisabled)
}
