//! Error types for textly-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Boundary-validation failures for the analyze-text and process-file
/// operations. Raised before any extraction or analysis work starts.
#[derive(Error, Debug)]
pub enum InputError {
    /// Empty or whitespace-only text.
    #[error("no text provided")]
    Empty,

    /// Text exceeds the configured character limit.
    #[error("text too long: {len} characters (max {max})")]
    TooLong {
        /// Character count of the submitted text.
        len: usize,
        /// Maximum accepted character count.
        max: usize,
    },

    /// Uploaded file exceeds the configured size limit.
    #[error("file too large: {size} bytes (max {max})")]
    FileTooLarge {
        /// Byte size of the upload.
        size: usize,
        /// Maximum accepted byte size.
        max: usize,
    },

    /// File extension is not one of the supported formats.
    #[error("unsupported file type: {extension}. Use TXT, DOCX, or PDF")]
    UnsupportedType {
        /// The extension that was rejected.
        extension: String,
    },

    /// Extraction succeeded but produced only whitespace.
    #[error("no text found in file")]
    NoTextInFile,
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;

/// Errors raised while extracting text from an uploaded document.
///
/// Every extractor failure is converted to one of these at the extraction
/// boundary, carrying a human-readable cause.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The bytes could not be decoded as text.
    #[error("error processing text file: {0}")]
    Txt(String),

    /// The bytes could not be parsed as a word-processing document.
    #[error("error processing DOCX file: {0}")]
    Docx(String),

    /// The bytes could not be parsed as a PDF document.
    #[error("error processing PDF file: {0}")]
    Pdf(String),

    /// PDF extraction was requested but support is switched off.
    #[error("PDF support is not enabled")]
    PdfDisabled,
}

/// Result type alias using [`ExtractionError`].
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Combined failure modes of the process-file operation.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The request was rejected before extraction started.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The document could not be converted to plain text.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Result type alias using [`ProcessError`].
pub type ProcessResult<T> = Result<T, ProcessError>;
