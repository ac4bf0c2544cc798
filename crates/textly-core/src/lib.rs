//! Core library for textly.
//!
//! This crate provides the text-analysis core used by the `textly` CLI and
//! any downstream consumers: tokenization and segmentation, derived
//! statistics (counts, reading/speaking time, keyword density), whitespace
//! and case transformers, and plain-text extraction from uploaded
//! documents.
//!
//! # Modules
//!
//! - [`text`] - Word/sentence/paragraph segmentation with memoized views
//! - [`stats`] - Counts, time estimates, and keyword density
//! - [`transform`] - Whitespace cleanup and case conversion
//! - [`extract`] - TXT/DOCX/PDF text extraction
//! - [`analyze`] - Request-level analyze-text and process-file operations
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textly_core::{Limits, analyze_text};
//!
//! let stats = analyze_text("The dog barks. The dog sleeps.", &Limits::default())
//!     .expect("non-empty text within limits");
//!
//! assert_eq!(stats.word_count, 6);
//! assert_eq!(stats.sentence_count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analyze;
pub mod config;
pub mod error;
pub mod extract;
pub mod stats;
pub mod text;
pub mod transform;

pub use analyze::{
    DEFAULT_MAX_FILE_BYTES, DEFAULT_MAX_TEXT_CHARS, DEFAULT_PREVIEW_CHARS, FileReport, Limits,
    analyze_text, process_file,
};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, ExtractionError, InputError, ProcessError};
pub use extract::FileKind;
pub use stats::{KeywordEntry, TextStats, TimeEstimate};
pub use text::AnalyzedText;
pub use transform::CaseStyle;
