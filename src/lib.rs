//! alpine-answers Library
//!
//! Loader and validator for `setup-alpine` answer files: line-oriented
//! `KEY="value"` documents that pre-seed an otherwise interactive installer.
//! The library parses a document into an ordered option mapping, validates it
//! against the closed set of keys the installer recognizes, and re-emits the
//! mapping as a document, JSON, or shell environment assignments.

pub mod answerfile;
pub mod cli;
pub mod error;
pub mod options;
pub mod shell;
pub mod template;

// Re-export main types for convenience
pub use answerfile::{AnswerFile, Entry};
pub use error::{AnswerFileError, ParseError, Result};
pub use options::{InstallerOption, Warning};
