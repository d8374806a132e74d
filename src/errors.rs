//! Error types for reading a puzzle, with error codes and helpful messages.
//!
//! Every variant here means the puzzle is malformed: it is rejected before a
//! model is built and before any search step runs.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E005) for documentation lookup:
//!
//! - E001: `WrongWordCount` (Not exactly three words)
//! - E002: `EmptyWord` (A word with no letters)
//! - E003: `InvalidLetter` (Character outside A-Z)
//! - E004: `WordTooLong` (Word exceeds the supported length)
//! - E005: `InvalidEquation` (Equation text could not be parsed)
//!
//! # Examples
//!
//! ```
//! use cryptarith::errors::ParseError;
//! use cryptarith::puzzle::Puzzle;
//!
//! match Puzzle::new(&["SEND", "MORE"]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(*e, ParseError::WrongWordCount { found: 2 }));
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

use nom::error::{ErrorKind, ParseError as NomParseError};

/// Custom error type for malformed puzzles
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected exactly 3 words (addend, addend, sum), found {found}")]
    WrongWordCount { found: usize },

    #[error("word {index} is empty")]
    EmptyWord { index: usize },

    #[error("word \"{word}\" contains invalid character '{invalid_char}' (only A-Z allowed)")]
    InvalidLetter { word: String, invalid_char: char },

    #[error("word \"{word}\" has {len} letters (maximum {max})")]
    WordTooLong { word: String, len: usize, max: usize },

    #[error("cannot parse equation \"{input}\": {reason}")]
    InvalidEquation { input: String, reason: String },
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::InvalidEquation {
            input: input.to_string(),
            reason: format!("{kind:?}"),
        })
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::WrongWordCount { .. } => "E001",
            ParseError::EmptyWord { .. } => "E002",
            ParseError::InvalidLetter { .. } => "E003",
            ParseError::WordTooLong { .. } => "E004",
            ParseError::InvalidEquation { .. } => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::WrongWordCount { .. } => "Not exactly three words",
            ParseError::EmptyWord { .. } => "A word with no letters",
            ParseError::InvalidLetter { .. } => "Character outside A-Z",
            ParseError::WordTooLong { .. } => "Word exceeds the supported length",
            ParseError::InvalidEquation { .. } => "Equation text could not be parsed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::WrongWordCount { .. } => "A puzzle is two addend words and one sum word. Fewer words leave nothing to add; more than two addends are not supported.",
            ParseError::EmptyWord { .. } => "Every word must contain at least one letter. Blank entries between separators produce this error.",
            ParseError::InvalidLetter { .. } => "Words may only contain the letters A-Z. Input is upper-cased before checking, so digits and punctuation inside a word are the usual cause.",
            ParseError::WordTooLong { .. } => "Search depth grows with word length, so words are limited to a fixed maximum length.",
            ParseError::InvalidEquation { .. } => "The text was not in `WORD + WORD = WORD` form and was not three non-blank lines either.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::WrongWordCount { .. } => Some("Example: 'SEND + MORE = MONEY', or three lines SEND / MORE / MONEY"),
            ParseError::EmptyWord { .. } => Some("Remove the empty entry or fill in the missing word"),
            ParseError::InvalidLetter { .. } => Some("Use only the letters A-Z in each word"),
            ParseError::WordTooLong { .. } => Some("Shorten the words; real puzzles rarely exceed a dozen letters"),
            ParseError::InvalidEquation { .. } => Some("Expected format: WORD + WORD = WORD (e.g., 'SEND + MORE = MONEY')"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
