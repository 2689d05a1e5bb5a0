//! Error types for word parsing, feedback decoding and dictionary loading.
//!
//! Every variant carries a short code (W001-W004) so the CLI can print a
//! stable identifier next to the message:
//!
//! - W001: `MalformedFeedback`
//! - W002: `InvalidWordLength`
//! - W003: `NonAlphabetic`
//! - W004: `Io`
//!
//! An empty candidate pool is not an error; `solve` simply returns no words.

use std::io;

pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Why an encoded feedback string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackDefect {
    #[error("expected {expected} letters, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("'?' at offset {offset} is not followed by a letter")]
    DanglingMarker { offset: usize },

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Malformed feedback \"{input}\": {defect}")]
    MalformedFeedback {
        input: String,
        #[source]
        defect: FeedbackDefect,
    },

    #[error("Word \"{word}\" has {found} letters, expected {expected}")]
    InvalidWordLength {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("Word \"{word}\" contains non-alphabetic character '{ch}'")]
    NonAlphabetic { word: String, ch: char },

    #[error("dictionary i/o error: {0}")]
    Io(#[from] io::Error),
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::MalformedFeedback { .. } => "W001",
            PuzzleError::InvalidWordLength { .. } => "W002",
            PuzzleError::NonAlphabetic { .. } => "W003",
            PuzzleError::Io(_) => "W004",
        }
    }

    pub(crate) fn malformed(input: &str, defect: FeedbackDefect) -> Self {
        PuzzleError::MalformedFeedback {
            input: input.to_string(),
            defect,
        }
    }
}
