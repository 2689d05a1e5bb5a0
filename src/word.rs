use crate::error::{PuzzleError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word the engine handles.
pub const WORD_LENGTH: usize = 5;

/// A dictionary word or guess: exactly `WORD_LENGTH` uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([char; WORD_LENGTH]);

impl Word {
    pub(crate) fn from_letters(letters: [char; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    #[must_use]
    pub fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.0
    }

    /// Letter at `position`. Panics if `position >= WORD_LENGTH`.
    #[must_use]
    pub fn letter(&self, position: usize) -> char {
        self.0[position]
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = PuzzleError;

    /// Parses and uppercases `s`. No trimming happens here.
    fn from_str(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != WORD_LENGTH {
            return Err(PuzzleError::InvalidWordLength {
                word: s.to_string(),
                expected: WORD_LENGTH,
                found,
            });
        }

        let mut letters = [' '; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(s.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(PuzzleError::NonAlphabetic {
                    word: s.to_string(),
                    ch,
                });
            }
            *slot = ch.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }
}

impl TryFrom<&str> for Word {
    type Error = PuzzleError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0 {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
