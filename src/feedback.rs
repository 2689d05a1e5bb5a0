//! Per-letter feedback for a guess, and its textual encoding.
//!
//! The encoding writes one logical position per letter:
//! - Correct (green): the letter in uppercase, e.g. `A`
//! - Present (yellow): `?` followed by the letter in either case, e.g. `?o`
//! - Absent (black): the letter in lowercase, e.g. `r`
//!
//! So `Ar?os?e` reads A green, R black, O yellow, S black, E yellow.

use crate::error::{FeedbackDefect, PuzzleError, Result};
use crate::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Marker that precedes a Present letter in encoded feedback.
pub const PRESENT_MARKER: char = '?';

/// Classification of one guess letter against the secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs in the secret, but not here (yellow)
    Present,
    /// Letter does not occur in the secret (black)
    Absent,
}

/// A verdict paired with the guessed letter and its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Judgment {
    pub letter: char,
    pub position: usize,
    pub verdict: Verdict,
}

/// Feedback for a whole guess: exactly one judgment per position, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Judgment; WORD_LENGTH]);

impl Feedback {
    /// Compares `guess` against `secret` letter by letter.
    ///
    /// A letter that is not Correct is Present whenever it occurs anywhere in
    /// the secret. Repeated guess letters are not rationed against the
    /// secret's letter counts, so every copy gets the same treatment.
    #[must_use]
    pub fn encode(secret: &Word, guess: &Word) -> Self {
        let judgments = std::array::from_fn(|position| {
            let letter = guess.letter(position);
            let verdict = if secret.letter(position) == letter {
                Verdict::Correct
            } else if secret.contains(letter) {
                Verdict::Present
            } else {
                Verdict::Absent
            };
            Judgment {
                letter,
                position,
                verdict,
            }
        });
        Self(judgments)
    }

    /// Parses encoded feedback such as `Ar?os?e`.
    pub fn decode(text: &str) -> Result<Self> {
        let mut judgments = Vec::with_capacity(WORD_LENGTH);
        let mut chars = text.chars().enumerate();

        while let Some((offset, ch)) = chars.next() {
            let (letter, verdict) = match ch {
                PRESENT_MARKER => match chars.next() {
                    Some((_, next)) if next.is_ascii_alphabetic() => {
                        (next.to_ascii_uppercase(), Verdict::Present)
                    }
                    _ => {
                        return Err(PuzzleError::malformed(
                            text,
                            FeedbackDefect::DanglingMarker { offset },
                        ));
                    }
                },
                c if c.is_ascii_uppercase() => (c, Verdict::Correct),
                c if c.is_ascii_lowercase() => (c.to_ascii_uppercase(), Verdict::Absent),
                c => {
                    return Err(PuzzleError::malformed(
                        text,
                        FeedbackDefect::UnexpectedCharacter { ch: c, offset },
                    ));
                }
            };
            let position = judgments.len();
            judgments.push(Judgment {
                letter,
                position,
                verdict,
            });
        }

        let judgments: [Judgment; WORD_LENGTH] = judgments.try_into().map_err(|rest: Vec<_>| {
            PuzzleError::malformed(
                text,
                FeedbackDefect::WrongLength {
                    expected: WORD_LENGTH,
                    found: rest.len(),
                },
            )
        })?;
        Ok(Self(judgments))
    }

    #[must_use]
    pub fn judgments(&self) -> &[Judgment; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn verdicts(&self) -> [Verdict; WORD_LENGTH] {
        self.0.map(|j| j.verdict)
    }

    /// The guessed word this feedback was produced for.
    #[must_use]
    pub fn guess(&self) -> Word {
        Word::from_letters(self.0.map(|j| j.letter))
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|j| j.verdict == Verdict::Correct)
    }

    /// True if `letter` is Correct or Present at any position.
    #[must_use]
    pub fn marks_letter(&self, letter: char) -> bool {
        self.0
            .iter()
            .any(|j| j.letter == letter && j.verdict != Verdict::Absent)
    }
}

impl FromStr for Feedback {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// Canonical encoding: uppercase for Correct and Present, lowercase for Absent.
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for judgment in &self.0 {
            match judgment.verdict {
                Verdict::Correct => write!(f, "{}", judgment.letter)?,
                Verdict::Present => write!(f, "{PRESENT_MARKER}{}", judgment.letter)?,
                Verdict::Absent => write!(f, "{}", judgment.letter.to_ascii_lowercase())?,
            }
        }
        Ok(())
    }
}

/// Encodes `guess` against `secret`, validating both words first.
pub fn encode(secret: &str, guess: &str) -> Result<Feedback> {
    let secret: Word = secret.parse()?;
    let guess: Word = guess.parse()?;
    Ok(Feedback::encode(&secret, &guess))
}
