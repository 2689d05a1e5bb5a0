use crate::feedback::{Feedback, Judgment, Verdict};
use crate::word::{WORD_LENGTH, Word};
use crate::{debug_log, info_log};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Constraints accumulated from every feedback seen in a session.
///
/// `confirmed`, `required` and `excluded` never share a letter. `ruled_out`
/// holds per-letter position bans that the other three cannot express, such
/// as the yellow positions of a letter that later turned green.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    confirmed: [Option<char>; WORD_LENGTH],
    required: BTreeMap<char, BTreeSet<usize>>,
    excluded: BTreeSet<char>,
    ruled_out: BTreeMap<char, BTreeSet<usize>>,
}

impl Knowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn confirmed(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.confirmed
    }

    /// Letters known to be in the word, each with the positions it cannot take.
    #[must_use]
    pub fn required(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.required
    }

    #[must_use]
    pub fn excluded(&self) -> &BTreeSet<char> {
        &self.excluded
    }

    #[must_use]
    pub fn ruled_out(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.ruled_out
    }

    #[must_use]
    pub fn is_confirmed(&self, letter: char) -> bool {
        self.confirmed.contains(&Some(letter))
    }

    /// The answer, once every position is confirmed.
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, confirmed) in letters.iter_mut().zip(self.confirmed) {
            *slot = confirmed?;
        }
        Some(Word::from_letters(letters))
    }

    /// Applies each judgment of `feedback` in position order.
    pub fn fold(&mut self, feedback: &Feedback) {
        for &Judgment {
            letter,
            position,
            verdict,
        } in feedback.judgments()
        {
            match verdict {
                Verdict::Correct => {
                    self.confirmed[position] = Some(letter);
                    self.excluded.remove(&letter);
                    if let Some(positions) = self.required.remove(&letter) {
                        self.ruled_out.entry(letter).or_default().extend(positions);
                    }
                    if let Some(positions) = self.ruled_out.get_mut(&letter) {
                        positions.remove(&position);
                    }
                }
                Verdict::Present => {
                    self.excluded.remove(&letter);
                    if self.is_confirmed(letter) {
                        self.ruled_out.entry(letter).or_default().insert(position);
                    } else {
                        self.required.entry(letter).or_default().insert(position);
                    }
                }
                Verdict::Absent => {
                    let seen_elsewhere = self.is_confirmed(letter)
                        || self.required.contains_key(&letter)
                        || feedback.marks_letter(letter);
                    if seen_elsewhere {
                        self.ruled_out.entry(letter).or_default().insert(position);
                    } else {
                        self.excluded.insert(letter);
                    }
                }
            }
        }
        self.ruled_out.retain(|_, positions| !positions.is_empty());
        debug_log!("fold {} -> {}", feedback, self);
    }

    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        let letters = word.letters();

        let greens_match = self
            .confirmed
            .iter()
            .zip(letters)
            .all(|(confirmed, letter)| confirmed.is_none_or(|c| c == *letter));
        if !greens_match {
            return false;
        }

        if self.excluded.iter().any(|&letter| word.contains(letter)) {
            return false;
        }

        let yellows_fit = self.required.iter().all(|(&letter, positions)| {
            word.contains(letter) && positions.iter().all(|&p| letters[p] != letter)
        });
        if !yellows_fit {
            return false;
        }

        self.ruled_out
            .iter()
            .all(|(&letter, positions)| positions.iter().all(|&p| letters[p] != letter))
    }
}

/// Compact summary, e.g. `A____ | required: E(4) O(2) | excluded: RS`.
impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for confirmed in self.confirmed {
            write!(f, "{}", confirmed.unwrap_or('_'))?;
        }
        write!(f, " | required:")?;
        for (letter, positions) in &self.required {
            let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
            write!(f, " {letter}({})", positions.join(","))?;
        }
        write!(f, " | excluded: ")?;
        for letter in &self.excluded {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Fresh knowledge for a new solving session.
#[must_use]
pub fn reset() -> Knowledge {
    Knowledge::new()
}

#[must_use]
pub fn fold(mut knowledge: Knowledge, feedback: &Feedback) -> Knowledge {
    knowledge.fold(feedback);
    knowledge
}

#[must_use]
pub fn is_consistent(knowledge: &Knowledge, word: &Word) -> bool {
    knowledge.is_consistent(word)
}

/// Words consistent with `knowledge`, in their original order.
#[must_use]
pub fn filter(words: &[Word], knowledge: &Knowledge) -> Vec<Word> {
    words
        .iter()
        .filter(|word| knowledge.is_consistent(word))
        .copied()
        .collect()
}

/// Folds every feedback in order, narrowing the pool after each one.
/// An empty pool means no word matches all feedback.
#[must_use]
pub fn solve(words: &[Word], feedbacks: &[Feedback]) -> (Vec<Word>, Knowledge) {
    let mut knowledge = reset();
    let mut pool = words.to_vec();
    for feedback in feedbacks {
        knowledge.fold(feedback);
        pool = filter(&pool, &knowledge);
        debug_log!("after {feedback}: {} candidates", pool.len());
    }
    (pool, knowledge)
}

/// One solving session: the candidate pool shrinks as feedback arrives.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a [Word],
    candidates: Vec<Word>,
    knowledge: Knowledge,
    history: Vec<Feedback>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            candidates: dictionary.to_vec(),
            knowledge: reset(),
            history: Vec::new(),
        }
    }

    /// Folds `feedback` in and re-filters. Returns the remaining pool size.
    pub fn apply(&mut self, feedback: Feedback) -> usize {
        self.knowledge.fold(&feedback);
        let knowledge = &self.knowledge;
        self.candidates.retain(|word| knowledge.is_consistent(word));
        info_log!(
            "Session::apply({feedback}) - {} candidates remain",
            self.candidates.len()
        );
        self.history.push(feedback);
        self.candidates.len()
    }

    pub fn reset(&mut self) {
        self.candidates = self.dictionary.to_vec();
        self.knowledge = reset();
        self.history.clear();
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        self.knowledge.solution()
    }
}
