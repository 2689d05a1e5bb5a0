// Library interface for wordle-puzzle
// The binary and the integration tests both go through these modules

pub mod logging;

pub mod cli;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod solver;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{FeedbackDefect, PuzzleError, Result};
pub use feedback::{Feedback, Judgment, Verdict, encode};
pub use game_state::{GameConfig, GameOutcome, SolveOutcome, play_loop, play_round, solve_loop};
pub use solver::{Knowledge, Session, filter, fold, is_consistent, reset, solve};
pub use word::{WORD_LENGTH, Word};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
