use crate::feedback::Feedback;
use crate::solver::Session;
use crate::word::Word;
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::SliceRandom;

/// Knobs for the interactive loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Turns allowed per round in play mode
    pub max_guesses: usize,
    /// Candidate pools up to this size are listed word by word
    pub list_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            list_limit: 20,
        }
    }
}

/// What the player typed. `None` from the interface means "invalid, ask again".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction<T> {
    Submit(T),
    GiveUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { guesses: usize },
    Lost { secret: Word },
    GaveUp { secret: Word },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Word),
    OutOfWords,
    GaveUp,
}

/// Input/output seam for the play and solve loops.
pub trait GameInterface {
    fn read_guess(&mut self) -> Option<UserAction<Word>>;
    fn read_feedback(&mut self) -> Option<UserAction<Feedback>>;
    fn confirm_new_game(&mut self) -> bool;
    fn display_new_game_message(&mut self);
    fn display_not_in_dictionary(&mut self, guess: &Word);
    fn display_history(&mut self, history: &[Feedback]);
    fn display_candidates(&mut self, candidates: &[Word], list_limit: usize);
    fn display_game_over(&mut self, outcome: &GameOutcome);
    fn display_solve_over(&mut self, outcome: &SolveOutcome);
}

/// Plays one round against `secret`. Guesses outside `dictionary` are
/// rejected without using up a turn.
pub fn play_round<I: GameInterface>(
    dictionary: &[Word],
    secret: &Word,
    config: &GameConfig,
    ui: &mut I,
) -> GameOutcome {
    let mut history: Vec<Feedback> = Vec::with_capacity(config.max_guesses);

    while history.len() < config.max_guesses {
        let guess = match ui.read_guess() {
            Some(UserAction::Submit(guess)) => guess,
            Some(UserAction::GiveUp) => {
                info_log!("play_round() - player gave up after {} guesses", history.len());
                return GameOutcome::GaveUp { secret: *secret };
            }
            None => continue,
        };

        if !dictionary.contains(&guess) {
            ui.display_not_in_dictionary(&guess);
            ui.display_history(&history);
            continue;
        }

        let feedback = Feedback::encode(secret, &guess);
        debug_log!("play_round() - {guess} scored {feedback}");
        history.push(feedback);
        ui.display_history(&history);

        if feedback.is_solved() {
            return GameOutcome::Won {
                guesses: history.len(),
            };
        }
    }

    GameOutcome::Lost { secret: *secret }
}

/// Picks random secrets from `dictionary` and plays rounds until the player stops.
pub fn play_loop<I: GameInterface, R: Rng + ?Sized>(
    dictionary: &[Word],
    config: &GameConfig,
    rng: &mut R,
    ui: &mut I,
) {
    loop {
        let Some(secret) = dictionary.choose(rng) else {
            log::warn!("play_loop() - empty dictionary, nothing to play");
            return;
        };
        ui.display_new_game_message();
        let outcome = play_round(dictionary, secret, config, ui);
        ui.display_game_over(&outcome);

        if !ui.confirm_new_game() {
            break;
        }
    }
}

/// Narrows `dictionary` from encoded feedback typed by the player.
pub fn solve_loop<I: GameInterface>(
    dictionary: &[Word],
    config: &GameConfig,
    ui: &mut I,
) -> SolveOutcome {
    let mut session = Session::new(dictionary);

    let outcome = loop {
        if let Some(solution) = session.solution() {
            break SolveOutcome::Solved(solution);
        }

        ui.display_candidates(session.candidates(), config.list_limit);
        if session.candidates().is_empty() {
            break SolveOutcome::OutOfWords;
        }

        match ui.read_feedback() {
            Some(UserAction::Submit(feedback)) => {
                session.apply(feedback);
                ui.display_history(session.history());
            }
            Some(UserAction::GiveUp) => break SolveOutcome::GaveUp,
            None => {}
        }
    };

    info_log!(
        "solve_loop() - {:?} after {} feedbacks, knowledge {}",
        outcome,
        session.history().len(),
        session.knowledge()
    );
    ui.display_solve_over(&outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Scripted interface that records what the loops asked it to show.
    #[derive(Default)]
    struct ScriptedInterface {
        guesses: VecDeque<Option<UserAction<Word>>>,
        feedbacks: VecDeque<Option<UserAction<Feedback>>>,
        replays: VecDeque<bool>,
        rejected: Vec<Word>,
        histories: Vec<usize>,
        pools: Vec<usize>,
        games: Vec<GameOutcome>,
        solves: Vec<SolveOutcome>,
        new_games: usize,
    }

    impl GameInterface for ScriptedInterface {
        fn read_guess(&mut self) -> Option<UserAction<Word>> {
            self.guesses.pop_front().unwrap_or(Some(UserAction::GiveUp))
        }

        fn read_feedback(&mut self) -> Option<UserAction<Feedback>> {
            self.feedbacks.pop_front().unwrap_or(Some(UserAction::GiveUp))
        }

        fn confirm_new_game(&mut self) -> bool {
            self.replays.pop_front().unwrap_or(false)
        }

        fn display_new_game_message(&mut self) {
            self.new_games += 1;
        }

        fn display_not_in_dictionary(&mut self, guess: &Word) {
            self.rejected.push(*guess);
        }

        fn display_history(&mut self, history: &[Feedback]) {
            self.histories.push(history.len());
        }

        fn display_candidates(&mut self, candidates: &[Word], _list_limit: usize) {
            self.pools.push(candidates.len());
        }

        fn display_game_over(&mut self, outcome: &GameOutcome) {
            self.games.push(outcome.clone());
        }

        fn display_solve_over(&mut self, outcome: &SolveOutcome) {
            self.solves.push(outcome.clone());
        }
    }

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    fn dictionary() -> Vec<Word> {
        ["CRANE", "CRATE", "TRACE", "BRAVE", "SLATE"]
            .iter()
            .map(|w| word(w))
            .collect()
    }

    fn guess(s: &str) -> Option<UserAction<Word>> {
        Some(UserAction::Submit(word(s)))
    }

    fn feedback(s: &str) -> Option<UserAction<Feedback>> {
        Some(UserAction::Submit(s.parse().unwrap()))
    }

    #[test]
    fn test_play_round_win() {
        let mut ui = ScriptedInterface {
            guesses: VecDeque::from([guess("TRACE"), guess("CRANE")]),
            ..Default::default()
        };
        let outcome = play_round(&dictionary(), &word("CRANE"), &GameConfig::default(), &mut ui);
        assert_eq!(outcome, GameOutcome::Won { guesses: 2 });
        assert_eq!(ui.histories, vec![1, 2]);
    }

    #[test]
    fn test_play_round_rejects_unknown_word_without_using_turn() {
        let mut ui = ScriptedInterface {
            guesses: VecDeque::from([guess("ZESTY"), None, guess("SLATE")]),
            ..Default::default()
        };
        let config = GameConfig {
            max_guesses: 1,
            list_limit: 20,
        };
        let outcome = play_round(&dictionary(), &word("SLATE"), &config, &mut ui);
        assert_eq!(outcome, GameOutcome::Won { guesses: 1 });
        assert_eq!(ui.rejected, vec![word("ZESTY")]);
    }

    #[test]
    fn test_play_round_lost_after_max_guesses() {
        let mut ui = ScriptedInterface {
            guesses: VecDeque::from([guess("CRATE"), guess("TRACE")]),
            ..Default::default()
        };
        let config = GameConfig {
            max_guesses: 2,
            list_limit: 20,
        };
        let outcome = play_round(&dictionary(), &word("BRAVE"), &config, &mut ui);
        assert_eq!(outcome, GameOutcome::Lost { secret: word("BRAVE") });
    }

    #[test]
    fn test_play_round_give_up() {
        let mut ui = ScriptedInterface::default();
        let outcome = play_round(&dictionary(), &word("BRAVE"), &GameConfig::default(), &mut ui);
        assert_eq!(outcome, GameOutcome::GaveUp { secret: word("BRAVE") });
    }

    #[test]
    fn test_play_loop_replays_until_declined() {
        let mut ui = ScriptedInterface {
            replays: VecDeque::from([true, false]),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        play_loop(&dictionary(), &GameConfig::default(), &mut rng, &mut ui);
        assert_eq!(ui.new_games, 2);
        assert_eq!(ui.games.len(), 2);
        assert!(
            ui.games
                .iter()
                .all(|g| matches!(g, GameOutcome::GaveUp { secret } if dictionary().contains(secret)))
        );
    }

    #[test]
    fn test_play_loop_empty_dictionary() {
        let mut ui = ScriptedInterface::default();
        let mut rng = StdRng::seed_from_u64(1);
        play_loop(&[], &GameConfig::default(), &mut rng, &mut ui);
        assert_eq!(ui.new_games, 0);
    }

    #[test]
    fn test_solve_loop_solved() {
        let mut ui = ScriptedInterface {
            feedbacks: VecDeque::from([feedback("CRAtE"), None, feedback("CRANE")]),
            ..Default::default()
        };
        let outcome = solve_loop(&dictionary(), &GameConfig::default(), &mut ui);
        assert_eq!(outcome, SolveOutcome::Solved(word("CRANE")));
        // Pool shown before each prompt: full, then CRANE alone (twice, after the invalid entry)
        assert_eq!(ui.pools, vec![5, 1, 1]);
        assert_eq!(ui.solves, vec![SolveOutcome::Solved(word("CRANE"))]);
    }

    #[test]
    fn test_solve_loop_out_of_words() {
        let mut ui = ScriptedInterface {
            feedbacks: VecDeque::from([feedback("crane")]),
            ..Default::default()
        };
        let outcome = solve_loop(&dictionary(), &GameConfig::default(), &mut ui);
        assert_eq!(outcome, SolveOutcome::OutOfWords);
        assert_eq!(ui.pools, vec![5, 0]);
    }

    #[test]
    fn test_solve_loop_give_up() {
        let mut ui = ScriptedInterface::default();
        let outcome = solve_loop(&dictionary(), &GameConfig::default(), &mut ui);
        assert_eq!(outcome, SolveOutcome::GaveUp);
        assert!(ui.histories.is_empty());
    }
}
