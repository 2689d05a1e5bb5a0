use crate::debug_log;
use crate::feedback::{Feedback, Verdict};
use crate::game_state::{GameConfig, GameInterface, GameOutcome, SolveOutcome, UserAction};
use crate::word::{WORD_LENGTH, Word};
use clap::{Parser, Subcommand};
use crossterm::style::{Color, Stylize};
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Word puzzle: play against a random secret, or narrow down a puzzle from feedback
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Guesses allowed per round in play mode
    #[arg(long, default_value_t = 6)]
    pub max_guesses: usize,

    /// List remaining candidates when there are at most this many
    #[arg(long, default_value_t = 20)]
    pub list_limit: usize,

    /// Print plain encoded feedback instead of colored letters
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Guess a random secret word
    #[default]
    Play,
    /// Enter encoded feedback (Green=UPPER, Yellow=?x, Black=lower) and see what fits
    Solve,
}

impl Cli {
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            max_guesses: self.max_guesses,
            list_limit: self.list_limit,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Renders feedback with background colors, or as encoded text when `color` is off.
#[must_use]
pub fn render_feedback(feedback: &Feedback, color: bool) -> String {
    if !color {
        return feedback.to_string();
    }
    let mut out = String::new();
    for judgment in feedback.judgments() {
        let background = match judgment.verdict {
            Verdict::Correct => Color::Green,
            Verdict::Present => Color::Yellow,
            Verdict::Absent => Color::DarkGrey,
        };
        let _ = write!(out, "{}", judgment.letter.with(Color::White).on(background));
    }
    out
}

/// CLI implementation of the GameInterface trait
/// Reads answers line by line from `reader`; end of input counts as giving up
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    color: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W, color: bool) -> Self {
        Self {
            reader,
            writer,
            color,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            debug_log!("write failed: {}", e);
        }
    }

    /// Prompts and reads one trimmed line. `None` on end of input or read error.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.writer, "{prompt}").and_then(|()| self.writer.flush()) {
            debug_log!("prompt failed: {}", e);
        }
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                log::warn!("failed to read input: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_guess(&mut self) -> Option<UserAction<Word>> {
        let Some(input) = self.ask("Your guess: ") else {
            return Some(UserAction::GiveUp);
        };
        if input.is_empty() {
            return Some(UserAction::GiveUp);
        }
        match input.parse::<Word>() {
            Ok(word) => Some(UserAction::Submit(word)),
            Err(_) => {
                self.say(&format!("Guess word must have {WORD_LENGTH} letters"));
                None
            }
        }
    }

    fn read_feedback(&mut self) -> Option<UserAction<Feedback>> {
        let Some(input) = self.ask("Your encoded guess: ") else {
            return Some(UserAction::GiveUp);
        };
        if input.is_empty() {
            return Some(UserAction::GiveUp);
        }
        match input.parse::<Feedback>() {
            Ok(feedback) => Some(UserAction::Submit(feedback)),
            Err(e) => {
                self.say(&format!("[{}] {e}", e.code()));
                None
            }
        }
    }

    fn confirm_new_game(&mut self) -> bool {
        match self.ask("Play another game? [Y/n] ") {
            Some(answer) => !answer.to_uppercase().starts_with('N'),
            None => false,
        }
    }

    fn display_new_game_message(&mut self) {
        self.say(&format!("\nLet me think of a {WORD_LENGTH}-letter word..."));
        self.say("Ok, try to guess it!\n");
    }

    fn display_not_in_dictionary(&mut self, guess: &Word) {
        self.say(&format!("{guess} is not in the dictionary"));
    }

    fn display_history(&mut self, history: &[Feedback]) {
        for feedback in history {
            let line = format!("     {}", render_feedback(feedback, self.color));
            self.say(&line);
        }
    }

    fn display_candidates(&mut self, candidates: &[Word], list_limit: usize) {
        match candidates.len() {
            0 => self.say("I'm out of words!"),
            n if n <= list_limit => {
                let words: Vec<String> = candidates.iter().map(ToString::to_string).collect();
                self.say(&format!("Possible words: {}", words.join(" ")));
            }
            n => self.say(&format!("{n} possible words")),
        }
    }

    fn display_game_over(&mut self, outcome: &GameOutcome) {
        match outcome {
            GameOutcome::Won { guesses } => {
                self.say(&format!(
                    "Congratulations, you found the word in {guesses} guesses!"
                ));
            }
            GameOutcome::Lost { secret } | GameOutcome::GaveUp { secret } => {
                self.say(&format!("\nThe secret word was {secret}"));
            }
        }
    }

    fn display_solve_over(&mut self, outcome: &SolveOutcome) {
        match outcome {
            SolveOutcome::Solved(word) => self.say(&format!("The word is {word}")),
            SolveOutcome::GaveUp => self.say("I give up!"),
            SolveOutcome::OutOfWords => {}
        }
    }
}
