use rand::thread_rng;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use wordle_puzzle::cli::{CliInterface, Mode, parse_cli};
use wordle_puzzle::logging::init_logger;
use wordle_puzzle::wordbank::load_wordbank;
use wordle_puzzle::{play_loop, solve_loop};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.verbose);

    let dictionary = match load_wordbank(cli.wordbank_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word bank: [{}] {e}", e.code());
            return ExitCode::FAILURE;
        }
    };
    if dictionary.is_empty() {
        eprintln!("The word bank contains no usable words.");
        return ExitCode::FAILURE;
    }
    log::info!("{} words loaded", dictionary.len());

    let config = cli.game_config();
    let color = !cli.no_color && io::stdout().is_terminal();
    let mut ui = CliInterface::new(io::stdin().lock(), io::stdout(), color);

    match cli.mode() {
        Mode::Play => play_loop(&dictionary, &config, &mut thread_rng(), &mut ui),
        Mode::Solve => {
            solve_loop(&dictionary, &config, &mut ui);
        }
    }
    ExitCode::SUCCESS
}
