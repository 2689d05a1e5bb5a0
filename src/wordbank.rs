use crate::error::Result;
use crate::info_log;
use crate::word::Word;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordlist.txt");

const APP_DIR: &str = "wordle-puzzle";
const WORDLIST_FILE: &str = "wordlist.txt";

/// Accepts a trimmed line only if it is a well-formed word; other lines are skipped.
fn parse_line(line: &str) -> Option<Word> {
    line.trim().parse().ok()
}

pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    data.lines().filter_map(parse_line).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?) {
            words.push(word);
        }
    }
    info_log!(
        "Loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// `<data dir>/wordle-puzzle/wordlist.txt`, e.g. `~/.local/share/...` on Linux.
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(WORDLIST_FILE))
}

/// Explicit path first, then the user's data-dir list if present, then the
/// embedded list.
pub fn load_wordbank(path: Option<&Path>) -> Result<Vec<Word>> {
    if let Some(path) = path {
        return load_wordbank_from_file(path);
    }
    if let Some(path) = default_wordbank_path()
        && path.is_file()
    {
        return load_wordbank_from_file(&path);
    }
    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;
    use std::io::Write;

    #[test]
    fn test_load_from_str_normalizes_and_filters() {
        let data = "crane\n  Slate \nCRANES\nab\nr4ise\n\nirate\n";
        let words = load_wordbank_from_str(data);
        let rendered: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn test_load_from_str_keeps_order() {
        let words = load_wordbank_from_str("zesty\napple\nmango");
        let rendered: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["ZESTY", "APPLE", "MANGO"]);
    }

    #[test]
    fn test_embedded_wordbank_is_valid() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(words.len() > 100);
        let lines = EMBEDDED_WORDBANK.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(words.len(), lines);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("wordle_puzzle_wordbank_unit.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "lemon").unwrap();
            writeln!(file, "melons").unwrap();
            writeln!(file, "peach").unwrap();
        }
        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].to_string(), "PEACH");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle_puzzle_does_not_exist.txt");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            load_wordbank_from_file(&path),
            Err(PuzzleError::Io(_))
        ));
        assert!(matches!(load_wordbank(Some(path.as_path())), Err(PuzzleError::Io(_))));
    }

    #[test]
    fn test_default_path_layout() {
        if let Some(path) = default_wordbank_path() {
            assert!(path.ends_with("wordle-puzzle/wordlist.txt"));
        }
    }
}
