//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::WORDS;
use crate::core::{Word, WordList};
use std::fs;
use std::io;
use std::path::Path;

/// Name that selects the embedded list instead of a file
pub const EMBEDDED: &str = "embedded";

/// Load words from a file, one per line
///
/// Blank lines and entries that are not valid 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_arena::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_arena::wordlists::loader::words_from_slice;
/// use wordle_arena::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Resolve a word list source: [`EMBEDDED`] or a path to a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InvalidData` if it
/// holds no valid words.
pub fn load_word_list(source: &str) -> io::Result<WordList> {
    let words = if source == EMBEDDED {
        WordList::new(words_from_slice(WORDS))
    } else {
        WordList::new(load_from_file(source)?)
    };

    if words.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("no valid 5-letter words in {source}"),
        ));
    }

    log::info!("Loaded {} words from {source}", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wordle_arena_{}_{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let path = temp_file("mixed.txt", "apple\n\n  BENCH \nnope\nangle\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "bench", "angle"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_word_list_embedded() {
        let words = load_word_list(EMBEDDED).unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_word_list_rejects_file_without_words() {
        let path = temp_file("empty.txt", "abc\n\n");
        let result = load_word_list(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
