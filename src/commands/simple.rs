//! Line-based game mode
//!
//! Plays one game over any reader/writer pair without a TUI.

use crate::core::WORD_LENGTH;
use crate::game::Session;
use crate::output::formatters::{FEEDBACK_LEGEND, feedback_line};
use std::io::{self, BufRead, Write};

/// Play one game, prompting for guesses until it is over or input ends
///
/// Returns whether the player won.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: Session, R: BufRead, W: Write>(
    game: &mut S,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    writeln!(output, "Welcome to Wordle!")?;
    writeln!(output, "{FEEDBACK_LEGEND}")?;
    writeln!(output)?;

    while !game.is_over() {
        write!(
            output,
            "Enter your {WORD_LENGTH}-letter guess ({}/{}): ",
            game.turns_used() + 1,
            game.max_turns()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "Goodbye!")?;
            return Ok(false);
        }

        let guess = line.trim().to_lowercase();
        if guess.chars().count() != WORD_LENGTH {
            writeln!(output, "Please enter exactly {WORD_LENGTH} letters.")?;
            continue;
        }

        match game.guess(&guess) {
            Ok(won) => {
                if let Some(pattern) = game.last_marks() {
                    writeln!(output, "{}", feedback_line(&guess, &pattern.marks()))?;
                }
                if won {
                    writeln!(
                        output,
                        "Congratulations! You guessed the word in {} turns.",
                        game.turns_used()
                    )?;
                }
            }
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }

    if !game.has_won() {
        let answer = game.answer().map_or("?", |word| word.text());
        writeln!(output, "Game over! The correct word was: {answer}")?;
    }

    Ok(game.has_won())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::game::{AdaptiveGame, PlainGame};
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;
    use std::sync::Arc;

    fn words() -> Arc<WordList> {
        Arc::new(WordList::new(words_from_slice(&["panic", "buggy", "manic"])))
    }

    fn play<S: Session>(game: &mut S, script: &str) -> (bool, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let won = run_simple(game, &mut input, &mut output).unwrap();
        (won, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game() {
        let mut game = PlainGame::with_answer(6, words(), "manic").unwrap();
        let (won, transcript) = play(&mut game, "panic\nMANIC\n");

        assert!(won);
        assert!(transcript.contains("(1/6)"));
        assert!(transcript.contains("(2/6)"));
        assert!(transcript.contains(" p [a][n][i][c]"));
        assert!(transcript.contains("[m][a][n][i][c]"));
        assert!(transcript.contains("Congratulations! You guessed the word in 2 turns."));
        assert!(!transcript.contains("Game over!"));
    }

    #[test]
    fn bad_input_is_reported_and_reprompted() {
        let mut game = PlainGame::with_answer(6, words(), "buggy").unwrap();
        let (won, transcript) = play(&mut game, "abc\nzzzzz\nbuggy\n");

        assert!(won);
        assert!(transcript.contains("Please enter exactly 5 letters."));
        assert!(transcript.contains("Error: invalid argument"));
        assert_eq!(game.turns_used(), 1);
    }

    #[test]
    fn losing_game_reveals_answer() {
        let mut game = AdaptiveGame::new(1, words()).unwrap();
        let (won, transcript) = play(&mut game, "panic\n");

        assert!(!won);
        assert!(transcript.contains(" p  a  n  i  c "));
        assert!(transcript.contains("Game over! The correct word was: buggy"));
    }

    #[test]
    fn end_of_input_stops_the_game() {
        let mut game = PlainGame::with_answer(6, words(), "buggy").unwrap();
        let (won, transcript) = play(&mut game, "panic\n");

        assert!(!won);
        assert!(transcript.contains("Goodbye!"));
        assert_eq!(game.turns_used(), 1);
    }
}
