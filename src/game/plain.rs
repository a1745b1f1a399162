//! Fixed-answer game session

use super::GameError;
use super::session::{Session, validate_guess, validate_setup};
use crate::core::{Pattern, Word, WordList};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::Arc;

/// A Wordle game whose answer is chosen at construction
pub struct PlainGame {
    words: Arc<WordList>,
    answer: Word,
    max_turns: usize,
    turns_used: usize,
    won: bool,
    last_marks: Option<Pattern>,
}

impl PlainGame {
    /// Start a game with an answer drawn from `words` by `rng`
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` for a zero turn budget or an empty
    /// word list.
    pub fn new<R: Rng + ?Sized>(
        max_turns: usize,
        words: Arc<WordList>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        validate_setup(max_turns, &words)?;
        let answer = words
            .words()
            .choose(rng)
            .cloned()
            .ok_or_else(|| GameError::InvalidArgument("word list is empty".to_string()))?;

        Ok(Self::build(max_turns, words, answer))
    }

    /// Start a game with a known answer
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if the answer is malformed or not
    /// in the word list, or for a zero turn budget.
    pub fn with_answer(
        max_turns: usize,
        words: Arc<WordList>,
        answer: &str,
    ) -> Result<Self, GameError> {
        validate_setup(max_turns, &words)?;
        let answer = Word::new(answer)?;
        if !words.contains(&answer) {
            return Err(GameError::InvalidArgument(
                "answer must be in the word list".to_string(),
            ));
        }

        Ok(Self::build(max_turns, words, answer))
    }

    fn build(max_turns: usize, words: Arc<WordList>, answer: Word) -> Self {
        Self {
            words,
            answer,
            max_turns,
            turns_used: 0,
            won: false,
            last_marks: None,
        }
    }
}

impl Session for PlainGame {
    fn guess(&mut self, word: &str) -> Result<bool, GameError> {
        let word = validate_guess(&*self, &self.words, word)?;

        self.turns_used += 1;
        self.last_marks = Some(Pattern::calculate(&word, &self.answer));
        if word == self.answer {
            self.won = true;
        }

        Ok(self.won)
    }

    fn has_won(&self) -> bool {
        self.won
    }

    fn turns_used(&self) -> usize {
        self.turns_used
    }

    fn max_turns(&self) -> usize {
        self.max_turns
    }

    fn last_marks(&self) -> Option<Pattern> {
        self.last_marks
    }

    fn answer(&self) -> Option<&Word> {
        self.is_over().then_some(&self.answer)
    }
}
