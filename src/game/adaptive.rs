//! Adaptive ("cheating") game session
//!
//! The engine never picks an answer up front. It keeps every word that is
//! still consistent with the feedback given so far, and on each guess it
//! splits that pool by the pattern the guess would score against each word.
//! The bucket whose pattern has the fewest hits, then the fewest presents,
//! becomes the new pool and its pattern is what the player sees.
//!
//! Ties between patterns with equal hit and present counts go to the
//! smallest pattern in mark order (`Hit < Present < Miss`, compared position
//! by position), so a given sequence of guesses always plays out the same way.

use super::GameError;
use super::session::{Session, validate_guess, validate_setup};
use crate::core::{Pattern, Word, WordList};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A Wordle game that defers choosing its answer for as long as it can
pub struct AdaptiveGame {
    words: Arc<WordList>,
    candidates: Vec<Word>,
    max_turns: usize,
    turns_used: usize,
    won: bool,
    last_marks: Option<Pattern>,
    answer: Option<Word>,
}

impl AdaptiveGame {
    /// Start a game whose candidate pool is the whole word list
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` for a zero turn budget or an empty
    /// word list.
    pub fn new(max_turns: usize, words: Arc<WordList>) -> Result<Self, GameError> {
        validate_setup(max_turns, &words)?;
        let candidates = words.words().to_vec();

        Ok(Self {
            words,
            candidates,
            max_turns,
            turns_used: 0,
            won: false,
            last_marks: None,
            answer: None,
        })
    }

    /// Words still consistent with every pattern emitted so far, in word
    /// list order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }
}

impl Session for AdaptiveGame {
    fn guess(&mut self, word: &str) -> Result<bool, GameError> {
        let word = validate_guess(&*self, &self.words, word)?;
        let Some((pattern, bucket)) = least_helpful_bucket(&word, &self.candidates) else {
            return Err(GameError::InvalidState("no candidates remain".to_string()));
        };

        self.turns_used += 1;
        self.candidates = bucket;
        self.last_marks = Some(pattern);
        log::debug!(
            "turn {}: '{word}' scored {pattern}, {} candidates remain",
            self.turns_used,
            self.candidates.len()
        );

        if pattern.is_perfect() {
            self.won = true;
            self.answer = Some(word);
        } else if self.turns_used >= self.max_turns {
            self.answer = self.candidates.first().cloned();
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
        self.answer.as_ref()
    }
}

/// Group candidates by the pattern they produce with the guess
///
/// Each bucket keeps the relative order of `candidates`.
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, Vec<Word>> {
    let mut buckets: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        buckets.entry(pattern).or_default().push(candidate.clone());
    }

    buckets
}

/// Pick the bucket that tells the guesser the least
///
/// Returns `None` only when `candidates` is empty.
fn least_helpful_bucket(guess: &Word, candidates: &[Word]) -> Option<(Pattern, Vec<Word>)> {
    group_by_pattern(guess, candidates)
        .into_iter()
        .min_by_key(|(pattern, _)| (pattern.count_hits(), pattern.count_presents(), *pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Miss, Present};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use std::collections::BTreeMap;

    fn list(words: &[&str]) -> Arc<WordList> {
        Arc::new(WordList::new(words_from_slice(words)))
    }

    fn simple() -> AdaptiveGame {
        AdaptiveGame::new(6, list(&["panic", "buggy", "manic"])).unwrap()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn initial_candidates_match_word_list() {
        let game = simple();
        assert_eq!(texts(game.candidates()), ["panic", "buggy", "manic"]);
        assert!(game.last_marks().is_none());
        assert!(game.answer().is_none());
    }

    #[test]
    fn single_guess_reduces_to_miss_bucket() {
        let mut game = simple();
        assert!(!game.guess("panic").unwrap());

        assert_eq!(game.last_marks().map(Pattern::marks), Some([Miss; 5]));
        assert_eq!(texts(game.candidates()), ["buggy"]);
        assert!(game.answer().is_none());
    }

    #[test]
    fn last_remaining_candidate_wins() {
        let mut game = simple();
        assert!(!game.guess("panic").unwrap());
        assert!(game.guess("buggy").unwrap());

        assert!(game.has_won());
        assert!(game.is_over());
        assert_eq!(game.last_marks(), Some(Pattern::PERFECT));
        assert_eq!(game.answer().map(Word::text), Some("buggy"));
        assert!(matches!(game.guess("buggy"), Err(GameError::InvalidState(_))));
    }

    #[test]
    fn loss_commits_to_first_remaining_candidate() {
        let mut game = AdaptiveGame::new(1, list(&["panic", "buggy", "manic"])).unwrap();
        assert!(!game.guess("panic").unwrap());

        assert!(game.is_over());
        assert!(!game.has_won());
        assert_eq!(game.answer().map(Word::text), Some("buggy"));
        assert!(matches!(game.guess("buggy"), Err(GameError::InvalidState(_))));
    }

    #[test]
    fn guess_outside_pool_is_accepted() {
        let mut game = simple();
        game.guess("panic").unwrap();
        assert!(!game.guess("manic").unwrap());
        assert_eq!(texts(game.candidates()), ["buggy"]);
        assert_eq!(game.turns_used(), 2);
    }

    #[test]
    fn invalid_guess_leaves_pool_and_turns_unchanged() {
        let mut game = simple();
        assert!(matches!(game.guess("xxxxx"), Err(GameError::InvalidArgument(_))));
        assert!(matches!(game.guess("toolong"), Err(GameError::InvalidArgument(_))));
        assert_eq!(game.turns_used(), 0);
        assert_eq!(game.candidates().len(), 3);
    }

    #[test]
    fn ties_go_to_smallest_pattern() {
        // bzzzz and zzzzc both score one present against abcde
        for order in [
            ["zzzzc", "bzzzz", "abcde"],
            ["abcde", "bzzzz", "zzzzc"],
            ["bzzzz", "abcde", "zzzzc"],
        ] {
            let mut game = AdaptiveGame::new(6, list(&order)).unwrap();
            game.guess("abcde").unwrap();

            assert_eq!(
                game.last_marks().map(Pattern::marks),
                Some([Miss, Present, Miss, Miss, Miss])
            );
            assert_eq!(texts(game.candidates()), ["bzzzz"]);
        }
    }

    #[test]
    fn first_turn_pool_is_least_helpful_bucket() {
        let words = list(WORDS);
        let guess = Word::new("crane").unwrap();

        let mut buckets: BTreeMap<Pattern, Vec<&Word>> = BTreeMap::new();
        for candidate in words.words() {
            buckets
                .entry(Pattern::calculate(&guess, candidate))
                .or_default()
                .push(candidate);
        }
        let (expected_pattern, expected) = buckets
            .iter()
            .min_by_key(|(p, _)| (p.count_hits(), p.count_presents()))
            .unwrap();

        let mut game = AdaptiveGame::new(6, Arc::clone(&words)).unwrap();
        game.guess("crane").unwrap();

        assert_eq!(game.last_marks(), Some(*expected_pattern));
        assert_eq!(game.candidates().len(), expected.len());
    }

    #[test]
    fn pool_shrinks_and_stays_consistent_with_history() {
        let mut game = AdaptiveGame::new(6, list(WORDS)).unwrap();
        let mut history: Vec<(Word, Pattern)> = Vec::new();
        let mut previous = game.candidates().len();

        for guess in ["crane", "bound", "light", "speed", "dizzy", "fluid"] {
            if game.is_over() {
                break;
            }
            game.guess(guess).unwrap();
            history.push((Word::new(guess).unwrap(), game.last_marks().unwrap()));

            let remaining = game.candidates().len();
            assert!(remaining >= 1);
            assert!(remaining <= previous);
            previous = remaining;

            for candidate in game.candidates() {
                for (word, pattern) in &history {
                    assert_eq!(Pattern::calculate(word, candidate), *pattern);
                }
            }
        }
    }

    #[test]
    fn exhaustion_exposes_answer_from_final_pool() {
        // Plenty of words avoid every letter of "crane", so the pool left
        // after it cannot be just "bound"
        let mut game = AdaptiveGame::new(2, list(WORDS)).unwrap();
        game.guess("crane").unwrap();
        assert!(!game.guess("bound").unwrap());

        assert!(game.is_over());
        assert!(!game.has_won());
        assert!(game.answer().is_some());
        assert_eq!(game.answer(), game.candidates().first());
    }
}
