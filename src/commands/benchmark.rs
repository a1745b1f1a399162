//! Benchmark command
//!
//! Plays many games with a simple built-in guesser to measure how hard each
//! mode is. The guesser always plays the first word of the list that agrees
//! with every pattern seen so far.

use crate::config::GameConfig;
use crate::core::{Pattern, Word, WordList};
use crate::game::{AdaptiveGame, GameError, GameMode, PlainGame, Session};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub mode: GameMode,
    pub total_games: usize,
    pub wins: usize,
    /// Mean turns over won games only
    pub average_turns: f64,
    /// Turns taken -> number of games won in that many turns
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// First word consistent with every guess and pattern in `history`
#[must_use]
pub fn next_guess<'a>(words: &'a WordList, history: &[(Word, Pattern)]) -> Option<&'a Word> {
    words.words().iter().find(|candidate| {
        history
            .iter()
            .all(|(guess, pattern)| Pattern::calculate(guess, candidate) == *pattern)
    })
}

/// Play a session to the end with the built-in guesser
///
/// Returns the number of turns taken if the game was won.
///
/// # Errors
///
/// Returns an error if the session rejects a guess.
pub fn play_out<S: Session>(
    game: &mut S,
    words: &WordList,
    opening: Option<&Word>,
) -> Result<Option<usize>, GameError> {
    let mut history: Vec<(Word, Pattern)> = Vec::new();

    while !game.is_over() {
        let guess = match (history.is_empty(), opening) {
            (true, Some(word)) => word,
            _ => match next_guess(words, &history) {
                Some(word) => word,
                None => break,
            },
        };

        game.guess(guess.text())?;
        if let Some(pattern) = game.last_marks() {
            history.push((guess.clone(), pattern));
        }
    }

    Ok(game.has_won().then_some(game.turns_used()))
}

/// Run `count` games in parallel
///
/// Plain mode plays one game per target word, cheat mode one game per
/// opening word, each taken from the front of the list.
///
/// # Errors
///
/// Returns an error if the configuration cannot produce a game.
pub fn run_benchmark(
    config: GameConfig,
    words: &Arc<WordList>,
    count: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let seeds: Vec<&Word> = words.words().iter().take(count).collect();
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(seeds.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} games", config.mode));

    let outcomes = seeds
        .par_iter()
        .map(|&seed| {
            let outcome = match config.mode {
                GameMode::Plain => {
                    let mut game =
                        PlainGame::with_answer(config.max_turns, Arc::clone(words), seed.text())?;
                    play_out(&mut game, words, None)
                }
                GameMode::Cheat => {
                    let mut game = AdaptiveGame::new(config.max_turns, Arc::clone(words))?;
                    play_out(&mut game, words, Some(seed))
                }
            };
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    pb.finish_with_message("Complete!");

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for turns in outcomes.iter().flatten() {
        *distribution.entry(*turns).or_insert(0) += 1;
    }
    let wins: usize = distribution.values().sum();
    let won_turns: usize = outcomes.iter().flatten().sum();

    let average_turns = if wins == 0 {
        0.0
    } else {
        won_turns as f64 / wins as f64
    };

    log::info!(
        "Benchmarked {} {} games: {wins} won",
        outcomes.len(),
        config.mode
    );

    Ok(BenchmarkResult {
        mode: config.mode,
        total_games: outcomes.len(),
        wins,
        average_turns,
        distribution,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn list(words: &[&str]) -> Arc<WordList> {
        Arc::new(WordList::new(words_from_slice(words)))
    }

    #[test]
    fn next_guess_respects_history() {
        let words = list(&["panic", "buggy", "manic"]);
        assert_eq!(next_guess(&words, &[]).map(Word::text), Some("panic"));

        let panic = Word::new("panic").unwrap();
        let history = [(panic, Pattern::new([crate::core::Mark::Miss; 5]))];
        assert_eq!(next_guess(&words, &history).map(Word::text), Some("buggy"));
    }

    #[test]
    fn plain_benchmark_wins_small_list() {
        let words = list(&["apple", "angle", "bench", "crane", "slate"]);
        let result =
            run_benchmark(GameConfig::new(GameMode::Plain, 6), &words, 5, false).unwrap();

        assert_eq!(result.mode, GameMode::Plain);
        assert_eq!(result.total_games, 5);
        assert_eq!(result.wins, 5);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cheat_benchmark_is_deterministic() {
        let words = list(&["panic", "buggy", "manic"]);
        let result =
            run_benchmark(GameConfig::new(GameMode::Cheat, 6), &words, 3, false).unwrap();

        assert_eq!(result.total_games, 3);
        assert_eq!(result.wins, 3);
        assert_eq!(result.distribution, BTreeMap::from([(2, 2), (3, 1)]));
        assert!((result.average_turns - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_sums_to_wins() {
        let words = list(WORDS);
        let result =
            run_benchmark(GameConfig::new(GameMode::Cheat, 6), &words, 20, false).unwrap();

        assert_eq!(result.total_games, 20);
        assert_eq!(result.distribution.values().sum::<usize>(), result.wins);
        assert!(result.distribution.keys().all(|turns| (1..=6).contains(turns)));
    }

    #[test]
    fn count_beyond_list_is_clamped() {
        let words = list(&["panic", "buggy"]);
        let result =
            run_benchmark(GameConfig::new(GameMode::Plain, 6), &words, 50, false).unwrap();
        assert_eq!(result.total_games, 2);
    }

    #[test]
    fn zero_turns_is_rejected() {
        let words = list(&["panic", "buggy"]);
        assert!(matches!(
            run_benchmark(GameConfig::new(GameMode::Cheat, 0), &words, 2, false),
            Err(GameError::InvalidArgument(_))
        ));
    }
}
