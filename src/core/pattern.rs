//! Wordle feedback pattern calculation and representation
//!
//! A pattern is the ordered tuple of five marks produced by scoring one guess
//! against one answer. Patterns compare by value and are totally ordered,
//! position by position, using `Hit < Present < Miss`.

use super::word::WORD_LENGTH;
use super::{Mark, Word};
use std::fmt;

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern([Mark; WORD_LENGTH]);

impl Pattern {
    /// All hits (perfect match)
    pub const PERFECT: Self = Self([Mark::Hit; WORD_LENGTH]);

    /// Create a pattern from raw marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// The marks, one per letter of the guess
    #[inline]
    #[must_use]
    pub const fn marks(self) -> [Mark; WORD_LENGTH] {
        self.0
    }

    /// Check if this is a perfect match (all hits)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Each answer letter satisfies at most one guess letter. Hits consume
    /// their answer position first; remaining guess letters then take the
    /// leftmost unused matching answer position.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{Mark, Pattern, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let answer = Word::new("angle").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     pattern.marks(),
    ///     [Mark::Hit, Mark::Miss, Mark::Miss, Mark::Hit, Mark::Hit]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut scored = [false; WORD_LENGTH];
        let mut used = [false; WORD_LENGTH];

        // Allow: Index needed to access guess[i], answer[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                marks[i] = Mark::Hit;
                scored[i] = true;
                used[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if scored[i] {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !used[j] && answer[j] == guess[i]) {
                marks[i] = Mark::Present;
                used[j] = true;
            }
        }

        Self(marks)
    }

    /// Count the number of hit marks
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.count(Mark::Hit)
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_presents(self) -> usize {
        self.count(Mark::Present)
    }

    fn count(self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl From<Pattern> for [Mark; WORD_LENGTH] {
    fn from(pattern: Pattern) -> Self {
        pattern.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.0.iter().map(|m| m.as_str()).collect();
        f.write_str(&tokens.join(","))
    }
}
