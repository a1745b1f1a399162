//! Ordered word list with constant-time membership

use super::Word;
use rustc_hash::FxHashSet;

/// The set of playable words
///
/// Keeps the original order (the first occurrence of a duplicate wins) and an
/// index for membership checks. Membership is the only validity check a guess
/// gets beyond its shape.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; 5]>,
}

impl WordList {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| index.insert(*word.chars()))
            .collect();

        Self { words, index }
    }

    /// Check whether `word` may be guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.words.iter().find(|w| **w == word)
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn keeps_order_and_drops_duplicates() {
        let words = list(&["slate", "crane", "slate", "irate"]);
        let texts: Vec<&str> = words.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn membership() {
        let words = list(&["slate", "crane"]);
        assert!(words.contains(&Word::new("crane").unwrap()));
        assert!(!words.contains(&Word::new("zzzzz").unwrap()));
    }

    #[test]
    fn find_by_text() {
        let words = list(&["slate", "crane"]);
        assert_eq!(words.find("CRANE").map(Word::text), Some("crane"));
        assert!(words.find("irate").is_none());
        assert!(words.find("nope").is_none());
    }

    #[test]
    fn empty_list() {
        let words = WordList::default();
        assert!(words.is_empty());
        assert_eq!(words.len(), 0);
    }
}
