//! Core domain types for Wordle
//!
//! Words, marks, feedback patterns and word lists. Everything here is pure and
//! shared by both game engines.

mod mark;
mod pattern;
mod word;
mod word_list;

pub use mark::Mark;
pub use pattern::Pattern;
pub use word::{WORD_LENGTH, Word, WordError};
pub use word_list::WordList;
