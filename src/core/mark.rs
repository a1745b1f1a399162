//! Per-letter feedback marks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome for a single letter of a guess
///
/// The declaration order doubles as the canonical ordering
/// (`Hit < Present < Miss`) used to break ties between patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mark {
    /// Right letter in the right position
    Hit,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter not matched
    Miss,
}

impl Mark {
    /// Wire token for this mark
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Present => "PRESENT",
            Self::Miss => "MISS",
        }
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
