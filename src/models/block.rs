//! Block types and the available-block inventory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three movable block types of a Lazor board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockKind {
    /// `A`: reflects a laser back along the mirrored axis
    Reflect,
    /// `B`: absorbs any laser that hits it
    Opaque,
    /// `C`: lets the laser through and also reflects it
    Refract,
}

impl BlockKind {
    /// Returns the block kind for a letter (`a`, `b`, `c`, case-insensitive).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Self::Reflect),
            'b' => Some(Self::Opaque),
            'c' => Some(Self::Refract),
            _ => None,
        }
    }

    /// Returns the block kind for a whole token, which must be a single letter.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => None,
        }
    }

    /// Canonical uppercase letter used in board files.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Reflect => 'A',
            Self::Opaque => 'B',
            Self::Refract => 'C',
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One line of block inventory, e.g. `A 0 2` or `B 3`.
///
/// `compact` keeps the source text with all whitespace removed (`A02`),
/// which is how the inventory has always been reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Block type
    pub kind: BlockKind,
    /// Number of blocks of this type available to place
    pub count: u32,
    /// Source text with whitespace removed
    pub compact: String,
}

impl BlockEntry {
    /// Creates an entry from its parts.
    pub fn new(kind: BlockKind, count: u32, compact: impl Into<String>) -> Self {
        Self {
            kind,
            count,
            compact: compact.into(),
        }
    }
}

impl fmt::Display for BlockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact)
    }
}
