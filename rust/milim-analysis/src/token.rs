//! The `Token` value type produced by tokenizers and reshaped by filters.
//!
//! A token couples a piece of text with enough metadata to map it back onto
//! the source string (`start_offset..end_offset`, in bytes) and to reason
//! about adjacency within the stream (`position` and `position_length`).

use serde::{Deserialize, Serialize};

/// A single unit of analyzed text.
///
/// Offsets are byte offsets into the original input and always fall on
/// `char` boundaries. Offsets refer to the text the token was cut from,
/// so they survive filters that rewrite `text` (lowercasing, stemming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token text, possibly rewritten by filters.
    pub text: String,
    /// Byte offset of the first byte of the token in the source text.
    pub start_offset: usize,
    /// Byte offset one past the last byte of the token in the source text.
    pub end_offset: usize,
    /// Ordinal position of the token within the stream, starting at zero.
    /// Filters that drop tokens leave holes rather than renumbering.
    pub position: usize,
    /// Number of positions the token occupies. `1` for ordinary tokens,
    /// larger for injected tokens that stand in for several words.
    pub position_length: usize,
}

impl Token {
    /// Creates a token occupying a single position.
    pub fn new(
        text: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
        position: usize,
    ) -> Token {
        debug_assert!(start_offset <= end_offset);
        Token {
            text: text.into(),
            start_offset,
            end_offset,
            position,
            position_length: 1,
        }
    }

    /// Returns the byte range of the token in the source text.
    #[inline]
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_offset..self.end_offset
    }

    /// Sets the number of positions occupied by the token.
    pub fn with_position_length(mut self, position_length: usize) -> Token {
        self.position_length = position_length;
        self
    }
}

impl Default for Token {
    fn default() -> Token {
        Token {
            text: String::new(),
            start_offset: 0,
            end_offset: 0,
            position: 0,
            position_length: 1,
        }
    }
}
