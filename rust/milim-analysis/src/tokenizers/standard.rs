//! Unicode word tokenizer.
//!
//! Splits text on UAX #29 word boundaries and emits the segments that
//! contain at least one alphanumeric scalar, so punctuation and whitespace
//! runs never surface as tokens. This keeps constructs like `don't`,
//! `3.14` or `abc123` together as single tokens, while ideographic scripts
//! without word separators fall back to one token per character.

use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

use crate::stream::TokenStream;
use crate::token::Token;
use crate::tokenizers::{Tokenizer, TokenizerKind};

/// The default tokenizer of the analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct StandardTokenizer;

impl StandardTokenizer {
    pub fn new() -> StandardTokenizer {
        StandardTokenizer
    }
}

impl Tokenizer for StandardTokenizer {
    type TokenStream<'a> = StandardTokenStream<'a>;

    fn token_stream<'a>(&'a self, text: &'a str) -> StandardTokenStream<'a> {
        StandardTokenStream {
            bounds: text.split_word_bound_indices(),
            token: Token::default(),
            position: 0,
            entered: false,
        }
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Standard
    }
}

/// Stream of Unicode words over a single piece of text.
pub struct StandardTokenStream<'a> {
    bounds: UWordBoundIndices<'a>,
    token: Token,
    position: usize,
    entered: bool,
}

impl TokenStream for StandardTokenStream<'_> {
    fn advance(&mut self) -> bool {
        for (offset, segment) in self.bounds.by_ref() {
            if !segment.chars().any(char::is_alphanumeric) {
                continue;
            }
            self.token.text.clear();
            self.token.text.push_str(segment);
            self.token.start_offset = offset;
            self.token.end_offset = offset + segment.len();
            self.token.position = self.position;
            self.token.position_length = 1;
            self.position += 1;
            self.entered = true;
            return true;
        }
        false
    }

    fn token(&self) -> &Token {
        assert!(self.entered, "token accessed before the first advance");
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        assert!(self.entered, "token accessed before the first advance");
        &mut self.token
    }
}
