//! Whitespace tokenizer.
//!
//! Emits maximal runs of non-whitespace characters, leaving punctuation
//! attached to the words it touches. Useful when the input is already
//! pre-tokenized or when punctuation is significant.

use std::str::CharIndices;

use crate::stream::TokenStream;
use crate::token::Token;
use crate::tokenizers::{Tokenizer, TokenizerKind};

#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> WhitespaceTokenizer {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    type TokenStream<'a> = WhitespaceTokenStream<'a>;

    fn token_stream<'a>(&'a self, text: &'a str) -> WhitespaceTokenStream<'a> {
        WhitespaceTokenStream {
            text,
            chars: text.char_indices(),
            token: Token::default(),
            position: 0,
            entered: false,
        }
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Whitespace
    }
}

pub struct WhitespaceTokenStream<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    token: Token,
    position: usize,
    entered: bool,
}

impl TokenStream for WhitespaceTokenStream<'_> {
    fn advance(&mut self) -> bool {
        let mut start = None;
        let mut end = 0;
        for (offset, ch) in self.chars.by_ref() {
            if ch.is_whitespace() {
                if start.is_some() {
                    break;
                }
            } else {
                if start.is_none() {
                    start = Some(offset);
                }
                end = offset + ch.len_utf8();
            }
        }
        let Some(start) = start else {
            return false;
        };
        self.token.text.clear();
        self.token.text.push_str(&self.text[start..end]);
        self.token.start_offset = start;
        self.token.end_offset = end;
        self.token.position = self.position;
        self.token.position_length = 1;
        self.position += 1;
        self.entered = true;
        true
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
