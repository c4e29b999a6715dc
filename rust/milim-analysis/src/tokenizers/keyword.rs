//! Keyword tokenizer.
//!
//! Emits the whole input as a single token, or nothing at all for empty
//! input. Intended for identifiers, tags and other fields that must match
//! verbatim.

use crate::stream::TokenStream;
use crate::token::Token;
use crate::tokenizers::{Tokenizer, TokenizerKind};

#[derive(Debug, Clone, Default)]
pub struct KeywordTokenizer;

impl KeywordTokenizer {
    pub fn new() -> KeywordTokenizer {
        KeywordTokenizer
    }
}

impl Tokenizer for KeywordTokenizer {
    type TokenStream<'a> = KeywordTokenStream<'a>;

    fn token_stream<'a>(&'a self, text: &'a str) -> KeywordTokenStream<'a> {
        KeywordTokenStream {
            text,
            token: Token::default(),
            emitted: false,
        }
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Keyword
    }
}

pub struct KeywordTokenStream<'a> {
    text: &'a str,
    token: Token,
    emitted: bool,
}

impl TokenStream for KeywordTokenStream<'_> {
    fn advance(&mut self) -> bool {
        if self.emitted || self.text.is_empty() {
            return false;
        }
        self.token.text.clear();
        self.token.text.push_str(self.text);
        self.token.start_offset = 0;
        self.token.end_offset = self.text.len();
        self.token.position = 0;
        self.token.position_length = 1;
        self.emitted = true;
        true
    }

    fn token(&self) -> &Token {
        assert!(self.emitted, "token accessed before the first advance");
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        assert!(self.emitted, "token accessed before the first advance");
        &mut self.token
    }
}
