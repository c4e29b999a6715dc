//! Regex tokenizer.
//!
//! Emits every non-empty match of a regular expression as a token, in
//! match order. Anything between matches is discarded.

use milim_common::{Result, error::Error};

use crate::stream::TokenStream;
use crate::token::Token;
use crate::tokenizers::{Tokenizer, TokenizerKind};

#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: regex::Regex,
}

impl RegexTokenizer {
    /// Compiles `pattern` into a tokenizer.
    pub fn new(pattern: &str) -> Result<RegexTokenizer> {
        let pattern = regex::Regex::new(pattern).map_err(|e| {
            Error::invalid_arg("pattern", format!("invalid regular expression: {e}"))
        })?;
        Ok(RegexTokenizer { pattern })
    }

    /// Returns the source pattern the tokenizer was compiled from.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    type TokenStream<'a> = RegexTokenStream<'a>;

    fn token_stream<'a>(&'a self, text: &'a str) -> RegexTokenStream<'a> {
        RegexTokenStream {
            matches: self.pattern.find_iter(text),
            token: Token::default(),
            position: 0,
            entered: false,
        }
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Regex
    }
}

pub struct RegexTokenStream<'a> {
    matches: regex::Matches<'a, 'a>,
    token: Token,
    position: usize,
    entered: bool,
}

impl TokenStream for RegexTokenStream<'_> {
    fn advance(&mut self) -> bool {
        for found in self.matches.by_ref() {
            // Patterns like `a*` can produce empty matches, skip those.
            if found.is_empty() {
                continue;
            }
            self.token.text.clear();
            self.token.text.push_str(found.as_str());
            self.token.start_offset = found.start();
            self.token.end_offset = found.end();
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
