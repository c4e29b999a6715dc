//! Alphanumeric-only filter.

use crate::filters::{FilterKind, TokenFilter};
use crate::stream::{BoxTokenStream, TokenStream};
use crate::token::Token;

/// Drops every token containing a non-alphanumeric character.
///
/// Alphanumeric is judged per Unicode, so accented letters and
/// ideographs pass. Tokens are dropped whole, never stripped.
#[derive(Debug, Clone, Default)]
pub struct AlphaNumFilter;

impl AlphaNumFilter {
    pub fn new() -> AlphaNumFilter {
        AlphaNumFilter
    }
}

impl TokenFilter for AlphaNumFilter {
    fn wrap<'a>(&'a self, input: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        BoxTokenStream::new(AlphaNumStream { tail: input })
    }

    fn kind(&self) -> FilterKind {
        FilterKind::AlphaNum
    }
}

struct AlphaNumStream<'a> {
    tail: BoxTokenStream<'a>,
}

impl TokenStream for AlphaNumStream<'_> {
    fn advance(&mut self) -> bool {
        while self.tail.advance() {
            let text = &self.tail.token().text;
            if !text.is_empty() && text.chars().all(char::is_alphanumeric) {
                return true;
            }
        }
        false
    }

    fn token(&self) -> &Token {
        self.tail.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.tail.token_mut()
    }
}
