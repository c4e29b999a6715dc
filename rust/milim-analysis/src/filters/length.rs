//! Token length filter.

use milim_common::{Result, verify_arg};

use crate::filters::{FilterKind, TokenFilter};
use crate::stream::{BoxTokenStream, TokenStream};
use crate::token::Token;

/// Drops tokens whose text length in bytes falls outside `min..=max`.
///
/// With no upper bound the filter only drops tokens shorter than `min`.
/// Positions of surviving tokens are preserved.
#[derive(Debug, Clone)]
pub struct LengthFilter {
    min: usize,
    max: Option<usize>,
}

impl LengthFilter {
    pub fn new(min: usize, max: Option<usize>) -> Result<LengthFilter> {
        if let Some(max) = max {
            verify_arg!(max, max >= min);
        }
        Ok(LengthFilter { min, max })
    }

    /// Keeps only tokens of at most `max` bytes.
    pub fn max_bytes(max: usize) -> LengthFilter {
        LengthFilter { min: 0, max: Some(max) }
    }

    fn keeps(&self, text: &str) -> bool {
        text.len() >= self.min && self.max.is_none_or(|max| text.len() <= max)
    }
}

impl TokenFilter for LengthFilter {
    fn wrap<'a>(&'a self, input: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        BoxTokenStream::new(LengthStream {
            tail: input,
            filter: self,
        })
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Length
    }
}

struct LengthStream<'a> {
    tail: BoxTokenStream<'a>,
    filter: &'a LengthFilter,
}

impl TokenStream for LengthStream<'_> {
    fn advance(&mut self) -> bool {
        while self.tail.advance() {
            if self.filter.keeps(&self.tail.token().text) {
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
