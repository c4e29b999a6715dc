//! Synonym filter.
//!
//! Injects alternative spellings for tokens matching a rule. The original
//! token always comes through first, immediately followed by its
//! alternatives, all sharing the original's position and offsets. An
//! alternative spanning several words gets a `position_length` equal to
//! its word count, so phrase queries can treat it as covering that many
//! positions.
//!
//! Matching is exact on the token text, run this filter after whatever
//! normalization the rules assume.

use std::collections::VecDeque;

use ahash::AHashMap;

use crate::filters::{FilterKind, TokenFilter};
use crate::stream::{BoxTokenStream, TokenStream};
use crate::token::Token;

/// Injects synonym tokens at the position of the matching original.
#[derive(Debug, Clone, Default)]
pub struct SynonymFilter {
    map: AHashMap<String, Vec<String>>,
}

impl SynonymFilter {
    /// Builds the filter from `(text, alternatives)` rules.
    pub fn new(rules: impl IntoIterator<Item = (String, Vec<String>)>) -> SynonymFilter {
        SynonymFilter {
            map: rules.into_iter().collect(),
        }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl TokenFilter for SynonymFilter {
    fn wrap<'a>(&'a self, input: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        BoxTokenStream::new(SynonymStream {
            tail: input,
            map: &self.map,
            pending: VecDeque::new(),
            token: Token::default(),
            entered: false,
        })
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Synonym
    }
}

struct SynonymStream<'a> {
    tail: BoxTokenStream<'a>,
    map: &'a AHashMap<String, Vec<String>>,
    /// Alternatives queued behind the original that triggered them.
    pending: VecDeque<Token>,
    token: Token,
    entered: bool,
}

impl TokenStream for SynonymStream<'_> {
    fn advance(&mut self) -> bool {
        if let Some(token) = self.pending.pop_front() {
            self.token = token;
            self.entered = true;
            return true;
        }
        if !self.tail.advance() {
            return false;
        }
        let source = self.tail.token();
        if let Some(alternatives) = self.map.get(source.text.as_str()) {
            for alternative in alternatives {
                let words = alternative.split_whitespace().count().max(1);
                self.pending.push_back(
                    Token::new(
                        alternative.clone(),
                        source.start_offset,
                        source.end_offset,
                        source.position,
                    )
                    .with_position_length(words),
                );
            }
        }
        self.token = source.clone();
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
