//! Character n-gram tokenizer.
//!
//! Emits every substring of `min_gram..=max_gram` characters, ordered by
//! start offset and then by gram length, so all grams cut from the same
//! start position come out together, shortest first. In prefix mode only
//! grams anchored at the start of the input are emitted, which is the
//! shape needed for edge-gram style prefix matching.
//!
//! Grams are measured in characters but addressed in bytes, so offsets
//! always fall on `char` boundaries. Positions number the emitted grams
//! sequentially and carry no relation to word positions.

use milim_common::{Result, verify_arg};

use crate::stream::TokenStream;
use crate::token::Token;
use crate::tokenizers::{Tokenizer, TokenizerKind};

#[derive(Debug, Clone)]
pub struct NgramTokenizer {
    min_gram: usize,
    max_gram: usize,
    prefix_only: bool,
}

impl NgramTokenizer {
    /// Creates a tokenizer emitting all grams of `min_gram..=max_gram`
    /// characters.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<NgramTokenizer> {
        NgramTokenizer::create(min_gram, max_gram, false)
    }

    /// Creates a tokenizer emitting only grams anchored at the start of
    /// the input.
    pub fn prefix_only(min_gram: usize, max_gram: usize) -> Result<NgramTokenizer> {
        NgramTokenizer::create(min_gram, max_gram, true)
    }

    fn create(min_gram: usize, max_gram: usize, prefix_only: bool) -> Result<NgramTokenizer> {
        verify_arg!(min_gram, min_gram >= 1);
        verify_arg!(max_gram, max_gram >= min_gram);
        Ok(NgramTokenizer {
            min_gram,
            max_gram,
            prefix_only,
        })
    }
}

impl Tokenizer for NgramTokenizer {
    type TokenStream<'a> = NgramTokenStream<'a>;

    fn token_stream<'a>(&'a self, text: &'a str) -> NgramTokenStream<'a> {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
        boundaries.push(text.len());
        NgramTokenStream {
            text,
            boundaries,
            idx: 0,
            gram: self.min_gram,
            min_gram: self.min_gram,
            max_gram: self.max_gram,
            prefix_only: self.prefix_only,
            done: false,
            token: Token::default(),
            position: 0,
            entered: false,
        }
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Ngram
    }
}

pub struct NgramTokenStream<'a> {
    text: &'a str,
    /// Byte offsets of character starts, with the total length appended,
    /// so gram `(idx, len)` spans `boundaries[idx]..boundaries[idx + len]`.
    boundaries: Vec<usize>,
    idx: usize,
    gram: usize,
    min_gram: usize,
    max_gram: usize,
    prefix_only: bool,
    done: bool,
    token: Token,
    position: usize,
    entered: bool,
}

impl TokenStream for NgramTokenStream<'_> {
    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let char_count = self.boundaries.len() - 1;
        while self.idx + self.min_gram <= char_count {
            if self.gram <= self.max_gram && self.idx + self.gram <= char_count {
                let start = self.boundaries[self.idx];
                let end = self.boundaries[self.idx + self.gram];
                self.token.text.clear();
                self.token.text.push_str(&self.text[start..end]);
                self.token.start_offset = start;
                self.token.end_offset = end;
                self.token.position = self.position;
                self.token.position_length = 1;
                self.position += 1;
                self.gram += 1;
                self.entered = true;
                return true;
            }
            if self.prefix_only {
                break;
            }
            self.idx += 1;
            self.gram = self.min_gram;
        }
        self.done = true;
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

#[cfg(test)]
mod tests {
    use super::NgramTokenizer;
    use crate::stream::TokenStream;
    use crate::token::Token;
    use crate::tokenizers::Tokenizer;

    fn tokenize(tokenizer: &NgramTokenizer, text: &str) -> Vec<Token> {
        let mut stream = tokenizer.token_stream(text);
        let mut tokens = Vec::new();
        stream.drain_into(&mut |token| tokens.push(token.clone()));
        tokens
    }

    #[test]
    fn test_ngram_order_and_offsets() {
        let tokenizer = NgramTokenizer::new(1, 2).unwrap();
        let tokens = tokenize(&tokenizer, "abc");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        // Ordered by start offset, then by gram length.
        assert_eq!(texts, ["a", "ab", "b", "bc", "c"]);
        assert_eq!(tokens[1].byte_range(), 0..2);
        assert_eq!(tokens[3].byte_range(), 1..3);
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_ngram_fixed_size() {
        let tokenizer = NgramTokenizer::new(2, 2).unwrap();
        let texts: Vec<String> = tokenize(&tokenizer, "abcd").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, ["ab", "bc", "cd"]);
    }

    #[test]
    fn test_ngram_prefix_only() {
        let tokenizer = NgramTokenizer::prefix_only(2, 4).unwrap();
        let tokens = tokenize(&tokenizer, "abcde");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["ab", "abc", "abcd"]);
        assert!(tokens.iter().all(|t| t.start_offset == 0));
    }

    #[test]
    fn test_ngram_short_input() {
        let tokenizer = NgramTokenizer::new(3, 5).unwrap();
        assert!(tokenize(&tokenizer, "ab").is_empty());
        assert!(tokenize(&tokenizer, "").is_empty());
        // Exactly min_gram chars produce a single gram.
        let texts: Vec<String> = tokenize(&tokenizer, "abc").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, ["abc"]);
    }

    #[test]
    fn test_ngram_multibyte_boundaries() {
        let tokenizer = NgramTokenizer::new(2, 2).unwrap();
        let tokens = tokenize(&tokenizer, "h\u{e9}l");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["h\u{e9}", "\u{e9}l"]);
        // Grams are measured in chars but addressed in bytes.
        assert_eq!(tokens[0].byte_range(), 0..3);
        assert_eq!(tokens[1].byte_range(), 1..4);
    }

    #[test]
    fn test_ngram_rejects_bad_bounds() {
        assert!(NgramTokenizer::new(0, 2).is_err());
        assert!(NgramTokenizer::new(3, 2).is_err());
        assert!(NgramTokenizer::prefix_only(0, 0).is_err());
        assert!(NgramTokenizer::new(2, 2).is_ok());
    }

    #[test]
    fn test_ngram_sticky_exhaustion() {
        let tokenizer = NgramTokenizer::new(1, 1).unwrap();
        let mut stream = tokenizer.token_stream("x");
        assert!(stream.advance());
        assert!(!stream.advance());
        assert!(!stream.advance());
    }
}
