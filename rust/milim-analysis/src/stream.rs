//! Streaming cursor over the tokens of a single piece of text.
//!
//! A `TokenStream` is consumed by interleaving `advance()` with the token
//! accessors, in the style of a database cursor:
//!
//! ```text
//! let mut stream = tokenizer.token_stream("the quick fox");
//! while stream.advance() {
//!     let text = stream.token_text();
//!     ...
//! }
//! ```
//!
//! The cursor starts positioned before the first token. Each successful
//! `advance()` moves it to the next token, which then stays readable until
//! the next call. Once `advance()` has returned `false` the stream is
//! exhausted and every further call returns `false` as well.

use crate::token::Token;

/// Cursor over a sequence of tokens.
///
/// Accessing the token before the first `advance()` is a contract violation
/// and panics. After exhaustion the accessors either panic or keep returning
/// the final token, but they never produce garbage.
pub trait TokenStream {
    /// Moves the cursor to the next token.
    ///
    /// Returns `true` if a token is available and `false` once the stream is
    /// exhausted. Exhaustion is sticky.
    fn advance(&mut self) -> bool;

    /// Returns the token the cursor is currently positioned on.
    fn token(&self) -> &Token;

    /// Returns a mutable reference to the current token, allowing filters
    /// to rewrite it in place.
    fn token_mut(&mut self) -> &mut Token;

    /// Advances the cursor and returns the next token, or `None` once the
    /// stream is exhausted.
    fn next_token(&mut self) -> Option<&Token> {
        if self.advance() { Some(self.token()) } else { None }
    }

    /// Returns the text of the current token without copying it.
    fn token_text(&self) -> &str {
        &self.token().text
    }

    /// Returns an owned snapshot of the current token, text and all
    /// position metadata included.
    fn token_detail(&self) -> Token {
        self.token().clone()
    }

    /// Runs the stream to exhaustion, handing each token to `sink`.
    fn drain_into(&mut self, sink: &mut dyn FnMut(&Token)) {
        while self.advance() {
            sink(self.token());
        }
    }
}

/// A boxed, type-erased `TokenStream` borrowing from the analyzed text.
pub struct BoxTokenStream<'a>(Box<dyn TokenStream + 'a>);

impl<'a> BoxTokenStream<'a> {
    /// Boxes a concrete stream.
    pub fn new<S>(stream: S) -> BoxTokenStream<'a>
    where
        S: TokenStream + 'a,
    {
        BoxTokenStream(Box::new(stream))
    }
}

impl TokenStream for BoxTokenStream<'_> {
    fn advance(&mut self) -> bool {
        self.0.advance()
    }

    fn token(&self) -> &Token {
        self.0.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.0.token_mut()
    }
}

/// Stream over an in-memory list of tokens.
///
/// Mostly useful in tests and as a building block for filters that need to
/// buffer their input.
pub struct VecTokenStream {
    tokens: Vec<Token>,
    /// Zero means "before the first token", `i` means "on `tokens[i - 1]`".
    cursor: usize,
}

impl VecTokenStream {
    pub fn new(tokens: Vec<Token>) -> VecTokenStream {
        VecTokenStream { tokens, cursor: 0 }
    }

    /// Builds a stream of single-position tokens from plain strings, with
    /// synthetic offsets and consecutive positions.
    pub fn from_texts<I, S>(texts: I) -> VecTokenStream
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut offset = 0;
        let tokens = texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| {
                let text = text.into();
                let start = offset;
                offset += text.len() + 1;
                Token::new(text, start, offset - 1, position)
            })
            .collect();
        VecTokenStream::new(tokens)
    }
}

impl TokenStream for VecTokenStream {
    fn advance(&mut self) -> bool {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        assert!(self.cursor != 0, "token accessed before the first advance");
        &self.tokens[self.cursor - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        assert!(self.cursor != 0, "token accessed before the first advance");
        &mut self.tokens[self.cursor - 1]
    }
}

/// Stream that is exhausted from the start.
pub struct EmptyTokenStream;

impl TokenStream for EmptyTokenStream {
    fn advance(&mut self) -> bool {
        false
    }

    fn token(&self) -> &Token {
        panic!("token accessed on an empty token stream")
    }

    fn token_mut(&mut self) -> &mut Token {
        panic!("token accessed on an empty token stream")
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxTokenStream, EmptyTokenStream, TokenStream, VecTokenStream};
    use crate::token::Token;

    #[test]
    fn test_vec_stream_cursor() {
        let mut stream = VecTokenStream::from_texts(["a", "bb", "ccc"]);
        assert!(stream.advance());
        assert_eq!(stream.token_text(), "a");
        assert_eq!(stream.token().position, 0);
        // The current token stays readable until the next advance.
        assert_eq!(stream.token_text(), "a");
        assert!(stream.advance());
        assert_eq!(stream.token_text(), "bb");
        assert!(stream.advance());
        assert_eq!(stream.token_text(), "ccc");
        assert_eq!(stream.token().position, 2);
        // Exhaustion is sticky.
        assert!(!stream.advance());
        assert!(!stream.advance());
        assert!(!stream.advance());
    }

    #[test]
    fn test_vec_stream_synthetic_offsets() {
        let mut stream = VecTokenStream::from_texts(["ab", "cd"]);
        stream.advance();
        assert_eq!(stream.token().byte_range(), 0..2);
        stream.advance();
        assert_eq!(stream.token().byte_range(), 3..5);
    }

    #[test]
    #[should_panic(expected = "before the first advance")]
    fn test_vec_stream_token_before_advance_panics() {
        let stream = VecTokenStream::from_texts(["a"]);
        let _ = stream.token();
    }

    #[test]
    fn test_token_detail_is_independent_snapshot() {
        let mut stream = VecTokenStream::from_texts(["left", "right"]);
        stream.advance();
        let detail = stream.token_detail();
        stream.advance();
        // The snapshot is unaffected by the cursor moving on.
        assert_eq!(detail.text, "left");
        assert_eq!(detail.position, 0);
        assert_eq!(stream.token_text(), "right");
    }

    #[test]
    fn test_next_token() {
        let mut stream = VecTokenStream::from_texts(["x", "y"]);
        assert_eq!(stream.next_token().map(|t| t.text.clone()), Some("x".to_string()));
        assert_eq!(stream.next_token().map(|t| t.text.clone()), Some("y".to_string()));
        assert!(stream.next_token().is_none());
        assert!(stream.next_token().is_none());
    }

    #[test]
    fn test_drain_into() {
        let mut stream = VecTokenStream::from_texts(["one", "two", "three"]);
        let mut collected = Vec::new();
        stream.drain_into(&mut |token| collected.push(token.text.clone()));
        assert_eq!(collected, ["one", "two", "three"]);
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = EmptyTokenStream;
        assert!(!stream.advance());
        assert!(!stream.advance());
    }

    #[test]
    #[should_panic(expected = "empty token stream")]
    fn test_empty_stream_token_panics() {
        let _ = EmptyTokenStream.token();
    }

    #[test]
    fn test_box_stream_forwards() {
        let mut stream = BoxTokenStream::new(VecTokenStream::from_texts(["boxed"]));
        assert!(stream.advance());
        assert_eq!(stream.token_text(), "boxed");
        stream.token_mut().text.push('!');
        assert_eq!(stream.token_text(), "boxed!");
        assert!(!stream.advance());
    }

    #[test]
    fn test_token_mut_rewrite_preserves_offsets() {
        let mut stream = VecTokenStream::new(vec![Token::new("Quick", 4, 9, 1)]);
        stream.advance();
        stream.token_mut().text = "quick".to_string();
        assert_eq!(stream.token_text(), "quick");
        assert_eq!(stream.token().byte_range(), 4..9);
        assert_eq!(stream.token().position, 1);
    }
}
