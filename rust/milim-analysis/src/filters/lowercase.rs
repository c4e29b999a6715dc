//! Lowercase filter.

use crate::filters::{FilterKind, TokenFilter};
use crate::stream::{BoxTokenStream, TokenStream};
use crate::token::Token;

/// Rewrites token text to its Unicode lowercase form.
///
/// Offsets are left untouched even when lowercasing changes the byte
/// length of the text, as it does for a handful of scripts.
#[derive(Debug, Clone, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> LowercaseFilter {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn wrap<'a>(&'a self, input: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        BoxTokenStream::new(LowercaseStream {
            tail: input,
            buffer: String::new(),
        })
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Lowercase
    }
}

struct LowercaseStream<'a> {
    tail: BoxTokenStream<'a>,
    buffer: String,
}

impl TokenStream for LowercaseStream<'_> {
    fn advance(&mut self) -> bool {
        if !self.tail.advance() {
            return false;
        }
        let token = self.tail.token_mut();
        // Skip the copy for text that is already lowercase.
        if token.text.chars().any(char::is_uppercase) {
            self.buffer.clear();
            self.buffer.extend(token.text.chars().flat_map(char::to_lowercase));
            std::mem::swap(&mut token.text, &mut self.buffer);
        }
        true
    }

    fn token(&self) -> &Token {
        self.tail.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.tail.token_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::LowercaseFilter;
    use crate::filters::TokenFilter;
    use crate::stream::{BoxTokenStream, TokenStream, VecTokenStream};
    use crate::token::Token;

    fn lowercase(texts: &[&str]) -> Vec<String> {
        let filter = LowercaseFilter::new();
        let input = BoxTokenStream::new(VecTokenStream::from_texts(texts.iter().copied()));
        let mut stream = filter.wrap(input);
        let mut out = Vec::new();
        stream.drain_into(&mut |token| out.push(token.text.clone()));
        out
    }

    #[test]
    fn test_lowercase_rewrites_text() {
        assert_eq!(lowercase(&["Hello", "WORLD", "mixed"]), ["hello", "world", "mixed"]);
    }

    #[test]
    fn test_lowercase_non_ascii() {
        assert_eq!(lowercase(&["\u{c9}T\u{c9}"]), ["\u{e9}t\u{e9}"]);
        // The Turkish dotted capital I expands to two chars when lowercased.
        assert_eq!(lowercase(&["\u{130}"]), ["i\u{307}"]);
    }

    #[test]
    fn test_lowercase_preserves_metadata() {
        let filter = LowercaseFilter::new();
        let input = BoxTokenStream::new(VecTokenStream::new(vec![Token::new("Quick", 4, 9, 2)]));
        let mut stream = filter.wrap(input);
        assert!(stream.advance());
        let token = stream.token_detail();
        assert_eq!(token.text, "quick");
        assert_eq!(token.byte_range(), 4..9);
        assert_eq!(token.position, 2);
        assert_eq!(token.position_length, 1);
    }
}
