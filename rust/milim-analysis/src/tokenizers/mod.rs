//! Tokenizers cut a piece of text into a stream of [`Token`]s.
//!
//! A tokenizer is a cheap, reusable description of how to split text. The
//! actual work happens in the stream returned by
//! [`Tokenizer::token_stream`], which borrows both the tokenizer and the
//! text for the duration of the scan and hands out tokens one at a time.
//!
//! Tokenizers assign byte offsets and consecutive positions; downstream
//! filters may rewrite or drop tokens but never reassign positions.
//!
//! [`Token`]: crate::token::Token

pub mod keyword;
pub mod ngram;
pub mod regex;
pub mod standard;
pub mod whitespace;

pub use keyword::KeywordTokenizer;
pub use ngram::NgramTokenizer;
pub use regex::RegexTokenizer;
pub use standard::StandardTokenizer;
pub use whitespace::WhitespaceTokenizer;

use milim_common::{Result, error::Error};

use crate::stream::{BoxTokenStream, TokenStream};

/// Splits text into a stream of tokens.
///
/// Implementations are stateless with respect to the text being analyzed;
/// per-scan state lives in the associated stream type, so a single tokenizer
/// can serve any number of scans, including concurrent ones.
pub trait Tokenizer: Send + Sync + 'static {
    /// The stream type produced by this tokenizer.
    type TokenStream<'a>: TokenStream + 'a;

    /// Starts scanning `text`, positioned before the first token.
    fn token_stream<'a>(&'a self, text: &'a str) -> Self::TokenStream<'a>;

    /// Identifies the tokenizer.
    fn kind(&self) -> TokenizerKind;

    /// Returns the well-known name of the tokenizer.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Object-safe companion of [`Tokenizer`], used wherever tokenizers of
/// different concrete types have to live behind one pointer.
pub trait DynTokenizer: Send + Sync {
    /// Starts scanning `text`, erasing the concrete stream type.
    fn box_token_stream<'a>(&'a self, text: &'a str) -> BoxTokenStream<'a>;

    /// Identifies the tokenizer.
    fn kind(&self) -> TokenizerKind;
}

impl<T> DynTokenizer for T
where
    T: Tokenizer,
{
    fn box_token_stream<'a>(&'a self, text: &'a str) -> BoxTokenStream<'a> {
        BoxTokenStream::new(self.token_stream(text))
    }

    fn kind(&self) -> TokenizerKind {
        Tokenizer::kind(self)
    }
}

/// Identifies one of the built-in tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenizerKind {
    /// Unicode word segmentation.
    Standard,
    /// Split on whitespace runs.
    Whitespace,
    /// The whole input as a single token.
    Keyword,
    /// Character n-grams.
    Ngram,
    /// Matches of a regular expression.
    Regex,
}

impl TokenizerKind {
    /// Returns the name under which the tokenizer is known in analyzer
    /// configurations.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Standard => "standard",
            TokenizerKind::Whitespace => "whitespace",
            TokenizerKind::Keyword => "keyword",
            TokenizerKind::Ngram => "ngram",
            TokenizerKind::Regex => "regex",
        }
    }
}

impl std::fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for TokenizerKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<TokenizerKind> {
        match name {
            "standard" => Ok(TokenizerKind::Standard),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            "keyword" => Ok(TokenizerKind::Keyword),
            "ngram" => Ok(TokenizerKind::Ngram),
            "regex" => Ok(TokenizerKind::Regex),
            _ => Err(Error::invalid_arg(
                "name",
                format!("unknown tokenizer '{name}'"),
            )),
        }
    }
}

/// One of the built-in tokenizers, dispatched by value.
#[derive(Debug, Clone)]
pub enum TokenizerType {
    Standard(StandardTokenizer),
    Whitespace(WhitespaceTokenizer),
    Keyword(KeywordTokenizer),
    Ngram(NgramTokenizer),
    Regex(RegexTokenizer),
}

impl Tokenizer for TokenizerType {
    type TokenStream<'a> = BoxTokenStream<'a>;

    fn token_stream<'a>(&'a self, text: &'a str) -> BoxTokenStream<'a> {
        match self {
            TokenizerType::Standard(t) => BoxTokenStream::new(t.token_stream(text)),
            TokenizerType::Whitespace(t) => BoxTokenStream::new(t.token_stream(text)),
            TokenizerType::Keyword(t) => BoxTokenStream::new(t.token_stream(text)),
            TokenizerType::Ngram(t) => BoxTokenStream::new(t.token_stream(text)),
            TokenizerType::Regex(t) => BoxTokenStream::new(t.token_stream(text)),
        }
    }

    fn kind(&self) -> TokenizerKind {
        match self {
            TokenizerType::Standard(_) => TokenizerKind::Standard,
            TokenizerType::Whitespace(_) => TokenizerKind::Whitespace,
            TokenizerType::Keyword(_) => TokenizerKind::Keyword,
            TokenizerType::Ngram(_) => TokenizerKind::Ngram,
            TokenizerType::Regex(_) => TokenizerKind::Regex,
        }
    }
}

/// Creates one of the built-in tokenizers from its well-known name.
///
/// Only tokenizers that work without parameters can be created this way.
/// The `ngram` and `regex` tokenizers are rejected here and have to be
/// configured through [`AnalyzerParams`] instead.
///
/// [`AnalyzerParams`]: crate::config::AnalyzerParams
pub fn create_tokenizer(name: &str) -> Result<TokenizerType> {
    match TokenizerKind::try_from(name)? {
        TokenizerKind::Standard => Ok(TokenizerType::Standard(StandardTokenizer::new())),
        TokenizerKind::Whitespace => Ok(TokenizerType::Whitespace(WhitespaceTokenizer::new())),
        TokenizerKind::Keyword => Ok(TokenizerType::Keyword(KeywordTokenizer::new())),
        TokenizerKind::Ngram => Err(Error::invalid_arg(
            "name",
            "the ngram tokenizer takes parameters and cannot be created by name alone",
        )),
        TokenizerKind::Regex => Err(Error::invalid_arg(
            "name",
            "the regex tokenizer takes parameters and cannot be created by name alone",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{DynTokenizer, Tokenizer, TokenizerKind, TokenizerType, create_tokenizer};
    use crate::stream::TokenStream;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [
            TokenizerKind::Standard,
            TokenizerKind::Whitespace,
            TokenizerKind::Keyword,
            TokenizerKind::Ngram,
            TokenizerKind::Regex,
        ] {
            assert_eq!(TokenizerKind::try_from(kind.name()).unwrap(), kind);
        }
        assert!(TokenizerKind::try_from("jieba").is_err());
    }

    #[test]
    fn test_create_tokenizer_by_name() {
        let tokenizer = create_tokenizer("standard").unwrap();
        assert!(matches!(tokenizer, TokenizerType::Standard(_)));
        assert_eq!(tokenizer.name(), "standard");

        let tokenizer = create_tokenizer("whitespace").unwrap();
        assert!(matches!(tokenizer, TokenizerType::Whitespace(_)));

        let tokenizer = create_tokenizer("keyword").unwrap();
        assert!(matches!(tokenizer, TokenizerType::Keyword(_)));
    }

    #[test]
    fn test_create_tokenizer_rejects_parameterized_kinds() {
        assert!(create_tokenizer("ngram").is_err());
        assert!(create_tokenizer("regex").is_err());
        assert!(create_tokenizer("no-such-tokenizer").is_err());
    }

    #[test]
    fn test_tokenizer_type_dispatch() {
        let tokenizer = create_tokenizer("standard").unwrap();
        let mut stream = tokenizer.token_stream("alpha beta");
        assert!(stream.advance());
        assert_eq!(stream.token_text(), "alpha");
        assert!(stream.advance());
        assert_eq!(stream.token_text(), "beta");
        assert!(!stream.advance());
    }

    #[test]
    fn test_dyn_tokenizer_erasure() {
        let tokenizer: Box<dyn DynTokenizer> = Box::new(create_tokenizer("whitespace").unwrap());
        let mut stream = tokenizer.box_token_stream("one  two");
        let mut texts = Vec::new();
        stream.drain_into(&mut |token| texts.push(token.text.clone()));
        assert_eq!(texts, ["one", "two"]);
        assert_eq!(tokenizer.kind(), TokenizerKind::Whitespace);
    }
}
