//! Text analyzer: one tokenizer followed by an ordered chain of filters.
//!
//! An analyzer is built once, is immutable afterwards, and can run any
//! number of concurrent scans since per-scan state lives entirely in the
//! streams it hands out.
//!
//! ```text
//! let analyzer = TextAnalyzer::english();
//! let mut stream = analyzer.token_stream("The running cats");
//! while stream.advance() {
//!     println!("{}", stream.token_text());
//! }
//! ```

use crate::filters::{LowercaseFilter, StemmerFilter, StopFilter, TokenFilter};
use crate::stream::{BoxTokenStream, TokenStream};
use crate::token::Token;
use crate::tokenizers::{DynTokenizer, StandardTokenizer, Tokenizer, TokenizerKind};

/// Turns raw text into a filtered token stream.
pub struct TextAnalyzer {
    tokenizer: Box<dyn DynTokenizer>,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl TextAnalyzer {
    /// Starts building an analyzer around `tokenizer`.
    pub fn builder<T>(tokenizer: T) -> TextAnalyzerBuilder
    where
        T: Tokenizer,
    {
        TextAnalyzerBuilder {
            tokenizer: Box::new(tokenizer),
            filters: Vec::new(),
        }
    }

    /// Standard tokenizer followed by lowercasing. This is the analyzer
    /// used when no configuration is given at all.
    pub fn standard() -> TextAnalyzer {
        TextAnalyzer::builder(StandardTokenizer::new())
            .filter(LowercaseFilter::new())
            .build()
    }

    /// English text preset: standard tokenizer, lowercasing, English stop
    /// words and Snowball stemming.
    pub fn english() -> TextAnalyzer {
        TextAnalyzer::builder(StandardTokenizer::new())
            .filter(LowercaseFilter::new())
            .filter(StopFilter::for_language("english").expect("built-in english stop words"))
            .filter(StemmerFilter::english())
            .build()
    }

    /// Starts scanning `text`. The returned stream borrows the analyzer
    /// and the text and is positioned before the first token.
    pub fn token_stream<'a>(&'a self, text: &'a str) -> BoxTokenStream<'a> {
        let mut stream = self.tokenizer.box_token_stream(text);
        for filter in &self.filters {
            stream = filter.wrap(stream);
        }
        stream
    }

    /// Runs the whole pipeline over `text` and collects the tokens.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut stream = self.token_stream(text);
        stream.drain_into(&mut |token| tokens.push(token.clone()));
        tokens
    }

    pub fn tokenizer_kind(&self) -> TokenizerKind {
        self.tokenizer.kind()
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }
}

impl Default for TextAnalyzer {
    fn default() -> TextAnalyzer {
        TextAnalyzer::standard()
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("tokenizer", &self.tokenizer.kind())
            .field("filters", &self.filter_names())
            .finish()
    }
}

/// Builder for [`TextAnalyzer`], collecting filters in application order.
pub struct TextAnalyzerBuilder {
    tokenizer: Box<dyn DynTokenizer>,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl TextAnalyzerBuilder {
    /// Appends a filter to the end of the chain.
    pub fn filter<F>(mut self, filter: F) -> TextAnalyzerBuilder
    where
        F: TokenFilter,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Appends an already boxed filter to the end of the chain.
    pub fn boxed_filter(mut self, filter: Box<dyn TokenFilter>) -> TextAnalyzerBuilder {
        self.filters.push(filter);
        self
    }

    pub fn build(self) -> TextAnalyzer {
        TextAnalyzer {
            tokenizer: self.tokenizer,
            filters: self.filters,
        }
    }
}
