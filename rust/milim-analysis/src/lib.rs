//! Text analysis for milim: turning raw text into token streams.
//!
//! The crate is organized around three building blocks:
//!
//! * [`tokenizers`] cut text into tokens carrying byte offsets and
//!   stream positions.
//! * [`filters`] rewrite, drop or inject tokens on their way through.
//! * [`TextAnalyzer`] combines one tokenizer with an ordered filter chain.
//!   It is usually what callers want, either through its presets or built
//!   from a JSON description by the [`config`] module.
//!
//! ```
//! use milim_analysis::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::english();
//! let tokens = analyzer.analyze("The running cats");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["run", "cat"]);
//! ```

pub mod analyzer;
pub mod config;
pub mod filters;
pub mod stream;
pub mod token;
pub mod tokenizers;

pub use analyzer::{TextAnalyzer, TextAnalyzerBuilder};
pub use config::{AnalyzerParams, build_analyzer, validate_params};
pub use filters::{FilterKind, TokenFilter, create_filter};
pub use stream::{BoxTokenStream, EmptyTokenStream, TokenStream, VecTokenStream};
pub use token::Token;
pub use tokenizers::{DynTokenizer, Tokenizer, TokenizerKind, create_tokenizer};
