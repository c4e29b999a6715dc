//! Token filters transform the stream a tokenizer produces.
//!
//! A filter wraps an upstream [`BoxTokenStream`] and returns a new stream
//! that rewrites tokens (lowercasing, stemming), drops them (stop words,
//! length limits) or injects extra ones (synonyms). Filters compose in
//! order, each seeing the output of the previous one.
//!
//! Dropping a token leaves a hole in the position sequence instead of
//! renumbering, so phrase distances computed over the surviving tokens
//! stay faithful to the original text.

pub mod alpha_num;
pub mod ascii_folding;
pub mod length;
pub mod lowercase;
pub mod stemmer;
pub mod stop;
pub mod synonym;

pub use alpha_num::AlphaNumFilter;
pub use ascii_folding::AsciiFoldingFilter;
pub use length::LengthFilter;
pub use lowercase::LowercaseFilter;
pub use stemmer::StemmerFilter;
pub use stop::StopFilter;
pub use synonym::SynonymFilter;

use milim_common::{Result, error::Error};

use crate::stream::BoxTokenStream;

/// Transforms a token stream into another token stream.
///
/// Filters hold their configuration (stop lists, synonym maps) and are
/// borrowed by the streams they wrap, so a single filter instance can
/// serve any number of concurrent scans.
pub trait TokenFilter: Send + Sync + 'static {
    /// Wraps `input`, returning the filtered stream.
    fn wrap<'a>(&'a self, input: BoxTokenStream<'a>) -> BoxTokenStream<'a>;

    /// Identifies the filter.
    fn kind(&self) -> FilterKind;

    /// Returns the well-known name of the filter.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Identifies one of the built-in token filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Lowercase token text.
    Lowercase,
    /// Drop tokens found in a stop list.
    Stop,
    /// Drop tokens outside a length range.
    Length,
    /// Replace accented characters with their ASCII base form.
    AsciiFolding,
    /// Drop tokens containing anything but alphanumeric characters.
    AlphaNum,
    /// Reduce tokens to their stem.
    Stemmer,
    /// Inject synonym tokens at the position of the original.
    Synonym,
}

impl FilterKind {
    /// Returns the name under which the filter is known in analyzer
    /// configurations.
    pub const fn name(&self) -> &'static str {
        match self {
            FilterKind::Lowercase => "lowercase",
            FilterKind::Stop => "stop",
            FilterKind::Length => "length",
            FilterKind::AsciiFolding => "ascii_folding",
            FilterKind::AlphaNum => "alpha_num",
            FilterKind::Stemmer => "stemmer",
            FilterKind::Synonym => "synonym",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for FilterKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<FilterKind> {
        match name {
            "lowercase" => Ok(FilterKind::Lowercase),
            "stop" => Ok(FilterKind::Stop),
            "length" => Ok(FilterKind::Length),
            "ascii_folding" => Ok(FilterKind::AsciiFolding),
            "alpha_num" => Ok(FilterKind::AlphaNum),
            "stemmer" => Ok(FilterKind::Stemmer),
            "synonym" => Ok(FilterKind::Synonym),
            _ => Err(Error::invalid_arg(
                "name",
                format!("unknown token filter '{name}'"),
            )),
        }
    }
}

/// Creates one of the built-in filters from its well-known name.
///
/// Only filters that work without parameters can be created this way. The
/// `stop`, `length`, `stemmer` and `synonym` filters are rejected here and
/// have to be configured through [`AnalyzerParams`] instead.
///
/// [`AnalyzerParams`]: crate::config::AnalyzerParams
pub fn create_filter(name: &str) -> Result<Box<dyn TokenFilter>> {
    let kind = FilterKind::try_from(name)?;
    match kind {
        FilterKind::Lowercase => Ok(Box::new(LowercaseFilter::new())),
        FilterKind::AsciiFolding => Ok(Box::new(AsciiFoldingFilter::new())),
        FilterKind::AlphaNum => Ok(Box::new(AlphaNumFilter::new())),
        FilterKind::Stop | FilterKind::Length | FilterKind::Stemmer | FilterKind::Synonym => {
            Err(Error::invalid_arg(
                "name",
                format!("the {kind} filter takes parameters and cannot be created by name alone"),
            ))
        }
    }
}
