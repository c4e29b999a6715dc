//! Snowball stemmer filter.
//!
//! Reduces tokens to their stem using the Snowball algorithm for the
//! configured language. Stemming assumes lowercase input, so this filter
//! normally runs after [`LowercaseFilter`].
//!
//! [`LowercaseFilter`]: crate::filters::LowercaseFilter

use std::borrow::Cow;

use milim_common::{Result, error::Error};
use rust_stemmers::{Algorithm, Stemmer};

use crate::filters::{FilterKind, TokenFilter};
use crate::stream::{BoxTokenStream, TokenStream};
use crate::token::Token;

fn algorithm_for(language: &str) -> Result<(&'static str, Algorithm)> {
    let mapped = match language {
        "arabic" => ("arabic", Algorithm::Arabic),
        "danish" => ("danish", Algorithm::Danish),
        "dutch" => ("dutch", Algorithm::Dutch),
        "english" => ("english", Algorithm::English),
        "finnish" => ("finnish", Algorithm::Finnish),
        "french" => ("french", Algorithm::French),
        "german" => ("german", Algorithm::German),
        "greek" => ("greek", Algorithm::Greek),
        "hungarian" => ("hungarian", Algorithm::Hungarian),
        "italian" => ("italian", Algorithm::Italian),
        "norwegian" => ("norwegian", Algorithm::Norwegian),
        "portuguese" => ("portuguese", Algorithm::Portuguese),
        "romanian" => ("romanian", Algorithm::Romanian),
        "russian" => ("russian", Algorithm::Russian),
        "spanish" => ("spanish", Algorithm::Spanish),
        "swedish" => ("swedish", Algorithm::Swedish),
        "tamil" => ("tamil", Algorithm::Tamil),
        "turkish" => ("turkish", Algorithm::Turkish),
        _ => {
            return Err(Error::invalid_arg(
                "language",
                format!("no stemmer for language '{language}'"),
            ));
        }
    };
    Ok(mapped)
}

/// Rewrites token text to its stem.
#[derive(Clone)]
pub struct StemmerFilter {
    language: &'static str,
    algorithm: Algorithm,
}

impl std::fmt::Debug for StemmerFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmerFilter")
            .field("language", &self.language)
            .finish()
    }
}

impl StemmerFilter {
    /// Creates a stemmer for the given language name.
    pub fn new(language: &str) -> Result<StemmerFilter> {
        let (language, algorithm) = algorithm_for(language)?;
        Ok(StemmerFilter {
            language,
            algorithm,
        })
    }

    pub fn english() -> StemmerFilter {
        StemmerFilter {
            language: "english",
            algorithm: Algorithm::English,
        }
    }

    pub fn language(&self) -> &'static str {
        self.language
    }
}

impl TokenFilter for StemmerFilter {
    fn wrap<'a>(&'a self, input: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        BoxTokenStream::new(StemmerStream {
            tail: input,
            stemmer: Stemmer::create(self.algorithm),
        })
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Stemmer
    }
}

struct StemmerStream<'a> {
    tail: BoxTokenStream<'a>,
    stemmer: Stemmer,
}

impl TokenStream for StemmerStream<'_> {
    fn advance(&mut self) -> bool {
        if !self.tail.advance() {
            return false;
        }
        // Replace the text only when stemming actually changed it.
        let stemmed = match self.stemmer.stem(&self.tail.token().text) {
            Cow::Owned(stemmed) => Some(stemmed),
            Cow::Borrowed(_) => None,
        };
        if let Some(stemmed) = stemmed {
            self.tail.token_mut().text = stemmed;
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
