//! Stop word filter.
//!
//! Drops tokens whose text appears in a stop list. Surviving tokens keep
//! their positions, so dropped words leave holes in the position sequence.
//!
//! Stop lists can be given verbatim, taken from the built-in lists by
//! language name, or mixed: inside a word list, an entry wrapped in
//! underscores such as `_english_` expands to the built-in list for that
//! language.

use ahash::AHashSet;
use milim_common::{Result, error::Error};

use crate::filters::{FilterKind, TokenFilter};
use crate::stream::{BoxTokenStream, TokenStream};
use crate::token::Token;

/// Resolves a language name to its built-in stop word list.
fn builtin_words(language: &str) -> Result<Vec<String>> {
    use stop_words::LANGUAGE;
    let id = match language {
        "arabic" => LANGUAGE::Arabic,
        "danish" => LANGUAGE::Danish,
        "dutch" => LANGUAGE::Dutch,
        "english" => LANGUAGE::English,
        "french" => LANGUAGE::French,
        "german" => LANGUAGE::German,
        "greek" => LANGUAGE::Greek,
        "hungarian" => LANGUAGE::Hungarian,
        "italian" => LANGUAGE::Italian,
        "norwegian" => LANGUAGE::Norwegian,
        "portuguese" => LANGUAGE::Portuguese,
        "romanian" => LANGUAGE::Romanian,
        "russian" => LANGUAGE::Russian,
        "spanish" => LANGUAGE::Spanish,
        "swedish" => LANGUAGE::Swedish,
        "turkish" => LANGUAGE::Turkish,
        _ => {
            return Err(Error::invalid_arg(
                "language",
                format!("no built-in stop word list for '{language}'"),
            ));
        }
    };
    Ok(stop_words::get(id))
}

/// Drops tokens found in a stop list.
#[derive(Debug, Clone)]
pub struct StopFilter {
    words: AHashSet<String>,
}

impl StopFilter {
    /// Builds the filter from an explicit word list.
    pub fn new<I, S>(words: I) -> StopFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds the filter from the built-in stop word list of a language.
    pub fn for_language(language: &str) -> Result<StopFilter> {
        Ok(StopFilter {
            words: builtin_words(language)?.into_iter().collect(),
        })
    }

    /// Builds the filter from a word list in which entries wrapped in
    /// underscores, such as `_english_`, expand to the built-in list for
    /// that language.
    pub fn from_list<I, S>(words: I) -> Result<StopFilter>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = AHashSet::new();
        for word in words {
            let word = word.into();
            match word.strip_prefix('_').and_then(|w| w.strip_suffix('_')) {
                Some(language) if !language.is_empty() => {
                    set.extend(builtin_words(language)?);
                }
                _ => {
                    set.insert(word);
                }
            }
        }
        Ok(StopFilter { words: set })
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl TokenFilter for StopFilter {
    fn wrap<'a>(&'a self, input: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        BoxTokenStream::new(StopStream {
            tail: input,
            words: &self.words,
        })
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Stop
    }
}

struct StopStream<'a> {
    tail: BoxTokenStream<'a>,
    words: &'a AHashSet<String>,
}

impl TokenStream for StopStream<'_> {
    fn advance(&mut self) -> bool {
        while self.tail.advance() {
            if !self.words.contains(self.tail.token().text.as_str()) {
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
