//! JSON analyzer configuration.
//!
//! An analyzer is described either by a preset:
//!
//! ```json
//! {"type": "english"}
//! ```
//!
//! or by an explicit pipeline of one tokenizer and any number of filters:
//!
//! ```json
//! {
//!     "tokenizer": "standard",
//!     "filter": ["lowercase", {"type": "stop", "stop_words": ["_english_"]}]
//! }
//! ```
//!
//! Tokenizer and filter entries are either a bare name or an object whose
//! `type` key names the kind and whose remaining keys are its parameters;
//! keys a kind does not define are rejected. Kinds that require parameters
//! (`ngram`, `regex`, `stop`, `length`, `stemmer`, `synonym`) only come in
//! the object form. An empty configuration yields the default analyzer,
//! the standard tokenizer followed by lowercasing.

use std::collections::HashMap;

use milim_common::{
    Result,
    error::{Error, ErrorKind},
    verify_data,
};
use serde::{Deserialize, Serialize};

use crate::analyzer::TextAnalyzer;
use crate::filters::{
    AlphaNumFilter, AsciiFoldingFilter, FilterKind, LengthFilter, LowercaseFilter, StemmerFilter,
    StopFilter, SynonymFilter, TokenFilter, create_filter,
};
use crate::tokenizers::{
    KeywordTokenizer, NgramTokenizer, RegexTokenizer, StandardTokenizer, TokenizerKind,
    TokenizerType, WhitespaceTokenizer, create_tokenizer,
};

/// Top-level analyzer description.
///
/// `preset` (spelled `type` in JSON) is mutually exclusive with the
/// pipeline fields `tokenizer` and `filter`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerParams {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Defaults to the `standard` tokenizer when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenizer: Option<TokenizerSpec>,
    /// Filters in application order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<FilterSpec>,
}

impl AnalyzerParams {
    /// Parses parameters from their JSON form.
    ///
    /// Unknown keys are rejected, at the top level and inside tokenizer
    /// and filter objects alike.
    pub fn from_json(json: &str) -> Result<AnalyzerParams> {
        let document: serde_json::Value = serde_json::from_str(json).map_err(params_json_error)?;
        check_document_keys(&document)?;
        serde_json::from_value(document).map_err(params_json_error)
    }

    /// True when neither a preset nor any pipeline piece is given.
    pub fn is_empty(&self) -> bool {
        self.preset.is_none() && self.tokenizer.is_none() && self.filter.is_empty()
    }

    /// Builds the analyzer the parameters describe.
    pub fn build(&self) -> Result<TextAnalyzer> {
        if let Some(preset) = &self.preset {
            if self.tokenizer.is_some() || !self.filter.is_empty() {
                return Err(Error::invalid_arg(
                    "type",
                    "a preset cannot be combined with an explicit tokenizer or filters",
                ));
            }
            return match preset.as_str() {
                "standard" => Ok(TextAnalyzer::standard()),
                "english" => Ok(TextAnalyzer::english()),
                _ => Err(Error::invalid_arg(
                    "type",
                    format!("unknown analyzer preset '{preset}'"),
                )),
            };
        }
        if self.is_empty() {
            return Ok(TextAnalyzer::standard());
        }
        let tokenizer = match &self.tokenizer {
            None => TokenizerType::Standard(StandardTokenizer::new()),
            Some(TokenizerSpec::Name(name)) => create_tokenizer(name)?,
            Some(TokenizerSpec::Config(config)) => config.build()?,
        };
        let mut builder = TextAnalyzer::builder(tokenizer);
        for spec in &self.filter {
            let filter = match spec {
                FilterSpec::Name(name) => create_filter(name)?,
                FilterSpec::Config(config) => config.build()?,
            };
            builder = builder.boxed_filter(filter);
        }
        let analyzer = builder.build();
        log::debug!(
            "built analyzer: tokenizer={}, filters={:?}",
            analyzer.tokenizer_kind(),
            analyzer.filter_names()
        );
        Ok(analyzer)
    }
}

/// Tokenizer entry: a bare name or an object with parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenizerSpec {
    Name(String),
    Config(TokenizerConfig),
}

/// Object form of a tokenizer entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    Standard,
    Whitespace,
    Keyword,
    Ngram {
        min_gram: usize,
        max_gram: usize,
        #[serde(default)]
        prefix_only: bool,
    },
    Regex {
        pattern: String,
    },
}

impl TokenizerConfig {
    fn build(&self) -> Result<TokenizerType> {
        match self {
            TokenizerConfig::Standard => Ok(TokenizerType::Standard(StandardTokenizer::new())),
            TokenizerConfig::Whitespace => {
                Ok(TokenizerType::Whitespace(WhitespaceTokenizer::new()))
            }
            TokenizerConfig::Keyword => Ok(TokenizerType::Keyword(KeywordTokenizer::new())),
            TokenizerConfig::Ngram {
                min_gram,
                max_gram,
                prefix_only,
            } => {
                let tokenizer = if *prefix_only {
                    NgramTokenizer::prefix_only(*min_gram, *max_gram)?
                } else {
                    NgramTokenizer::new(*min_gram, *max_gram)?
                };
                Ok(TokenizerType::Ngram(tokenizer))
            }
            TokenizerConfig::Regex { pattern } => {
                Ok(TokenizerType::Regex(RegexTokenizer::new(pattern)?))
            }
        }
    }
}

/// Filter entry: a bare name or an object with parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterSpec {
    Name(String),
    Config(FilterConfig),
}

/// Object form of a filter entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    Lowercase,
    AsciiFolding,
    AlphaNum,
    Stop {
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        stop_words: Vec<String>,
    },
    Length {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    Stemmer {
        language: String,
    },
    Synonym {
        synonyms: HashMap<String, Vec<String>>,
    },
}

impl FilterConfig {
    fn build(&self) -> Result<Box<dyn TokenFilter>> {
        match self {
            FilterConfig::Lowercase => Ok(Box::new(LowercaseFilter::new())),
            FilterConfig::AsciiFolding => Ok(Box::new(AsciiFoldingFilter::new())),
            FilterConfig::AlphaNum => Ok(Box::new(AlphaNumFilter::new())),
            FilterConfig::Stop {
                language,
                stop_words,
            } => {
                if language.is_none() && stop_words.is_empty() {
                    return Err(Error::invalid_arg(
                        "stop",
                        "the stop filter needs a language or a stop_words list",
                    ));
                }
                let mut words = stop_words.clone();
                if let Some(language) = language {
                    words.push(format!("_{language}_"));
                }
                Ok(Box::new(StopFilter::from_list(words)?))
            }
            FilterConfig::Length { min, max } => {
                if min.is_none() && max.is_none() {
                    return Err(Error::invalid_arg(
                        "length",
                        "the length filter needs a min or a max",
                    ));
                }
                Ok(Box::new(LengthFilter::new(min.unwrap_or(0), *max)?))
            }
            FilterConfig::Stemmer { language } => Ok(Box::new(StemmerFilter::new(language)?)),
            FilterConfig::Synonym { synonyms } => {
                if synonyms.is_empty() {
                    log::warn!("synonym filter configured without any rules");
                }
                Ok(Box::new(SynonymFilter::new(synonyms.clone())))
            }
        }
    }
}

fn params_json_error(e: serde_json::Error) -> Error {
    Error::from(ErrorKind::InvalidJson {
        element: "analyzer params".to_string(),
        source: e,
    })
}

/// Rejects parameter keys that the named tokenizer or filter kind does not
/// define. Structural problems are left for deserialization to report.
fn check_document_keys(document: &serde_json::Value) -> Result<()> {
    let Some(root) = document.as_object() else {
        return Ok(());
    };
    if let Some(tokenizer) = root.get("tokenizer") {
        check_entry_keys("tokenizer", tokenizer, |kind| {
            Ok(tokenizer_parameter_keys(TokenizerKind::try_from(kind)?))
        })?;
    }
    if let Some(serde_json::Value::Array(filters)) = root.get("filter") {
        for filter in filters {
            check_entry_keys("filter", filter, |kind| {
                Ok(filter_parameter_keys(FilterKind::try_from(kind)?))
            })?;
        }
    }
    Ok(())
}

fn check_entry_keys<F>(element: &str, entry: &serde_json::Value, parameter_keys: F) -> Result<()>
where
    F: Fn(&str) -> Result<&'static [&'static str]>,
{
    let Some(object) = entry.as_object() else {
        return Ok(());
    };
    let Some(kind) = object.get("type").and_then(serde_json::Value::as_str) else {
        return Ok(());
    };
    let allowed = parameter_keys(kind)?;
    for key in object.keys() {
        verify_data!(
            element,
            key == "type" || allowed.contains(&key.as_str()),
            "unknown key '{key}' for the {kind} {element}"
        );
    }
    Ok(())
}

fn tokenizer_parameter_keys(kind: TokenizerKind) -> &'static [&'static str] {
    match kind {
        TokenizerKind::Standard | TokenizerKind::Whitespace | TokenizerKind::Keyword => &[],
        TokenizerKind::Ngram => &["min_gram", "max_gram", "prefix_only"],
        TokenizerKind::Regex => &["pattern"],
    }
}

fn filter_parameter_keys(kind: FilterKind) -> &'static [&'static str] {
    match kind {
        FilterKind::Lowercase | FilterKind::AsciiFolding | FilterKind::AlphaNum => &[],
        FilterKind::Stop => &["language", "stop_words"],
        FilterKind::Length => &["min", "max"],
        FilterKind::Stemmer => &["language"],
        FilterKind::Synonym => &["synonyms"],
    }
}

/// Builds an analyzer straight from its JSON description.
pub fn build_analyzer(json: &str) -> Result<TextAnalyzer> {
    AnalyzerParams::from_json(json)?.build()
}

/// Checks a JSON analyzer description, reporting the first problem found.
///
/// This runs the exact construction path of [`build_analyzer`] and throws
/// the result away, so a description that validates is guaranteed to
/// build.
pub fn validate_params(json: &str) -> Result<()> {
    AnalyzerParams::from_json(json)?.build().map(|_| ())
}
