//! Term normalization.
//!
//! Terms are case-folded and reduced to their stem before they are emitted, so that
//! `Running` and `runs` both become `run`. The converter only depends on the
//! [`TermNormalizer`] trait; the stemming implementation is a Tantivy text analyzer:
//! 1. `RawTokenizer` - keeps the whole term as a single token
//! 2. `LowerCaser` - converts the token to lowercase
//! 3. `Stemmer` - applies language-specific stemming

use std::{fmt, sync::Arc};

use tantivy::tokenizer::{
    Language, LowerCaser, RawTokenizer, Stemmer, TextAnalyzer, TokenStream,
};
use thiserror::Error;

/// Stemmer language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Stemmer name that disables stemming and only lowercases terms.
pub const NO_STEMMER: &str = "none";

/// Maps a search term to its normalized form.
///
/// Implementations must be deterministic and pure: the same input always produces the
/// same output. Normalizing an already normalized term should return it unchanged, but
/// this is best effort for stemmers. Snowball does not map every stem to itself, e.g.
/// `agreed` stems to `agre`, which stems again to `agr`.
pub trait TermNormalizer {
    /// Returns the normalized form of `term`.
    fn normalize(&self, term: &str) -> String;
}

impl<T: TermNormalizer + ?Sized> TermNormalizer for &T {
    fn normalize(&self, term: &str) -> String {
        (**self).normalize(term)
    }
}

impl<T: TermNormalizer + ?Sized> TermNormalizer for Box<T> {
    fn normalize(&self, term: &str) -> String {
        (**self).normalize(term)
    }
}

impl<T: TermNormalizer + ?Sized> TermNormalizer for Arc<T> {
    fn normalize(&self, term: &str) -> String {
        (**self).normalize(term)
    }
}

/// Errors that can occur when building a normalizer.
#[derive(Debug, Error)]
pub enum NormalizerError {
    /// Invalid stemmer language.
    #[error("unsupported stemmer language: {0}")]
    InvalidLanguage(String),
}

/// Parses a stemmer language string into a Tantivy `Language`.
///
/// Supports lowercase language names matching Tantivy's `Language` enum.
/// Returns an error if the language is not recognized.
pub fn parse_language(name: &str) -> Result<Language, NormalizerError> {
    match name.to_lowercase().as_str() {
        "arabic" => Ok(Language::Arabic),
        "danish" => Ok(Language::Danish),
        "dutch" => Ok(Language::Dutch),
        "english" => Ok(Language::English),
        "finnish" => Ok(Language::Finnish),
        "french" => Ok(Language::French),
        "german" => Ok(Language::German),
        "greek" => Ok(Language::Greek),
        "hungarian" => Ok(Language::Hungarian),
        "italian" => Ok(Language::Italian),
        "norwegian" => Ok(Language::Norwegian),
        "portuguese" => Ok(Language::Portuguese),
        "romanian" => Ok(Language::Romanian),
        "russian" => Ok(Language::Russian),
        "spanish" => Ok(Language::Spanish),
        "swedish" => Ok(Language::Swedish),
        "tamil" => Ok(Language::Tamil),
        "turkish" => Ok(Language::Turkish),
        other => Err(NormalizerError::InvalidLanguage(other.to_string())),
    }
}

/// Lowercases and stems terms with a Snowball stemmer.
#[derive(Clone)]
pub struct StemmingNormalizer {
    /// Stemmer language.
    language: Language,
    /// Analyzer template, cloned for each term.
    analyzer: TextAnalyzer,
}

impl StemmingNormalizer {
    /// Creates a normalizer for the given language.
    pub fn new(language: Language) -> Self {
        let analyzer = TextAnalyzer::builder(RawTokenizer::default())
            .filter(LowerCaser)
            .filter(Stemmer::new(language))
            .build();
        Self { language, analyzer }
    }

    /// Creates a normalizer from a language name such as `"english"`.
    pub fn from_name(name: &str) -> Result<Self, NormalizerError> {
        Ok(Self::new(parse_language(name)?))
    }

    /// Returns the stemmer language.
    pub fn language(&self) -> Language {
        self.language
    }
}

impl Default for StemmingNormalizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl fmt::Debug for StemmingNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmingNormalizer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TermNormalizer for StemmingNormalizer {
    fn normalize(&self, term: &str) -> String {
        if term.is_empty() {
            return String::new();
        }
        // TextAnalyzer needs `&mut self` to stream, so each call works on its own copy.
        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(term);
        match stream.next() {
            Some(token) => token.text.clone(),
            None => term.to_lowercase(),
        }
    }
}

/// Case-folds terms without stemming.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer;

impl TermNormalizer for LowercaseNormalizer {
    fn normalize(&self, term: &str) -> String {
        term.to_lowercase()
    }
}

/// A normalizer chosen at runtime.
pub type DynNormalizer = Box<dyn TermNormalizer + Send + Sync>;

/// Builds a normalizer from a stemmer name.
///
/// `"none"` disables stemming; any other value must be a supported language.
pub fn build_normalizer(stemmer: &str) -> Result<DynNormalizer, NormalizerError> {
    if stemmer.eq_ignore_ascii_case(NO_STEMMER) {
        return Ok(Box::new(LowercaseNormalizer));
    }
    Ok(Box::new(StemmingNormalizer::from_name(stemmer)?))
}
