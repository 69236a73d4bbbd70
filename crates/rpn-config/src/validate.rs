//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use rpn_query::build_normalizer;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The configured stemmer is neither a supported language nor `none`.
    UnknownStemmer {
        /// The stemmer name as configured.
        stemmer: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStemmer { stemmer } => {
                write!(f, "unsupported stemmer language: {stemmer}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if build_normalizer(&config.query.stemmer).is_err() {
        warnings.push(ConfigWarning::UnknownStemmer {
            stemmer: config.query.stemmer.clone(),
        });
    }

    warnings
}
