//! Configuration system for rpn.
//!
//! rpn uses TOML configuration files named `.rpn.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.rpn.toml` files
//! found, then loading `~/.rpn.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
#[cfg(test)]
mod test_support;
mod templates;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawQuerySettings, parse_config_file, parse_config_str};
use rpn_query::{
    ConvertOptions, Converter, DEFAULT_LANGUAGE, DynNormalizer, NormalizerError, build_normalizer,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for rpn.
///
/// This represents the fully resolved configuration after merging all discovered `.rpn.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Query conversion settings.
    pub query: QuerySettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.rpn.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Returns the conversion options described by this configuration.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            strict: self.query.strict,
            case_insensitive: self.query.case_insensitive_operators,
        }
    }

    /// Builds a converter with the configured normalizer and options.
    pub fn converter(&self) -> Result<Converter<DynNormalizer>, NormalizerError> {
        let normalizer = build_normalizer(&self.query.stemmer)?;
        Ok(Converter::new(normalizer).with_options(self.convert_options()))
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            query: self.query.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Settings for query conversion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Stemming language, or `"none"` to only lowercase terms.
    pub stemmer: String,
    /// Report malformed queries as errors.
    pub strict: bool,
    /// Accept operator keywords in any case.
    pub case_insensitive_operators: bool,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            stemmer: String::from(DEFAULT_LANGUAGE),
            strict: false,
            case_insensitive_operators: false,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Query conversion settings.
    query: QuerySettings,
}
