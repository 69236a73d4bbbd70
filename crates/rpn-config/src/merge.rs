//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying
//! precedence rules.

use std::path::{Path, PathBuf};

use crate::{
    Config, QuerySettings,
    parse::{RawConfig, RawQuerySettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). Each setting takes the first defined value.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let query = merge_query_settings(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);
    let sources = configs.iter().map(|c| c.path.clone()).collect();

    Config {
        query,
        config_root,
        sources,
    }
}

/// Merges query settings, taking first defined value for each field.
fn merge_query_settings(configs: &[ParsedConfig]) -> QuerySettings {
    let mut result = QuerySettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref query) = parsed.config.query {
            apply_raw_query(&mut result, query);
        }
    }

    result
}

/// Applies raw query settings to result, overwriting any present values.
fn apply_raw_query(result: &mut QuerySettings, raw: &RawQuerySettings) {
    if let Some(ref v) = raw.stemmer {
        result.stemmer = v.clone();
    }
    if let Some(v) = raw.strict {
        result.strict = v;
    }
    if let Some(v) = raw.case_insensitive_operators {
        result.case_insensitive_operators = v;
    }
}
