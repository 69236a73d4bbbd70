//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rpn_config::Config;
use rpn_query::{Converter, DynNormalizer, build_normalizer};
use tracing::{debug, warn};

use crate::cli::args::QueryArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        debug!(sources = ?config.sources, "loaded configuration");
        for warning in config.validate() {
            warn!("{warning}");
        }
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds a converter from configuration, with command-line overrides applied.
    pub fn converter(&self, args: &QueryArgs) -> Result<Converter<DynNormalizer>, ExitCode> {
        let stemmer = args
            .stemmer
            .as_deref()
            .unwrap_or(&self.config.query.stemmer);
        let normalizer = build_normalizer(stemmer).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        let mut options = self.config.convert_options();
        if args.strict {
            options.strict = true;
        }
        if args.lenient {
            options.strict = false;
        }
        if args.ignore_case {
            options.case_insensitive = true;
        }

        Ok(Converter::new(normalizer).with_options(options))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
