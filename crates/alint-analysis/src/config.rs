//! Run configuration.
//!
//! Macro directory prefixes come from the environment and may be overridden
//! by a TOML file:
//!
//! ```toml
//! [macros]
//! global_dir = "/opt/app/macros/"
//! local_dir = "./macros/"
//! ```
//!
//! Prefixes are joined to macro names by plain concatenation, so they
//! normally end with a path separator.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the shared macro repository prefix.
pub const GLOBAL_MACRO_DIR_VAR: &str = "ALUCELL_GLOBAL_MACRO_DIR";
/// Environment variable holding the project macro prefix.
pub const LOCAL_MACRO_DIR_VAR: &str = "ALUCELL_LOCAL_MACRO_DIR";

/// A configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        /// The config path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// The config path.
        path: PathBuf,
        /// The TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Prefixes used to resolve macro names to file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroDirs {
    /// Prefix for global macro names.
    pub global: String,
    /// Prefix for local macro names.
    pub local: String,
}

impl MacroDirs {
    /// Creates explicit prefixes.
    pub fn new(global: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            global: global.into(),
            local: local.into(),
        }
    }

    /// Reads both prefixes from the process environment.
    ///
    /// Returns the names of the variables that were not set; their prefixes
    /// are left empty.
    #[must_use]
    pub fn from_env() -> (Self, Vec<&'static str>) {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both prefixes through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<&'static str>) {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| {
            lookup(name).unwrap_or_else(|| {
                missing.push(name);
                String::new()
            })
        };
        let dirs = Self {
            global: read(GLOBAL_MACRO_DIR_VAR),
            local: read(LOCAL_MACRO_DIR_VAR),
        };
        (dirs, missing)
    }

    /// Applies the overrides of a configuration file.
    #[must_use]
    pub fn with_file(mut self, file: &ConfigFile) -> Self {
        if let Some(global) = &file.macros.global_dir {
            self.global.clone_from(global);
        }
        if let Some(local) = &file.macros.local_dir {
            self.local.clone_from(local);
        }
        self
    }
}

/// Which passes run on each file.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passes {
    /// Only tokenize; no parse and no tree passes.
    pub lex_only: bool,
    /// Dump tokens or the tree.
    pub verbose: bool,
    /// Run the guard and whitespace checkers.
    pub check: bool,
    /// Print direct dependencies.
    pub dependencies: bool,
    /// Walk dependencies transitively, running the other passes on each file.
    pub recursive: bool,
    /// Print the reformatted source.
    pub reformat: bool,
    /// Print the source as HTML.
    pub highlight: bool,
    /// Suppress success messages.
    pub silent: bool,
    /// Print the grammar before processing files.
    pub show_grammar: bool,
}

impl Passes {
    /// Returns `true` when files are parsed.
    #[must_use]
    pub fn parse(&self) -> bool {
        !self.lex_only
    }
}

/// Immutable per-run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Macro name resolution prefixes.
    pub macro_dirs: MacroDirs,
    /// Enabled passes.
    pub passes: Passes,
}

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// The `[macros]` table.
    #[serde(default)]
    pub macros: MacrosSection,
}

/// The `[macros]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MacrosSection {
    /// Overrides the global macro prefix.
    pub global_dir: Option<String>,
    /// Overrides the local macro prefix.
    pub local_dir: Option<String>,
}

impl ConfigFile {
    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(path, &text)?;
        debug!(path = %path.display(), ?file, "loaded config");
        Ok(file)
    }

    /// Parses configuration text; `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML or unknown keys.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
