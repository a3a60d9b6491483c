//! `fieldpaths.toml` loading.
//!
//! Every key is optional; a missing file or table falls back to the
//! defaults documented on each field.

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Default config file name looked up next to the model manifest.
pub const CONFIG_FILE_NAME: &str = "fieldpaths.toml";

pub const DEFAULT_SUFFIX: &str = "Fields";
pub const DEFAULT_SELF_CONST: &str = "SELF";
pub const DEFAULT_INDEX_FILE: &str = "fieldpaths.rs";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generate: GenerateConfig,
    pub emit: EmitConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&s)
    }

    /// Load the config at `path`, or the defaults if no such file exists.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let suffix = &self.generate.suffix;
        if suffix.is_empty() || !is_ident_fragment(suffix) {
            return Err(ConfigError::Invalid(format!(
                "generate.suffix '{suffix}' must be a non-empty identifier fragment"
            )));
        }

        let self_const = &self.emit.self_const;
        if !is_ident(self_const) {
            return Err(ConfigError::Invalid(format!(
                "emit.self_const '{self_const}' must be a valid identifier"
            )));
        }

        let index_file = &self.emit.index_file;
        if !index_file.ends_with(".rs") || index_file.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "emit.index_file '{index_file}' must be a plain `.rs` file name"
            )));
        }

        Ok(())
    }
}

///
/// GenerateConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Appended to the simple class name to name each artifact.
    pub suffix: String,

    /// Stop at the first class whose artifact fails to emit.
    pub fail_fast: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            fail_fast: false,
        }
    }
}

///
/// EmitConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// Constant holding a namespace's own path.
    pub self_const: String,

    /// Index file written at the root of the output directory.
    pub index_file: String,

    /// Emit doc comments on generated artifacts.
    pub docs: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            self_const: DEFAULT_SELF_CONST.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            docs: true,
        }
    }
}

fn is_ident_fragment(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_ident(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && s != "_"
        && is_ident_fragment(s)
}

///
/// TESTS
///
