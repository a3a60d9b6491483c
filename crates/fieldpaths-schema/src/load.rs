use crate::node::{ClassDescriptor, ClassPool};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// LoadError
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("failed to read model manifest '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid model manifest: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// ModelManifest
///
/// JSON description of the model classes of one compilation unit.
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ModelManifest {
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

impl ModelManifest {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn into_pool(self) -> ClassPool {
        self.classes.into_iter().collect()
    }
}

///
/// TESTS
///
