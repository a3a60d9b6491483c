//! Turning path trees into Rust source artifacts.

mod file;
mod memory;
mod render;

pub use file::FileEmitter;
pub use memory::{Artifact, MemoryEmitter};
pub use render::RustRenderer;

use crate::tree::PathNode;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{0}' is not a valid identifier")]
    InvalidIdent(String),

    #[error("duplicate name '{name}' in '{scope}'")]
    DuplicateName { scope: String, name: String },

    #[error("artifact '{type_name}' in package '{package}' was already emitted")]
    DuplicateArtifact { package: String, type_name: String },
}

///
/// ArtifactTarget
///
/// Where an artifact goes and which model class it was generated from.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArtifactTarget<'a> {
    pub package: &'a str,
    pub type_name: &'a str,
    pub source_class: &'a str,
}

impl<'a> ArtifactTarget<'a> {
    #[must_use]
    pub const fn new(package: &'a str, type_name: &'a str, source_class: &'a str) -> Self {
        Self {
            package,
            type_name,
            source_class,
        }
    }
}

///
/// Emitter
///
/// Persists one artifact per generated class. Implementations must fail on
/// naming conflicts rather than silently overwrite.
///

pub trait Emitter {
    fn write(&mut self, target: &ArtifactTarget<'_>, tree: &[PathNode]) -> Result<(), EmitError>;

    /// Called once after every class has been written.
    fn finish(&mut self) -> Result<(), EmitError> {
        Ok(())
    }
}

