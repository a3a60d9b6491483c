//! Query path generation for model classes.
//!
//! For every project class in a [`ClassPool`], a path tree is built
//! ([`tree`]) and handed to an [`Emitter`](emit::Emitter) that renders it as
//! a Rust module of `&str` constants, one per queryable field. Link fields
//! become nested modules prefixed with the path taken to reach them.

pub mod emit;
pub mod format;
pub mod generate;
pub mod tree;

mod macros;

pub use fieldpaths_config as config;
pub use fieldpaths_schema as schema;

use crate::{
    emit::{EmitError, FileEmitter},
    generate::{GenerateReport, Generator},
};
use fieldpaths_config::{Config, ConfigError};
use fieldpaths_schema::{
    load::{LoadError, ModelManifest},
    node::ClassPool,
};
use std::path::Path;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    LoadError(#[from] LoadError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    EmitError(#[from] EmitError),

    #[error("{failed} of {attempted} field path artifacts failed to generate")]
    GenerateFailed { failed: usize, attempted: usize },
}

/// Generate artifacts for every project class in `pool` into `out_dir`.
pub fn generate_to_dir(
    pool: &ClassPool,
    config: &Config,
    out_dir: impl AsRef<Path>,
) -> Result<GenerateReport, Error> {
    let mut emitter = FileEmitter::new(out_dir, &config.emit)?;
    let report = Generator::new(pool, config.generate.clone()).generate_report(&mut emitter);

    if report.is_success() {
        Ok(report)
    } else {
        Err(Error::GenerateFailed {
            failed: report.failures.len() + usize::from(report.finish_error.is_some()),
            attempted: report.attempted(),
        })
    }
}

/// Load a model manifest and optional config file, then generate into
/// `out_dir`. A missing config file means default options.
pub fn generate_from_manifest(
    manifest: impl AsRef<Path>,
    config: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<GenerateReport, Error> {
    let pool = ModelManifest::load(manifest)?.into_pool();
    let config = Config::load_or_default(config)?;

    generate_to_dir(&pool, &config, out_dir)
}
