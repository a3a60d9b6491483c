use crate::{
    emit::{ArtifactTarget, EmitError, Emitter, RustRenderer, render::parse_ident},
    tree::PathNode,
};
use fieldpaths_config::EmitConfig;
use fieldpaths_schema::PATH_SEPARATOR;
use proc_macro2::TokenStream;
use quote::quote;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

///
/// FileEmitter
///
/// Writes each artifact to `<out_dir>/<package segments>/<type_name>.rs`.
/// `finish` writes an index file that nests one module per package segment
/// and includes every artifact, ready to be pulled in with `include!`.
///

#[derive(Debug)]
pub struct FileEmitter {
    out_dir: PathBuf,
    index_file: String,
    renderer: RustRenderer,
    written: BTreeMap<(String, String), PathBuf>,
}

impl FileEmitter {
    pub fn new(out_dir: impl AsRef<Path>, config: &EmitConfig) -> Result<Self, EmitError> {
        let out_dir = out_dir.as_ref();
        let out_dir = std::path::absolute(out_dir).map_err(|source| io_error(out_dir, source))?;

        Ok(Self {
            out_dir,
            index_file: config.index_file.clone(),
            renderer: RustRenderer::new(config),
            written: BTreeMap::new(),
        })
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(&self.index_file)
    }

    /// Files written so far.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.written.values().map(PathBuf::as_path)
    }

    fn render_index(&self) -> Result<TokenStream, EmitError> {
        let mut root = PackageTree::default();

        for ((package, type_name), path) in &self.written {
            let mut node = &mut root;
            for segment in package_segments(package)? {
                node = node.modules.entry(segment.to_string()).or_default();
            }
            node.artifacts
                .push((type_name.clone(), path.to_string_lossy().into_owned()));
        }

        root.to_tokens("")
    }
}

impl Emitter for FileEmitter {
    fn write(&mut self, target: &ArtifactTarget<'_>, tree: &[PathNode]) -> Result<(), EmitError> {
        let ArtifactTarget {
            package, type_name, ..
        } = *target;

        let key = (package.to_string(), type_name.to_string());
        if self.written.contains_key(&key) {
            return Err(EmitError::DuplicateArtifact {
                package: package.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let segments = package_segments(package)?;
        let source = self.renderer.render(target, tree)?;

        let dir = segments
            .iter()
            .fold(self.out_dir.clone(), |dir, segment| dir.join(segment));
        fs::create_dir_all(&dir).map_err(|source| io_error(&dir, source))?;

        let path = dir.join(format!("{type_name}.rs"));
        fs::write(&path, source.to_string()).map_err(|source| io_error(&path, source))?;
        debug!(path = %path.display(), "wrote artifact");

        self.written.insert(key, path);

        Ok(())
    }

    fn finish(&mut self) -> Result<(), EmitError> {
        let index = self.render_index()?;
        let path = self.index_path();

        fs::create_dir_all(&self.out_dir).map_err(|source| io_error(&self.out_dir, source))?;
        fs::write(&path, index.to_string()).map_err(|source| io_error(&path, source))?;
        debug!(path = %path.display(), artifacts = self.written.len(), "wrote index");

        Ok(())
    }
}

///
/// PackageTree
/// one level of the index module hierarchy
///

#[derive(Default)]
struct PackageTree {
    modules: BTreeMap<String, Self>,
    artifacts: Vec<(String, String)>,
}

impl PackageTree {
    fn to_tokens(&self, scope: &str) -> Result<TokenStream, EmitError> {
        let mut tokens = quote!();

        for (type_name, path) in &self.artifacts {
            if self.modules.contains_key(type_name) {
                return Err(EmitError::DuplicateName {
                    scope: scope.to_string(),
                    name: type_name.clone(),
                });
            }
            tokens.extend(quote!(include!(#path);));
        }

        for (name, child) in &self.modules {
            let ident = parse_ident(name)?;
            let child_scope = if scope.is_empty() {
                name.clone()
            } else {
                format!("{scope}::{name}")
            };
            let body = child.to_tokens(&child_scope)?;

            tokens.extend(quote! {
                pub mod #ident {
                    #body
                }
            });
        }

        Ok(tokens)
    }
}

// package_segments
// split a dotted package into validated module names
fn package_segments(package: &str) -> Result<Vec<&str>, EmitError> {
    if package.is_empty() {
        return Ok(Vec::new());
    }

    package
        .split(PATH_SEPARATOR)
        .map(|segment| parse_ident(segment).map(|_| segment))
        .collect()
}

fn io_error(path: &Path, source: io::Error) -> EmitError {
    EmitError::Io {
        path: path.to_path_buf(),
        source,
    }
}

///
/// TESTS
///
