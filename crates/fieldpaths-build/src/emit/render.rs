use crate::{
    emit::{ArtifactTarget, EmitError},
    tree::PathNode,
};
use fieldpaths_config::EmitConfig;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::BTreeSet;
use syn::Ident;

///
/// RustRenderer
///
/// Renders a path tree as a module of `&str` constants. Each namespace
/// becomes a nested module that also holds its own path in the self
/// constant.
///

#[derive(Clone, Debug)]
pub struct RustRenderer {
    self_const: String,
    docs: bool,
}

impl RustRenderer {
    #[must_use]
    pub fn new(config: &EmitConfig) -> Self {
        Self {
            self_const: config.self_const.clone(),
            docs: config.docs,
        }
    }

    /// Render one artifact. The doc line names the model class the tree
    /// was built from.
    pub fn render(
        &self,
        target: &ArtifactTarget<'_>,
        tree: &[PathNode],
    ) -> Result<TokenStream, EmitError> {
        let ident = parse_ident(target.type_name)?;
        let body = self.render_nodes(target.type_name, tree, &mut BTreeSet::new())?;

        let doc = if self.docs {
            let text = format!(
                " Query paths of every queryable field in `{}`.",
                target.source_class
            );
            quote!(#[doc = #text])
        } else {
            quote!()
        };

        Ok(quote! {
            #doc
            #[allow(non_snake_case)]
            pub mod #ident {
                #body
            }
        })
    }

    // render_nodes
    // `names` starts with the names already taken in this scope
    fn render_nodes<'a>(
        &'a self,
        scope: &str,
        nodes: &'a [PathNode],
        names: &mut BTreeSet<&'a str>,
    ) -> Result<TokenStream, EmitError> {
        let mut tokens = quote!();

        for node in nodes {
            let name = node.generated_name();
            if !names.insert(name) {
                return Err(EmitError::DuplicateName {
                    scope: scope.to_string(),
                    name: name.to_string(),
                });
            }

            let ident = parse_ident(name)?;
            let path = node.path_value();

            match node {
                PathNode::Leaf(_) => tokens.extend(quote! {
                    pub const #ident: &str = #path;
                }),
                PathNode::Namespace(ns) => {
                    let self_ident = parse_ident(&self.self_const)?;
                    let child_scope = format!("{scope}::{name}");

                    let mut child_names = BTreeSet::new();
                    child_names.insert(self.self_const.as_str());
                    let children = self.render_nodes(&child_scope, &ns.children, &mut child_names)?;

                    let doc = if self.docs {
                        let text = format!(" Fields reached through `{path}`.");
                        quote!(#[doc = #text])
                    } else {
                        quote!()
                    };

                    tokens.extend(quote! {
                        #doc
                        pub mod #ident {
                            pub const #self_ident: &str = #path;
                            #children
                        }
                    });
                }
            }
        }

        Ok(tokens)
    }
}

impl Default for RustRenderer {
    fn default() -> Self {
        Self::new(&EmitConfig::default())
    }
}

/// Parse a generated name as a Rust identifier, rejecting keywords.
pub(crate) fn parse_ident(s: &str) -> Result<Ident, EmitError> {
    syn::parse_str::<Ident>(s).map_err(|_| EmitError::InvalidIdent(s.to_string()))
}

///
/// TESTS
///
