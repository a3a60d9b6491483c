use crate::format::format_field_name;
use fieldpaths_schema::{
    PATH_SEPARATOR,
    node::{ClassDescriptor, ClassPool, Field},
};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

///
/// PathNode
///
/// One generated item: a constant for a scalar field, or a namespace for a
/// link field whose children are the linked class's fields.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathNode {
    Leaf(LeafPathNode),
    Namespace(NamespacePathNode),
}

impl PathNode {
    #[must_use]
    pub fn generated_name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.generated_name,
            Self::Namespace(ns) => &ns.generated_name,
        }
    }

    /// The node's own query path; for a namespace this is the link itself.
    #[must_use]
    pub fn path_value(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.path_value,
            Self::Namespace(ns) => &ns.self_path_value,
        }
    }

    #[must_use]
    pub const fn is_namespace(&self) -> bool {
        matches!(self, Self::Namespace(_))
    }
}

///
/// LeafPathNode
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LeafPathNode {
    pub generated_name: String,
    pub path_value: String,
}

///
/// NamespacePathNode
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NamespacePathNode {
    pub generated_name: String,
    pub self_path_value: String,
    pub children: Vec<PathNode>,
}

///
/// LinkResolution
/// how a single field is classified against the pool
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkResolution<'a> {
    Scalar,
    Resolved(&'a ClassDescriptor),
    Unresolved,
    Cyclic,
}

///
/// TreeBuilder
///

pub struct TreeBuilder<'a> {
    pool: &'a ClassPool,
}

impl<'a> TreeBuilder<'a> {
    #[must_use]
    pub const fn new(pool: &'a ClassPool) -> Self {
        Self { pool }
    }

    /// Build the path tree rooted at `root`.
    #[must_use]
    pub fn build(&self, root: &ClassDescriptor) -> Vec<PathNode> {
        let mut active = BTreeSet::new();
        active.insert(root.qualified_class_name().to_string());

        self.build_at(root, "", &mut active)
    }

    // build_at
    // `active` holds the classes on the current recursion path, including
    // `class` itself; a link back into it is not expanded again
    fn build_at(
        &self,
        class: &ClassDescriptor,
        prefix: &str,
        active: &mut BTreeSet<String>,
    ) -> Vec<PathNode> {
        debug!(
            class = class.qualified_class_name(),
            fields = class.fields().len(),
            prefix,
            "building field paths"
        );

        let mut nodes = Vec::with_capacity(class.fields().len());

        for field in class.fields() {
            let generated_name = format_field_name(&field.name);
            let path_value = format!("{prefix}{}", field.name);

            match self.resolve(field, active) {
                LinkResolution::Resolved(target) => {
                    let child_prefix = format!("{path_value}{PATH_SEPARATOR}");

                    active.insert(target.qualified_class_name().to_string());
                    let children = self.build_at(target, &child_prefix, active);
                    active.remove(target.qualified_class_name());

                    nodes.push(PathNode::Namespace(NamespacePathNode {
                        generated_name,
                        self_path_value: path_value,
                        children,
                    }));
                }
                resolution => {
                    match resolution {
                        LinkResolution::Unresolved => debug!(
                            class = class.qualified_class_name(),
                            field = %field.name,
                            target = ?field.link_target(),
                            "link target not in class pool, generating plain field"
                        ),
                        LinkResolution::Cyclic => debug!(
                            class = class.qualified_class_name(),
                            field = %field.name,
                            target = ?field.link_target(),
                            "link target already on path, generating plain field"
                        ),
                        _ => {}
                    }
                    debug!(path = %path_value, "generating field");

                    nodes.push(PathNode::Leaf(LeafPathNode {
                        generated_name,
                        path_value,
                    }));
                }
            }
        }

        nodes
    }

    /// Classify a field against the pool and the active recursion path.
    #[must_use]
    pub fn resolve(&self, field: &Field, active: &BTreeSet<String>) -> LinkResolution<'a> {
        let Some(target) = field.link_target() else {
            return LinkResolution::Scalar;
        };

        match self.pool.get(target) {
            None => LinkResolution::Unresolved,
            Some(class) if active.contains(class.qualified_class_name()) => LinkResolution::Cyclic,
            Some(class) => LinkResolution::Resolved(class),
        }
    }
}

/// Build the path tree for `root`, resolving links against `pool`.
#[must_use]
pub fn build(root: &ClassDescriptor, pool: &ClassPool) -> Vec<PathNode> {
    TreeBuilder::new(pool).build(root)
}

///
/// TESTS
///
