//! Model classes consumed by field-path generation.
//!
//! A [`ClassPool`](node::ClassPool) is the read-only set of
//! [`ClassDescriptor`](node::ClassDescriptor)s for one generation run. It is
//! usually produced by loading a [`ModelManifest`](load::ModelManifest).

pub mod load;
pub mod node;

/// Separator between the segments of a package and of a query path.
pub const PATH_SEPARATOR: char = '.';

