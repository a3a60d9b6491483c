use crate::{
    PATH_SEPARATOR,
    node::{Field, FieldList},
};
use serde::Deserialize;

///
/// ClassDescriptor
///
/// One model class: where it lives, what it is called, and its fields in
/// declaration order. Library classes are never generated but can still be
/// link targets.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(from = "ClassRecord")]
pub struct ClassDescriptor {
    package_name: String,
    simple_class_name: String,
    qualified_class_name: String,
    fields: FieldList,
    library_class: bool,
}

impl ClassDescriptor {
    /// Create a class with no fields; the qualified name is `package.simple`.
    #[must_use]
    pub fn new(package_name: impl Into<String>, simple_class_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        let simple_class_name = simple_class_name.into();
        let qualified_class_name = qualify(&package_name, &simple_class_name);

        Self {
            package_name,
            simple_class_name,
            qualified_class_name,
            fields: FieldList::new(),
            library_class: false,
        }
    }

    /// Add a scalar field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field::scalar(name));
        self
    }

    /// Add a field linking to the class with the given qualified name.
    #[must_use]
    pub fn link(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.push(Field::link(name, target));
        self
    }

    /// Mark the class as owned by a dependency.
    #[must_use]
    pub const fn library(mut self) -> Self {
        self.library_class = true;
        self
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn simple_class_name(&self) -> &str {
        &self.simple_class_name
    }

    #[must_use]
    pub fn qualified_class_name(&self) -> &str {
        &self.qualified_class_name
    }

    #[must_use]
    pub const fn fields(&self) -> &FieldList {
        &self.fields
    }

    #[must_use]
    pub const fn is_library_class(&self) -> bool {
        self.library_class
    }
}

// qualify
fn qualify(package_name: &str, simple_class_name: &str) -> String {
    if package_name.is_empty() {
        simple_class_name.to_string()
    } else {
        format!("{package_name}{PATH_SEPARATOR}{simple_class_name}")
    }
}

///
/// ClassRecord
/// serialized shape of a class, the qualified name is optional
///

#[derive(Deserialize)]
struct ClassRecord {
    #[serde(default)]
    package_name: String,
    simple_class_name: String,

    #[serde(default)]
    qualified_class_name: Option<String>,

    #[serde(default)]
    fields: FieldList,

    #[serde(default)]
    library_class: bool,
}

impl From<ClassRecord> for ClassDescriptor {
    fn from(record: ClassRecord) -> Self {
        let qualified_class_name = record
            .qualified_class_name
            .unwrap_or_else(|| qualify(&record.package_name, &record.simple_class_name));

        Self {
            package_name: record.package_name,
            simple_class_name: record.simple_class_name,
            qualified_class_name,
            fields: record.fields,
            library_class: record.library_class,
        }
    }
}

///
/// TESTS
///
