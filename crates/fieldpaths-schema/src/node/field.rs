use serde::{Deserialize, Serialize};
use std::slice::Iter;

///
/// FieldList
///
/// Fields of a model class in declaration order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }
}

impl FromIterator<Field> for FieldList {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///
/// A raw field name plus, for link fields, the qualified name of the
/// linked class.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Field {
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: None,
        }
    }

    #[must_use]
    pub fn link(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: Some(target.into()),
        }
    }

    #[must_use]
    pub const fn is_link(&self) -> bool {
        self.link.is_some()
    }

    #[must_use]
    pub fn link_target(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

///
/// TESTS
///
