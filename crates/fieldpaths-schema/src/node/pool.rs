use crate::node::ClassDescriptor;
use std::{collections::BTreeMap, slice::Iter};

///
/// ClassPool
///
/// Every class known to a generation run, indexed by qualified name.
/// Iteration follows insertion order. When two classes share a qualified
/// name the first one inserted is the one lookups resolve to.
///

#[derive(Clone, Debug, Default)]
pub struct ClassPool {
    classes: Vec<ClassDescriptor>,
    index: BTreeMap<String, usize>,
}

impl ClassPool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classes: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, class: ClassDescriptor) {
        let position = self.classes.len();
        self.index
            .entry(class.qualified_class_name().to_string())
            .or_insert(position);
        self.classes.push(class);
    }

    /// Look up a class by its qualified name.
    #[must_use]
    pub fn get(&self, qualified_class_name: &str) -> Option<&ClassDescriptor> {
        self.index
            .get(qualified_class_name)
            .map(|&position| &self.classes[position])
    }

    pub fn iter(&self) -> Iter<'_, ClassDescriptor> {
        self.classes.iter()
    }

    /// Classes owned by the current project, in insertion order.
    pub fn project_classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.iter().filter(|class| !class.is_library_class())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Extend<ClassDescriptor> for ClassPool {
    fn extend<I: IntoIterator<Item = ClassDescriptor>>(&mut self, iter: I) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl FromIterator<ClassDescriptor> for ClassPool {
    fn from_iter<I: IntoIterator<Item = ClassDescriptor>>(iter: I) -> Self {
        let mut pool = Self::new();
        pool.extend(iter);
        pool
    }
}

impl<'a> IntoIterator for &'a ClassPool {
    type Item = &'a ClassDescriptor;
    type IntoIter = Iter<'a, ClassDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

///
/// TESTS
///
