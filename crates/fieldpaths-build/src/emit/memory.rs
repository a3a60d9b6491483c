use crate::{
    emit::{ArtifactTarget, EmitError, Emitter, RustRenderer},
    tree::PathNode,
};

///
/// Artifact
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    pub package: String,
    pub type_name: String,
    pub source: String,
}

///
/// MemoryEmitter
///
/// Keeps rendered artifacts in memory instead of writing files.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryEmitter {
    renderer: RustRenderer,
    artifacts: Vec<Artifact>,
}

impl MemoryEmitter {
    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    #[must_use]
    pub fn get(&self, package: &str, type_name: &str) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.package == package && a.type_name == type_name)
    }
}

impl Emitter for MemoryEmitter {
    fn write(&mut self, target: &ArtifactTarget<'_>, tree: &[PathNode]) -> Result<(), EmitError> {
        if self.get(target.package, target.type_name).is_some() {
            return Err(EmitError::DuplicateArtifact {
                package: target.package.to_string(),
                type_name: target.type_name.to_string(),
            });
        }

        let source = self.renderer.render(target, tree)?.to_string();
        self.artifacts.push(Artifact {
            package: target.package.to_string(),
            type_name: target.type_name.to_string(),
            source,
        });

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LeafPathNode;

    fn tree() -> Vec<PathNode> {
        vec![PathNode::Leaf(LeafPathNode {
            generated_name: "NAME".to_string(),
            path_value: "name".to_string(),
        })]
    }

    #[test]
    fn collects_rendered_artifacts() {
        let mut emitter = MemoryEmitter::default();
        emitter
            .write(&ArtifactTarget::new("model", "DogFields", "model.Dog"), &tree())
            .expect("write should succeed");

        let artifact = emitter
            .get("model", "DogFields")
            .expect("artifact should be stored");
        assert!(artifact.source.contains("DogFields"));
        assert_eq!(emitter.artifacts().len(), 1);
    }

    #[test]
    fn rejects_second_write_to_same_target() {
        let mut emitter = MemoryEmitter::default();
        emitter
            .write(&ArtifactTarget::new("model", "DogFields", "model.Dog"), &tree())
            .expect("first write should succeed");

        let err = emitter
            .write(&ArtifactTarget::new("model", "DogFields", "model.Dog"), &tree())
            .expect_err("second write must fail");
        assert!(
            matches!(err, EmitError::DuplicateArtifact { .. }),
            "unexpected error: {err}"
        );

        emitter
            .write(&ArtifactTarget::new("other", "DogFields", "other.Dog"), &tree())
            .expect("same type in another package is fine");
    }
}
