use crate::{
    emit::{ArtifactTarget, EmitError, Emitter},
    tree::TreeBuilder,
};
use fieldpaths_config::GenerateConfig;
use fieldpaths_schema::node::{ClassDescriptor, ClassPool};
use tracing::{error, info};

///
/// ClassFailure
///

#[derive(Debug)]
pub struct ClassFailure {
    pub class: String,
    pub error: EmitError,
}

///
/// GenerateReport
///
/// Outcome of one generation run. `emitted` holds `(package, type_name)`
/// for every artifact written.
///

#[derive(Debug, Default)]
pub struct GenerateReport {
    pub emitted: Vec<(String, String)>,
    pub failures: Vec<ClassFailure>,
    pub skipped: usize,
    pub finish_error: Option<EmitError>,
}

impl GenerateReport {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0 && self.finish_error.is_none()
    }

    /// Classes that were attempted, successfully or not.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.emitted.len() + self.failures.len()
    }
}

///
/// Generator
///
/// Builds one path tree per project class, resolving links against the
/// whole pool, and hands each tree to an emitter.
///

pub struct Generator<'a> {
    pool: &'a ClassPool,
    config: GenerateConfig,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub const fn new(pool: &'a ClassPool, config: GenerateConfig) -> Self {
        Self { pool, config }
    }

    /// Artifact type name for a class.
    #[must_use]
    pub fn type_name(&self, class: &ClassDescriptor) -> String {
        format!("{}{}", class.simple_class_name(), self.config.suffix)
    }

    /// Generate every artifact; `true` only if all of them were emitted.
    pub fn generate(&self, emitter: &mut impl Emitter) -> bool {
        self.generate_report(emitter).is_success()
    }

    pub fn generate_report(&self, emitter: &mut impl Emitter) -> GenerateReport {
        let builder = TreeBuilder::new(self.pool);
        let classes: Vec<_> = self.pool.project_classes().collect();
        let mut report = GenerateReport::default();

        for (i, class) in classes.iter().enumerate() {
            let package = class.package_name();
            let type_name = self.type_name(class);
            let tree = builder.build(class);
            let target = ArtifactTarget::new(package, &type_name, class.qualified_class_name());

            match emitter.write(&target, &tree) {
                Ok(()) => {
                    info!(package, type_name = %type_name, nodes = tree.len(), "generated field paths");
                    report.emitted.push((package.to_string(), type_name));
                }
                Err(e) => {
                    error!(class = class.qualified_class_name(), error = %e, "failed to generate field paths");
                    report.failures.push(ClassFailure {
                        class: class.qualified_class_name().to_string(),
                        error: e,
                    });

                    if self.config.fail_fast {
                        report.skipped = classes.len() - i - 1;
                        return report;
                    }
                }
            }
        }

        if let Err(e) = emitter.finish() {
            error!(error = %e, "failed to finish generation");
            report.finish_error = Some(e);
        }

        report
    }
}

/// Generate with the default options: `Fields` suffix, fail-soft.
pub fn generate(pool: &ClassPool, emitter: &mut impl Emitter) -> bool {
    Generator::new(pool, GenerateConfig::default()).generate(emitter)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{emit::MemoryEmitter, tree::PathNode};

    ///
    /// FlakyEmitter
    /// fails for the listed type names
    ///

    #[derive(Default)]
    struct FlakyEmitter {
        failing: Vec<&'static str>,
        written: Vec<String>,
        finished: bool,
    }

    impl Emitter for FlakyEmitter {
        fn write(
            &mut self,
            target: &ArtifactTarget<'_>,
            _tree: &[PathNode],
        ) -> Result<(), EmitError> {
            if self.failing.iter().any(|name| *name == target.type_name) {
                return Err(EmitError::InvalidIdent(target.type_name.to_string()));
            }
            self.written.push(target.type_name.to_string());

            Ok(())
        }

        fn finish(&mut self) -> Result<(), EmitError> {
            self.finished = true;
            Ok(())
        }
    }

    fn pool() -> ClassPool {
        [
            ClassDescriptor::new("app", "Person")
                .field("name")
                .link("address", "lib.Address"),
            ClassDescriptor::new("lib", "Address").field("city").library(),
            ClassDescriptor::new("app", "Dog").field("name"),
            ClassDescriptor::new("app", "Cat").field("name"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn generates_one_artifact_per_project_class() {
        let pool = pool();
        let mut emitter = MemoryEmitter::default();

        assert!(generate(&pool, &mut emitter));

        let names: Vec<_> = emitter
            .artifacts()
            .iter()
            .map(|a| a.type_name.as_str())
            .collect();
        assert_eq!(names, ["PersonFields", "DogFields", "CatFields"]);
        assert!(emitter.get("lib", "AddressFields").is_none());
    }

    #[test]
    fn library_link_targets_are_expanded() {
        let pool = pool();
        let mut emitter = MemoryEmitter::default();
        assert!(generate(&pool, &mut emitter));

        let person = emitter
            .get("app", "PersonFields")
            .expect("person artifact should exist");
        assert!(person.source.contains("\"address.city\""), "got: {}", person.source);
    }

    #[test]
    fn artifact_docs_name_the_source_class() {
        let pool = pool();
        let mut emitter = MemoryEmitter::default();
        assert!(generate(&pool, &mut emitter));

        let dog = emitter
            .get("app", "DogFields")
            .expect("dog artifact should exist");
        assert!(dog.source.contains("`app.Dog`"), "got: {}", dog.source);
        assert!(!dog.source.contains("`app.DogFields`"), "got: {}", dog.source);
    }

    #[test]
    fn failures_do_not_stop_remaining_classes() {
        let pool = pool();
        let mut emitter = FlakyEmitter {
            failing: vec!["PersonFields"],
            ..FlakyEmitter::default()
        };

        let report = Generator::new(&pool, GenerateConfig::default()).generate_report(&mut emitter);

        assert!(!report.is_success());
        assert_eq!(emitter.written, ["DogFields", "CatFields"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].class, "app.Person");
        assert_eq!(report.attempted(), 3);
        assert!(emitter.finished);
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let pool = pool();
        let mut emitter = FlakyEmitter {
            failing: vec!["DogFields"],
            ..FlakyEmitter::default()
        };
        let config = GenerateConfig {
            fail_fast: true,
            ..GenerateConfig::default()
        };

        let report = Generator::new(&pool, config).generate_report(&mut emitter);

        assert!(!report.is_success());
        assert_eq!(emitter.written, ["PersonFields"]);
        assert_eq!(report.skipped, 1);
        assert!(!emitter.finished);
    }

    #[test]
    fn custom_suffix_names_artifacts() {
        let pool = pool();
        let mut emitter = MemoryEmitter::default();
        let config = GenerateConfig {
            suffix: "Paths".to_string(),
            ..GenerateConfig::default()
        };

        assert!(Generator::new(&pool, config).generate(&mut emitter));
        assert!(emitter.get("app", "DogPaths").is_some());
    }

    #[test]
    fn duplicate_targets_fail_the_run() {
        let pool: ClassPool = [
            ClassDescriptor::new("app", "Dog").field("name"),
            ClassDescriptor::new("app", "Dog").field("age"),
        ]
        .into_iter()
        .collect();
        let mut emitter = MemoryEmitter::default();

        assert!(!generate(&pool, &mut emitter));
        assert_eq!(emitter.artifacts().len(), 1);
    }

    #[test]
    fn empty_pool_succeeds() {
        let mut emitter = MemoryEmitter::default();

        assert!(generate(&ClassPool::new(), &mut emitter));
        assert!(emitter.artifacts().is_empty());
    }
}
