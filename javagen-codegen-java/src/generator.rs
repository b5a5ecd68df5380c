use std::collections::HashSet;

use eyre::{Result, WrapErr, bail, eyre};
use javagen_codegen::{CancellationToken, Generator};
use javagen_config::{HasName, Project, TypeMapperRegistry};
use javagen_model::NodeKind;
use tracing::info;

use crate::{EntityTranslator, install_defaults};

/// A rendered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the source root, e.g. `com/acme/User.java`
    pub path: String,
    /// File content
    pub content: String,
}

/// Java code generator: translates a project into model files and renders
/// them with the default Java views.
///
/// Nothing is written to disk; callers decide where the files go.
#[derive(Debug)]
pub struct JavaGenerator {
    generator: Generator,
    registry: TypeMapperRegistry,
}

impl Default for JavaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaGenerator {
    pub fn new() -> Self {
        let mut generator = Generator::new();
        install_defaults(&mut generator);
        Self {
            generator,
            registry: TypeMapperRegistry::with_defaults(),
        }
    }

    /// The generator used for rendering, e.g. to override a view.
    pub fn generator_mut(&mut self) -> &mut Generator {
        &mut self.generator
    }

    /// The type mapper registry, e.g. to register a custom mapper.
    pub fn registry_mut(&mut self) -> &mut TypeMapperRegistry {
        &mut self.registry
    }

    /// Generate every source file of `project`.
    ///
    /// `cancel` is checked between files; a cancelled run returns an error
    /// and no files.
    pub fn generate(
        &self,
        project: &Project<'_>,
        cancel: &CancellationToken,
    ) -> Result<Vec<GeneratedFile>> {
        let settings = project.settings()?;
        let files = EntityTranslator::new(&self.registry, settings.clone())
            .translate(project)
            .wrap_err_with(|| format!("failed to translate project `{}`", project.name()))?;

        let mut seen = HashSet::new();
        for file in &files {
            if !seen.insert(file.name.as_str()) {
                bail!("two tables generate the same file `{}`", file.name);
            }
        }

        let mut generator = self.generator.clone();
        generator.set_settings(settings);
        let rendered = generator
            .render_all(&files, cancel)
            .wrap_err("failed to render generated files")?;

        let generated = files
            .into_iter()
            .zip(rendered)
            .map(|(file, content)| {
                let content = content
                    .ok_or_else(|| eyre!("no transform registered for {}", NodeKind::File))?;
                Ok(GeneratedFile {
                    path: file.name,
                    content,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            project = project.name(),
            files = generated.len(),
            "generated java sources"
        );
        Ok(generated)
    }
}
