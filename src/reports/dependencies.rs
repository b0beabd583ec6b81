use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::config::Dependency;
use crate::core::locale::{Locale, Localized};
use crate::core::project::Manifest;
use crate::reports::traits::{Report, ReportCategory, ReportError};
use crate::sink::Sink;

/// Declared dependencies of the project.
pub struct DependenciesReport {
    manifest: Manifest,
    name: Localized,
    description: Localized,
    output_dir: PathBuf,
}

impl DependenciesReport {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            name: Localized::new("Dependencies").with("fr", "Dépendances"),
            description: Localized::new("Dependencies declared by the project.")
                .with("fr", "Dépendances déclarées par le projet."),
            output_dir: PathBuf::new(),
        }
    }
}

fn render_dependency(dep: &Dependency) -> String {
    let mut line = dep.name.clone();
    if let Some(version) = &dep.version {
        line.push(' ');
        line.push_str(version);
    }
    if let Some(scope) = &dep.scope {
        line.push_str(&format!(" ({})", scope));
    }
    line
}

#[async_trait]
impl Report for DependenciesReport {
    fn output_path(&self) -> &str {
        "dependencies"
    }

    fn category(&self) -> ReportCategory {
        ReportCategory::ProjectInformation
    }

    fn name(&self, locale: &Locale) -> String {
        self.name.resolve(locale).to_string()
    }

    fn description(&self, locale: &Locale) -> String {
        self.description.resolve(locale).to_string()
    }

    fn set_output_directory(&mut self, dir: PathBuf) {
        self.output_dir = dir;
    }

    fn output_directory(&self) -> &Path {
        &self.output_dir
    }

    /// Nothing to report for a project with no declared dependencies.
    async fn can_generate(&self) -> Result<bool, ReportError> {
        Ok(!self.manifest.dependencies.is_empty())
    }

    async fn generate(&self, sink: &mut dyn Sink, locale: &Locale) -> Result<(), ReportError> {
        let title = self.name(locale);
        sink.head(&title)?;
        sink.section(1, &title)?;
        sink.paragraph(self.description.resolve(locale))?;

        let items: Vec<String> = self
            .manifest
            .dependencies
            .iter()
            .map(render_dependency)
            .collect();
        sink.list(&items)?;
        Ok(())
    }
}
