use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::locale::{Locale, Localized};
use crate::core::project::Manifest;
use crate::reports::traits::{Report, ReportCategory, ReportError};
use crate::sink::Sink;

/// Project coordinates and description.
pub struct SummaryReport {
    manifest: Manifest,
    name: Localized,
    description: Localized,
    output_dir: PathBuf,
}

impl SummaryReport {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            name: Localized::new("Project Summary")
                .with("fr", "Résumé du projet")
                .with("de", "Projektübersicht"),
            description: Localized::new(
                "Overview of the project: name, version, description and authors.",
            )
            .with("fr", "Aperçu du projet : nom, version, description et auteurs."),
            output_dir: PathBuf::new(),
        }
    }
}

#[async_trait]
impl Report for SummaryReport {
    fn output_path(&self) -> &str {
        "summary"
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

    async fn generate(&self, sink: &mut dyn Sink, locale: &Locale) -> Result<(), ReportError> {
        let title = self.name(locale);
        sink.head(&title)?;
        sink.section(1, &title)?;

        let mut facts = vec![format!("Name: {}", self.manifest.name)];
        if let Some(version) = &self.manifest.version {
            facts.push(format!("Version: {}", version));
        }
        sink.list(&facts)?;

        if let Some(description) = &self.manifest.description {
            sink.paragraph(description)?;
        }

        if !self.manifest.authors.is_empty() {
            sink.section(2, "Authors")?;
            sink.list(&self.manifest.authors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;

    fn manifest() -> Manifest {
        Manifest {
            name: "widget".to_string(),
            version: Some("1.2.0".to_string()),
            description: Some("A widget library.".to_string()),
            authors: vec!["Ada".to_string()],
            dependencies: vec![],
        }
    }

    #[test]
    fn test_metadata() {
        let report = SummaryReport::new(manifest());
        assert_eq!(report.output_path(), "summary");
        assert_eq!(report.category(), ReportCategory::ProjectInformation);
        assert!(!report.is_external());
    }

    #[test]
    fn test_name_localized_with_fallback() {
        let report = SummaryReport::new(manifest());
        assert_eq!(report.name(&Locale::new("fr")), "Résumé du projet");
        assert_eq!(report.name(&Locale::new("sw")), "Project Summary");
    }

    #[tokio::test]
    async fn test_generate_renders_coordinates() {
        let report = SummaryReport::new(manifest());
        let mut sink = BufferSink::new();
        report.generate(&mut sink, &Locale::english()).await.unwrap();

        assert_eq!(sink.head_count(), 1);
        let text = sink.text();
        assert!(text.contains("Name: widget"));
        assert!(text.contains("Version: 1.2.0"));
        assert!(text.contains("A widget library."));
        assert!(text.contains("Ada"));
    }

    #[tokio::test]
    async fn test_generate_omits_absent_fields() {
        let report = SummaryReport::new(Manifest {
            name: "bare".to_string(),
            version: None,
            description: None,
            authors: vec![],
            dependencies: vec![],
        });
        let mut sink = BufferSink::new();
        report.generate(&mut sink, &Locale::english()).await.unwrap();
        let text = sink.text();
        assert!(text.contains("Name: bare"));
        assert!(!text.contains("Version:"));
        assert!(!text.contains("Authors"));
    }
}
