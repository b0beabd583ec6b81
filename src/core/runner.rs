use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::locale::Locale;
use crate::reports::traits::{Report, ReportCategory};
use crate::sink::SinkFactory;

pub enum ReportOutcome {
    Generated(PathBuf),
    Skipped(String),
    Failed(String),
}

pub struct RunSummary {
    pub outcomes: Vec<(String, ReportOutcome)>,
    pub duration: Duration,
}

impl RunSummary {
    pub fn generated(&self) -> usize {
        self.count(|o| matches!(o, ReportOutcome::Generated(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ReportOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ReportOutcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&ReportOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Runs a set of reports into a shared output directory. Each report is
/// configured with the directory, gated on `can_generate`, then generated
/// through a factory-built sink. A failing report does not abort the run.
pub struct ReportRunner {
    reports: Vec<Box<dyn Report>>,
}

impl ReportRunner {
    pub fn new(reports: Vec<Box<dyn Report>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for report in &reports {
            if !seen.insert(report.output_path().to_string()) {
                bail!("duplicate report output path '{}'", report.output_path());
            }
        }
        Ok(Self { reports })
    }

    #[allow(dead_code)]
    pub fn reports(&self) -> &[Box<dyn Report>] {
        &self.reports
    }

    pub async fn run(
        &mut self,
        locale: &Locale,
        output_dir: &Path,
        factory: &SinkFactory,
        mut on_report: impl FnMut(&str),
    ) -> Result<RunSummary> {
        let start = Instant::now();
        let mut outcomes = Vec::new();

        for report in &mut self.reports {
            let key = report.output_path().to_string();
            on_report(&key);
            report.set_output_directory(output_dir.to_path_buf());

            let outcome = match report.can_generate().await {
                Ok(false) => ReportOutcome::Skipped("precondition not met".to_string()),
                Err(e) => ReportOutcome::Failed(format!("precondition check failed: {e}")),
                Ok(true) => match factory.create(output_dir, &key) {
                    Err(e) => ReportOutcome::Failed(format!("cannot open sink: {e}")),
                    Ok(mut sink) => match report.generate(sink.as_mut(), locale).await {
                        Ok(()) => match sink.close() {
                            Ok(()) => {
                                ReportOutcome::Generated(factory.file_path(output_dir, &key))
                            }
                            Err(e) => ReportOutcome::Failed(format!("cannot close sink: {e}")),
                        },
                        Err(e) => ReportOutcome::Failed(e.to_string()),
                    },
                },
            };
            outcomes.push((key, outcome));
        }

        Ok(RunSummary {
            outcomes,
            duration: start.elapsed(),
        })
    }

    /// Write the site index: generated reports grouped by category, with
    /// localized names and descriptions.
    pub fn write_index(
        &self,
        title: &str,
        locale: &Locale,
        output_dir: &Path,
        factory: &SinkFactory,
        summary: &RunSummary,
    ) -> Result<PathBuf> {
        let generated: HashSet<&str> = summary
            .outcomes
            .iter()
            .filter(|(_, o)| matches!(o, ReportOutcome::Generated(_)))
            .map(|(key, _)| key.as_str())
            .collect();

        let mut categories: Vec<ReportCategory> = Vec::new();
        for report in &self.reports {
            if generated.contains(report.output_path()) && !categories.contains(&report.category())
            {
                categories.push(report.category());
            }
        }

        let mut sink = factory.create(output_dir, "index")?;
        sink.head(title)?;
        sink.section(1, title)?;

        for category in &categories {
            sink.section(2, &category.to_string())?;
            for report in &self.reports {
                if report.category() != *category || !generated.contains(report.output_path()) {
                    continue;
                }
                let href = format!("{}.{}", report.output_path(), factory.extension());
                sink.link(&href, &report.name(locale))?;
                sink.paragraph(&report.description(locale))?;
            }
        }
        sink.close()?;

        Ok(factory.file_path(output_dir, "index"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::traits::ReportError;
    use crate::sink::{Sink, SinkFormat};
    use async_trait::async_trait;
    use std::fs;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    struct StubReport {
        output_path: &'static str,
        category: ReportCategory,
        can_generate: bool,
        fail_generate: bool,
        generated_flag: Arc<AtomicBool>,
        output_dir: PathBuf,
    }

    impl StubReport {
        fn boxed(output_path: &'static str, can_generate: bool) -> Box<Self> {
            Box::new(Self {
                output_path,
                category: ReportCategory::ProjectInformation,
                can_generate,
                fail_generate: false,
                generated_flag: Arc::new(AtomicBool::new(false)),
                output_dir: PathBuf::new(),
            })
        }
    }

    #[async_trait]
    impl Report for StubReport {
        fn output_path(&self) -> &str {
            self.output_path
        }

        fn category(&self) -> ReportCategory {
            self.category.clone()
        }

        fn name(&self, _locale: &Locale) -> String {
            format!("Report {}", self.output_path)
        }

        fn description(&self, _locale: &Locale) -> String {
            format!("Description of {}", self.output_path)
        }

        fn set_output_directory(&mut self, dir: PathBuf) {
            self.output_dir = dir;
        }

        fn output_directory(&self) -> &Path {
            &self.output_dir
        }

        async fn can_generate(&self) -> Result<bool, ReportError> {
            Ok(self.can_generate)
        }

        async fn generate(
            &self,
            sink: &mut dyn Sink,
            locale: &Locale,
        ) -> Result<(), ReportError> {
            if self.fail_generate {
                return Err(ReportError::Render {
                    report: self.output_path.to_string(),
                    reason: "stub failure".to_string(),
                });
            }
            self.generated_flag.store(true, Ordering::SeqCst);
            sink.head(&self.name(locale))?;
            sink.paragraph("stub content")?;
            Ok(())
        }
    }

    fn factory() -> SinkFactory {
        SinkFactory::new(SinkFormat::Html)
    }

    #[test]
    fn test_duplicate_output_paths_rejected() {
        let reports: Vec<Box<dyn Report>> = vec![
            StubReport::boxed("same", true),
            StubReport::boxed("same", true),
        ];
        assert!(ReportRunner::new(reports).is_err());
    }

    #[tokio::test]
    async fn test_run_generates_files() {
        let tmp = TempDir::new().unwrap();
        let reports: Vec<Box<dyn Report>> = vec![
            StubReport::boxed("alpha", true),
            StubReport::boxed("beta", true),
        ];
        let mut runner = ReportRunner::new(reports).unwrap();

        let mut visited = Vec::new();
        let summary = runner
            .run(&Locale::english(), tmp.path(), &factory(), |name| {
                visited.push(name.to_string())
            })
            .await
            .unwrap();

        assert_eq!(visited, vec!["alpha".to_string(), "beta".to_string()]);
        assert_eq!(summary.generated(), 2);
        assert!(tmp.path().join("alpha.html").exists());
        assert!(tmp.path().join("beta.html").exists());
    }

    #[tokio::test]
    async fn test_skipped_report_is_never_generated() {
        let tmp = TempDir::new().unwrap();
        let gated = StubReport::boxed("gated", false);
        let flag = gated.generated_flag.clone();
        let mut runner = ReportRunner::new(vec![gated as Box<dyn Report>]).unwrap();

        let summary = runner
            .run(&Locale::english(), tmp.path(), &factory(), |_| {})
            .await
            .unwrap();

        assert_eq!(summary.skipped(), 1);
        assert!(!flag.load(Ordering::SeqCst));
        assert!(!tmp.path().join("gated.html").exists());
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_run() {
        let tmp = TempDir::new().unwrap();
        let mut failing = StubReport::boxed("failing", true);
        failing.fail_generate = true;
        let reports: Vec<Box<dyn Report>> =
            vec![failing, StubReport::boxed("after", true)];
        let mut runner = ReportRunner::new(reports).unwrap();

        let summary = runner
            .run(&Locale::english(), tmp.path(), &factory(), |_| {})
            .await
            .unwrap();

        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.generated(), 1);
        assert!(summary.has_failures());
        assert!(tmp.path().join("after.html").exists());
    }

    #[tokio::test]
    async fn test_output_directory_set_before_generation() {
        let tmp = TempDir::new().unwrap();
        let mut runner =
            ReportRunner::new(vec![StubReport::boxed("alpha", true) as Box<dyn Report>])
                .unwrap();
        runner
            .run(&Locale::english(), tmp.path(), &factory(), |_| {})
            .await
            .unwrap();
        assert_eq!(runner.reports()[0].output_directory(), tmp.path());
    }

    #[tokio::test]
    async fn test_index_groups_generated_reports() {
        let tmp = TempDir::new().unwrap();
        let mut external = StubReport::boxed("tooling", true);
        external.category = ReportCategory::ProjectReports;
        let reports: Vec<Box<dyn Report>> = vec![
            StubReport::boxed("alpha", true),
            StubReport::boxed("gated", false),
            external,
        ];
        let mut runner = ReportRunner::new(reports).unwrap();
        let summary = runner
            .run(&Locale::english(), tmp.path(), &factory(), |_| {})
            .await
            .unwrap();

        let index = runner
            .write_index("widget", &Locale::english(), tmp.path(), &factory(), &summary)
            .unwrap();
        let content = fs::read_to_string(index).unwrap();
        assert!(content.contains("Project Info"));
        assert!(content.contains("Project Reports"));
        assert!(content.contains(r#"href="alpha.html""#));
        assert!(content.contains(r#"href="tooling.html""#));
        assert!(!content.contains("gated.html"));
    }
}
