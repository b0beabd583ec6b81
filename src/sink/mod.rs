pub mod html;
pub mod markdown;
pub mod memory;

pub use html::HtmlSink;
pub use markdown::MarkdownSink;
pub use memory::BufferSink;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Structured-document writer reports render into. Reports emit content
/// events only; the orchestrator opens the sink and calls `close` when the
/// report has finished.
pub trait Sink: Send {
    /// Document header with the page title
    fn head(&mut self, title: &str) -> io::Result<()>;

    /// Section heading, levels 1 through 6
    fn section(&mut self, level: u8, title: &str) -> io::Result<()>;

    fn paragraph(&mut self, text: &str) -> io::Result<()>;

    fn list(&mut self, items: &[String]) -> io::Result<()>;

    fn link(&mut self, href: &str, text: &str) -> io::Result<()>;

    /// Finish the document and flush buffered output
    fn close(&mut self) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFormat {
    Html,
    Markdown,
}

impl SinkFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "markdown" => SinkFormat::Markdown,
            _ => SinkFormat::Html,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SinkFormat::Html => "html",
            SinkFormat::Markdown => "md",
        }
    }
}

/// Builds file-backed sinks under the shared output directory. The output
/// path supplied by a report carries no extension; the factory appends the
/// format's extension and creates intermediate directories.
pub struct SinkFactory {
    format: SinkFormat,
}

impl SinkFactory {
    pub fn new(format: SinkFormat) -> Self {
        Self { format }
    }

    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    pub fn file_path(&self, output_dir: &Path, output_path: &str) -> PathBuf {
        output_dir.join(format!("{}.{}", output_path, self.format.extension()))
    }

    pub fn create(&self, output_dir: &Path, output_path: &str) -> io::Result<Box<dyn Sink>> {
        let path = self.file_path(output_dir, output_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        match self.format {
            SinkFormat::Html => Ok(Box::new(HtmlSink::create(&path)?)),
            SinkFormat::Markdown => Ok(Box::new(MarkdownSink::create(&path)?)),
        }
    }
}
