use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::Sink;

/// File-backed Markdown sink.
pub struct MarkdownSink {
    writer: BufWriter<File>,
}

impl MarkdownSink {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }
}

impl Sink for MarkdownSink {
    fn head(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "# {}\n", title)
    }

    fn section(&mut self, level: u8, title: &str) -> io::Result<()> {
        let level = level.clamp(1, 6) as usize;
        writeln!(self.writer, "{} {}\n", "#".repeat(level), title)
    }

    fn paragraph(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}\n", text)
    }

    fn list(&mut self, items: &[String]) -> io::Result<()> {
        for item in items {
            writeln!(self.writer, "- {}", item)?;
        }
        writeln!(self.writer)
    }

    fn link(&mut self, href: &str, text: &str) -> io::Result<()> {
        writeln!(self.writer, "[{}]({})\n", text, href)
    }

    fn close(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
