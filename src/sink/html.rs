use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::Sink;

/// File-backed XHTML sink.
pub struct HtmlSink {
    writer: BufWriter<File>,
}

impl HtmlSink {
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }
}

impl Sink for HtmlSink {
    fn head(&mut self, title: &str) -> io::Result<()> {
        write!(
            self.writer,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>
{}
</style>
</head>
<body>
<div class="container">
"#,
            escape_html(title),
            CSS
        )
    }

    fn section(&mut self, level: u8, title: &str) -> io::Result<()> {
        let level = level.clamp(1, 6);
        writeln!(self.writer, "<h{}>{}</h{}>", level, escape_html(title), level)
    }

    fn paragraph(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "<p>{}</p>", escape_html(text))
    }

    fn list(&mut self, items: &[String]) -> io::Result<()> {
        writeln!(self.writer, "<ul>")?;
        for item in items {
            writeln!(self.writer, "<li>{}</li>", escape_html(item))?;
        }
        writeln!(self.writer, "</ul>")
    }

    fn link(&mut self, href: &str, text: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            r#"<p><a href="{}">{}</a></p>"#,
            escape_html(href),
            escape_html(text)
        )
    }

    fn close(&mut self) -> io::Result<()> {
        writeln!(self.writer, "</div>\n</body>\n</html>")?;
        self.writer.flush()
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
       line-height: 1.6; color: #333; background: #f5f5f5; }
.container { max-width: 900px; margin: 0 auto; padding: 2rem; background: #fff;
             min-height: 100vh; box-shadow: 0 0 20px rgba(0,0,0,0.05); }
h1 { margin-bottom: 1rem; color: #1a1a1a; }
h2 { margin: 2rem 0 1rem; color: #1a1a1a; border-bottom: 2px solid #eee; padding-bottom: 0.5rem; }
h3 { margin: 1.5rem 0 0.5rem; }
p { margin: 0.5rem 0; }
ul { margin: 0.5rem 0 0.5rem 1.5rem; }
a { color: #1976d2; text-decoration: none; }
a:hover { text-decoration: underline; }
"#;
