use std::io;

use super::Sink;

/// In-memory sink recording the event stream; used to verify report output
/// without touching the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Head(String),
    Section(u8, String),
    Paragraph(String),
    List(Vec<String>),
    Link(String, String),
    Close,
}

#[derive(Default)]
pub struct BufferSink {
    events: Vec<SinkEvent>,
}

#[allow(dead_code)]
impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn head_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Head(_)))
            .count()
    }

    pub fn text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            match event {
                SinkEvent::Head(t) | SinkEvent::Section(_, t) | SinkEvent::Paragraph(t) => {
                    out.push_str(t);
                    out.push('\n');
                }
                SinkEvent::List(items) => {
                    for item in items {
                        out.push_str(item);
                        out.push('\n');
                    }
                }
                SinkEvent::Link(_, t) => {
                    out.push_str(t);
                    out.push('\n');
                }
                SinkEvent::Close => {}
            }
        }
        out
    }
}

impl Sink for BufferSink {
    fn head(&mut self, title: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Head(title.to_string()));
        Ok(())
    }

    fn section(&mut self, level: u8, title: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Section(level, title.to_string()));
        Ok(())
    }

    fn paragraph(&mut self, text: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Paragraph(text.to_string()));
        Ok(())
    }

    fn list(&mut self, items: &[String]) -> io::Result<()> {
        self.events.push(SinkEvent::List(items.to_vec()));
        Ok(())
    }

    fn link(&mut self, href: &str, text: &str) -> io::Result<()> {
        self.events
            .push(SinkEvent::Link(href.to_string(), text.to_string()));
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.events.push(SinkEvent::Close);
        Ok(())
    }
}
