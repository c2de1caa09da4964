//! Indented tag writer backing the serializer.

use std::borrow::Cow;

use crate::config::ExportConfig;

/// Line-oriented markup buffer. Every call writes one full line at the given
/// indent level.
#[derive(Debug, Clone)]
pub struct MarkupWriter {
    buf: String,
    unit: String,
}

impl MarkupWriter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            buf: String::new(),
            unit: config.indent_unit.clone(),
        }
    }

    /// `<tag>`
    pub fn open(&mut self, level: usize, tag: &str) {
        self.indent(level);
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// `</tag>`
    pub fn close(&mut self, level: usize, tag: &str) {
        self.indent(level);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// `<tag name="NAME">VALUE</tag>`
    pub fn element(&mut self, level: usize, tag: &str, name: &str, value: &str) {
        self.indent(level);
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(" name=\"");
        self.buf.push_str(&escape(name));
        self.buf.push_str("\">");
        self.buf.push_str(&escape(value));
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// `<property name="NAME">VALUE</property>`
    pub fn property(&mut self, level: usize, name: &str, value: &str) {
        self.element(level, "property", name, value);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.buf.push_str(&self.unit);
        }
    }
}

/// Escape the characters that would break the markup.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
