// Console messages: a small mutable text value with case helpers, and the
// severity-tagged output used for every piece of operator feedback.

use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::config::AppConfig;
use crate::console::Console;

/// Severity used when printing feedback to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVariant {
    Success,
    Error,
    Info,
}

impl MessageVariant {
    /// Parse a variant name. Unknown names fall back to `Info`, the same
    /// presentation as an explicit `"info"`.
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => MessageVariant::Success,
            "error" => MessageVariant::Error,
            _ => MessageVariant::Info,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            MessageVariant::Success => "✔",
            MessageVariant::Error => "✖",
            MessageVariant::Info => "ℹ",
        }
    }
}

impl From<&str> for MessageVariant {
    fn from(value: &str) -> Self {
        MessageVariant::parse(value)
    }
}

/// A piece of text that can be re-cased in place and printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Message {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Print the current content to stdout.
    pub fn show(&self) {
        println!("{}", self.content);
    }

    pub fn show_to<W: Write>(&self, console: &mut Console<W>) -> io::Result<()> {
        console.line(&self.content)
    }

    /// First character upper-cased, everything after it lower-cased.
    pub fn capitalize(&mut self) {
        let mut chars = self.content.chars();
        self.content = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        };
    }

    pub fn to_upper_case(&mut self) {
        self.content = self.content.to_uppercase();
    }

    pub fn to_lower_case(&mut self) {
        self.content = self.content.to_lowercase();
    }

    /// Print `text` to stdout tagged with the given severity, styled
    /// unless color is switched off in the environment.
    pub fn show_colorized(variant: MessageVariant, text: &str) -> io::Result<()> {
        let mut out = io::stdout();
        writeln!(out, "{}", Message::colorized(variant, text))
    }

    /// The line [`Message::show_colorized`] prints.
    pub fn colorized(variant: MessageVariant, text: &str) -> String {
        Message::styled(variant, text, AppConfig::from_env().color)
    }

    /// Render a severity-tagged line. With `color` off the glyph is kept
    /// and no escape sequences are emitted.
    pub fn styled(variant: MessageVariant, text: &str, color: bool) -> String {
        let line = format!("{} {}", variant.glyph(), text);
        if !color {
            return line;
        }
        match variant {
            MessageVariant::Success => line.green().bold().to_string(),
            MessageVariant::Error => line.red().bold().to_string(),
            MessageVariant::Info => line.cyan().to_string(),
        }
    }
}
