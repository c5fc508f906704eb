// Output sink shared by the interactive loop and the user collection.
// Production writes to stdout; tests hand in a byte buffer and read it back.

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::{self, Stdout, Write};

use crate::message::{Message, MessageVariant};

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Console::new(io::stdout(), color)
    }
}

impl Console<Vec<u8>> {
    /// In-memory console without styling.
    pub fn buffer() -> Self {
        Console::new(Vec::new(), false)
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Console { out, color }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Severity-tagged line, see [`Message::styled`].
    pub fn emit(&mut self, variant: MessageVariant, text: &str) -> io::Result<()> {
        let line = Message::styled(variant, text, self.color);
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    pub fn table<H, R>(&mut self, headers: H, rows: R) -> io::Result<()>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = Vec<String>>,
    {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(headers.into_iter().map(Into::into).collect::<Vec<String>>());
        for row in rows {
            table.add_row(row);
        }
        writeln!(self.out, "{}", table)?;
        self.out.flush()
    }
}
