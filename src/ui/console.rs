use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::Stylize;

/// Output side of the REPL: results go to `out`, errors to `err`.
pub struct Console<O: Write, E: Write> {
    pub(super) out: O,
    pub(super) err: E,
    /// Colour errors and notices
    pub color: bool,
}

impl Console<io::Stdout, io::Stderr> {
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    pub fn push_line(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn push_error(&mut self, line: impl Display) -> io::Result<()> {
        let line = line.to_string();
        if self.color {
            writeln!(self.err, "{}", line.red())
        } else {
            writeln!(self.err, "{line}")
        }
    }

    /// Breakpoint halts and other state changes worth noticing.
    pub fn notice(&mut self, line: impl Display) -> io::Result<()> {
        let line = line.to_string();
        if self.color {
            writeln!(self.out, "{}", line.yellow())
        } else {
            writeln!(self.out, "{line}")
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
