use drum_core::FrameEntry;
use std::fmt::Write as _;
use std::io::{self, Write};

/// One true-colour swatch per panel, all on a single line.
pub fn format_frame(entries: &[FrameEntry], out: &mut String) {
    out.clear();
    out.push('\r');
    for e in entries {
        _ = write!(out, "\x1b[48;2;{};{};{}m  \x1b[0m", e.r, e.g, e.b);
    }
}

pub struct Display<W: Write> {
    out: W,
    line: String,
}

impl<W: Write> Display<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
        }
    }

    pub fn draw(&mut self, entries: &[FrameEntry]) -> io::Result<()> {
        format_frame(entries, &mut self.line);
        self.out.write_all(self.line.as_bytes())?;
        self.out.flush()
    }

    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}
