//! Layer output.
//!
//! The layer itself never performs I/O. These helpers serialize a layer's
//! rows to a writer: either as plain lines, top to bottom, or positioned
//! on screen with cursor movement sequences.

use std::fmt;
use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;

use crate::layer::Layer;
use crate::loc::Location;

/// Write every row of `layer` as one line, top to bottom.
pub fn render<W: Write>(layer: &Layer, out: &mut W) -> io::Result<()> {
    for row in layer.rows() {
        writeln!(out, "{row}")?;
    }
    out.flush()
}

/// Write `layer` to standard output.
pub fn render_stdout(layer: &Layer) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(layer, &mut out)
}

/// Draw `layer` with its top-left corner at screen cell `origin`.
///
/// Each row is preceded by a cursor move, so the surrounding screen content
/// outside the layer's footprint is left alone.
pub fn render_at<W: Write>(layer: &Layer, origin: Location, out: &mut W) -> io::Result<()> {
    let col = screen_coord(origin.x)?;
    for (y, row) in layer.rows().iter().enumerate() {
        let line = origin
            .y
            .checked_add(y)
            .ok_or_else(|| unaddressable(format!("screen row {} + {y} overflows", origin.y)))?;
        let line = screen_coord(line)?;
        out.queue(MoveTo(col, line))?.queue(Print(row))?;
    }
    out.flush()
}

/// Terminal coordinates are 16-bit.
fn screen_coord(value: usize) -> io::Result<u16> {
    u16::try_from(value).map_err(|e| unaddressable(format!("screen coordinate {value}: {e}")))
}

fn unaddressable(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
