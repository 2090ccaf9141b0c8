//! Grid coordinates.
//!
//! A `Location` addresses one cell of a layer: `x` counts columns left to
//! right, `y` counts rows top to bottom, both 0-based. Coordinates are
//! unsigned, so a negative location can't be built; signed input coming
//! from configuration, the command line, or a translation vector is
//! checked on the way in.

use std::fmt;
use std::str::FromStr;

use crate::error::{CanvasError, Result};

/// A cell coordinate (column `x`, row `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    /// The top-left cell, used as the implicit anchor for insertion and merge.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a location at column `x`, row `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return a new location offset by the vector `(vx, vy)`.
    ///
    /// The receiver is not modified. Fails with `InvalidArgument` when the
    /// result would fall left of column 0 or above row 0.
    pub fn translated(self, vx: isize, vy: isize) -> Result<Self> {
        Ok(Self {
            x: offset("x", self.x, vx)?,
            y: offset("y", self.y, vy)?,
        })
    }

    /// Offset this location in place by the vector `(vx, vy)`.
    ///
    /// On failure the location keeps its previous value.
    pub fn translate(&mut self, vx: isize, vy: isize) -> Result<()> {
        *self = self.translated(vx, vy)?;
        Ok(())
    }
}

/// Apply a signed delta to one coordinate.
fn offset(name: &'static str, value: usize, delta: isize) -> Result<usize> {
    value.checked_add_signed(delta).ok_or_else(|| {
        CanvasError::invalid(name, format!("{value} moved by {delta} leaves the grid"))
    })
}

/// Validate one signed coordinate.
fn coordinate(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).ok().ok_or_else(|| {
        CanvasError::invalid(name, format!("{value} must be a non-negative integer"))
    })
}

impl TryFrom<(i64, i64)> for Location {
    type Error = CanvasError;

    fn try_from((x, y): (i64, i64)) -> Result<Self> {
        Ok(Self::new(coordinate("x", x)?, coordinate("y", y)?))
    }
}

impl From<(usize, usize)> for Location {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"X,Y"`, e.g. `"3,1"`. Whitespace around either number is ignored.
impl FromStr for Location {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s.split_once(',').ok_or_else(|| {
            CanvasError::invalid("location", format!("`{s}` is not of the form X,Y"))
        })?;
        let parse = |name: &'static str, part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| CanvasError::invalid(name, format!("`{}`: {e}", part.trim())))
        };
        Self::try_from((parse("x", x)?, parse("y", y)?))
    }
}
