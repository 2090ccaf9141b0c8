//! Layers: growable, rectangular character grids.
//!
//! A `Layer` owns a grid of single characters stored row-major (outer index
//! is the row `y`, inner index the column `x`). Layers grow on demand when a
//! string or another layer is placed past their current edges, bounded on
//! the right by the layer's `max_width`. Growth and insertion live in
//! submodules.

mod editing;
mod expand;
pub mod row;

use std::ops::Index;

use crate::error::{CanvasError, Result};
use crate::loc::Location;

pub use row::Row;

/// Fill character for cells allocated by row or column growth.
///
/// Growth always uses this character, regardless of the layer's own
/// default character chosen at construction.
pub const DEFAULT_CHAR: char = ' ';

/// Screen width assumed when the caller doesn't supply one.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// A rectangular grid of characters.
///
/// Every row has the same length. `size_x` is the column count of the
/// first row (0 when there are no rows) and `size_y` is the row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Rows, index 0 at the top.
    rows: Vec<Row>,
    /// Construction fill, and the transparent cell value when merged.
    default_char: char,
    /// Maximum column count growth may reach.
    max_width: usize,
}

impl Layer {
    /// Create a `size_y` by `size_x` layer filled with `default_char`.
    ///
    /// A layer created with zero rows has zero width, whatever `size_x` is.
    pub fn new(size_x: usize, size_y: usize, default_char: char) -> Self {
        Self {
            rows: (0..size_y).map(|_| Row::new(size_x, default_char)).collect(),
            default_char,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Like [`Layer::new`], taking the fill character as text.
    ///
    /// Fails with `InvalidArgument` unless `fill` is exactly one character.
    pub fn with_fill(size_x: usize, size_y: usize, fill: &str) -> Result<Self> {
        Ok(Self::new(size_x, size_y, parse_fill_char(fill)?))
    }

    /// Set the screen width used to bound growth.
    #[must_use]
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn set_max_width(&mut self, max_width: usize) {
        self.max_width = max_width;
    }

    /// Maximum column count this layer may grow to.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// The character this layer was filled with at construction.
    pub fn default_char(&self) -> char {
        self.default_char
    }

    /// Number of columns.
    pub fn size_x(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    /// Number of rows.
    pub fn size_y(&self) -> usize {
        self.rows.len()
    }

    /// True if the layer has no addressable cells.
    pub fn is_empty(&self) -> bool {
        self.size_x() == 0 || self.size_y() == 0
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row at index `y`, if it exists.
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// The character at `loc`, if it lies inside the grid.
    pub fn cell(&self, loc: Location) -> Option<char> {
        self.rows.get(loc.y)?.as_slice().get(loc.x).copied()
    }

    /// Every row has the same length.
    fn is_rectangular(&self) -> bool {
        let cols = self.size_x();
        self.rows.iter().all(|row| row.len() == cols)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_CHAR)
    }
}

impl Index<Location> for Layer {
    type Output = char;

    fn index(&self, loc: Location) -> &char {
        &self.rows[loc.y][loc.x]
    }
}

/// Validate a textual fill character.
///
/// Fails with `InvalidArgument` unless `fill` holds exactly one `char`.
pub fn parse_fill_char(fill: &str) -> Result<char> {
    let mut chars = fill.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        (None, _) => Err(CanvasError::invalid("default_char", "must not be empty")),
        (Some(_), Some(_)) => Err(CanvasError::invalid(
            "default_char",
            format!("`{fill}` must be a single character"),
        )),
    }
}
