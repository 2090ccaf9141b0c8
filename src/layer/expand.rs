//! Capacity checks and on-demand growth.
//!
//! A placement (a string or another layer anchored at a location) has a
//! footprint: the number of columns and rows the grid must have for the
//! placement to fit. Growth adds rows first, then columns, each step reading
//! the live grid size, and rejects any footprint wider than `max_width`
//! before touching the grid.

use log::trace;

use crate::error::{CanvasError, Result};
use crate::loc::Location;

use super::{DEFAULT_CHAR, Layer, Row};

/// Columns and rows a placement needs; `None` when the count overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Footprint {
    columns: Option<usize>,
    rows: Option<usize>,
}

impl Footprint {
    /// A single-line string starting at `loc`.
    fn of_str(text: &str, loc: Location) -> Self {
        Self {
            columns: loc.x.checked_add(text.chars().count()),
            rows: loc.y.checked_add(1),
        }
    }

    /// Another layer with its top-left corner at `loc`.
    fn of_layer(other: &Layer, loc: Location) -> Self {
        Self {
            columns: loc.x.checked_add(other.size_x()),
            rows: loc.y.checked_add(other.size_y()),
        }
    }
}

impl Layer {
    /// True if `text` placed at `loc` lies entirely inside the grid.
    ///
    /// An empty layer is never sufficient.
    pub fn sufficient_for_str(&self, text: &str, loc: Location) -> bool {
        if self.is_empty() {
            return false;
        }
        self.fits(Footprint::of_str(text, loc))
    }

    /// Grow the grid so `text` placed at `loc` fits.
    ///
    /// Fails with `OffScreen`, leaving the grid untouched, if the string
    /// would end past `max_width`.
    pub fn expand_for_str(&mut self, text: &str, loc: Location) -> Result<()> {
        self.grow_to(Footprint::of_str(text, loc))
    }

    /// True if `other` placed with its top-left corner at `loc` fits.
    pub fn sufficient_for_layer(&self, other: &Self, loc: Location) -> bool {
        self.fits(Footprint::of_layer(other, loc))
    }

    /// Grow the grid so `other` placed at `loc` fits.
    ///
    /// Fails with `OffScreen`, leaving the grid untouched, if `other` would
    /// extend past `max_width`.
    pub fn expand_for_layer(&mut self, other: &Self, loc: Location) -> Result<()> {
        self.grow_to(Footprint::of_layer(other, loc))
    }

    /// Append `n` rows at the bottom, as wide as the current grid.
    pub fn add_row(&mut self, n: usize) {
        let cols = self.size_x();
        self.rows.extend((0..n).map(|_| Row::new(cols, DEFAULT_CHAR)));
        trace!("layer: added {n} rows of width {cols}");
        debug_assert!(self.is_rectangular());
    }

    /// Append `n` columns to the right of every row.
    ///
    /// Does nothing when the layer has no rows.
    pub fn add_col(&mut self, n: usize) {
        for row in &mut self.rows {
            row.extend(n, DEFAULT_CHAR);
        }
        trace!("layer: added {n} columns to {} rows", self.rows.len());
        debug_assert!(self.is_rectangular());
    }

    fn fits(&self, footprint: Footprint) -> bool {
        match (footprint.columns, footprint.rows) {
            (Some(columns), Some(rows)) => self.size_x() >= columns && self.size_y() >= rows,
            _ => false,
        }
    }

    /// Grow to cover `footprint`.
    ///
    /// A row count past `usize::MAX` is rejected with `InvalidArgument`;
    /// a representable but unallocatable one aborts like any `Vec` growth.
    fn grow_to(&mut self, footprint: Footprint) -> Result<()> {
        let Some(columns) = footprint.columns.filter(|&c| c <= self.max_width) else {
            return Err(CanvasError::OffScreen {
                columns: footprint.columns.unwrap_or(usize::MAX),
                max_width: self.max_width,
            });
        };
        let rows = footprint
            .rows
            .ok_or_else(|| CanvasError::invalid("y", "row count overflows usize"))?;
        if rows > self.size_y() {
            self.add_row(rows - self.size_y());
        }
        if columns > self.size_x() {
            self.add_col(columns - self.size_x());
        }
        Ok(())
    }
}
