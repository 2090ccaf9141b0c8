//! Writing into a layer: string insertion and layer merge.

use crate::error::Result;
use crate::loc::Location;

use super::Layer;

impl Layer {
    /// Write `text` on row `loc.y`, starting at column `loc.x`.
    ///
    /// Grows the layer first if the string doesn't fit. An `OffScreen`
    /// failure from growth is returned unchanged and nothing is written.
    pub fn insert_str(&mut self, text: &str, loc: Location) -> Result<()> {
        if !self.sufficient_for_str(text, loc) {
            self.expand_for_str(text, loc)?;
        }
        self.rows[loc.y].write_str(loc.x, text);
        Ok(())
    }

    /// Paint `other` onto this layer with its top-left corner at `loc`.
    ///
    /// Grows the layer first if `other` doesn't fit. Cells of `other` equal
    /// to `other`'s default character are transparent: the cell beneath
    /// keeps its value.
    pub fn merge(&mut self, other: &Self, loc: Location) -> Result<()> {
        if !self.sufficient_for_layer(other, loc) {
            self.expand_for_layer(other, loc)?;
        }
        let transparent = other.default_char;
        for (row, src) in self.rows[loc.y..].iter_mut().zip(&other.rows) {
            row.paint(loc.x, src, transparent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
