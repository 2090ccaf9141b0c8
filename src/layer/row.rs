//! Layer row.
//!
//! A `Row` is one horizontal line of a layer's grid. Rows never shrink;
//! the owning layer grows every row together so the grid stays
//! rectangular.

use std::fmt::{self, Write as _};
use std::ops::Index;

/// One row of characters in a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    inner: Vec<char>,
}

impl Row {
    /// Create a row of `cols` copies of `fill`.
    pub(crate) fn new(cols: usize, fill: char) -> Self {
        Self {
            inner: vec![fill; cols],
        }
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The row's characters, left to right.
    pub fn as_slice(&self) -> &[char] {
        &self.inner
    }

    pub fn iter(&self) -> std::slice::Iter<'_, char> {
        self.inner.iter()
    }

    /// Append `n` copies of `fill` to the right edge.
    pub(crate) fn extend(&mut self, n: usize, fill: char) {
        self.inner.resize(self.inner.len() + n, fill);
    }

    /// Overwrite cells starting at `col` with the characters of `text`.
    ///
    /// Characters that would land past the right edge are dropped; callers
    /// grow the row first.
    pub(crate) fn write_str(&mut self, col: usize, text: &str) {
        let Some(cells) = self.inner.get_mut(col..) else {
            return;
        };
        for (cell, ch) in cells.iter_mut().zip(text.chars()) {
            *cell = ch;
        }
    }

    /// Copy `src` onto this row starting at `col`, skipping cells equal to
    /// `transparent`.
    pub(crate) fn paint(&mut self, col: usize, src: &Self, transparent: char) {
        let Some(cells) = self.inner.get_mut(col..) else {
            return;
        };
        for (cell, &ch) in cells.iter_mut().zip(src.iter()) {
            if ch != transparent {
                *cell = ch;
            }
        }
    }
}

impl Index<usize> for Row {
    type Output = char;

    fn index(&self, col: usize) -> &char {
        &self.inner[col]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.inner {
            f.write_char(ch)?;
        }
        Ok(())
    }
}
