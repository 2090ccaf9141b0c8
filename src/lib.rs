//! Growable character layers for composing terminal output.
//!
//! A [`Layer`] is a rectangular grid of single characters that grows on
//! demand as strings are inserted or other layers are merged into it.
//! Merging treats a source layer's default character as transparent, so
//! sparse overlays paint only their visible cells. Growth is bounded on
//! the right by a maximum screen width. The layer performs no I/O; the
//! [`render`] module writes it out.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod layer;
pub mod loc;
pub mod render;
pub mod terminal;

pub use error::{CanvasError, Result};
pub use layer::{DEFAULT_CHAR, DEFAULT_MAX_WIDTH, Layer, Row};
pub use loc::Location;
