//! Terminal queries.
//!
//! Layers take their maximum width as a plain number; this module is where
//! that number comes from when the configuration doesn't pin it.

pub mod size;

pub use self::size::{TerminalSize, terminal_size};
