//! Configuration structures and loading logic.

mod io;

pub use io::{config_dir, config_path};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layer::{self, Layer};
use crate::terminal::terminal_size;

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen: ScreenConfig,
    pub layer: LayerConfig,
}

/// Display surface configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Maximum column count layers may grow to. When unset (or 0) the
    /// current terminal width is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
}

impl ScreenConfig {
    /// Returns the configured width, falling back to the terminal's.
    pub fn effective_max_width(&self) -> usize {
        self.max_width
            .filter(|&w| w > 0)
            .unwrap_or_else(|| terminal_size().max_width())
    }
}

/// Defaults for newly created layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Fill character for new layers; must be exactly one character.
    pub default_char: String,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            default_char: layer::DEFAULT_CHAR.to_string(),
        }
    }
}

impl LayerConfig {
    /// The validated fill character.
    pub fn fill_char(&self) -> Result<char> {
        layer::parse_fill_char(&self.default_char)
    }
}

impl Config {
    /// An empty layer using the configured fill character and width.
    pub fn new_layer(&self) -> Result<Layer> {
        let layer = Layer::new(0, 0, self.layer.fill_char()?)
            .with_max_width(self.screen.effective_max_width());
        Ok(layer)
    }
}
