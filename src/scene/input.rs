use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{BackdropError, BackdropResult};
use crate::scene::config::RenderConfig;
use crate::scene::palette::Palette;
use crate::scene::spotlight::SpotlightGeometry;

/// Surface size in CSS pixels, used by the pixel-space exports.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

impl Viewport {
    /// Reject zero, negative or non-finite dimensions.
    pub fn validate(&self) -> BackdropResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !v.is_finite() || v < 1.0 {
                return Err(BackdropError::config(format!(
                    "viewport {name} must be a finite number >= 1, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Everything the surrounding application hands to the backdrop, as one JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropInput {
    /// Raw label; normalized at render time.
    #[serde(alias = "patternText")]
    pub text: Option<String>,
    /// Optional rendering overrides.
    pub config: RenderConfig,
    /// Current spotlight, hidden by default.
    pub spotlight: SpotlightGeometry,
    /// Surface size for the SVG/PNG exports.
    pub viewport: Viewport,
    /// Layer colours.
    pub palette: Palette,
}

impl BackdropInput {
    /// Parse and validate an input document.
    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        let input: Self = serde_json::from_str(s)?;
        input.viewport.validate()?;
        Ok(input)
    }

    /// Read and validate an input document from disk.
    pub fn load(path: &Path) -> BackdropResult<Self> {
        let f = File::open(path).with_context(|| format!("open input '{}'", path.display()))?;
        let input: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse input JSON '{}'", path.display()))?;
        input.viewport.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/input.rs"]
mod tests;
