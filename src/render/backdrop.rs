use std::collections::BTreeMap;

use serde::Serialize;

use crate::foundation::error::BackdropResult;
use crate::foundation::math::{Fnv1a64, fmt_num};
use crate::render::field::{PatternField, render_field};
use crate::scene::config::{RenderConfig, ResolvedConfig};
use crate::scene::spotlight::SpotlightGeometry;
use crate::tiling::plan::Tone;
use crate::token::normalize::{DisplayToken, normalize_opt};

/// CSS clip for the overlay; the circle reads the spotlight custom properties.
pub const SPOTLIGHT_CLIP_PATH: &str =
    "circle(var(--spotlight-radius) at var(--spotlight-x) var(--spotlight-y))";

/// The spotlight-gated composite: a solid fill with the inverted field on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlay {
    /// Gates the whole composite, independent of the inverted field's own opacity.
    pub opacity: f64,
    pub clip_path: String,
    pub custom_properties: BTreeMap<String, String>,
    pub spotlight: SpotlightGeometry,
    pub field: PatternField,
}

/// Complete render output for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Backdrop {
    pub token: DisplayToken,
    pub config: ResolvedConfig,
    pub base: PatternField,
    pub overlay: Overlay,
}

/// Render a backdrop for `text`.
///
/// Every numeric input is clamped here; the returned structure never carries an out-of-range
/// opacity, scale or spotlight value.
#[tracing::instrument(skip(config, spotlight))]
pub fn render_backdrop(
    text: Option<&str>,
    config: &RenderConfig,
    spotlight: &SpotlightGeometry,
) -> Backdrop {
    let token = normalize_opt(text);
    let config = config.resolve();

    let base = render_field(&token, Tone::Base, &config);
    let inverted = render_field(&token, Tone::Inverted, &config);
    let spotlight = spotlight.sanitized();

    tracing::debug!(
        token = token.as_str(),
        repeats = base.plan.repeats_per_row,
        spotlight_radius = spotlight.radius,
        "backdrop rendered"
    );

    Backdrop {
        token,
        base,
        overlay: Overlay {
            opacity: config.overlay_opacity,
            clip_path: SPOTLIGHT_CLIP_PATH.to_owned(),
            custom_properties: spotlight_properties(&spotlight),
            spotlight,
            field: inverted,
        },
        config,
    }
}

fn spotlight_properties(s: &SpotlightGeometry) -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "--spotlight-radius".to_owned(),
            format!("{}px", fmt_num(s.radius)),
        ),
        ("--spotlight-x".to_owned(), format!("{}px", fmt_num(s.center_x))),
        ("--spotlight-y".to_owned(), format!("{}px", fmt_num(s.center_y))),
    ])
}

impl Backdrop {
    /// Replace only the spotlight, keeping the tiling.
    ///
    /// Pointer movement changes far more often than the label or config; retained-mode hosts
    /// can keep one `Backdrop` and update it here.
    pub fn with_spotlight(mut self, spotlight: &SpotlightGeometry) -> Self {
        let spotlight = spotlight.sanitized();
        self.overlay.custom_properties = spotlight_properties(&spotlight);
        self.overlay.spotlight = spotlight;
        self
    }

    /// Deterministic 64-bit digest of the render output, for snapshot comparisons.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.token.as_str().as_bytes());
        h.write_bytes(&[0]);
        for v in [
            self.config.overlay_opacity,
            self.config.pattern_opacity,
            self.config.pattern_scale,
        ] {
            h.write_bytes(&v.to_bits().to_le_bytes());
        }

        for field in [&self.base, &self.overlay.field] {
            hash_field(&mut h, field);
        }

        h.write_bytes(&self.overlay.opacity.to_bits().to_le_bytes());
        h.write_bytes(self.overlay.clip_path.as_bytes());
        for (k, v) in &self.overlay.custom_properties {
            h.write_bytes(k.as_bytes());
            h.write_bytes(b":");
            h.write_bytes(v.as_bytes());
            h.write_bytes(b";");
        }
        h.finish()
    }

    pub fn to_json_pretty(&self) -> BackdropResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn hash_field(h: &mut Fnv1a64, field: &PatternField) {
    h.write_bytes(field.tone().as_str().as_bytes());
    h.write_bytes(field.font_size_css.as_bytes());
    h.write_bytes(&field.opacity.to_bits().to_le_bytes());
    h.write_bytes(&[u8::from(field.interactive)]);
    match &field.animation {
        Some(a) => h.write_bytes(a.to_css().as_bytes()),
        None => h.write_bytes(b"none"),
    }
    for row in &field.rows {
        h.write_bytes(&(row.index as u64).to_le_bytes());
        h.write_bytes(&row.offset_em.to_bits().to_le_bytes());
        h.write_bytes(&(row.cells.len() as u64).to_le_bytes());
        for cell in &row.cells {
            h.write_bytes(cell.as_bytes());
            h.write_bytes(&[0]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backdrop.rs"]
mod tests;
