use serde::{Deserialize, Deserializer, Serialize};

use crate::foundation::math::clamp_or;
use crate::tiling::plan::{SCALE_MAX, SCALE_MIN};

/// Upper bound for the base/inverted pattern opacity.
pub const PATTERN_OPACITY_MAX: f64 = 1.6;
/// Inverted layer opacity relative to the base pattern opacity.
pub const INVERTED_OPACITY_FACTOR: f64 = 0.95;

/// Animation directive attached to each pattern field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// No animation.
    None,
    /// Slow alternating ease-in-out oscillation.
    #[default]
    Drift,
}

impl Motion {
    /// Parse a motion name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "drift" => Some(Self::Drift),
            _ => None,
        }
    }
}

/// Caller-supplied rendering overrides. Every field is optional and independently defaulted.
///
/// Deserialization never fails on a field value: numbers may arrive as numbers or numeric
/// strings, and anything unparseable is treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Opacity of the whole spotlight composite, `[0, 1]`, default 1.
    #[serde(alias = "overlayOpacity", deserialize_with = "lenient_f64")]
    pub overlay_opacity: Option<f64>,
    /// Opacity of the pattern layers, `[0, 1.6]`, default 1.
    #[serde(alias = "patternOpacity", deserialize_with = "lenient_f64")]
    pub pattern_opacity: Option<f64>,
    /// Font scale of the pattern layers, `[0.7, 1.4]`, default 1.
    #[serde(alias = "patternScale", deserialize_with = "lenient_f64")]
    pub pattern_scale: Option<f64>,
    /// Animation directive, default drift.
    #[serde(alias = "patternMotion", deserialize_with = "lenient_motion")]
    pub motion: Option<Motion>,
}

/// [`RenderConfig`] with defaults applied and every value clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Overlay opacity in `[0, 1]`.
    pub overlay_opacity: f64,
    /// Pattern opacity in `[0, 1.6]`.
    pub pattern_opacity: f64,
    /// Font scale in `[0.7, 1.4]`.
    pub pattern_scale: f64,
    /// Animation directive.
    pub motion: Motion,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        RenderConfig::default().resolve()
    }
}

impl RenderConfig {
    /// Apply defaults and clamp.
    pub fn resolve(&self) -> ResolvedConfig {
        let resolved = ResolvedConfig {
            overlay_opacity: clamp_or(self.overlay_opacity, 1.0, 0.0, 1.0),
            pattern_opacity: clamp_or(self.pattern_opacity, 1.0, 0.0, PATTERN_OPACITY_MAX),
            pattern_scale: clamp_or(self.pattern_scale, 1.0, SCALE_MIN, SCALE_MAX),
            motion: self.motion.unwrap_or_default(),
        };
        if self.overlay_opacity.is_some_and(|v| v != resolved.overlay_opacity)
            || self.pattern_opacity.is_some_and(|v| v != resolved.pattern_opacity)
            || self.pattern_scale.is_some_and(|v| v != resolved.pattern_scale)
        {
            tracing::debug!(requested = ?self, ?resolved, "render config clamped");
        }
        resolved
    }
}

impl ResolvedConfig {
    /// Opacity of the inverted pattern inside the overlay.
    pub fn inverted_opacity(&self) -> f64 {
        self.pattern_opacity * INVERTED_OPACITY_FACTOR
    }
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(f64),
        Str(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Num(v) => Some(v),
        Repr::Str(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        Repr::Other(_) => None,
    })
}

fn lenient_motion<'de, D>(deserializer: D) -> Result<Option<Motion>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Str(s) => Motion::parse(&s),
        Repr::Other(_) => None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
