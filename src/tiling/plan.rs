use serde::Serialize;

use crate::foundation::math::{clamp, clamp_or, fmt_num};
use crate::token::normalize::DisplayToken;

/// Glyph budget per row; repeats are this divided by the token length.
pub const REPEAT_BUDGET: f64 = 140.0;
/// Fewest copies of the token placed on one row.
pub const MIN_REPEATS: usize = 8;
/// Most copies of the token placed on one row.
pub const MAX_REPEATS: usize = 18;
/// Tokens shorter than this are planned as if they had this length.
pub const MIN_PLANNED_LEN: usize = 4;

/// Smallest accepted pattern scale.
pub const SCALE_MIN: f64 = 0.7;
/// Largest accepted pattern scale.
pub const SCALE_MAX: f64 = 1.4;

/// Which compositing layer a plan or style applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Faint, always-visible headline-scale layer.
    Base,
    /// Bold texture-scale layer revealed by the spotlight.
    Inverted,
}

impl Tone {
    /// Fixed row count for the tone.
    pub fn rows(self) -> usize {
        match self {
            Self::Base => 10,
            Self::Inverted => 12,
        }
    }

    /// Leftward shift applied to odd rows, in `em`.
    pub fn row_offset_em(self) -> f64 {
        match self {
            Self::Base => 3.0,
            Self::Inverted => 1.5,
        }
    }

    /// Stable lowercase name, used for CSS class suffixes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Inverted => "inverted",
        }
    }

    fn font_bounds(self) -> FontSize {
        match self {
            Self::Base => FontSize {
                min_px: 28.0,
                preferred_vw: 4.2,
                max_px: 64.0,
            },
            Self::Inverted => FontSize {
                min_px: 14.0,
                preferred_vw: 1.9,
                max_px: 30.0,
            },
        }
    }
}

/// Viewport-relative font size bounded by pixel limits, i.e. CSS `clamp(min, vw, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FontSize {
    /// Lower bound in CSS pixels.
    pub min_px: f64,
    /// Preferred size as a percentage of viewport width.
    pub preferred_vw: f64,
    /// Upper bound in CSS pixels.
    pub max_px: f64,
}

impl FontSize {
    /// CSS expression for the size.
    pub fn to_css(&self) -> String {
        format!(
            "clamp({}px, {}vw, {}px)",
            fmt_num(self.min_px),
            fmt_num(self.preferred_vw),
            fmt_num(self.max_px)
        )
    }

    /// Resolve to pixels for a viewport `viewport_width` pixels wide.
    pub fn resolve_px(&self, viewport_width: f64) -> f64 {
        let preferred = self.preferred_vw * viewport_width.max(0.0) / 100.0;
        clamp(preferred, self.min_px, self.max_px)
    }
}

/// Copies of `token` to place on each row.
///
/// `round(140 / max(len, 4))` clamped to `[8, 18]`, so the glyph count per row stays roughly
/// constant whatever the token length.
pub fn plan_repeats(token: &DisplayToken) -> usize {
    let len = token.char_len().max(MIN_PLANNED_LEN) as f64;
    let raw = (REPEAT_BUDGET / len).round();
    clamp(raw, MIN_REPEATS as f64, MAX_REPEATS as f64) as usize
}

/// Responsive font size for `tone`, scaled by `scale` (clamped to `[0.7, 1.4]`, NaN reads as 1).
pub fn plan_font_size(tone: Tone, scale: f64) -> FontSize {
    let scale = clamp_or(Some(scale), 1.0, SCALE_MIN, SCALE_MAX);
    let bounds = tone.font_bounds();
    FontSize {
        min_px: bounds.min_px * scale,
        preferred_vw: bounds.preferred_vw * scale,
        max_px: bounds.max_px * scale,
    }
}

/// Row/repeat/size parameters for one tone's text field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TilingPlan {
    /// Layer this plan renders.
    pub tone: Tone,
    /// Number of rows in the field.
    pub rows: usize,
    /// Copies of the token per row.
    pub repeats_per_row: usize,
    /// Responsive font size.
    pub font_size: FontSize,
    /// Magnitude of the odd-row leftward shift, in `em`.
    pub row_offset_em: f64,
}

impl TilingPlan {
    /// Plan `tone` for `token` at `scale`.
    pub fn new(token: &DisplayToken, tone: Tone, scale: f64) -> Self {
        Self {
            tone,
            rows: tone.rows(),
            repeats_per_row: plan_repeats(token),
            font_size: plan_font_size(tone, scale),
            row_offset_em: tone.row_offset_em(),
        }
    }

    /// Horizontal offset of row `index` in `em`: zero for even rows, negative for odd rows.
    pub fn offset_for_row(&self, index: usize) -> f64 {
        if index % 2 == 1 {
            -self.row_offset_em
        } else {
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tiling/plan.rs"]
mod tests;
