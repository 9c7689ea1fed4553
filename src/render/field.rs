use serde::Serialize;

use crate::scene::config::{Motion, ResolvedConfig};
use crate::tiling::plan::{TilingPlan, Tone};
use crate::token::normalize::DisplayToken;

/// Drift animation attached to a field. The name doubles as CSS class and keyframes name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Animation {
    pub name: String,
    pub duration_secs: f64,
}

impl Animation {
    /// Drift for `tone`. Durations differ so the layers never move in lockstep.
    pub fn drift(tone: Tone) -> Self {
        let duration_secs = match tone {
            Tone::Base => 28.0,
            Tone::Inverted => 36.0,
        };
        Self {
            name: format!("backdrop-drift-{}", tone.as_str()),
            duration_secs,
        }
    }

    /// CSS `animation` shorthand.
    pub fn to_css(&self) -> String {
        format!(
            "{} {}s ease-in-out infinite alternate",
            self.name, self.duration_secs
        )
    }
}

/// One row of repeated tokens.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatternRow {
    pub index: usize,
    /// Horizontal shift in `em`; negative on odd rows.
    pub offset_em: f64,
    pub cells: Vec<String>,
}

/// A tiled text field for one tone, plus the style directives the host paints it with.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatternField {
    pub plan: TilingPlan,
    pub font_size_css: String,
    pub opacity: f64,
    /// Base fields highlight individual glyphs on hover.
    pub interactive: bool,
    pub animation: Option<Animation>,
    pub rows: Vec<PatternRow>,
}

impl PatternField {
    pub fn tone(&self) -> Tone {
        self.plan.tone
    }

    /// Total token copies across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }
}

/// Tile `token` for `tone` using an already clamped config.
pub fn render_field(token: &DisplayToken, tone: Tone, config: &ResolvedConfig) -> PatternField {
    let plan = TilingPlan::new(token, tone, config.pattern_scale);
    let rows = (0..plan.rows)
        .map(|index| PatternRow {
            index,
            offset_em: plan.offset_for_row(index),
            cells: vec![token.as_str().to_owned(); plan.repeats_per_row],
        })
        .collect();

    let (opacity, interactive) = match tone {
        Tone::Base => (config.pattern_opacity, true),
        Tone::Inverted => (config.inverted_opacity(), false),
    };

    let animation = match config.motion {
        Motion::Drift => Some(Animation::drift(tone)),
        Motion::None => None,
    };

    PatternField {
        font_size_css: plan.font_size.to_css(),
        plan,
        opacity,
        interactive,
        animation,
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/field.rs"]
mod tests;
