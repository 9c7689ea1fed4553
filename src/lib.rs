//! Tiled-text hero backdrop with a spotlight reveal layer.
//!
//! A label is normalized into a letter-spaced [`DisplayToken`], tiled into a base field and an
//! inverted field, and composited so the inverted field only shows inside a caller-driven
//! circular spotlight:
//!
//! - [`normalize`] a label
//! - [`render_backdrop`] into a [`Backdrop`]
//! - paint it with [`render_markup`] + [`stylesheet`], [`render_svg`], or [`rasterize_svg`]
//!
//! Rendering is pure: the same inputs always give the same [`Backdrop`].
#![forbid(unsafe_code)]

mod foundation;
mod render;
mod scene;
mod tiling;
mod token;

pub use crate::foundation::error::{BackdropError, BackdropResult};
pub use crate::foundation::math::clamp;

pub use crate::token::normalize::{
    DisplayToken, FALLBACK_TOKEN, WORD_SEPARATOR, normalize, normalize_opt,
};

pub use crate::tiling::plan::{
    FontSize, MAX_REPEATS, MIN_REPEATS, TilingPlan, Tone, plan_font_size, plan_repeats,
};

pub use crate::scene::config::{Motion, RenderConfig, ResolvedConfig};
pub use crate::scene::input::{BackdropInput, Viewport};
pub use crate::scene::palette::{Palette, Rgb};
pub use crate::scene::spotlight::SpotlightGeometry;

pub use crate::render::backdrop::{Backdrop, Overlay, SPOTLIGHT_CLIP_PATH, render_backdrop};
pub use crate::render::field::{Animation, PatternField, PatternRow, render_field};
pub use crate::render::html::{render_markup, render_page, stylesheet};
pub use crate::render::raster::{RasterFrame, rasterize_svg, save_png};
pub use crate::render::svg::render_svg;

pub use kurbo::Point;
