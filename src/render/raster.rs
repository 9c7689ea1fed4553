use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{BackdropError, BackdropResult};

/// Largest raster edge accepted, in pixels.
const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 image.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Rasterize an SVG document at its intrinsic size, with system fonts available for text.
#[tracing::instrument(skip(svg), fields(svg_len = svg.len()))]
pub fn rasterize_svg(svg: &str) -> BackdropResult<RasterFrame> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BackdropError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(RasterFrame {
        width,
        height,
        data,
    })
}

fn to_px(v: f32) -> BackdropResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(BackdropError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(BackdropError::render(format!(
            "svg raster size too large: {px}px (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

/// Write `frame` as PNG, creating parent directories.
pub fn save_png(frame: &RasterFrame, path: &Path) -> BackdropResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
