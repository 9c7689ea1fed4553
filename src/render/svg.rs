use std::fmt::Write as _;

use crate::foundation::math::{clamp, fmt_num};
use crate::render::backdrop::Backdrop;
use crate::render::field::PatternField;
use crate::render::html::escape_text;
use crate::scene::input::Viewport;
use crate::scene::palette::{Palette, Rgb};

/// Gap between repeated tokens on a row, in `em`.
const CELL_GAP_EM: f64 = 1.0;
/// Rough advance of one glyph, in `em`, used to place cells without a shaper.
const GLYPH_ADVANCE_EM: f64 = 0.62;

/// Standalone SVG of the backdrop at `viewport` size, in pixel space.
///
/// Font sizes are resolved against the viewport width. Opacities above 1 (the pattern opacity
/// range reaches 1.6) are clamped because SVG has no use for them.
pub fn render_svg(backdrop: &Backdrop, viewport: &Viewport, palette: &Palette) -> String {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    let overlay = &backdrop.overlay;
    let spot = overlay.spotlight.sanitized();

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(w),
        h = fmt_num(h),
    );

    let draw_overlay = !spot.is_hidden() && overlay.opacity > 0.0;
    if draw_overlay {
        let _ = writeln!(
            out,
            r#"<defs><clipPath id="spotlight"><circle cx="{}" cy="{}" r="{}"/></clipPath></defs>"#,
            fmt_num(spot.center_x),
            fmt_num(spot.center_y),
            fmt_num(spot.radius),
        );
    }

    push_rect(&mut out, w, h, palette.paper);
    push_field(&mut out, &backdrop.base, w, h, palette.ink, 300);

    if draw_overlay {
        let _ = writeln!(
            out,
            r#"<g clip-path="url(#spotlight)" opacity="{}">"#,
            fmt_num(clamp(overlay.opacity, 0.0, 1.0))
        );
        push_rect(&mut out, w, h, palette.invert_paper);
        push_field(&mut out, &overlay.field, w, h, palette.invert_ink, 700);
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn push_rect(out: &mut String, w: f64, h: f64, fill: Rgb) {
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{fill}"/>"#,
        fmt_num(w),
        fmt_num(h),
    );
}

fn push_field(out: &mut String, field: &PatternField, w: f64, h: f64, ink: Rgb, weight: u16) {
    let font_px = field.plan.font_size.resolve_px(w);
    let rows = field.rows.len().max(1) as f64;
    let pitch = h / rows;

    let _ = writeln!(
        out,
        r#"<g fill="{ink}" opacity="{}" font-family="sans-serif" font-weight="{weight}" font-size="{}">"#,
        fmt_num(clamp(field.opacity, 0.0, 1.0)),
        fmt_num(font_px),
    );

    for row in &field.rows {
        let baseline = pitch * (row.index as f64 + 0.5) + font_px * 0.35;
        let mut x = row.offset_em * font_px;
        for cell in &row.cells {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" xml:space="preserve">{}</text>"#,
                fmt_num(x),
                fmt_num(baseline),
                escape_text(cell),
            );
            x += (cell.chars().count() as f64 * GLYPH_ADVANCE_EM + CELL_GAP_EM) * font_px;
        }
    }
    out.push_str("</g>\n");
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
