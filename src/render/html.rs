use std::fmt::Write as _;

use crate::foundation::math::{clamp, fmt_num};
use crate::scene::config::PATTERN_OPACITY_MAX;
use crate::render::backdrop::Backdrop;
use crate::render::field::{Animation, PatternField};
use crate::scene::palette::Palette;
use crate::tiling::plan::Tone;

pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for the backdrop: the base field, then the clipped overlay.
pub fn render_markup(backdrop: &Backdrop) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"backdrop\" aria-hidden=\"true\">\n");
    push_field(&mut out, &backdrop.base);

    let overlay = &backdrop.overlay;
    let mut style = String::new();
    for (k, v) in &overlay.custom_properties {
        let _ = write!(style, "{k}: {v}; ");
    }
    let _ = write!(
        style,
        "clip-path: {clip}; -webkit-clip-path: {clip}; opacity: {op};",
        clip = overlay.clip_path,
        op = fmt_num(clamp(overlay.opacity, 0.0, 1.0)),
    );
    let _ = writeln!(out, "  <div class=\"backdrop-overlay\" style=\"{style}\">");
    out.push_str("    <div class=\"backdrop-solid\"></div>\n");
    push_field(&mut out, &overlay.field);
    out.push_str("  </div>\n</div>\n");
    out
}

fn push_field(out: &mut String, field: &PatternField) {
    let tone = field.tone().as_str();
    let mut class = format!("backdrop-field backdrop-field--{tone}");
    if field.interactive {
        class.push_str(" backdrop-field--interactive");
    }
    if let Some(anim) = &field.animation {
        class.push(' ');
        class.push_str(&anim.name);
    }

    let _ = writeln!(
        out,
        "  <div class=\"{class}\" style=\"font-size: {}; opacity: {};\">",
        field.font_size_css,
        fmt_num(clamp(field.opacity, 0.0, PATTERN_OPACITY_MAX)),
    );
    for row in &field.rows {
        if row.offset_em == 0.0 {
            out.push_str("    <div class=\"backdrop-row\">");
        } else {
            let _ = write!(
                out,
                "    <div class=\"backdrop-row\" style=\"transform: translateX({}em);\">",
                fmt_num(row.offset_em)
            );
        }
        for cell in &row.cells {
            out.push_str("<span class=\"backdrop-cell\">");
            if field.interactive {
                push_glyphs(out, cell);
            } else {
                out.push_str(&escape_text(cell));
            }
            out.push_str("</span>");
        }
        out.push_str("</div>\n");
    }
    out.push_str("  </div>\n");
}

fn push_glyphs(out: &mut String, cell: &str) {
    let mut buf = [0u8; 4];
    for c in cell.chars() {
        if c.is_whitespace() {
            out.push(c);
            continue;
        }
        let _ = write!(
            out,
            "<span class=\"backdrop-glyph\">{}</span>",
            escape_text(c.encode_utf8(&mut buf))
        );
    }
}

/// Stylesheet for [`render_markup`], including glyph hover and drift keyframes.
pub fn stylesheet(palette: &Palette) -> String {
    let base = Animation::drift(Tone::Base);
    let inverted = Animation::drift(Tone::Inverted);
    format!(
        r#".backdrop {{ position: absolute; inset: 0; overflow: hidden; background: {paper}; color: {ink}; pointer-events: none; }}
.backdrop-field {{ position: absolute; inset: -10%; display: flex; flex-direction: column; justify-content: space-around; white-space: pre; line-height: 1.2; letter-spacing: 0.04em; user-select: none; }}
.backdrop-field--base {{ font-weight: 300; }}
.backdrop-field--inverted {{ font-weight: 700; color: {invert_ink}; }}
.backdrop-field--interactive {{ pointer-events: auto; }}
.backdrop-row {{ display: flex; gap: 1em; }}
.backdrop-glyph {{ transition: opacity 0.3s ease, color 0.3s ease; opacity: 0.35; }}
.backdrop-field--interactive .backdrop-glyph:hover {{ opacity: 1; }}
.backdrop-overlay {{ position: absolute; inset: 0; pointer-events: none; }}
.backdrop-solid {{ position: absolute; inset: 0; background: {invert_paper}; }}
.{base_name} {{ animation: {base_anim}; }}
.{inv_name} {{ animation: {inv_anim}; }}
@keyframes {base_name} {{ from {{ transform: translate3d(0, 0, 0); }} to {{ transform: translate3d(-2%, -1%, 0); }} }}
@keyframes {inv_name} {{ from {{ transform: translate3d(0, 0, 0); }} to {{ transform: translate3d(1.5%, 1%, 0); }} }}
@media (prefers-reduced-motion: reduce) {{ .{base_name}, .{inv_name} {{ animation: none; }} }}
"#,
        paper = palette.paper,
        ink = palette.ink,
        invert_ink = palette.invert_ink,
        invert_paper = palette.invert_paper,
        base_name = base.name,
        base_anim = base.to_css(),
        inv_name = inverted.name,
        inv_anim = inverted.to_css(),
    )
}

/// Standalone HTML page wrapping markup and stylesheet.
pub fn render_page(backdrop: &Backdrop, palette: &Palette) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\nbody {{ margin: 0; }}\n.hero {{ position: relative; width: 100vw; height: 100vh; font-family: system-ui, sans-serif; }}\n{css}</style>\n</head>\n<body>\n<section class=\"hero\">\n{markup}</section>\n</body>\n</html>\n",
        title = escape_text(backdrop.token.as_str()),
        css = stylesheet(palette),
        markup = render_markup(backdrop),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
