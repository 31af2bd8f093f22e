use std::fmt::{self, Write as _};

use crate::export::png::data_url;
use crate::foundation::core::Rgba8;
use crate::geometry::shapes::DrawCmd;
use crate::params::kinds::BlendMode;
use crate::params::model::Background;
use crate::render::plan::FramePlan;

/// MIME type of [`svg_document`] output.
pub const SVG_MIME: &str = "image/svg+xml";

/// Vector rendition of `plan`.
///
/// Each visible layer becomes a `<g>` carrying its opacity and `mix-blend-mode`; each placement
/// becomes one `<path>`. Raster filters have no vector counterpart and are left out.
pub fn svg_document(plan: &FramePlan) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, plan);
    out
}

/// [`svg_document`] as a `data:image/svg+xml;base64,...` URL.
pub fn encode_data_url(plan: &FramePlan) -> String {
    data_url(SVG_MIME, svg_document(plan).as_bytes())
}

fn write_document(out: &mut String, plan: &FramePlan) -> fmt::Result {
    let (w, h) = (plan.canvas.width, plan.canvas.height);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;

    match plan.background {
        Background::Solid(c) => {
            writeln!(out, r#"  <rect width="{w}" height="{h}"{}/>"#, fill_attrs(c))?;
        }
        Background::Gradient { top, bottom } => {
            writeln!(out, "  <defs>")?;
            writeln!(
                out,
                r#"    <linearGradient id="background" x1="0" y1="0" x2="0" y2="1">"#
            )?;
            write_stop(out, 0.0, top)?;
            write_stop(out, 1.0, bottom)?;
            writeln!(out, "    </linearGradient>")?;
            writeln!(out, "  </defs>")?;
            writeln!(
                out,
                r#"  <rect width="{w}" height="{h}" fill="url(#background)"/>"#
            )?;
        }
    }

    for layer in &plan.layers {
        write!(out, r#"  <g id="{}""#, escape_attr(layer.id.as_str()))?;
        if layer.opacity < 1.0 {
            write!(out, r#" opacity="{:.3}""#, layer.opacity)?;
        }
        if layer.blend != BlendMode::Normal {
            write!(out, r#" style="mix-blend-mode:{}""#, layer.blend.css_name())?;
        }
        writeln!(out, ">")?;
        for cmd in &layer.cmds {
            write_cmd(out, cmd)?;
        }
        writeln!(out, "  </g>")?;
    }

    if !plan.overlay.is_empty() {
        writeln!(out, r#"  <g id="strokes">"#)?;
        for cmd in &plan.overlay {
            write_cmd(out, cmd)?;
        }
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}

fn write_stop(out: &mut String, offset: f64, c: Rgba8) -> fmt::Result {
    write!(out, r#"      <stop offset="{offset}" stop-color="{}""#, rgb_hex(c))?;
    if c.a < 255 {
        write!(out, r#" stop-opacity="{:.3}""#, f64::from(c.a) / 255.0)?;
    }
    writeln!(out, "/>")
}

fn write_cmd(out: &mut String, cmd: &DrawCmd) -> fmt::Result {
    let color = cmd.color();
    if color.a == 0 {
        return Ok(());
    }
    match cmd {
        DrawCmd::Shape(_) => {
            let d = cmd.path().to_svg();
            if d.is_empty() {
                return Ok(());
            }
            writeln!(out, r#"    <path d="{d}"{}/>"#, fill_attrs(color))
        }
        DrawCmd::Polyline { points, width, .. } => {
            if points.len() < 2 {
                return Ok(());
            }
            let pts = points
                .iter()
                .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            write!(
                out,
                r#"    <polyline points="{pts}" fill="none" stroke="{}" stroke-width="{width:.2}" stroke-linecap="round" stroke-linejoin="round""#,
                rgb_hex(color)
            )?;
            if color.a < 255 {
                write!(out, r#" stroke-opacity="{:.3}""#, f64::from(color.a) / 255.0)?;
            }
            writeln!(out, "/>")
        }
    }
}

fn fill_attrs(c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#" fill="{}""#, rgb_hex(c))
    } else {
        format!(
            r#" fill="{}" fill-opacity="{:.3}""#,
            rgb_hex(c),
            f64::from(c.a) / 255.0
        )
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn rgb_hex(c: Rgba8) -> String {
    Rgba8 { a: 255, ..c }.to_hex()
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
