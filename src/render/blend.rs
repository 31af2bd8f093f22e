//! Premultiplied RGBA8 layer compositing.

use crate::foundation::error::{GenartError, GenartResult};
use crate::foundation::math::mul_div255_u8;
use crate::params::kinds::BlendMode;

/// Composite `src` over `dst` with `opacity` (0-1) and `mode`.
///
/// Both buffers are premultiplied RGBA8 of equal length. Blend functions see unpremultiplied
/// channels; the result is source-over: `out = s*(1-da) + d*(1-sa) + B(s,d)*sa*da`.
pub fn composite(dst: &mut [u8], src: &[u8], opacity: f32, mode: BlendMode) -> GenartResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(GenartError::render(
            "composite expects equal-length rgba8 buffers",
        ));
    }
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return Ok(());
    }

    // Dispatch once per layer; each arm monomorphizes its own kernel.
    match mode {
        BlendMode::Normal => over_normal(dst, src, opacity),
        BlendMode::Multiply => over_blend(dst, src, opacity, |s, d| s * d),
        BlendMode::Screen => over_blend(dst, src, opacity, |s, d| s + d - s * d),
        BlendMode::Overlay => over_blend(dst, src, opacity, |s, d| hard_light(d, s)),
        BlendMode::Darken => over_blend(dst, src, opacity, f32::min),
        BlendMode::Lighten => over_blend(dst, src, opacity, f32::max),
        BlendMode::ColorDodge => over_blend(dst, src, opacity, |s, d| {
            if s >= 1.0 { 1.0 } else { (d / (1.0 - s)).min(1.0) }
        }),
        BlendMode::ColorBurn => over_blend(dst, src, opacity, |s, d| {
            if s <= 0.0 { 0.0 } else { 1.0 - ((1.0 - d) / s).min(1.0) }
        }),
        BlendMode::HardLight => over_blend(dst, src, opacity, hard_light),
        BlendMode::SoftLight => over_blend(dst, src, opacity, soft_light),
        BlendMode::Difference => over_blend(dst, src, opacity, |s, d| (d - s).abs()),
        BlendMode::Exclusion => over_blend(dst, src, opacity, |s, d| d + s - 2.0 * d * s),
    }
    Ok(())
}

fn hard_light(s: f32, d: f32) -> f32 {
    if s <= 0.5 {
        2.0 * s * d
    } else {
        1.0 - 2.0 * (1.0 - s) * (1.0 - d)
    }
}

fn soft_light(s: f32, d: f32) -> f32 {
    if s <= 0.5 {
        d - (1.0 - 2.0 * s) * d * (1.0 - d)
    } else {
        let g = if d <= 0.25 {
            ((16.0 * d - 12.0) * d + 4.0) * d
        } else {
            d.sqrt()
        };
        d + (2.0 * s - 1.0) * (g - d)
    }
}

fn over_normal(dst: &mut [u8], src: &[u8], opacity: f32) {
    let op = (opacity * 255.0).round().clamp(0.0, 255.0) as u16;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = mul_div255_u8(u16::from(s[3]), op);
        if sa == 0 {
            continue;
        }
        let inv = 255 - u16::from(sa);
        d[3] = sa.saturating_add(mul_div255_u8(u16::from(d[3]), inv));
        for c in 0..3 {
            let sc = mul_div255_u8(u16::from(s[c]), op);
            d[c] = sc.saturating_add(mul_div255_u8(u16::from(d[c]), inv));
        }
    }
}

#[inline(always)]
fn over_blend<F>(dst: &mut [u8], src: &[u8], opacity: f32, blend_fn: F)
where
    F: Fn(f32, f32) -> f32,
{
    let unit = |v: u8| f32::from(v) / 255.0;
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = unit(s[3]) * opacity;
        if sa <= 0.0 {
            continue;
        }
        let da = unit(d[3]);
        for c in 0..3 {
            let sp = unit(s[c]) * opacity;
            let dp = unit(d[c]);
            let sc = (sp / sa).clamp(0.0, 1.0);
            let dc = if da > 0.0 { (dp / da).clamp(0.0, 1.0) } else { 0.0 };
            let b = blend_fn(sc, dc).clamp(0.0, 1.0);
            d[c] = to_u8(sp * (1.0 - da) + dp * (1.0 - sa) + b * sa * da);
        }
        d[3] = to_u8(sa + da * (1.0 - sa));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
