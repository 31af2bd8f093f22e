//! Whole-frame post-processing filters.
//!
//! Every filter is a read-modify-write pass over the composited premultiplied frame. Per-pixel
//! colour edits keep channels at or below alpha so the buffer stays validly premultiplied.

use crate::foundation::core::Canvas;
use crate::foundation::error::GenartResult;
use crate::foundation::rng::ArtRng;
use crate::params::kinds::FilterKind;

/// Shadow end of the duotone ramp.
pub const DUOTONE_DARK: [u8; 3] = [20, 20, 80];
/// Highlight end of the duotone ramp.
pub const DUOTONE_LIGHT: [u8; 3] = [255, 200, 50];

/// Run filter `kind` at `intensity` (0-1) over `data`.
#[tracing::instrument(level = "trace", skip(data, rng))]
pub fn apply_filter(
    kind: FilterKind,
    intensity: f64,
    data: &mut [u8],
    canvas: Canvas,
    rng: &mut ArtRng,
) -> GenartResult<()> {
    let i = intensity.clamp(0.0, 1.0);
    let (w, h) = (canvas.width, canvas.height);
    match kind {
        FilterKind::None => {}
        FilterKind::Blur => crate::effects::blur::blur_in_place(data, w, h, (i * 5.0) as f32)?,
        FilterKind::Pixelate => pixelate(data, w, h, pixel_block(i)),
        FilterKind::Glitch => glitch(data, w, h, i, rng),
        FilterKind::Duotone => duotone(data, i),
        FilterKind::Noise => noise(data, i, rng),
        FilterKind::Vignette => vignette(data, w, h, i),
    }
    Ok(())
}

/// Block edge for pixelate at `intensity`.
pub fn pixel_block(intensity: f64) -> u32 {
    ((intensity * 20.0).floor() as u32).max(2)
}

fn px_index(width: u32, x: u32, y: u32) -> usize {
    ((y as usize) * (width as usize) + x as usize) * 4
}

/// Replace each `block` × `block` tile with the colour of its center pixel.
pub fn pixelate(data: &mut [u8], width: u32, height: u32, block: u32) {
    if block <= 1 {
        return;
    }
    for by in (0..height).step_by(block as usize) {
        for bx in (0..width).step_by(block as usize) {
            let sx = (bx + block / 2).min(width - 1);
            let sy = (by + block / 2).min(height - 1);
            let si = px_index(width, sx, sy);
            let sample = [data[si], data[si + 1], data[si + 2], data[si + 3]];
            for y in by..(by + block).min(height) {
                for x in bx..(bx + block).min(width) {
                    let di = px_index(width, x, y);
                    data[di..di + 4].copy_from_slice(&sample);
                }
            }
        }
    }
}

/// Shift `floor(intensity * 20)` random horizontal slices sideways, each with a 50% chance of
/// an additive red/blue ghost.
pub fn glitch(data: &mut [u8], width: u32, height: u32, intensity: f64, rng: &mut ArtRng) {
    let slices = (intensity * 20.0).floor() as u32;
    let stride = width as usize * 4;
    let max_shift = intensity * 50.0;
    for _ in 0..slices {
        let y0 = rng.index(height as usize) as u32;
        let slice_h = ((rng.range(5.0, 50.0) * intensity).floor() as u32).max(1);
        let y1 = (y0 + slice_h).min(height);
        let shift = rng.range(-max_shift, max_shift).round() as i64;
        let ghost = rng.chance(0.5);
        let ghost_shift = (shift / 2).max(2);

        let start = y0 as usize * stride;
        let end = y1 as usize * stride;
        let original = data[start..end].to_vec();
        for row in 0..(y1 - y0) as usize {
            let src_row = &original[row * stride..(row + 1) * stride];
            let dst_row = &mut data[start + row * stride..start + (row + 1) * stride];
            for x in 0..i64::from(width) {
                let sx = x - shift;
                if !(0..i64::from(width)).contains(&sx) {
                    continue;
                }
                let (di, si) = (x as usize * 4, sx as usize * 4);
                dst_row[di..di + 4].copy_from_slice(&src_row[si..si + 4]);
            }
            if ghost {
                for x in 0..i64::from(width) {
                    let di = x as usize * 4;
                    let a = dst_row[di + 3];
                    let red_src = x - ghost_shift;
                    if (0..i64::from(width)).contains(&red_src) {
                        let v = src_row[red_src as usize * 4];
                        dst_row[di] = dst_row[di].saturating_add(v / 2).min(a);
                    }
                    let blue_src = x + ghost_shift;
                    if (0..i64::from(width)).contains(&blue_src) {
                        let v = src_row[blue_src as usize * 4 + 2];
                        dst_row[di + 2] = dst_row[di + 2].saturating_add(v / 2).min(a);
                    }
                }
            }
        }
    }
}

/// Map luminance onto the duotone ramp, then mix with the original by `intensity`.
pub fn duotone(data: &mut [u8], intensity: f64) {
    if intensity <= 0.0 {
        return;
    }
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        let lum = (0.299 * f64::from(px[0]) + 0.587 * f64::from(px[1]) + 0.114 * f64::from(px[2]))
            / 255.0;
        for c in 0..3 {
            let lo = f64::from(DUOTONE_DARK[c]) * f64::from(a) / 255.0;
            let hi = f64::from(DUOTONE_LIGHT[c]) * f64::from(a) / 255.0;
            let tone = lo + (hi - lo) * lum;
            let orig = f64::from(px[c]);
            px[c] = (orig + (tone - orig) * intensity)
                .round()
                .clamp(0.0, f64::from(a)) as u8;
        }
    }
}

/// With probability `intensity * 0.2` per pixel, add one uniform offset in
/// `±intensity * 50` to all three channels.
pub fn noise(data: &mut [u8], intensity: f64, rng: &mut ArtRng) {
    if intensity <= 0.0 {
        return;
    }
    let p = intensity * 0.2;
    let amp = intensity * 50.0;
    for px in data.chunks_exact_mut(4) {
        if !rng.chance(p) {
            continue;
        }
        let delta = rng.range(-amp, amp);
        let a = f64::from(px[3]);
        for c in &mut px[..3] {
            *c = (f64::from(*c) + delta).round().clamp(0.0, a) as u8;
        }
    }
}

/// Darken toward the corners by `(1 - d / max_d) ^ (2 + 3 * intensity)`.
///
/// Intensity 0 is a no-op; the center pixel is never changed.
pub fn vignette(data: &mut [u8], width: u32, height: u32, intensity: f64) {
    if intensity <= 0.0 {
        return;
    }
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let max_d = cx.hypot(cy);
    if max_d <= 0.0 {
        return;
    }
    let exponent = 2.0 + intensity * 3.0;
    for y in 0..height {
        for x in 0..width {
            let d = (f64::from(x) - cx).hypot(f64::from(y) - cy);
            if d == 0.0 {
                continue;
            }
            let factor = (1.0 - d / max_d).max(0.0).powf(exponent);
            let i = px_index(width, x, y);
            for c in &mut data[i..i + 3] {
                *c = (f64::from(*c) * factor).round() as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/filters.rs"]
mod tests;
