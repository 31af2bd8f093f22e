//! Separable gaussian blur on premultiplied RGBA8, with Q16 fixed-point weights.

use crate::foundation::error::{GenartError, GenartResult};

const Q16_ONE: u32 = 1 << 16;

/// Normalized gaussian weights in Q16 covering `[-radius, radius]`. The weights sum to exactly
/// `1 << 16`; any rounding residue lands on the center tap.
pub fn gaussian_kernel_q16(radius: u32, sigma: f32) -> GenartResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![Q16_ONE]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(GenartError::validation("blur sigma must be finite and > 0"));
    }

    let r = radius as i32;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let raw: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / denom).exp())
        .collect();
    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return Err(GenartError::render("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = raw
        .iter()
        .map(|w| ((w / sum) * f64::from(Q16_ONE)).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    let fixed = (i64::from(weights[mid]) + i64::from(Q16_ONE) - total).clamp(0, 65536);
    weights[mid] = fixed as u32;
    Ok(weights)
}

/// Kernel radius covering three standard deviations.
pub fn radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

/// Blur `data` (width × height premultiplied RGBA8) in place with standard deviation `sigma`.
///
/// Edges clamp. Sigmas too small to move a pixel leave the buffer untouched.
pub fn blur_in_place(data: &mut [u8], width: u32, height: u32, sigma: f32) -> GenartResult<()> {
    let radius = radius_for_sigma(sigma);
    if radius == 0 || width == 0 || height == 0 {
        return Ok(());
    }
    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; data.len()];
    pass(data, &mut tmp, width, height, &kernel, Axis::X);
    pass(&tmp, data, width, height, &kernel, Axis::Y);
    Ok(())
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], axis: Axis) {
    let radius = (k.len() / 2) as i64;
    let (w, h) = (i64::from(width), i64::from(height));
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let t = ki as i64 - radius;
                let (sx, sy) = match axis {
                    Axis::X => ((x + t).clamp(0, w - 1), y),
                    Axis::Y => (x, (y + t).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for (a, &v) in acc.iter_mut().zip(&src[idx..idx + 4]) {
                    *a += u64::from(kw) * u64::from(v);
                }
            }
            let out = ((y * w + x) as usize) * 4;
            for (d, a) in dst[out..out + 4].iter_mut().zip(acc) {
                *d = ((a + 32768) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
