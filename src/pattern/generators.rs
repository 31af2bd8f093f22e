use std::f64::consts::TAU;

use kurbo::Point;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::rng::ArtRng;
use crate::geometry::shapes::{ShapeCmd, place_shape};
use crate::params::kinds::{PatternKind, ShapeKind};

/// Everything a layout algorithm needs for one layer.
#[derive(Clone, Copy, Debug)]
pub struct PatternInput<'a> {
    /// Target canvas bounds.
    pub canvas: Canvas,
    /// Ordered colour list. Empty means nothing is drawn.
    pub colors: &'a [Rgba8],
    /// Element count driver.
    pub count: u32,
    /// Base element size.
    pub size: f64,
    /// Randomness fraction, 0-1.
    pub randomness: f64,
    /// Primitive drawn at each placement.
    pub shape: ShapeKind,
    /// Animation offset; 0 when static.
    pub offset: f64,
}

/// Fraction of the minor canvas dimension used as the outer radius of centered layouts.
pub const MAX_RADIUS_FRACTION: f64 = 0.45;
/// Upper bound on radial rays.
pub const MAX_RAYS: u32 = 36;
/// Upper bound on placements one layer produces in a frame.
pub const MAX_PLACEMENTS: usize = 20_000;

/// Columns and rows of the grid layout for `count` elements.
pub fn grid_dims(count: u32) -> u32 {
    (f64::from(count.max(1))).sqrt().ceil() as u32
}

/// Palette index of grid cell (`row`, `col`).
pub fn grid_color_index(row: u32, col: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (row as usize + col as usize) % len
}

/// Produce the placements of pattern `kind`.
///
/// Colour choice is index-derived for every layout except scatter, which draws a random index.
/// No layout yields more than [`MAX_PLACEMENTS`] placements; an unknown layout yields none.
pub fn generate(kind: PatternKind, input: &PatternInput<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
    if input.colors.is_empty() || input.count == 0 {
        return Vec::new();
    }
    let input = &PatternInput {
        count: input.count.min(MAX_PLACEMENTS as u32),
        ..*input
    };
    match kind {
        PatternKind::Unknown => Vec::new(),
        PatternKind::Scatter => scatter(input, rng),
        PatternKind::Grid => grid(input, rng),
        PatternKind::Spiral => spiral(input, rng),
        PatternKind::Wave => wave(input, rng),
        PatternKind::Concentric => concentric(input, rng),
        PatternKind::Radial => radial(input, rng),
    }
}

fn place(
    input: &PatternInput<'_>,
    rng: &mut ArtRng,
    center: Point,
    size: f64,
    color: Rgba8,
) -> ShapeCmd {
    place_shape(
        rng,
        input.shape,
        center,
        size,
        input.randomness,
        input.offset,
        color,
    )
}

fn scatter(input: &PatternInput<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
    let (w, h) = (f64::from(input.canvas.width), f64::from(input.canvas.height));
    let mut out = Vec::with_capacity(input.count as usize);
    for i in 0..input.count {
        let mut x = rng.below(w);
        let mut y = rng.below(h);
        let s = rng.range(input.size * 0.5, input.size * 1.5);
        let color = input.colors[rng.index(input.colors.len())];
        if input.offset != 0.0 {
            let phase = f64::from(i) + input.offset;
            x += phase.sin() * 8.0;
            y += phase.cos() * 8.0;
        }
        out.push(place(input, rng, Point::new(x, y), s, color));
    }
    out
}

fn grid(input: &PatternInput<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
    let r = input.randomness;
    let cols = grid_dims(input.count);
    let cell_w = f64::from(input.canvas.width) / f64::from(cols);
    let cell_h = f64::from(input.canvas.height) / f64::from(cols);
    let cells = (cols as usize).saturating_mul(cols as usize);
    let mut out = Vec::with_capacity(cells.min(MAX_PLACEMENTS));
    'cols: for i in 0..cols {
        for j in 0..cols {
            if out.len() >= MAX_PLACEMENTS {
                break 'cols;
            }
            let x = f64::from(i) * cell_w + cell_w / 2.0;
            let y = f64::from(j) * cell_h + cell_h / 2.0;
            let s = input.size * (1.0 - r * 0.5 + rng.below(r));
            let color = input.colors[grid_color_index(j, i, input.colors.len())];
            let dx = r * rng.range(-cell_w / 3.0, cell_w / 3.0);
            let dy = r * rng.range(-cell_h / 3.0, cell_h / 3.0);
            out.push(place(input, rng, Point::new(x + dx, y + dy), s, color));
        }
    }
    out
}

fn spiral(input: &PatternInput<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
    let r = input.randomness;
    let center = input.canvas.center();
    let max_radius = input.canvas.min_dim() * MAX_RADIUS_FRACTION;
    let n = f64::from(input.count);
    let mut out = Vec::with_capacity(input.count as usize);
    for i in 0..input.count {
        let t = f64::from(i) / n;
        let angle = 0.1 * f64::from(i) + input.offset * 0.1;
        let radius = max_radius * t;
        let p = Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        let s = input.size * (1.0 - 0.5 * t) * (1.0 - r * 0.3 + rng.below(r * 0.6));
        let color = input.colors[i as usize % input.colors.len()];
        out.push(place(input, rng, p, s, color));
    }
    out
}

fn wave(input: &PatternInput<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
    let r = input.randomness;
    let (w, h) = (f64::from(input.canvas.width), f64::from(input.canvas.height));
    let amplitude = h * 0.2;
    let frequency = 0.02;
    let len = input.colors.len();
    let mut out = Vec::with_capacity(input.count as usize);
    for i in 0..input.count {
        let x = w * f64::from(i) / f64::from(input.count);
        let wave1 = amplitude * (frequency * x + input.offset).sin();
        let wave2 = amplitude * 0.5 * (frequency * 2.0 * x + 1.0 + input.offset * 1.5).sin();
        let y = h / 2.0 + wave1 + wave2;
        let s = input.size * (1.0 - r * 0.3 + rng.below(r * 0.6));
        let color = input.colors[((x / w) * len as f64).floor() as usize % len];
        out.push(place(input, rng, Point::new(x, y), s, color));
    }
    out
}

fn concentric(input: &PatternInput<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
    let center = input.canvas.center();
    let max_radius = input.canvas.min_dim() * MAX_RADIUS_FRACTION;
    let rings = input.count;
    let mut out = Vec::new();
    for k in 0..rings {
        let room = MAX_PLACEMENTS - out.len();
        if room == 0 {
            break;
        }
        let radius = max_radius * f64::from(k + 1) / f64::from(rings);
        let per_ring = (TAU * radius / (input.size * 1.5)).floor();
        let items = if per_ring.is_finite() && per_ring >= 1.0 {
            (per_ring as usize).min(room)
        } else {
            1
        };
        let direction = if k % 2 == 0 { 1.0 } else { -1.0 };
        let spin = direction * input.offset * 0.05;
        let color = input.colors[k as usize % input.colors.len()];
        for n in 0..items {
            let a = TAU * n as f64 / items as f64 + spin;
            let p = Point::new(center.x + radius * a.cos(), center.y + radius * a.sin());
            out.push(place(input, rng, p, input.size, color));
        }
    }
    out
}

fn radial(input: &PatternInput<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
    let center = input.canvas.center();
    let max_radius = input.canvas.min_dim() * MAX_RADIUS_FRACTION;
    let rays = input.count.min(MAX_RAYS);
    let per_ray = (input.count / rays).max(1);
    let mut out =
        Vec::with_capacity((rays as usize).saturating_mul(per_ray as usize).min(MAX_PLACEMENTS));
    for ray in 0..rays {
        let a = TAU * f64::from(ray) / f64::from(rays) + input.offset * 0.02;
        let color = input.colors[ray as usize % input.colors.len()];
        for k in 0..per_ray {
            let t = f64::from(k) / f64::from(per_ray);
            let d = max_radius * f64::from(k + 1) / f64::from(per_ray);
            let p = Point::new(center.x + d * a.cos(), center.y + d * a.sin());
            out.push(place(input, rng, p, input.size * (1.0 - 0.6 * t), color));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/generators.rs"]
mod tests;
