use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Affine, BezPath, Cap, Join, Point, Shape, Stroke, StrokeOpts, Vec2};

use crate::foundation::core::Rgba8;
use crate::foundation::rng::ArtRng;
use crate::params::kinds::ShapeKind;

const PATH_TOLERANCE: f64 = 0.1;

/// One placed primitive. Produced by the pattern generators, consumed by the rasterizer and the
/// SVG writer.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeCmd {
    /// Primitive.
    pub shape: ShapeKind,
    /// Center in canvas pixels.
    pub center: Point,
    /// Nominal size (diameter / side / length).
    pub size: f64,
    /// Width and height of the bounding box before rotation. Equals `(size, size)` except for
    /// perturbed rectangles.
    pub extent: Vec2,
    /// Rotation in radians.
    pub rotation: f64,
    /// Fill colour.
    pub color: Rgba8,
}

/// Anything the rasterizer can draw.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// A filled primitive.
    Shape(ShapeCmd),
    /// An open, unfilled stroke through `points`.
    Polyline {
        /// Stroke vertices.
        points: Vec<Point>,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke colour, including its fade alpha.
        color: Rgba8,
    },
}

impl DrawCmd {
    /// Fill outline for this command, in canvas space.
    pub fn path(&self) -> BezPath {
        match self {
            Self::Shape(cmd) => shape_path(cmd),
            Self::Polyline { points, width, .. } => polyline_path(points, *width),
        }
    }

    /// Paint colour.
    pub fn color(&self) -> Rgba8 {
        match self {
            Self::Shape(cmd) => cmd.color,
            Self::Polyline { color, .. } => *color,
        }
    }
}

/// Place one primitive.
///
/// Rotation is a uniform draw over a full turn plus `phase * 0.5`, so with a per-frame reseeded
/// generator the shape sweeps smoothly as the animation phase advances. Rectangles get their
/// width and height independently scaled by 0.8-1.2 when `randomness > 0.5`.
pub fn place_shape(
    rng: &mut ArtRng,
    shape: ShapeKind,
    center: Point,
    size: f64,
    randomness: f64,
    phase: f64,
    color: Rgba8,
) -> ShapeCmd {
    let rotation = rng.angle() + phase * 0.5;
    let extent = if shape == ShapeKind::Rectangle && randomness > 0.5 {
        Vec2::new(size * rng.range(0.8, 1.2), size * rng.range(0.8, 1.2))
    } else {
        Vec2::new(size, size)
    };
    ShapeCmd {
        shape,
        center,
        size,
        extent,
        rotation,
        color,
    }
}

fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

fn star_points(outer: f64, inner: f64, points: usize) -> impl Iterator<Item = Point> {
    let step = PI / points as f64;
    (0..points * 2).map(move |i| {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = i as f64 * step - FRAC_PI_2;
        Point::new(r * a.cos(), r * a.sin())
    })
}

fn regular_points(radius: f64, sides: usize) -> impl Iterator<Item = Point> {
    (0..sides).map(move |i| {
        let a = TAU * i as f64 / sides as f64;
        Point::new(radius * a.cos(), radius * a.sin())
    })
}

fn local_path(cmd: &ShapeCmd) -> BezPath {
    let s = cmd.size;
    let h = s / 2.0;
    match cmd.shape {
        ShapeKind::Circle => kurbo::Circle::new(Point::ZERO, h).to_path(PATH_TOLERANCE),
        ShapeKind::Triangle => polygon([
            Point::new(0.0, -h),
            Point::new(h, h),
            Point::new(-h, h),
        ]),
        ShapeKind::Rectangle => {
            let (w, ht) = (cmd.extent.x / 2.0, cmd.extent.y / 2.0);
            kurbo::Rect::new(-w, -ht, w, ht).to_path(PATH_TOLERANCE)
        }
        ShapeKind::Line => {
            let mut seg = BezPath::new();
            seg.move_to((-h, 0.0));
            seg.line_to((h, 0.0));
            kurbo::stroke(
                seg.iter(),
                &Stroke::new(s / 6.0).with_caps(Cap::Round),
                &StrokeOpts::default(),
                PATH_TOLERANCE,
            )
        }
        ShapeKind::Star => polygon(star_points(h, s / 4.0, 5)),
        ShapeKind::Polygon => polygon(regular_points(h, 6)),
        ShapeKind::Cross => {
            let t = s / 6.0;
            polygon([
                Point::new(-t, -h),
                Point::new(t, -h),
                Point::new(t, -t),
                Point::new(h, -t),
                Point::new(h, t),
                Point::new(t, t),
                Point::new(t, h),
                Point::new(-t, h),
                Point::new(-t, t),
                Point::new(-h, t),
                Point::new(-h, -t),
                Point::new(-t, -t),
            ])
        }
        ShapeKind::Diamond => polygon([
            Point::new(0.0, -h),
            Point::new(s * 0.35, 0.0),
            Point::new(0.0, h),
            Point::new(-s * 0.35, 0.0),
        ]),
        ShapeKind::Unknown => BezPath::new(),
    }
}

/// Local-to-canvas transform of a placed primitive.
pub fn shape_transform(cmd: &ShapeCmd) -> Affine {
    Affine::translate(cmd.center.to_vec2()) * Affine::rotate(cmd.rotation)
}

/// Fill outline of `cmd` in canvas space.
pub fn shape_path(cmd: &ShapeCmd) -> BezPath {
    shape_transform(cmd) * local_path(cmd)
}

/// Outline of a round-capped, round-joined stroke through `points`. Fewer than two points yield
/// an empty path.
pub fn polyline_path(points: &[Point], width: f64) -> BezPath {
    if points.len() < 2 {
        return BezPath::new();
    }
    let mut line = BezPath::new();
    line.move_to(points[0]);
    for p in &points[1..] {
        line.line_to(*p);
    }
    kurbo::stroke(
        line.iter(),
        &Stroke::new(width)
            .with_caps(Cap::Round)
            .with_join(Join::Round),
        &StrokeOpts::default(),
        PATH_TOLERANCE,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
