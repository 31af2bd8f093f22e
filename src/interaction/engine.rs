use std::collections::BTreeMap;
use std::f64::consts::TAU;

use kurbo::{Point, Vec2};

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::math::map_range;
use crate::foundation::rng::{ArtRng, derive_seed};
use crate::geometry::shapes::{DrawCmd, ShapeCmd, place_shape};
use crate::interaction::history::PointerHistory;
use crate::params::kinds::PatternKind;
use crate::params::model::LayerSettings;
use crate::pattern::generators::{grid_color_index, grid_dims};
use crate::render::plan::{LayerContext, LayerOverride};

/// Delay before a lifted touch stops driving the interaction.
pub const TOUCH_RELEASE_MS: f64 = 100.0;

/// Pointer-driven behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Pointer is ignored.
    #[default]
    None,
    /// Elements trail the pointer history.
    Follow,
    /// Elements are pushed away from the pointer.
    Repel,
    /// Grid elements are pulled toward the pointer.
    Attract,
    /// Free-hand fading strokes.
    Draw,
    /// Elements near the pointer grow.
    Expand,
}

impl InteractionMode {
    /// Every mode.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Follow,
        Self::Repel,
        Self::Attract,
        Self::Draw,
        Self::Expand,
    ];

    /// Stable string id.
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Follow => "follow",
            Self::Repel => "repel",
            Self::Attract => "attract",
            Self::Draw => "draw",
            Self::Expand => "expand",
        }
    }

    /// Look up a mode by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

/// Free-form interaction tuning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionParams {
    /// 0-100.
    pub strength: f64,
    /// Influence radius in pixels.
    pub radius: f64,
    /// Draw-mode alpha decay per frame, in tenths of an alpha step.
    pub fade_speed: f64,
    /// Follow-mode trail spread.
    pub delay: f64,
    /// Mode-specific settings not interpreted by the engine.
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Default for InteractionParams {
    fn default() -> Self {
        Self {
            strength: 50.0,
            radius: 150.0,
            fade_speed: 3.0,
            delay: 5.0,
            extras: BTreeMap::new(),
        }
    }
}

/// Kind of pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    #[allow(missing_docs)]
    MouseDown,
    #[allow(missing_docs)]
    MouseMove,
    #[allow(missing_docs)]
    MouseUp,
    #[allow(missing_docs)]
    MouseLeave,
    #[allow(missing_docs)]
    TouchStart,
    #[allow(missing_docs)]
    TouchMove,
    #[allow(missing_docs)]
    TouchEnd,
}

/// One pointer input in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Input kind.
    pub kind: PointerKind,
    /// Position relative to the canvas origin.
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: f64,
}

impl PointerEvent {
    /// Build an event.
    pub fn new(kind: PointerKind, x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            timestamp_ms,
        }
    }
}

/// A free-hand stroke with its own colour and fading alpha.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Vertices in input order.
    pub points: Vec<Point>,
    /// Opaque base colour.
    pub color: Rgba8,
    /// Remaining alpha on a 0-255 scale.
    pub alpha: f64,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Pointer state plus the per-mode layer overrides.
#[derive(Clone, Debug)]
pub struct InteractionEngine {
    mode: InteractionMode,
    params: InteractionParams,
    pointer: Point,
    active: bool,
    pressed: bool,
    release_at_ms: Option<f64>,
    history: PointerHistory,
    strokes: Vec<Stroke>,
    rng: ArtRng,
}

impl InteractionEngine {
    /// Idle engine in mode `none`.
    pub fn new(history: PointerHistory, seed: u64) -> Self {
        Self {
            mode: InteractionMode::None,
            params: InteractionParams::default(),
            pointer: Point::ZERO,
            active: false,
            pressed: false,
            release_at_ms: None,
            history,
            strokes: Vec::new(),
            rng: ArtRng::from_seed(derive_seed(seed, "strokes")),
        }
    }

    /// Put the pointer at `p` and seed the trail with it.
    pub fn seed_pointer(&mut self, p: Point) {
        self.pointer = p;
        self.history.seed(p);
    }

    /// Switch mode. Entering or leaving draw mode discards strokes.
    pub fn set_mode(&mut self, mode: InteractionMode) -> InteractionMode {
        let prev = self.mode;
        if mode == InteractionMode::Draw || prev == InteractionMode::Draw {
            self.strokes.clear();
        }
        self.mode = mode;
        prev
    }

    /// Replace the tuning parameters.
    pub fn set_params(&mut self, params: InteractionParams) {
        self.params = params;
    }

    /// Feed one pointer event.
    pub fn handle(&mut self, ev: &PointerEvent) {
        let p = ev.position;
        match ev.kind {
            PointerKind::MouseDown | PointerKind::TouchStart => {
                self.pointer = p;
                self.pressed = true;
                self.active = true;
                self.release_at_ms = None;
                if self.mode == InteractionMode::Draw {
                    self.begin_stroke(p);
                }
            }
            PointerKind::MouseMove | PointerKind::TouchMove => {
                self.pointer = p;
                self.active = true;
                self.history.record(p, ev.timestamp_ms);
                if self.mode == InteractionMode::Draw
                    && (self.pressed || ev.kind == PointerKind::TouchMove)
                    && let Some(stroke) = self.strokes.last_mut()
                {
                    stroke.points.push(p);
                }
            }
            PointerKind::MouseUp => self.pressed = false,
            PointerKind::MouseLeave => {
                self.pressed = false;
                self.active = false;
            }
            PointerKind::TouchEnd => {
                self.pressed = false;
                self.release_at_ms = Some(ev.timestamp_ms + TOUCH_RELEASE_MS);
            }
        }
    }

    /// Apply deferred touch release once `now_ms` passes its deadline.
    pub fn poll(&mut self, now_ms: f64) {
        if let Some(at) = self.release_at_ms
            && now_ms >= at
        {
            self.active = false;
            self.release_at_ms = None;
        }
    }

    fn begin_stroke(&mut self, p: Point) {
        let color = Rgba8::from_hsb(
            self.rng.below(360.0),
            80.0 + self.rng.below(20.0),
            80.0 + self.rng.below(20.0),
        );
        let width = self.rng.range(5.0, 15.0);
        self.strokes.push(Stroke {
            points: vec![p],
            color,
            alpha: 255.0,
            width,
        });
    }

    /// Whether the current mode is live this frame.
    pub fn is_engaged(&self) -> bool {
        self.mode != InteractionMode::None && self.active
    }

    /// Current stroke overlay, without decaying it. Empty unless engaged in draw mode.
    pub fn stroke_cmds(&self) -> Vec<DrawCmd> {
        if self.mode != InteractionMode::Draw || !self.is_engaged() {
            return Vec::new();
        }
        self.strokes
            .iter()
            .filter(|s| s.points.len() >= 2)
            .map(|s| DrawCmd::Polyline {
                points: s.points.clone(),
                width: s.width,
                color: s.color.with_alpha(s.alpha.round().clamp(0.0, 255.0) as u8),
            })
            .collect()
    }

    /// Stroke overlay for this frame. Each call also decays stroke alpha and prunes strokes that
    /// have faded out; nothing happens while the engine is not engaged in draw mode.
    pub fn stroke_frame(&mut self) -> Vec<DrawCmd> {
        if self.mode != InteractionMode::Draw || !self.is_engaged() {
            return Vec::new();
        }
        let cmds = self.stroke_cmds();

        let fade = self.params.fade_speed / 10.0;
        for s in &mut self.strokes {
            s.alpha = (s.alpha - fade).max(0.0);
        }
        self.strokes.retain(|s| s.alpha > 0.0);
        cmds
    }

    /// Current mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Tuning parameters.
    pub fn params(&self) -> &InteractionParams {
        &self.params
    }

    /// Last pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Whether the pointer is over the canvas (or a touch is held).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer trail.
    pub fn history(&self) -> &PointerHistory {
        &self.history
    }

    /// Strokes in progress.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Drop all pointer state.
    pub fn reset(&mut self) {
        self.history.clear();
        self.strokes.clear();
        self.active = false;
        self.pressed = false;
        self.release_at_ms = None;
    }

    fn follow(&self, layer: &LayerSettings, cx: &LayerContext<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
        let count = (layer.complexity / 2).max(1);
        let strength = self.params.strength / 100.0;
        let delay = self.params.delay;
        let len = self.history.len().max(1);
        let center = cx.canvas.center();
        let base_radius = cx.canvas.min_dim() * 0.3;
        let size_span = (len - 1).min(10) as f64;

        (0..count)
            .map(|i| {
                let delay_idx =
                    ((f64::from(i) * delay / f64::from(count)).floor().max(0.0) as usize).min(len - 1);
                let target = self.history.get(delay_idx).unwrap_or(self.pointer);
                let angle = TAU * f64::from(i) / f64::from(count);
                let base = center + Vec2::from_angle(angle) * base_radius;
                let p = base.lerp(target, strength);
                let size_factor = if size_span > 0.0 {
                    map_range(delay_idx as f64, 0.0, size_span, 1.2, 0.8)
                } else {
                    1.2
                };
                let color = cx.colors[i as usize % cx.colors.len()];
                place_shape(
                    rng,
                    layer.shape,
                    p,
                    layer.element_size * size_factor,
                    layer.randomness,
                    0.0,
                    color,
                )
            })
            .collect()
    }

    fn repel(&self, layer: &LayerSettings, cx: &LayerContext<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
        let count = layer.complexity.div_ceil(2);
        let strength = self.params.strength / 50.0;
        let radius = self.params.radius;
        let center = cx.canvas.center();
        let base_radius = cx.canvas.min_dim() * 0.4;

        (0..count)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(count);
                let base = center + Vec2::from_angle(angle) * base_radius;
                let d = base.distance(self.pointer);
                let (p, size) = if d < radius {
                    let push = strength * (1.0 - d / radius);
                    let dir = base - self.pointer;
                    let dir = if dir.hypot() > 0.0 { dir.normalize() } else { Vec2::ZERO };
                    (base + dir * push * 50.0, layer.element_size * 1.5)
                } else {
                    (base, layer.element_size)
                };
                let color = cx.colors[i as usize % cx.colors.len()];
                place_shape(rng, layer.shape, p, size, layer.randomness, 0.0, color)
            })
            .collect()
    }

    fn grid_cells(canvas: Canvas, complexity: u32) -> impl Iterator<Item = (u32, u32, Point)> {
        let n = grid_dims(complexity);
        let cw = f64::from(canvas.width) / f64::from(n);
        let ch = f64::from(canvas.height) / f64::from(n);
        (0..n).flat_map(move |i| {
            (0..n).map(move |j| {
                let p = Point::new(
                    f64::from(i) * cw + cw / 2.0,
                    f64::from(j) * ch + ch / 2.0,
                );
                (i, j, p)
            })
        })
    }

    fn attract(&self, layer: &LayerSettings, cx: &LayerContext<'_>, rng: &mut ArtRng) -> Vec<ShapeCmd> {
        let strength = self.params.strength / 100.0;
        let radius = self.params.radius;
        Self::grid_cells(cx.canvas, layer.complexity)
            .map(|(i, j, base)| {
                let d = base.distance(self.pointer);
                let (p, size) = if d < radius {
                    let t = strength * (1.0 - d / radius);
                    (
                        base.lerp(self.pointer, t),
                        layer.element_size * (1.0 - d / radius * 0.5),
                    )
                } else {
                    (base, layer.element_size)
                };
                let color = cx.colors[grid_color_index(j, i, cx.colors.len())];
                place_shape(rng, layer.shape, p, size, layer.randomness, 0.0, color)
            })
            .collect()
    }

    fn expand_factor(&self, p: Point) -> f64 {
        let radius = self.params.radius;
        let d = p.distance(self.pointer);
        if d < radius {
            1.0 + self.params.strength / 100.0 * (1.0 - d / radius) * 3.0
        } else {
            1.0
        }
    }

    fn expand(
        &self,
        layer: &LayerSettings,
        cx: &LayerContext<'_>,
        rng: &mut ArtRng,
    ) -> Option<Vec<ShapeCmd>> {
        match layer.pattern {
            PatternKind::Grid => Some(
                Self::grid_cells(cx.canvas, layer.complexity)
                    .map(|(i, j, p)| {
                        let color = cx.colors[grid_color_index(j, i, cx.colors.len())];
                        let size = layer.element_size * self.expand_factor(p);
                        place_shape(rng, layer.shape, p, size, layer.randomness, 0.0, color)
                    })
                    .collect(),
            ),
            PatternKind::Scatter => {
                let mut positions = ArtRng::from_seed(derive_seed(cx.layer_seed, "expand"));
                let (w, h) = (f64::from(cx.canvas.width), f64::from(cx.canvas.height));
                Some(
                    (0..layer.complexity)
                        .map(|i| {
                            let p = Point::new(positions.below(w), positions.below(h));
                            let color = cx.colors[i as usize % cx.colors.len()];
                            let size = layer.element_size * self.expand_factor(p);
                            place_shape(rng, layer.shape, p, size, layer.randomness, 0.0, color)
                        })
                        .collect(),
                )
            }
            _ => None,
        }
    }
}

impl LayerOverride for InteractionEngine {
    fn override_layer(
        &self,
        layer: &LayerSettings,
        cx: &LayerContext<'_>,
        rng: &mut ArtRng,
    ) -> Option<Vec<ShapeCmd>> {
        if !self.is_engaged() {
            return None;
        }
        if cx.colors.is_empty() {
            return match self.mode {
                InteractionMode::None | InteractionMode::Draw => None,
                _ => Some(Vec::new()),
            };
        }
        match self.mode {
            InteractionMode::None | InteractionMode::Draw => None,
            InteractionMode::Follow => Some(self.follow(layer, cx, rng)),
            InteractionMode::Repel => Some(self.repel(layer, cx, rng)),
            InteractionMode::Attract => Some(self.attract(layer, cx, rng)),
            InteractionMode::Expand => self.expand(layer, cx, rng),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/engine.rs"]
mod tests;
