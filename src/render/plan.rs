use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::rng::{ArtRng, derive_seed};
use crate::geometry::shapes::{DrawCmd, ShapeCmd};
use crate::params::kinds::{BlendMode, FilterKind};
use crate::params::model::{Background, LayerId, LayerSettings, RenderParameters};
use crate::pattern::generators::{PatternInput, generate};

/// Per-frame inputs that do not live in the parameter snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    /// Target canvas.
    pub canvas: Canvas,
    /// Session seed; each layer derives its own stream from it.
    pub seed: u64,
    /// Animation offset, 0 when static.
    pub offset: f64,
    /// Frames rendered while animating; mixed into the filter seed so grain moves.
    pub frame_index: u64,
}

/// Context handed to a [`LayerOverride`] for one layer.
#[derive(Clone, Copy, Debug)]
pub struct LayerContext<'a> {
    /// Target canvas.
    pub canvas: Canvas,
    /// Resolved palette of the layer.
    pub colors: &'a [Rgba8],
    /// Animation offset.
    pub offset: f64,
    /// Seed stable for this layer across frames.
    pub layer_seed: u64,
}

/// Replaces a layer's pattern draw for one frame (pointer interaction).
pub trait LayerOverride {
    /// Placements to draw instead of the layer's pattern, or `None` to draw the pattern.
    fn override_layer(
        &self,
        layer: &LayerSettings,
        cx: &LayerContext<'_>,
        rng: &mut ArtRng,
    ) -> Option<Vec<ShapeCmd>>;
}

/// One layer's contribution to a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerPlan {
    /// Buffer key.
    pub id: LayerId,
    /// Opacity, 0-1.
    pub opacity: f32,
    /// Composite function.
    pub blend: BlendMode,
    /// Placements, in draw order.
    pub cmds: Vec<DrawCmd>,
}

/// Declarative description of a whole frame, executed by the compositor and the SVG writer.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    /// Target canvas.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Background,
    /// Visible layers in composite order.
    pub layers: Vec<LayerPlan>,
    /// Post-processing filter.
    pub filter: FilterKind,
    /// Filter intensity, 0-1.
    pub intensity: f64,
    /// Seed for randomized filters.
    pub filter_seed: u64,
    /// Transient strokes drawn over the filtered frame.
    pub overlay: Vec<DrawCmd>,
}

impl FramePlan {
    /// Total number of placements across layers.
    pub fn placement_count(&self) -> usize {
        self.layers.iter().map(|l| l.cmds.len()).sum()
    }
}

/// Resolve `params` into a [`FramePlan`].
///
/// Hidden layers are omitted. Each layer draws from its own generator seeded by the session seed
/// and its id, so editing one layer never reshuffles another.
pub fn plan_frame(
    params: &RenderParameters,
    inputs: &FrameInputs,
    interaction: Option<&dyn LayerOverride>,
) -> FramePlan {
    let layers = params
        .layers
        .iter()
        .filter(|l| l.visible)
        .map(|layer| {
            let colors = params.palette_colors(layer.palette);
            let layer_seed = derive_seed(inputs.seed, layer.id.as_str());
            let mut rng = ArtRng::from_seed(layer_seed);
            let cx = LayerContext {
                canvas: inputs.canvas,
                colors,
                offset: inputs.offset,
                layer_seed,
            };
            let shapes = interaction
                .and_then(|ov| ov.override_layer(layer, &cx, &mut rng))
                .unwrap_or_else(|| {
                    let input = PatternInput {
                        canvas: inputs.canvas,
                        colors,
                        count: layer.complexity,
                        size: layer.element_size,
                        randomness: layer.randomness,
                        shape: layer.shape,
                        offset: inputs.offset,
                    };
                    generate(layer.pattern, &input, &mut rng)
                });
            LayerPlan {
                id: layer.id.clone(),
                opacity: (layer.opacity / 100.0).clamp(0.0, 1.0) as f32,
                blend: layer.blend_mode,
                cmds: shapes.into_iter().map(DrawCmd::Shape).collect(),
            }
        })
        .collect();

    let mut filter_seed = derive_seed(inputs.seed, "filter");
    if params.animated {
        filter_seed ^= inputs.frame_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    }

    FramePlan {
        canvas: inputs.canvas,
        background: params.background(),
        layers,
        filter: params.filter_effect,
        intensity: params.filter_intensity,
        filter_seed,
        overlay: Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
