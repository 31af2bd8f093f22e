use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{GenartError, GenartResult};
use crate::params::kinds::{BlendMode, FilterKind, PatternKind, ShapeKind};

/// Stable identity token for a layer.
///
/// Ids minted by [`LayerId::fresh`] are unique for the process lifetime and never reused.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    /// Wrap an externally supplied id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a new process-unique id.
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        Self(format!("layer_{}_{n}", std::process::id()))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named, ordered colour list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorPalette {
    /// Display name.
    pub name: String,
    /// Colours in selection order.
    pub colors: Vec<Rgba8>,
}

impl ColorPalette {
    /// Build a palette from hex strings, skipping malformed entries.
    pub fn from_hex(name: &str, colors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            colors: colors
                .iter()
                .filter_map(|c| Rgba8::parse_hex(c).ok())
                .collect(),
        }
    }
}

/// Independently configured sub-render composited into the final image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSettings {
    /// Identity used to key the layer's buffer.
    pub id: LayerId,
    /// Hidden layers keep their buffer but are not composited.
    pub visible: bool,
    /// 0-100.
    pub opacity: f64,
    /// Blend mode used when compositing.
    pub blend_mode: BlendMode,
    /// Primitive drawn at each placement.
    pub shape: ShapeKind,
    /// Layout algorithm.
    pub pattern: PatternKind,
    /// Index into [`RenderParameters::color_palettes`], independent of the global palette.
    pub palette: usize,
    /// Element count driver (>= 1).
    pub complexity: u32,
    /// Base element size in pixels (> 0).
    pub element_size: f64,
    /// 0-1.
    pub randomness: f64,
}

impl LayerSettings {
    /// A new visible layer seeded from the global defaults in `params`.
    pub fn from_defaults(params: &RenderParameters) -> Self {
        Self {
            id: LayerId::fresh(),
            visible: true,
            opacity: 100.0,
            blend_mode: BlendMode::Normal,
            shape: params.shape,
            pattern: params.pattern,
            palette: params.palette,
            complexity: params.complexity,
            element_size: params.element_size,
            randomness: params.randomness,
        }
    }

    fn validate(&self) -> GenartResult<()> {
        if !(0.0..=100.0).contains(&self.opacity) {
            return Err(GenartError::validation(format!(
                "layer '{}' opacity must be within 0..=100",
                self.id
            )));
        }
        check_element_params(self.complexity, self.element_size, self.randomness)
            .map_err(|e| GenartError::validation(format!("layer '{}': {e}", self.id)))
    }
}

/// Canvas background, resolved from the flat parameter fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    /// Single fill colour.
    Solid(Rgba8),
    /// Vertical gradient from `top` to `bottom`.
    Gradient {
        /// Colour of the first scanline.
        top: Rgba8,
        /// Colour of the last scanline.
        bottom: Rgba8,
    },
}

/// Complete, immutable parameter snapshot supplied on every update.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParameters {
    /// Global palette index (used for new layers).
    pub palette: usize,
    /// Full palette table.
    pub color_palettes: Vec<ColorPalette>,
    /// Base colour of the custom palette.
    pub custom_color: Rgba8,
    /// Default shape for new layers.
    pub shape: ShapeKind,
    /// Default pattern for new layers.
    pub pattern: PatternKind,
    /// Default complexity for new layers.
    pub complexity: u32,
    /// Default element size for new layers.
    pub element_size: f64,
    /// Default randomness (0-1) for new layers.
    pub randomness: f64,
    /// Drive the animation clock.
    pub animated: bool,
    /// Animation speed scalar.
    pub animation_speed: f64,
    /// Draw a vertical gradient instead of a solid background.
    pub use_gradient_background: bool,
    /// Solid colour, or gradient top colour.
    pub background_color: Rgba8,
    /// Gradient bottom colour.
    pub background_end_color: Rgba8,
    /// Active post-processing filter.
    pub filter_effect: FilterKind,
    /// Filter strength, 0-1.
    pub filter_intensity: f64,
    /// Layers in composite order (first is bottom-most).
    pub layers: Vec<LayerSettings>,
    /// Index of the layer being edited.
    pub active_layer: usize,
}

impl Default for RenderParameters {
    fn default() -> Self {
        let mut params = Self {
            palette: 0,
            color_palettes: crate::params::presets::default_palettes(),
            custom_color: Rgba8::rgb(0x63, 0x66, 0xf1),
            shape: ShapeKind::Circle,
            pattern: PatternKind::Scatter,
            complexity: 50,
            element_size: 20.0,
            randomness: 0.5,
            animated: false,
            animation_speed: 5.0,
            use_gradient_background: false,
            background_color: Rgba8::rgb(0x0f, 0x17, 0x2a),
            background_end_color: Rgba8::rgb(0x33, 0x41, 0x55),
            filter_effect: FilterKind::None,
            filter_intensity: 0.5,
            layers: Vec::new(),
            active_layer: 0,
        };
        params.layers.push(LayerSettings::from_defaults(&params));
        params
    }
}

impl RenderParameters {
    /// Parse a parameter snapshot from JSON and validate it.
    pub fn from_json_str(s: &str) -> GenartResult<Self> {
        let params: Self = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Parse a parameter snapshot from a JSON file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> GenartResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            GenartError::external(format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Enforce the structural invariants of the data model.
    pub fn validate(&self) -> GenartResult<()> {
        if self.layers.is_empty() {
            return Err(GenartError::validation("layer list must not be empty"));
        }
        if self.active_layer >= self.layers.len() {
            return Err(GenartError::validation(format!(
                "active layer {} is out of range for {} layers",
                self.active_layer,
                self.layers.len()
            )));
        }
        check_element_params(self.complexity, self.element_size, self.randomness)?;
        if !self.animation_speed.is_finite() || self.animation_speed < 0.0 {
            return Err(GenartError::validation(
                "animation speed must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.filter_intensity) {
            return Err(GenartError::validation(
                "filter intensity must be within 0..=1",
            ));
        }

        let mut seen = BTreeSet::new();
        for layer in &self.layers {
            layer.validate()?;
            if !seen.insert(&layer.id) {
                return Err(GenartError::validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
        }
        Ok(())
    }

    /// Colours of palette `index`, substituting the first palette when out of range.
    ///
    /// Returns an empty slice only when the palette table itself is empty.
    pub fn palette_colors(&self, index: usize) -> &[Rgba8] {
        self.color_palettes
            .get(index)
            .or_else(|| self.color_palettes.first())
            .map(|p| p.colors.as_slice())
            .unwrap_or(&[])
    }

    /// Resolved background.
    pub fn background(&self) -> Background {
        if self.use_gradient_background {
            Background::Gradient {
                top: self.background_color,
                bottom: self.background_end_color,
            }
        } else {
            Background::Solid(self.background_color)
        }
    }

    /// Set of layer ids, in id order.
    pub fn layer_ids(&self) -> BTreeSet<&LayerId> {
        self.layers.iter().map(|l| &l.id).collect()
    }

    /// The layer currently being edited.
    pub fn active(&self) -> &LayerSettings {
        let idx = self.active_layer.min(self.layers.len().saturating_sub(1));
        &self.layers[idx]
    }
}

/// Largest accepted element count driver.
pub const MAX_COMPLEXITY: u32 = 500;
/// Smallest accepted element size, in pixels.
pub const MIN_ELEMENT_SIZE: f64 = 1.0;
/// Largest accepted element size, in pixels.
pub const MAX_ELEMENT_SIZE: f64 = 200.0;

fn check_element_params(complexity: u32, element_size: f64, randomness: f64) -> GenartResult<()> {
    if !(1..=MAX_COMPLEXITY).contains(&complexity) {
        return Err(GenartError::validation(format!(
            "complexity must be within 1..={MAX_COMPLEXITY}"
        )));
    }
    if !(MIN_ELEMENT_SIZE..=MAX_ELEMENT_SIZE).contains(&element_size) {
        return Err(GenartError::validation(format!(
            "element size must be within {MIN_ELEMENT_SIZE}..={MAX_ELEMENT_SIZE}"
        )));
    }
    if !(0.0..=1.0).contains(&randomness) {
        return Err(GenartError::validation("randomness must be within 0..=1"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
