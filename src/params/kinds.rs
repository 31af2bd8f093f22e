//! Closed identifier sets for every dispatch axis.
//!
//! Each axis serializes to the string ids the parameter store uses. Unknown shape and pattern ids
//! parse to an `Unknown` variant that draws nothing; blend modes fall back to
//! [`BlendMode::Normal`] and filters to [`FilterKind::None`].

/// Primitive drawn at each pattern placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Filled circle, diameter = size.
    Circle,
    /// Isoceles triangle inscribed in a size × size box.
    Triangle,
    /// Square, or a ±20% perturbed rectangle when randomness > 0.5.
    Rectangle,
    /// Stroked segment of length size and width size / 6.
    Line,
    /// Five-pointed star.
    Star,
    /// Regular hexagon.
    Polygon,
    /// Plus sign.
    Cross,
    /// Rhombus.
    Diamond,
    /// Any id this build does not know. Draws nothing.
    #[serde(other)]
    Unknown,
}

impl ShapeKind {
    /// Every drawable shape, in UI order.
    pub const ALL: [Self; 8] = [
        Self::Circle,
        Self::Triangle,
        Self::Rectangle,
        Self::Line,
        Self::Star,
        Self::Polygon,
        Self::Cross,
        Self::Diamond,
    ];

    /// Stable string id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Rectangle => "rectangle",
            Self::Line => "line",
            Self::Star => "star",
            Self::Polygon => "polygon",
            Self::Cross => "cross",
            Self::Diamond => "diamond",
            Self::Unknown => "unknown",
        }
    }

    /// Look up a shape by id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Spatial layout algorithm for a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Uniform random placement.
    #[serde(alias = "random")]
    Scatter,
    /// Square grid with optional jitter.
    Grid,
    /// Archimedean spiral from the center.
    Spiral,
    /// Two superposed sine waves across the width.
    Wave,
    /// Rings of evenly spaced elements.
    Concentric,
    /// Rays from the center.
    Radial,
    /// Any id this build does not know. Places nothing.
    #[serde(other)]
    Unknown,
}

impl PatternKind {
    /// Every placeable pattern, in UI order.
    pub const ALL: [Self; 6] = [
        Self::Scatter,
        Self::Grid,
        Self::Spiral,
        Self::Wave,
        Self::Concentric,
        Self::Radial,
    ];

    /// Stable string id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Grid => "grid",
            Self::Spiral => "spiral",
            Self::Wave => "wave",
            Self::Concentric => "concentric",
            Self::Radial => "radial",
            Self::Unknown => "unknown",
        }
    }

    /// Look up a pattern by id (`"random"` is accepted for scatter).
    pub fn from_id(id: &str) -> Option<Self> {
        if id == "random" {
            return Some(Self::Scatter);
        }
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

/// Post-processing filter applied to the composited frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterKind {
    /// No filter.
    #[default]
    None,
    /// Gaussian blur.
    Blur,
    /// Center-sampled block mosaic.
    Pixelate,
    /// Shifted horizontal slices with channel ghosts.
    Glitch,
    /// Luminance mapped between two fixed colours.
    Duotone,
    /// Sparse additive grain.
    Noise,
    /// Power-curve darkening toward the corners.
    Vignette,
}

impl FilterKind {
    /// Every filter, in UI order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Blur,
        Self::Pixelate,
        Self::Glitch,
        Self::Duotone,
        Self::Noise,
        Self::Vignette,
    ];

    /// Stable string id.
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Blur => "blur",
            Self::Pixelate => "pixelate",
            Self::Glitch => "glitch",
            Self::Duotone => "duotone",
            Self::Noise => "noise",
            Self::Vignette => "vignette",
        }
    }

    /// Look up a filter by id; unknown ids map to [`FilterKind::None`].
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == id)
            .unwrap_or(Self::None)
    }
}

impl From<String> for FilterKind {
    fn from(s: String) -> Self {
        Self::from_id(s.trim())
    }
}

impl From<FilterKind> for String {
    fn from(f: FilterKind) -> Self {
        f.id().to_string()
    }
}

/// Pixel-combination function used when compositing a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlendMode {
    /// Source-over.
    #[default]
    Normal,
    /// Multiply.
    Multiply,
    /// Screen.
    Screen,
    /// Overlay.
    Overlay,
    /// Darken.
    Darken,
    /// Lighten.
    Lighten,
    /// Color dodge.
    ColorDodge,
    /// Color burn.
    ColorBurn,
    /// Hard light.
    HardLight,
    /// Soft light.
    SoftLight,
    /// Difference.
    Difference,
    /// Exclusion.
    Exclusion,
}

impl BlendMode {
    /// Every blend mode, in UI order.
    pub const ALL: [Self; 12] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
    ];

    /// Canvas composite-operation id (also the CSS `mix-blend-mode` name, except Normal).
    pub fn id(self) -> &'static str {
        match self {
            Self::Normal => "source-over",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorDodge => "color-dodge",
            Self::ColorBurn => "color-burn",
            Self::HardLight => "hard-light",
            Self::SoftLight => "soft-light",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
        }
    }

    /// CSS `mix-blend-mode` keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            other => other.id(),
        }
    }

    /// Look up a blend mode by id; unknown ids map to [`BlendMode::Normal`].
    pub fn from_id(id: &str) -> Self {
        match id {
            "normal" | "blend" => Self::Normal,
            _ => Self::ALL
                .into_iter()
                .find(|m| m.id() == id)
                .unwrap_or(Self::Normal),
        }
    }
}

impl From<String> for BlendMode {
    fn from(s: String) -> Self {
        Self::from_id(s.trim())
    }
}

impl From<BlendMode> for String {
    fn from(m: BlendMode) -> Self {
        m.id().to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/kinds.rs"]
mod tests;
