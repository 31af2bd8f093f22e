//! Built-in palette table, presets, and art-history themes.

use crate::foundation::core::Rgba8;
use crate::params::kinds::{BlendMode, FilterKind, PatternKind, ShapeKind};
use crate::params::model::{ColorPalette, LayerId, LayerSettings, RenderParameters};

/// The stock palette table shipped with the application.
pub fn default_palettes() -> Vec<ColorPalette> {
    vec![
        ColorPalette::from_hex("Ocean", &["#05445E", "#189AB4", "#75E6DA", "#D4F1F9"]),
        ColorPalette::from_hex("Sunset", &["#F9ED69", "#F08A5D", "#B83B5E", "#6A2C70"]),
        ColorPalette::from_hex("Forest", &["#2D6A4F", "#40916C", "#52B788", "#95D5B2"]),
        ColorPalette::from_hex("Retro", &["#FFC857", "#E9724C", "#C5283D", "#481D24"]),
        ColorPalette::from_hex("Monochrome", &["#F8F9FA", "#CED4DA", "#6C757D", "#212529"]),
        ColorPalette::from_hex("Custom", &["#6366F1", "#EC4899", "#8B5CF6", "#ffffff"]),
    ]
}

/// Named, complete parameter snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Full parameters.
    pub settings: RenderParameters,
}

/// Partial parameter overlay applied by [`apply_theme`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSettings {
    #[allow(missing_docs)]
    pub palette: Option<usize>,
    #[allow(missing_docs)]
    pub shape: Option<ShapeKind>,
    #[allow(missing_docs)]
    pub pattern: Option<PatternKind>,
    #[allow(missing_docs)]
    pub complexity: Option<u32>,
    #[allow(missing_docs)]
    pub element_size: Option<f64>,
    #[allow(missing_docs)]
    pub randomness: Option<f64>,
    #[allow(missing_docs)]
    pub animated: Option<bool>,
    #[allow(missing_docs)]
    pub use_gradient_background: Option<bool>,
    #[allow(missing_docs)]
    pub background_color: Option<Rgba8>,
    #[allow(missing_docs)]
    pub background_end_color: Option<Rgba8>,
    #[allow(missing_docs)]
    pub filter_effect: Option<FilterKind>,
    #[allow(missing_docs)]
    pub filter_intensity: Option<f64>,
}

/// Art-history style overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArtTheme {
    /// Stable id used by [`apply_theme`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Fields overridden when the theme is applied.
    pub settings: ThemeSettings,
}

struct LayerSpec {
    opacity: f64,
    blend: BlendMode,
    shape: ShapeKind,
    pattern: PatternKind,
    palette: usize,
    complexity: u32,
    size: f64,
    randomness: f64,
}

fn layer(spec: LayerSpec) -> LayerSettings {
    LayerSettings {
        id: LayerId::fresh(),
        visible: true,
        opacity: spec.opacity,
        blend_mode: spec.blend,
        shape: spec.shape,
        pattern: spec.pattern,
        palette: spec.palette,
        complexity: spec.complexity,
        element_size: spec.size,
        randomness: spec.randomness,
    }
}

fn hex(s: &str) -> Rgba8 {
    Rgba8::parse_hex(s).unwrap_or(Rgba8::BLACK)
}

/// Built-in presets, each carrying the stock palette table.
pub fn builtin_presets() -> Vec<Preset> {
    let base = RenderParameters::default();

    let waves = RenderParameters {
        palette: 2,
        custom_color: hex("#3b82f6"),
        shape: ShapeKind::Circle,
        pattern: PatternKind::Wave,
        complexity: 20,
        element_size: 40.0,
        randomness: 0.3,
        animated: true,
        animation_speed: 1.5,
        use_gradient_background: true,
        background_color: hex("#111827"),
        background_end_color: hex("#1e293b"),
        filter_effect: FilterKind::Noise,
        filter_intensity: 0.1,
        layers: vec![
            layer(LayerSpec {
                opacity: 80.0,
                blend: BlendMode::Screen,
                shape: ShapeKind::Circle,
                pattern: PatternKind::Wave,
                palette: 2,
                complexity: 20,
                size: 40.0,
                randomness: 0.3,
            }),
            layer(LayerSpec {
                opacity: 60.0,
                blend: BlendMode::Multiply,
                shape: ShapeKind::Triangle,
                pattern: PatternKind::Spiral,
                palette: 3,
                complexity: 15,
                size: 30.0,
                randomness: 0.4,
            }),
        ],
        active_layer: 0,
        ..base.clone()
    };

    let geometric = RenderParameters {
        palette: 4,
        custom_color: hex("#ec4899"),
        shape: ShapeKind::Rectangle,
        pattern: PatternKind::Grid,
        complexity: 15,
        element_size: 35.0,
        randomness: 0.5,
        animated: false,
        animation_speed: 0.0,
        use_gradient_background: false,
        background_color: hex("#f8fafc"),
        background_end_color: hex("#f8fafc"),
        filter_effect: FilterKind::None,
        filter_intensity: 0.0,
        layers: vec![layer(LayerSpec {
            opacity: 100.0,
            blend: BlendMode::Normal,
            shape: ShapeKind::Rectangle,
            pattern: PatternKind::Grid,
            palette: 4,
            complexity: 15,
            size: 35.0,
            randomness: 0.5,
        })],
        active_layer: 0,
        ..base.clone()
    };

    let neon = RenderParameters {
        palette: 1,
        custom_color: hex("#10b981"),
        shape: ShapeKind::Line,
        pattern: PatternKind::Radial,
        complexity: 25,
        element_size: 20.0,
        randomness: 0.3,
        animated: true,
        animation_speed: 0.8,
        use_gradient_background: true,
        background_color: hex("#0f172a"),
        background_end_color: hex("#1e1b4b"),
        filter_effect: FilterKind::Glitch,
        filter_intensity: 0.2,
        layers: vec![layer(LayerSpec {
            opacity: 90.0,
            blend: BlendMode::Screen,
            shape: ShapeKind::Line,
            pattern: PatternKind::Radial,
            palette: 1,
            complexity: 25,
            size: 20.0,
            randomness: 0.3,
        })],
        active_layer: 0,
        ..base
    };

    vec![
        Preset {
            id: "abstract-waves".into(),
            name: "Abstract Waves".into(),
            description: "Colorful wave patterns with smooth transitions".into(),
            settings: waves,
        },
        Preset {
            id: "geometric-playground".into(),
            name: "Geometric Playground".into(),
            description: "Sharp geometric shapes in a playful arrangement".into(),
            settings: geometric,
        },
        Preset {
            id: "neon-nights".into(),
            name: "Neon Nights".into(),
            description: "Vibrant neon colors on a dark background".into(),
            settings: neon,
        },
    ]
}

/// Built-in art themes.
pub fn art_themes() -> Vec<ArtTheme> {
    vec![
        ArtTheme {
            id: "mondrian".into(),
            name: "Mondrian".into(),
            description: "Primary colors with straight lines inspired by Piet Mondrian".into(),
            settings: ThemeSettings {
                palette: Some(0),
                shape: Some(ShapeKind::Rectangle),
                pattern: Some(PatternKind::Grid),
                complexity: Some(10),
                element_size: Some(80.0),
                randomness: Some(0.0),
                animated: Some(false),
                use_gradient_background: Some(false),
                background_color: Some(Rgba8::WHITE),
                filter_effect: Some(FilterKind::None),
                ..ThemeSettings::default()
            },
        },
        ArtTheme {
            id: "kandinsky".into(),
            name: "Kandinsky".into(),
            description: "Abstract forms and vivid colors inspired by Wassily Kandinsky".into(),
            settings: ThemeSettings {
                palette: Some(3),
                shape: Some(ShapeKind::Circle),
                pattern: Some(PatternKind::Scatter),
                complexity: Some(30),
                element_size: Some(40.0),
                randomness: Some(0.7),
                animated: Some(true),
                use_gradient_background: Some(true),
                background_color: Some(hex("#f5f5f4")),
                background_end_color: Some(hex("#fafaf9")),
                filter_effect: Some(FilterKind::None),
                ..ThemeSettings::default()
            },
        },
        ArtTheme {
            id: "pollock".into(),
            name: "Pollock".into(),
            description: "Drip-inspired pattern with chaotic arrangement".into(),
            settings: ThemeSettings {
                palette: Some(6),
                shape: Some(ShapeKind::Circle),
                pattern: Some(PatternKind::Scatter),
                complexity: Some(100),
                element_size: Some(5.0),
                randomness: Some(1.0),
                animated: Some(false),
                use_gradient_background: Some(false),
                background_color: Some(hex("#fafafa")),
                filter_effect: Some(FilterKind::Noise),
                filter_intensity: Some(0.05),
                ..ThemeSettings::default()
            },
        },
        ArtTheme {
            id: "warhol".into(),
            name: "Warhol".into(),
            description: "Bold, colorful pop art inspired by Andy Warhol".into(),
            settings: ThemeSettings {
                palette: Some(5),
                shape: Some(ShapeKind::Rectangle),
                pattern: Some(PatternKind::Grid),
                complexity: Some(16),
                element_size: Some(60.0),
                randomness: Some(0.0),
                animated: Some(false),
                use_gradient_background: Some(false),
                background_color: Some(Rgba8::WHITE),
                filter_effect: Some(FilterKind::Duotone),
                filter_intensity: Some(0.5),
                ..ThemeSettings::default()
            },
        },
    ]
}

/// Look up a built-in preset by id.
pub fn preset(id: &str) -> Option<Preset> {
    builtin_presets().into_iter().find(|p| p.id == id)
}

/// Overlay theme `theme_id` onto `current`. Unknown ids return `current` unchanged.
///
/// Themes only touch global fields; the layer list is left alone.
pub fn apply_theme(current: &RenderParameters, theme_id: &str) -> RenderParameters {
    let Some(theme) = art_themes().into_iter().find(|t| t.id == theme_id) else {
        return current.clone();
    };
    let t = theme.settings;
    let mut out = current.clone();
    if let Some(v) = t.palette {
        out.palette = v;
    }
    if let Some(v) = t.shape {
        out.shape = v;
    }
    if let Some(v) = t.pattern {
        out.pattern = v;
    }
    if let Some(v) = t.complexity {
        out.complexity = v;
    }
    if let Some(v) = t.element_size {
        out.element_size = v;
    }
    if let Some(v) = t.randomness {
        out.randomness = v;
    }
    if let Some(v) = t.animated {
        out.animated = v;
    }
    if let Some(v) = t.use_gradient_background {
        out.use_gradient_background = v;
    }
    if let Some(v) = t.background_color {
        out.background_color = v;
    }
    if let Some(v) = t.background_end_color {
        out.background_end_color = v;
    }
    if let Some(v) = t.filter_effect {
        out.filter_effect = v;
    }
    if let Some(v) = t.filter_intensity {
        out.filter_intensity = v;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/params/presets.rs"]
mod tests;
