//! Copy-on-write edits of the layer list and palette table.
//!
//! Every operation takes the current snapshot by reference and returns a new one; the input is
//! never mutated. `active_layer` is kept valid by each operation.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{GenartError, GenartResult};
use crate::params::kinds::{BlendMode, PatternKind, ShapeKind};
use crate::params::model::{ColorPalette, LayerId, LayerSettings, RenderParameters};

fn check_index(params: &RenderParameters, index: usize) -> GenartResult<()> {
    if index >= params.layers.len() {
        return Err(GenartError::validation(format!(
            "layer index {index} is out of range for {} layers",
            params.layers.len()
        )));
    }
    Ok(())
}

/// Append a fresh layer and make it active.
pub fn add_layer(params: &RenderParameters) -> RenderParameters {
    let mut out = params.clone();
    out.layers.push(LayerSettings {
        id: LayerId::fresh(),
        visible: true,
        opacity: 100.0,
        blend_mode: BlendMode::Normal,
        shape: ShapeKind::Circle,
        pattern: PatternKind::Scatter,
        palette: params.palette,
        complexity: 50,
        element_size: 20.0,
        randomness: 0.5,
    });
    out.active_layer = out.layers.len() - 1;
    out
}

/// Insert a copy of layer `index` (with a new id) right after it and make the copy active.
pub fn duplicate_layer(params: &RenderParameters, index: usize) -> GenartResult<RenderParameters> {
    check_index(params, index)?;
    let mut out = params.clone();
    let copy = LayerSettings {
        id: LayerId::fresh(),
        ..params.layers[index].clone()
    };
    out.layers.insert(index + 1, copy);
    out.active_layer = index + 1;
    Ok(out)
}

/// Remove layer `index`. Removing the only layer is rejected.
pub fn delete_layer(params: &RenderParameters, index: usize) -> GenartResult<RenderParameters> {
    if params.layers.len() <= 1 {
        return Err(GenartError::validation(
            "cannot delete the last remaining layer",
        ));
    }
    check_index(params, index)?;
    let mut out = params.clone();
    out.layers.remove(index);
    if out.active_layer >= out.layers.len() {
        out.active_layer = out.layers.len() - 1;
    }
    Ok(out)
}

/// Move layer `from` to position `to`. The active selection follows the layer it pointed at.
pub fn move_layer(
    params: &RenderParameters,
    from: usize,
    to: usize,
) -> GenartResult<RenderParameters> {
    check_index(params, from)?;
    check_index(params, to)?;
    let active_id = params.active().id.clone();
    let mut out = params.clone();
    let layer = out.layers.remove(from);
    out.layers.insert(to, layer);
    out.active_layer = out
        .layers
        .iter()
        .position(|l| l.id == active_id)
        .unwrap_or(0);
    Ok(out)
}

/// Flip the visibility of layer `index`.
pub fn toggle_layer_visibility(
    params: &RenderParameters,
    index: usize,
) -> GenartResult<RenderParameters> {
    check_index(params, index)?;
    let mut out = params.clone();
    out.layers[index].visible = !out.layers[index].visible;
    Ok(out)
}

/// `[base, +60 per channel, -60 per channel, channel inverse]`, all opaque.
pub fn custom_palette_colors(base: Rgba8) -> [Rgba8; 4] {
    let shift = |c: u8, d: i16| (i16::from(c) + d).clamp(0, 255) as u8;
    [
        base.with_alpha(255),
        Rgba8::rgb(shift(base.r, 60), shift(base.g, 60), shift(base.b, 60)),
        Rgba8::rgb(shift(base.r, -60), shift(base.g, -60), shift(base.b, -60)),
        Rgba8::rgb(255 - base.r, 255 - base.g, 255 - base.b),
    ]
}

/// Rebuild the last palette (the custom slot) from `custom_color` and select it.
///
/// An empty palette table gains a new "Custom" entry.
pub fn custom_palette(params: &RenderParameters) -> RenderParameters {
    let mut out = params.clone();
    let colors = custom_palette_colors(params.custom_color).to_vec();
    match out.color_palettes.last_mut() {
        Some(last) => last.colors = colors,
        None => out.color_palettes.push(ColorPalette {
            name: "Custom".to_string(),
            colors,
        }),
    }
    out.palette = out.color_palettes.len() - 1;
    out
}

#[cfg(test)]
#[path = "../../tests/unit/params/edit.rs"]
mod tests;
