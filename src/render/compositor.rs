use crate::effects::filters::apply_filter;
use crate::foundation::error::GenartResult;
use crate::foundation::rng::ArtRng;
use crate::params::kinds::BlendMode;
use crate::params::model::Background;
use crate::render::blend::composite;
use crate::render::buffers::LayerBufferManager;
use crate::render::plan::FramePlan;
use crate::render::raster::Rasterizer;
use crate::render::surface::Surface;

/// Executes [`FramePlan`]s onto a main surface.
#[derive(Debug, Default)]
pub struct Compositor {
    raster: Rasterizer,
    overlay: Option<Surface>,
}

/// Paint the background: one flat fill, or one scanline per row for gradients.
pub fn draw_background(surface: &mut Surface, background: Background) {
    match background {
        Background::Solid(c) => surface.fill(c),
        Background::Gradient { top, bottom } => {
            let h = surface.canvas().height;
            let denom = f64::from(h.saturating_sub(1).max(1));
            for y in 0..h {
                surface.fill_row(y, top.lerp(bottom, f64::from(y) / denom));
            }
        }
    }
}

impl Compositor {
    /// Fresh compositor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `plan` onto `main`: background, layers in order, filter, then the overlay.
    ///
    /// Layers without a buffer are skipped for this frame.
    #[tracing::instrument(level = "debug", skip_all, fields(layers = plan.layers.len()))]
    pub fn execute(
        &mut self,
        plan: &FramePlan,
        buffers: &mut LayerBufferManager,
        main: &mut Surface,
    ) -> GenartResult<()> {
        draw_background(main, plan.background);

        for layer in &plan.layers {
            let Some(buf) = buffers.get_buffer_mut(&layer.id) else {
                tracing::trace!(layer = %layer.id, "no buffer; layer skipped");
                continue;
            };
            buf.clear();
            self.raster.draw(&layer.cmds, buf)?;
            composite(main.data_mut(), buf.data(), layer.opacity, layer.blend)?;
        }

        let mut rng = ArtRng::from_seed(plan.filter_seed);
        apply_filter(
            plan.filter,
            plan.intensity,
            main.data_mut(),
            plan.canvas,
            &mut rng,
        )?;

        if !plan.overlay.is_empty() {
            let canvas = plan.canvas;
            if self.overlay.as_ref().is_none_or(|s| s.canvas() != canvas) {
                self.overlay = Some(Surface::new(canvas));
            }
            let overlay = self.overlay.get_or_insert_with(|| Surface::new(canvas));
            overlay.clear();
            self.raster.draw(&plan.overlay, overlay)?;
            composite(main.data_mut(), overlay.data(), 1.0, BlendMode::Normal)?;
        }
        Ok(())
    }

    /// Drop cached scratch surfaces and the rasterizer context.
    pub fn release(&mut self) {
        self.overlay = None;
        self.raster.release();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
