use crate::foundation::error::GenartResult;
use crate::geometry::shapes::DrawCmd;
use crate::render::surface::Surface;

/// Vector fill rasterizer backed by a reusable `vello_cpu` context.
#[derive(Default)]
pub struct Rasterizer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl Rasterizer {
    /// Rasterizer with no context allocated yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> GenartResult<R>,
    ) -> GenartResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Fill `cmds` in order onto `dst`. `dst` is expected to be cleared.
    pub fn draw(&mut self, cmds: &[DrawCmd], dst: &mut Surface) -> GenartResult<()> {
        if cmds.is_empty() {
            return Ok(());
        }
        let canvas = dst.canvas();
        self.with_ctx_mut(canvas.width as u16, canvas.height as u16, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            for cmd in cmds {
                let c = cmd.color();
                if c.a == 0 {
                    continue;
                }
                let path = bezpath_to_cpu(&cmd.path());
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
                ctx.fill_path(&path);
            }
            ctx.flush();
            ctx.render_to_pixmap(dst.pixmap_mut());
            Ok(())
        })
    }

    /// Drop the cached context.
    pub fn release(&mut self) {
        self.ctx = None;
    }
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;
    use vello_cpu::kurbo::Point as P;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(P::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(P::new(p.x, p.y)),
            PathEl::QuadTo(a, b) => out.quad_to(P::new(a.x, a.y), P::new(b.x, b.y)),
            PathEl::CurveTo(a, b, c) => {
                out.curve_to(P::new(a.x, a.y), P::new(b.x, b.y), P::new(c.x, c.y))
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
