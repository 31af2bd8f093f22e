use std::collections::BTreeSet;
use std::rc::Rc;

use crate::animation::clock::{AnimationClock, ClockState};
use crate::export::artwork::{ImageFormat, SavedArtwork};
use crate::export::{png, svg};
use crate::foundation::core::{Canvas, MAX_CANVAS_DIM};
use crate::foundation::error::{GenartError, GenartResult};
use crate::foundation::rng::ArtRng;
use crate::interaction::engine::{
    InteractionEngine, InteractionMode, InteractionParams, PointerEvent,
};
use crate::interaction::history::{DEFAULT_HISTORY_CAPACITY, DEFAULT_THROTTLE_MS, PointerHistory};
use crate::params::model::{LayerId, RenderParameters};
use crate::render::{
    BufferStats, Compositor, FrameInputs, FramePlan, FrameRGBA, LayerBufferManager,
    LayerOverride, Surface, plan_frame,
};
use crate::session::host::{HostContainer, ListenerHandle, ListenerKind};
use crate::share::backend::{NewArtwork, ShareBackend};

/// Options controlling canvas sizing, seeding, and pointer history of a [`RenderSession`].
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOpts {
    /// Fixed seed for every render. `None` draws a fresh seed on each parameter update.
    pub seed: Option<u64>,
    /// Pointer trail length.
    pub history_capacity: usize,
    /// Minimum spacing between recorded trail samples, in milliseconds.
    pub history_throttle_ms: f64,
    /// Canvas size used when the container measures zero width.
    pub fallback_size: (u32, u32),
    /// Lower bound for the derived canvas height.
    pub min_height: u32,
    /// Upper bound for the derived canvas height.
    pub max_height: u32,
    /// Height-to-width ratio applied before clamping.
    pub aspect: f64,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_throttle_ms: DEFAULT_THROTTLE_MS,
            fallback_size: (800, 600),
            min_height: 400,
            max_height: 600,
            aspect: 0.75,
        }
    }
}

impl SessionOpts {
    /// Canvas for a container `width` pixels wide.
    pub fn canvas_for_width(&self, width: u32) -> Canvas {
        if width == 0 {
            let (w, h) = self.fallback_size;
            tracing::warn!(
                fallback_width = w,
                fallback_height = h,
                "container has zero width; using fallback canvas size"
            );
            return clamped_canvas(w, h);
        }
        let aspect = if self.aspect.is_finite() && self.aspect > 0.0 {
            self.aspect
        } else {
            0.75
        };
        let height = (f64::from(width) * aspect).round() as u32;
        let height = height.max(self.min_height).min(self.max_height);
        clamped_canvas(width, height)
    }
}

fn clamped_canvas(width: u32, height: u32) -> Canvas {
    Canvas {
        width: width.clamp(1, MAX_CANVAS_DIM),
        height: height.clamp(1, MAX_CANVAS_DIM),
    }
}

/// One canvas and everything that draws into it.
///
/// Owns the layer buffers, the compositor, the animation clock, and the interaction engine.
/// Rendering failures are logged and never returned; after [`RenderSession::destroy`] every
/// input is ignored and [`RenderSession::frame`] yields `None`.
pub struct RenderSession {
    opts: SessionOpts,
    host: Rc<dyn HostContainer>,
    listeners: Vec<ListenerHandle>,
    canvas: Canvas,
    params: RenderParameters,
    seed: u64,
    buffers: LayerBufferManager,
    compositor: Compositor,
    main: Option<Surface>,
    clock: AnimationClock,
    engine: InteractionEngine,
}

impl RenderSession {
    /// Mount a session on `host`: size the canvas, attach listeners, allocate buffers, and
    /// render the first frame.
    pub fn initialize(
        host: Rc<dyn HostContainer>,
        params: RenderParameters,
        opts: SessionOpts,
    ) -> GenartResult<Self> {
        params.validate()?;

        let (width, _) = host.measure();
        let canvas = opts.canvas_for_width(width);
        let seed = opts.seed.unwrap_or_else(ArtRng::entropy_seed);

        let listeners = ListenerKind::ALL
            .iter()
            .map(|&kind| ListenerHandle::attach(Rc::clone(&host), kind))
            .collect::<Vec<_>>();

        let history = PointerHistory::new(opts.history_capacity, opts.history_throttle_ms);
        let mut engine = InteractionEngine::new(history, seed);
        engine.seed_pointer(canvas.center());

        let mut buffers = LayerBufferManager::new();
        buffers.create_buffers(&params.layers, canvas);

        let mut clock = AnimationClock::new();
        clock.set_animated(params.animated, params.animation_speed);

        tracing::info!(
            width = canvas.width,
            height = canvas.height,
            layers = params.layers.len(),
            listeners = listeners.len(),
            animated = params.animated,
            "render session initialized"
        );

        let mut session = Self {
            opts,
            host,
            listeners,
            canvas,
            params,
            seed,
            buffers,
            compositor: Compositor::new(),
            main: Some(Surface::new(canvas)),
            clock,
            engine,
        };
        session.render();
        Ok(session)
    }

    /// Replace the parameter snapshot and re-render.
    ///
    /// Buffers are reallocated only when the layer id set changed. The clock follows the
    /// animated flag.
    pub fn update_params(&mut self, params: RenderParameters) -> GenartResult<()> {
        if self.is_destroyed() {
            return Err(GenartError::validation("render session has been destroyed"));
        }
        params.validate()?;

        if self.buffers.sync(&params.layers, self.canvas) {
            tracing::debug!(layers = params.layers.len(), "layer buffers reallocated");
        }
        if self.opts.seed.is_none() {
            self.seed = ArtRng::entropy_seed();
        }
        match self.clock.set_animated(params.animated, params.animation_speed) {
            Some(ClockState::Running) => tracing::info!("animation started"),
            Some(ClockState::Idle) => tracing::info!("animation stopped"),
            None => {}
        }
        self.params = params;
        self.render();
        Ok(())
    }

    /// Re-measure the host and reallocate canvas and buffers from scratch.
    pub fn resize(&mut self) {
        if self.is_destroyed() {
            return;
        }
        let (width, _) = self.host.measure();
        let canvas = self.opts.canvas_for_width(width);
        tracing::info!(width = canvas.width, height = canvas.height, "canvas resized");
        self.canvas = canvas;
        self.buffers.create_buffers(&self.params.layers, canvas);
        self.main = Some(Surface::new(canvas));
        self.render();
    }

    /// Host frame callback. Returns whether a frame was rendered.
    ///
    /// Frames are produced while the clock runs or an interaction mode is engaged.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.engine.poll(now_ms);
        let advanced = self.clock.tick().is_some();
        if advanced || self.engine.is_engaged() {
            self.render();
            return true;
        }
        false
    }

    /// Feed one pointer event. Ignored once destroyed.
    pub fn handle_pointer(&mut self, ev: &PointerEvent) {
        if self.is_destroyed() {
            return;
        }
        self.engine.handle(ev);
    }

    /// Switch interaction mode and re-render.
    ///
    /// Any mode other than `none` turns animation off. Returns whether that happened.
    pub fn set_interaction_mode(&mut self, mode: InteractionMode) -> bool {
        if self.is_destroyed() {
            return false;
        }
        let prev = self.engine.set_mode(mode);
        tracing::info!(from = prev.id(), to = mode.id(), "interaction mode changed");

        let mut disabled = false;
        if mode != InteractionMode::None && self.params.animated {
            self.params = RenderParameters {
                animated: false,
                ..self.params.clone()
            };
            self.clock.stop();
            tracing::info!(mode = mode.id(), "animation disabled by interaction mode");
            disabled = true;
        }
        self.render();
        disabled
    }

    /// Replace interaction tuning.
    pub fn set_interaction_params(&mut self, params: InteractionParams) {
        self.engine.set_params(params);
    }

    /// Copy of the last rendered frame.
    pub fn frame(&self) -> Option<FrameRGBA> {
        self.main.as_ref().map(Surface::to_frame)
    }

    /// Plan of the current frame without rendering it. Live draw strokes are carried in the
    /// overlay at their current alpha.
    pub fn plan(&self) -> FramePlan {
        let inputs = FrameInputs {
            canvas: self.canvas,
            seed: self.seed,
            offset: self.clock.offset(),
            frame_index: self.clock.frame_count(),
        };
        let interaction = self
            .engine
            .is_engaged()
            .then_some(&self.engine as &dyn LayerOverride);
        let mut plan = plan_frame(&self.params, &inputs, interaction);
        plan.overlay = self.engine.stroke_cmds();
        plan
    }

    /// Encode the current artwork for the gallery.
    pub fn export(&self, format: ImageFormat, now_ms: u64) -> GenartResult<SavedArtwork> {
        let image = match format {
            ImageFormat::Png => {
                let frame = self
                    .frame()
                    .ok_or_else(|| GenartError::render("render session has no frame"))?;
                png::encode_data_url(&frame)?
            }
            ImageFormat::Svg => svg::encode_data_url(&self.plan()),
        };
        Ok(SavedArtwork {
            image,
            settings: self.params.clone(),
            created_at_ms: now_ms,
            format,
        })
    }

    /// Publish the current artwork to `backend` and return its id.
    pub fn share(&self, backend: &mut dyn ShareBackend, now_ms: u64) -> GenartResult<u64> {
        let art = self.export(ImageFormat::Png, now_ms)?;
        let record = NewArtwork {
            image_url: art.image,
            settings: art.settings,
            created_at: now_ms,
        };
        backend.create(record).inspect_err(|err| {
            tracing::warn!(error = %err, "share failed");
        })
    }

    /// Stop animation, release buffers, detach listeners, and drop the canvas.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.clock.stop();
        self.buffers.release_all();
        self.compositor.release();
        self.listeners.clear();
        self.engine.reset();
        self.main = None;
        tracing::info!("render session destroyed");
    }

    /// Whether [`RenderSession::destroy`] has run.
    pub fn is_destroyed(&self) -> bool {
        self.main.is_none()
    }

    /// Current parameter snapshot.
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    /// Current canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Seed used by the last render.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ids that currently own a buffer.
    pub fn buffer_ids(&self) -> BTreeSet<LayerId> {
        self.buffers.ids()
    }

    /// Buffer allocation counters.
    pub fn buffer_stats(&self) -> BufferStats {
        self.buffers.stats()
    }

    /// Listeners this session holds on its container.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Interaction state.
    pub fn interaction(&self) -> &InteractionEngine {
        &self.engine
    }

    /// Animation clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn render(&mut self) {
        if self.main.is_none() {
            return;
        }
        let mut plan = self.plan();
        plan.overlay = self.engine.stroke_frame();
        let Some(main) = self.main.as_mut() else {
            return;
        };
        if let Err(err) = self.compositor.execute(&plan, &mut self.buffers, main) {
            tracing::error!(error = %err, "frame render failed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
