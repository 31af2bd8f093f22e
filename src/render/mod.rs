//! CPU rendering: layer buffers, rasterization, blend compositing.

/// Premultiplied compositing kernels per blend mode.
pub mod blend;
/// Per-layer offscreen buffers.
pub mod buffers;
/// Frame plan execution onto the main surface.
pub mod compositor;
/// Resolution of parameters into a frame plan.
pub mod plan;
/// Path rasterization through `vello_cpu`.
pub mod raster;
/// Premultiplied RGBA8 surfaces and frames.
pub mod surface;

pub use buffers::{BufferStats, LayerBufferManager};
pub use compositor::Compositor;
pub use plan::{FrameInputs, FramePlan, LayerContext, LayerOverride, LayerPlan, plan_frame};
pub use raster::Rasterizer;
pub use surface::{FrameRGBA, Surface};
