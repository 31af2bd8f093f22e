//! Session lifecycle: host container wiring, sizing, and the per-canvas controller.

/// Host container seam and listener handles.
pub mod host;
/// The per-canvas render session.
pub mod render_session;

pub use host::{HeadlessContainer, HostContainer, ListenerHandle, ListenerId, ListenerKind};
pub use render_session::{RenderSession, SessionOpts};
