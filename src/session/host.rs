use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

pub use crate::interaction::engine::PointerEvent;
use crate::interaction::engine::PointerKind;
use crate::session::render_session::RenderSession;

/// Token identifying one registered listener on a [`HostContainer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// What a listener subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Container size changes.
    Resize,
    /// One kind of pointer or touch input on the canvas.
    Pointer(PointerKind),
}

impl ListenerKind {
    /// Every subscription a session makes on initialize.
    pub const ALL: [ListenerKind; 8] = [
        ListenerKind::Resize,
        ListenerKind::Pointer(PointerKind::MouseDown),
        ListenerKind::Pointer(PointerKind::MouseMove),
        ListenerKind::Pointer(PointerKind::MouseUp),
        ListenerKind::Pointer(PointerKind::MouseLeave),
        ListenerKind::Pointer(PointerKind::TouchStart),
        ListenerKind::Pointer(PointerKind::TouchMove),
        ListenerKind::Pointer(PointerKind::TouchEnd),
    ];
}

/// The element a session's canvas is mounted in.
///
/// Implementations use interior mutability: a session holds the container behind an `Rc` and
/// registers listeners through `&self`.
pub trait HostContainer {
    /// Current pixel size `(width, height)`. A zero width means layout has not happened yet.
    fn measure(&self) -> (u32, u32);

    /// Register interest in `kind`.
    fn add_listener(&self, kind: ListenerKind) -> ListenerId;

    /// Remove a listener previously returned by [`HostContainer::add_listener`].
    fn remove_listener(&self, id: ListenerId);
}

/// A registered listener. Dropping the handle detaches it.
pub struct ListenerHandle {
    host: Rc<dyn HostContainer>,
    id: ListenerId,
    kind: ListenerKind,
}

impl ListenerHandle {
    /// Register `kind` on `host` and return the owning handle.
    pub fn attach(host: Rc<dyn HostContainer>, kind: ListenerKind) -> Self {
        let id = host.add_listener(kind);
        Self { host, id, kind }
    }

    /// Registration token.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Subscribed event kind.
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.host.remove_listener(self.id);
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

/// In-process container for the CLI and tests.
///
/// Events are only forwarded to a session while a matching listener is attached, so a
/// destroyed session stops receiving input exactly as a detached canvas would.
#[derive(Debug, Default)]
pub struct HeadlessContainer {
    size: Cell<(u32, u32)>,
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<ListenerId, ListenerKind>>,
}

impl HeadlessContainer {
    /// Container reporting `width` x `height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Cell::new((width, height)),
            ..Self::default()
        }
    }

    /// Change the reported size without notifying anyone.
    pub fn set_size(&self, width: u32, height: u32) {
        self.size.set((width, height));
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Whether some listener for `kind` is attached.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.borrow().values().any(|k| *k == kind)
    }

    /// Deliver `ev` to `session` if a listener for its kind is attached.
    pub fn dispatch_pointer(&self, session: &mut RenderSession, ev: PointerEvent) -> bool {
        if !self.is_listening(ListenerKind::Pointer(ev.kind)) {
            return false;
        }
        session.handle_pointer(&ev);
        true
    }

    /// Change size and notify `session` if it observes resizes.
    pub fn resize(&self, session: &mut RenderSession, width: u32, height: u32) -> bool {
        self.set_size(width, height);
        if !self.is_listening(ListenerKind::Resize) {
            return false;
        }
        session.resize();
        true
    }
}

impl HostContainer for HeadlessContainer {
    fn measure(&self) -> (u32, u32) {
        self.size.get()
    }

    fn add_listener(&self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, kind);
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(&id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/host.rs"]
mod tests;
