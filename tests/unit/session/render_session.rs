use super::*;
use crate::session::host::HeadlessContainer;

fn opts() -> SessionOpts {
    SessionOpts {
        seed: Some(42),
        ..SessionOpts::default()
    }
}

fn session(width: u32) -> (Rc<HeadlessContainer>, RenderSession) {
    let host = Rc::new(HeadlessContainer::new(width, 0));
    let s = RenderSession::initialize(host.clone(), RenderParameters::default(), opts()).unwrap();
    (host, s)
}

#[test]
fn height_follows_aspect_within_bounds() {
    let o = SessionOpts::default();
    assert_eq!(o.canvas_for_width(640), Canvas { width: 640, height: 480 });
    assert_eq!(o.canvas_for_width(300), Canvas { width: 300, height: 400 });
    assert_eq!(o.canvas_for_width(1200), Canvas { width: 1200, height: 600 });
}

#[test]
fn zero_width_uses_fallback() {
    let o = SessionOpts::default();
    assert_eq!(o.canvas_for_width(0), Canvas { width: 800, height: 600 });
}

#[test]
fn oversized_width_is_clamped() {
    let c = SessionOpts::default().canvas_for_width(u32::MAX);
    assert_eq!(c.width, MAX_CANVAS_DIM);
    assert_eq!(c.height, 600);
}

#[test]
fn initialize_renders_first_frame() {
    let (host, s) = session(640);
    assert_eq!(s.canvas(), Canvas { width: 640, height: 480 });
    assert_eq!(s.listener_count(), ListenerKind::ALL.len());
    assert_eq!(host.listener_count(), ListenerKind::ALL.len());
    let frame = s.frame().unwrap();
    assert_eq!((frame.width, frame.height), (640, 480));
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(s.interaction().history().len(), 1);
}

#[test]
fn initialize_rejects_invalid_params() {
    let host = Rc::new(HeadlessContainer::new(640, 0));
    let mut params = RenderParameters::default();
    params.layers.clear();
    assert!(RenderSession::initialize(host.clone(), params, opts()).is_err());
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn fixed_seed_survives_updates() {
    let (_host, mut s) = session(400);
    s.update_params(RenderParameters::default()).unwrap();
    assert_eq!(s.seed(), 42);
}

#[test]
fn interaction_mode_disables_animation() {
    let (_host, mut s) = session(400);
    let params = RenderParameters {
        animated: true,
        ..RenderParameters::default()
    };
    s.update_params(params).unwrap();
    assert!(s.clock().is_running());

    assert!(s.set_interaction_mode(InteractionMode::Repel));
    assert!(!s.params().animated);
    assert!(!s.clock().is_running());

    assert!(!s.set_interaction_mode(InteractionMode::None));
}

#[test]
fn tick_renders_only_when_something_moves() {
    let (_host, mut s) = session(400);
    assert!(!s.tick(0.0));

    s.update_params(RenderParameters {
        animated: true,
        ..RenderParameters::default()
    })
    .unwrap();
    assert!(s.tick(16.0));
    assert_eq!(s.clock().frame_count(), 1);
}

#[test]
fn destroy_releases_everything() {
    let (host, mut s) = session(400);
    s.destroy();
    assert!(s.is_destroyed());
    assert!(s.frame().is_none());
    assert!(s.buffer_ids().is_empty());
    assert_eq!(s.listener_count(), 0);
    assert_eq!(host.listener_count(), 0);
    assert!(s.update_params(RenderParameters::default()).is_err());
    assert!(!s.tick(0.0));

    s.destroy();
    assert!(s.is_destroyed());
}
