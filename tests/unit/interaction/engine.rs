use super::*;
use crate::params::kinds::ShapeKind;
use crate::params::model::RenderParameters;

fn canvas() -> Canvas {
    Canvas::new(400, 300).unwrap()
}

fn colors() -> Vec<Rgba8> {
    vec![Rgba8::rgb(1, 0, 0), Rgba8::rgb(2, 0, 0), Rgba8::rgb(3, 0, 0)]
}

fn cx(colors: &[Rgba8]) -> LayerContext<'_> {
    LayerContext {
        canvas: canvas(),
        colors,
        offset: 0.0,
        layer_seed: 42,
    }
}

fn layer(pattern: PatternKind, complexity: u32) -> LayerSettings {
    let mut l = RenderParameters::default().layers[0].clone();
    l.pattern = pattern;
    l.complexity = complexity;
    l.shape = ShapeKind::Circle;
    l.element_size = 10.0;
    l
}

fn engaged(mode: InteractionMode, at: Point) -> InteractionEngine {
    let mut e = InteractionEngine::new(PointerHistory::default(), 1);
    e.seed_pointer(canvas().center());
    e.set_mode(mode);
    e.handle(&PointerEvent::new(PointerKind::MouseMove, at.x, at.y, 100.0));
    e
}

#[test]
fn mode_ids_round_trip() {
    for m in InteractionMode::ALL {
        assert_eq!(InteractionMode::from_id(m.id()), Some(m));
    }
    assert_eq!(InteractionMode::from_id("spin"), None);
}

#[test]
fn params_default_and_keep_extras() {
    let p: InteractionParams =
        serde_json::from_str(r##"{"strength": 80, "trailColor": "#fff"}"##).unwrap();
    assert_eq!(p.strength, 80.0);
    assert_eq!(p.radius, 150.0);
    assert_eq!(p.extras["trailColor"], serde_json::json!("#fff"));
}

#[test]
fn not_engaged_means_no_override() {
    let mut e = InteractionEngine::new(PointerHistory::default(), 1);
    let c = colors();
    let l = layer(PatternKind::Grid, 16);
    assert!(e.override_layer(&l, &cx(&c), &mut ArtRng::from_seed(0)).is_none());
    e.set_mode(InteractionMode::Attract);
    assert!(e.override_layer(&l, &cx(&c), &mut ArtRng::from_seed(0)).is_none());
    e.handle(&PointerEvent::new(PointerKind::MouseMove, 10.0, 10.0, 0.0));
    assert!(e.is_engaged());
    e.handle(&PointerEvent::new(PointerKind::MouseLeave, 10.0, 10.0, 5.0));
    assert!(!e.is_engaged());
}

#[test]
fn follow_trails_history_with_duplicate_indices() {
    let e = engaged(InteractionMode::Follow, Point::new(10.0, 10.0));
    let c = colors();
    let cmds = e
        .override_layer(&layer(PatternKind::Scatter, 20), &cx(&c), &mut ArtRng::from_seed(0))
        .unwrap();
    assert_eq!(cmds.len(), 10);
    // delay 5 over 10 elements: indices 0,0,1,1,...; history holds [pointer, center].
    let newest = Point::new(10.0, 10.0);
    let base0 = canvas().center() + Vec2::new(90.0, 0.0);
    assert_eq!(cmds[0].center, base0.lerp(newest, 0.5));
    assert_eq!(cmds[0].size, 12.0);
    assert!((cmds[2].size - 8.0).abs() < 1e-9);
    assert_eq!(cmds[1].color, c[1]);
}

#[test]
fn repel_pushes_nearby_elements_outward() {
    let c = colors();
    let center = canvas().center();
    let base0 = center + Vec2::new(120.0, 0.0);
    let e = engaged(InteractionMode::Repel, base0 - Vec2::new(10.0, 0.0));
    let cmds = e
        .override_layer(&layer(PatternKind::Scatter, 7), &cx(&c), &mut ArtRng::from_seed(0))
        .unwrap();
    assert_eq!(cmds.len(), 4);
    assert!(cmds[0].center.x > base0.x);
    assert_eq!(cmds[0].size, 15.0);
}

#[test]
fn attract_pulls_and_grows_near_pointer() {
    let c = colors();
    let e = engaged(InteractionMode::Attract, Point::new(60.0, 40.0));
    let cmds = e
        .override_layer(&layer(PatternKind::Wave, 16), &cx(&c), &mut ArtRng::from_seed(0))
        .unwrap();
    assert_eq!(cmds.len(), 16);
    let first = &cmds[0];
    assert!(first.center.x < 60.0 && first.center.x > 50.0);
    assert!(first.size < 10.0 && first.size > 5.0);
    let far = cmds.last().unwrap();
    assert_eq!(far.center, Point::new(350.0, 262.5));
    assert_eq!(far.size, 10.0);
}

#[test]
fn expand_handles_grid_and_scatter_only() {
    let c = colors();
    let e = engaged(InteractionMode::Expand, Point::new(50.0, 37.5));
    let grid = e
        .override_layer(&layer(PatternKind::Grid, 16), &cx(&c), &mut ArtRng::from_seed(0))
        .unwrap();
    assert_eq!(grid[0].size, 10.0 * (1.0 + 0.5 * 3.0));

    let scatter_a = e
        .override_layer(&layer(PatternKind::Scatter, 9), &cx(&c), &mut ArtRng::from_seed(0))
        .unwrap();
    let scatter_b = e
        .override_layer(&layer(PatternKind::Scatter, 9), &cx(&c), &mut ArtRng::from_seed(0))
        .unwrap();
    assert_eq!(scatter_a, scatter_b);
    assert!(scatter_a.iter().all(|s| s.size <= 40.0));

    assert!(
        e.override_layer(&layer(PatternKind::Spiral, 9), &cx(&c), &mut ArtRng::from_seed(0))
            .is_none()
    );
}

#[test]
fn draw_strokes_fade_and_prune() {
    let mut e = InteractionEngine::new(PointerHistory::default(), 3);
    e.set_mode(InteractionMode::Draw);
    e.set_params(InteractionParams {
        fade_speed: 1000.0,
        ..InteractionParams::default()
    });
    e.handle(&PointerEvent::new(PointerKind::MouseDown, 5.0, 5.0, 0.0));
    e.handle(&PointerEvent::new(PointerKind::MouseMove, 15.0, 5.0, 40.0));
    e.handle(&PointerEvent::new(PointerKind::MouseUp, 15.0, 5.0, 50.0));
    e.handle(&PointerEvent::new(PointerKind::MouseMove, 25.0, 5.0, 90.0));
    assert_eq!(e.strokes().len(), 1);
    assert_eq!(e.strokes()[0].points.len(), 2);
    let w = e.strokes()[0].width;
    assert!((5.0..15.0).contains(&w));

    let first = e.stroke_frame();
    assert_eq!(first.len(), 1);
    assert!(matches!(&first[0], DrawCmd::Polyline { color, .. } if color.a == 255));
    assert_eq!(e.strokes()[0].alpha, 155.0);
    e.stroke_frame();
    e.stroke_frame();
    assert!(e.strokes().is_empty());
}

#[test]
fn stroke_cmds_leave_alpha_untouched() {
    let mut e = InteractionEngine::new(PointerHistory::default(), 3);
    e.handle(&PointerEvent::new(PointerKind::MouseDown, 5.0, 5.0, 0.0));
    e.handle(&PointerEvent::new(PointerKind::MouseMove, 15.0, 5.0, 40.0));
    assert!(e.stroke_cmds().is_empty());

    e.set_mode(InteractionMode::Draw);
    e.handle(&PointerEvent::new(PointerKind::MouseDown, 5.0, 5.0, 100.0));
    e.handle(&PointerEvent::new(PointerKind::MouseMove, 15.0, 5.0, 140.0));
    assert_eq!(e.stroke_cmds().len(), 1);
    assert_eq!(e.stroke_cmds(), e.stroke_cmds());
    assert_eq!(e.strokes()[0].alpha, 255.0);
}

#[test]
fn leaving_draw_mode_discards_strokes() {
    let mut e = InteractionEngine::new(PointerHistory::default(), 3);
    e.set_mode(InteractionMode::Draw);
    e.handle(&PointerEvent::new(PointerKind::TouchStart, 5.0, 5.0, 0.0));
    e.handle(&PointerEvent::new(PointerKind::TouchMove, 9.0, 5.0, 40.0));
    assert_eq!(e.strokes()[0].points.len(), 2);
    e.set_mode(InteractionMode::Follow);
    assert!(e.strokes().is_empty());
}

#[test]
fn touch_end_releases_after_delay() {
    let mut e = InteractionEngine::new(PointerHistory::default(), 3);
    e.set_mode(InteractionMode::Repel);
    e.handle(&PointerEvent::new(PointerKind::TouchStart, 5.0, 5.0, 0.0));
    e.handle(&PointerEvent::new(PointerKind::TouchEnd, 5.0, 5.0, 10.0));
    e.poll(60.0);
    assert!(e.is_engaged());
    e.poll(110.0);
    assert!(!e.is_engaged());

    e.handle(&PointerEvent::new(PointerKind::TouchStart, 5.0, 5.0, 200.0));
    e.handle(&PointerEvent::new(PointerKind::TouchEnd, 5.0, 5.0, 210.0));
    e.handle(&PointerEvent::new(PointerKind::TouchStart, 5.0, 5.0, 250.0));
    e.poll(400.0);
    assert!(e.is_engaged());
}
