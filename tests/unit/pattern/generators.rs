use super::*;

fn palette() -> Vec<Rgba8> {
    vec![
        Rgba8::rgb(255, 0, 0),
        Rgba8::rgb(0, 255, 0),
        Rgba8::rgb(0, 0, 255),
        Rgba8::rgb(255, 255, 0),
    ]
}

fn input(colors: &[Rgba8], count: u32, randomness: f64) -> PatternInput<'_> {
    PatternInput {
        canvas: Canvas::new(400, 300).unwrap(),
        colors,
        count,
        size: 10.0,
        randomness,
        shape: ShapeKind::Rectangle,
        offset: 0.0,
    }
}

#[test]
fn grid_color_index_is_diagonal() {
    assert_eq!(grid_color_index(0, 0, 4), 0);
    assert_eq!(grid_color_index(1, 2, 4), 3);
    assert_eq!(grid_color_index(3, 3, 4), 2);
    assert_eq!(grid_color_index(2, 2, 0), 0);
}

#[test]
fn grid_places_one_shape_per_cell_without_jitter() {
    let colors = palette();
    let cmds = generate(
        PatternKind::Grid,
        &input(&colors, 16, 0.0),
        &mut ArtRng::from_seed(1),
    );
    assert_eq!(cmds.len(), 16);
    for (n, cmd) in cmds.iter().enumerate() {
        let (col, row) = (n as u32 / 4, n as u32 % 4);
        assert_eq!(cmd.center.x, f64::from(col) * 100.0 + 50.0);
        assert_eq!(cmd.center.y, f64::from(row) * 75.0 + 37.5);
        assert_eq!(cmd.size, 10.0);
        assert_eq!(cmd.color, colors[grid_color_index(row, col, 4)]);
    }
}

#[test]
fn empty_palette_draws_nothing() {
    for kind in PatternKind::ALL {
        let cmds = generate(kind, &input(&[], 20, 0.5), &mut ArtRng::from_seed(1));
        assert!(cmds.is_empty(), "{kind:?}");
    }
}

#[test]
fn counts_are_reproducible_without_a_seed() {
    let colors = palette();
    let inp = input(&colors, 50, 0.5);
    for kind in PatternKind::ALL {
        let a = generate(kind, &inp, &mut ArtRng::from_seed(1));
        let b = generate(kind, &inp, &mut ArtRng::from_seed(2));
        assert_eq!(a.len(), b.len(), "{kind:?}");
    }
    let spiral = generate(PatternKind::Spiral, &inp, &mut ArtRng::from_seed(1));
    assert_eq!(spiral.len(), 50);
    let radial = generate(PatternKind::Radial, &inp, &mut ArtRng::from_seed(1));
    assert_eq!(radial.len(), 36);
}

#[test]
fn index_derived_colours_ignore_the_seed() {
    let colors = palette();
    let inp = input(&colors, 30, 1.0);
    for kind in [
        PatternKind::Grid,
        PatternKind::Spiral,
        PatternKind::Wave,
        PatternKind::Concentric,
        PatternKind::Radial,
    ] {
        let a: Vec<_> = generate(kind, &inp, &mut ArtRng::from_seed(5))
            .into_iter()
            .map(|c| c.color)
            .collect();
        let b: Vec<_> = generate(kind, &inp, &mut ArtRng::from_seed(6))
            .into_iter()
            .map(|c| c.color)
            .collect();
        assert_eq!(a, b, "{kind:?}");
    }
}

#[test]
fn spiral_stays_within_radius() {
    let colors = palette();
    let inp = input(&colors, 100, 0.3);
    let c = inp.canvas.center();
    for cmd in generate(PatternKind::Spiral, &inp, &mut ArtRng::from_seed(1)) {
        assert!((cmd.center - c).hypot() <= 300.0 * MAX_RADIUS_FRACTION + 1e-9);
    }
}

#[test]
fn same_seed_same_layout() {
    let colors = palette();
    let inp = input(&colors, 40, 0.8);
    let a = generate(PatternKind::Scatter, &inp, &mut ArtRng::from_seed(11));
    let b = generate(PatternKind::Scatter, &inp, &mut ArtRng::from_seed(11));
    assert_eq!(a, b);
}

#[test]
fn placements_are_capped_for_extreme_inputs() {
    let colors = palette();
    let huge = PatternInput {
        count: u32::MAX,
        ..input(&colors, 1, 0.0)
    };
    for kind in PatternKind::ALL {
        let cmds = generate(kind, &huge, &mut ArtRng::from_seed(2));
        assert!(cmds.len() <= MAX_PLACEMENTS, "{kind:?} {}", cmds.len());
    }

    let tiny = PatternInput {
        size: 1e-6,
        ..input(&colors, 500, 0.0)
    };
    let cmds = generate(PatternKind::Concentric, &tiny, &mut ArtRng::from_seed(2));
    assert_eq!(cmds.len(), MAX_PLACEMENTS);
}

#[test]
fn unknown_pattern_places_nothing() {
    let colors = palette();
    let cmds = generate(
        PatternKind::Unknown,
        &input(&colors, 16, 0.5),
        &mut ArtRng::from_seed(1),
    );
    assert!(cmds.is_empty());
}
