use super::*;

fn gradient_frame(w: u32, h: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(x * 40) as u8, (y * 40) as u8, 128, 255]);
        }
    }
    data
}

fn at(data: &[u8], w: u32, x: u32, y: u32) -> [u8; 4] {
    let i = px_index(w, x, y);
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

#[test]
fn pixelate_samples_block_centers() {
    let src = gradient_frame(4, 4);
    let mut data = src.clone();
    pixelate(&mut data, 4, 4, 2);
    for y in 0..4 {
        for x in 0..4 {
            let (bx, by) = (x / 2 * 2, y / 2 * 2);
            assert_eq!(at(&data, 4, x, y), at(&src, 4, bx + 1, by + 1), "({x},{y})");
        }
    }
}

#[test]
fn pixel_block_has_a_floor_of_two() {
    assert_eq!(pixel_block(0.0), 2);
    assert_eq!(pixel_block(0.5), 10);
    assert_eq!(pixel_block(1.0), 20);
}

#[test]
fn vignette_zero_intensity_is_noop() {
    let src = gradient_frame(6, 6);
    let mut data = src.clone();
    vignette(&mut data, 6, 6, 0.0);
    assert_eq!(data, src);
}

#[test]
fn vignette_keeps_center_and_darkens_corners() {
    for intensity in [0.2, 0.7, 1.0] {
        let src = gradient_frame(6, 6);
        let mut data = src.clone();
        vignette(&mut data, 6, 6, intensity);
        assert_eq!(at(&data, 6, 3, 3), at(&src, 6, 3, 3));
        assert_eq!(at(&data, 6, 0, 0)[2], 0);
        assert_eq!(at(&data, 6, 0, 0)[3], 255);
    }
}

#[test]
fn duotone_maps_extremes_to_ramp_ends() {
    let mut data = vec![0, 0, 0, 255, 255, 255, 255, 255];
    duotone(&mut data, 1.0);
    assert_eq!(&data[..3], &DUOTONE_DARK);
    assert_eq!(&data[4..7], &DUOTONE_LIGHT);
    let mut untouched = vec![9, 9, 9, 255];
    duotone(&mut untouched, 0.0);
    assert_eq!(untouched, vec![9, 9, 9, 255]);
}

#[test]
fn noise_respects_bounds() {
    let src = gradient_frame(8, 8);
    let mut data = src.clone();
    noise(&mut data, 1.0, &mut ArtRng::from_seed(3));
    let mut changed = 0;
    for (a, b) in data.chunks_exact(4).zip(src.chunks_exact(4)) {
        assert_eq!(a[3], b[3]);
        for c in 0..3 {
            assert!((i32::from(a[c]) - i32::from(b[c])).abs() <= 50);
        }
        changed += usize::from(a != b);
    }
    assert!(changed > 0 && changed < 64);
}

#[test]
fn glitch_is_seeded_and_preserves_alpha() {
    let src = gradient_frame(16, 16);
    let mut a = src.clone();
    let mut b = src.clone();
    glitch(&mut a, 16, 16, 0.8, &mut ArtRng::from_seed(1));
    glitch(&mut b, 16, 16, 0.8, &mut ArtRng::from_seed(1));
    assert_eq!(a, b);
    assert!(a.chunks_exact(4).all(|p| p[3] == 255));
    let mut none = src.clone();
    glitch(&mut none, 16, 16, 0.0, &mut ArtRng::from_seed(1));
    assert_eq!(none, src);
}

#[test]
fn none_filter_is_identity() {
    let src = gradient_frame(5, 5);
    let mut data = src.clone();
    apply_filter(
        FilterKind::None,
        1.0,
        &mut data,
        Canvas::new(5, 5).unwrap(),
        &mut ArtRng::from_seed(0),
    )
    .unwrap();
    assert_eq!(data, src);
}
