use super::*;

fn canvas() -> Canvas {
    Canvas::new(4, 3).unwrap()
}

#[test]
fn fill_stores_premultiplied_pixels() {
    let mut s = Surface::new(canvas());
    assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
    s.fill(Rgba8::rgba(255, 0, 0, 128));
    assert_eq!(s.pixel(3, 2), [128, 0, 0, 128]);
    assert_eq!(s.pixel(9, 9), [0, 0, 0, 0]);
    s.clear();
    assert!(s.data().iter().all(|&b| b == 0));
}

#[test]
fn fill_row_touches_one_row() {
    let mut s = Surface::new(canvas());
    s.fill_row(1, Rgba8::WHITE);
    assert_eq!(s.pixel(0, 0), [0; 4]);
    assert_eq!(s.pixel(2, 1), [255; 4]);
    assert_eq!(s.pixel(0, 2), [0; 4]);
}

#[test]
fn straight_conversion_undoes_premultiply() {
    let mut s = Surface::new(canvas());
    s.fill(Rgba8::rgba(200, 100, 0, 128));
    let f = s.to_frame();
    assert!(f.premultiplied);
    let straight = f.to_straight();
    let [r, g, b, a] = straight.pixel(1, 1);
    assert_eq!(a, 128);
    assert!((i32::from(r) - 200).abs() <= 1);
    assert!((i32::from(g) - 100).abs() <= 1);
    assert_eq!(b, 0);
}
