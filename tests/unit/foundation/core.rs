use super::*;

#[test]
fn canvas_rejects_degenerate_sizes() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(MAX_CANVAS_DIM + 1, 10).is_err());
    let c = Canvas::new(40, 30).unwrap();
    assert_eq!(c.center(), Point::new(20.0, 15.0));
    assert_eq!(c.min_dim(), 30.0);
    assert_eq!(c.corner_distance(), 25.0);
    assert_eq!(c.byte_len(), 40 * 30 * 4);
}

#[test]
fn hex_forms_parse() {
    assert_eq!(Rgba8::parse_hex("#05445E").unwrap(), Rgba8::rgb(5, 68, 94));
    assert_eq!(Rgba8::parse_hex("fff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse_hex("#11223380").unwrap(),
        Rgba8::rgba(0x11, 0x22, 0x33, 0x80)
    );
    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#gggggg").is_err());
}

#[test]
fn hex_serde_uses_strings() {
    let c: Rgba8 = serde_json::from_str("\"#0f172a\"").unwrap();
    assert_eq!(c, Rgba8::rgb(15, 23, 42));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#0f172a\"");
    assert!(serde_json::from_str::<Rgba8>("\"blue\"").is_err());
}

#[test]
fn premul_and_lerp() {
    assert_eq!(Rgba8::rgba(255, 128, 0, 128).premul(), [128, 64, 0, 128]);
    let a = Rgba8::rgb(0, 0, 0);
    let b = Rgba8::rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(100, 50, 25));
}

#[test]
fn hsb_primaries() {
    assert_eq!(Rgba8::from_hsb(0.0, 100.0, 100.0), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::from_hsb(120.0, 100.0, 100.0), Rgba8::rgb(0, 255, 0));
    assert_eq!(Rgba8::from_hsb(240.0, 100.0, 100.0), Rgba8::rgb(0, 0, 255));
    assert_eq!(Rgba8::from_hsb(42.0, 0.0, 100.0), Rgba8::WHITE);
}
