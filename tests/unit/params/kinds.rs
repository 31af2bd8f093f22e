use super::*;

#[test]
fn shape_and_pattern_ids_round_trip() {
    for s in ShapeKind::ALL {
        assert_eq!(ShapeKind::from_id(s.id()), Some(s));
    }
    assert_eq!(ShapeKind::from_id("hexagon"), None);
    assert_eq!(PatternKind::from_id("random"), Some(PatternKind::Scatter));
    assert_eq!(PatternKind::from_id("noise"), None);
    let p: PatternKind = serde_json::from_str("\"random\"").unwrap();
    assert_eq!(p, PatternKind::Scatter);
}

#[test]
fn unknown_shape_and_pattern_ids_deserialize_to_unknown() {
    let s: ShapeKind = serde_json::from_str("\"blob\"").unwrap();
    assert_eq!(s, ShapeKind::Unknown);
    let s: ShapeKind = serde_json::from_str("\"hexagon\"").unwrap();
    assert_eq!(s, ShapeKind::Unknown);
    let p: PatternKind = serde_json::from_str("\"voronoi\"").unwrap();
    assert_eq!(p, PatternKind::Unknown);

    assert!(!ShapeKind::ALL.contains(&ShapeKind::Unknown));
    assert!(!PatternKind::ALL.contains(&PatternKind::Unknown));
    assert_eq!(ShapeKind::from_id("unknown"), None);
}

#[test]
fn unknown_blend_and_filter_fall_back() {
    assert_eq!(BlendMode::from_id("luminosity"), BlendMode::Normal);
    assert_eq!(BlendMode::from_id("normal"), BlendMode::Normal);
    assert_eq!(BlendMode::from_id("color-dodge"), BlendMode::ColorDodge);
    assert_eq!(FilterKind::from_id("sepia"), FilterKind::None);

    let m: BlendMode = serde_json::from_str("\"hard-light\"").unwrap();
    assert_eq!(m, BlendMode::HardLight);
    assert_eq!(
        serde_json::to_string(&BlendMode::Normal).unwrap(),
        "\"source-over\""
    );
    let f: FilterKind = serde_json::from_str("\"bogus\"").unwrap();
    assert_eq!(f, FilterKind::None);
}

#[test]
fn css_name_differs_only_for_normal() {
    assert_eq!(BlendMode::Normal.css_name(), "normal");
    assert_eq!(BlendMode::SoftLight.css_name(), "soft-light");
}
