use super::*;

#[test]
fn keeps_the_most_recent_samples_newest_first() {
    let mut h = PointerHistory::default();
    h.seed(Point::new(-1.0, -1.0));
    for i in 0..25 {
        assert!(h.record(Point::new(f64::from(i), 0.0), f64::from(i) * 31.0));
    }
    assert_eq!(h.len(), 20);
    let xs: Vec<f64> = h.iter().map(|p| p.x).collect();
    let want: Vec<f64> = (5..25).rev().map(f64::from).collect();
    assert_eq!(xs, want);
}

#[test]
fn throttle_is_strict() {
    let mut h = PointerHistory::default();
    assert!(h.record(Point::ZERO, 1000.0));
    assert!(!h.record(Point::new(1.0, 0.0), 1030.0));
    assert!(h.record(Point::new(2.0, 0.0), 1030.5));
    assert_eq!(h.len(), 2);
    assert_eq!(h.get(0), Some(Point::new(2.0, 0.0)));
}

#[test]
fn seed_bypasses_throttle_and_clear_resets() {
    let mut h = PointerHistory::new(3, 30.0);
    h.seed(Point::ZERO);
    assert!(h.record(Point::new(1.0, 1.0), 0.0));
    h.seed(Point::new(2.0, 2.0));
    assert_eq!(h.len(), 3);
    h.clear();
    assert!(h.is_empty());
    assert!(h.record(Point::ZERO, 0.0));
}
