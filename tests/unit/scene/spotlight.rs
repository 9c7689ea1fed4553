use super::*;
use serde_json::json;

#[test]
fn default_is_hidden() {
    let s = SpotlightGeometry::default();
    assert!(s.is_hidden());
    assert!(!s.reveals(Point::ZERO));
}

#[test]
fn reveals_points_inside_the_circle() {
    let s = SpotlightGeometry::new(50.0, Point::new(100.0, 100.0));
    assert!(s.reveals(Point::new(100.0, 100.0)));
    assert!(s.reveals(Point::new(130.0, 130.0)));
    assert!(!s.reveals(Point::new(140.0, 140.0)));
    assert!(!s.reveals(Point::new(0.0, 0.0)));
}

#[test]
fn sanitize_drops_garbage() {
    let s = SpotlightGeometry {
        radius: -10.0,
        center_x: f64::NAN,
        center_y: f64::INFINITY,
    }
    .sanitized();
    assert_eq!(s, SpotlightGeometry::default());

    let bad_radius = SpotlightGeometry::new(f64::NAN, Point::new(5.0, 5.0));
    assert!(bad_radius.is_hidden());
    assert!(!bad_radius.reveals(Point::new(5.0, 5.0)));
}

#[test]
fn json_accepts_camel_case() {
    let s: SpotlightGeometry =
        serde_json::from_value(json!({ "radius": 80, "centerX": 12.5, "centerY": 40 })).unwrap();
    assert_eq!(s.radius, 80.0);
    assert_eq!(s.center(), Point::new(12.5, 40.0));
}
