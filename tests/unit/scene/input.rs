use super::*;
use crate::scene::config::Motion;

#[test]
fn empty_document_uses_defaults() {
    let input = BackdropInput::from_json_str("{}").unwrap();
    assert_eq!(input, BackdropInput::default());
    assert_eq!(input.viewport, Viewport::default());
    assert!(input.spotlight.is_hidden());
}

#[test]
fn parses_full_document() {
    let input = BackdropInput::from_json_str(
        r##"{
            "patternText": "@mimo",
            "config": { "overlayOpacity": 0.4, "motion": "none" },
            "spotlight": { "radius": 120, "centerX": 300, "centerY": 200 },
            "viewport": { "width": 800, "height": 600 },
            "palette": { "paper": "#101010" }
        }"##,
    )
    .unwrap();
    assert_eq!(input.text.as_deref(), Some("@mimo"));
    assert_eq!(input.config.overlay_opacity, Some(0.4));
    assert_eq!(input.config.motion, Some(Motion::None));
    assert_eq!(input.spotlight.radius, 120.0);
    assert_eq!(input.viewport.width, 800.0);
    assert_eq!(input.palette.paper.to_string(), "#101010");
}

#[test]
fn rejects_degenerate_viewport() {
    let err = BackdropInput::from_json_str(r#"{ "viewport": { "width": 0, "height": 600 } }"#)
        .unwrap_err();
    assert!(matches!(err, BackdropError::Config(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = BackdropInput::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, BackdropError::Serde(_)));
}

#[test]
fn load_reports_missing_file() {
    let err = BackdropInput::load(Path::new("target/does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("open input"));
}

#[test]
fn partial_viewport_keeps_other_default() {
    let input = BackdropInput::from_json_str(r#"{ "viewport": { "width": 320 } }"#).unwrap();
    assert_eq!(input.viewport.width, 320.0);
    assert_eq!(input.viewport.height, Viewport::default().height);
}
