use super::*;
use serde_json::json;

#[test]
fn defaults_when_absent() {
    let r = RenderConfig::default().resolve();
    assert_eq!(r.overlay_opacity, 1.0);
    assert_eq!(r.pattern_opacity, 1.0);
    assert_eq!(r.pattern_scale, 1.0);
    assert_eq!(r.motion, Motion::Drift);
}

#[test]
fn out_of_range_values_are_clamped() {
    let cfg = RenderConfig {
        overlay_opacity: Some(5.0),
        pattern_opacity: Some(-2.0),
        pattern_scale: Some(-1.0),
        motion: Some(Motion::None),
    };
    let r = cfg.resolve();
    assert_eq!(r.overlay_opacity, 1.0);
    assert_eq!(r.pattern_opacity, 0.0);
    assert_eq!(r.pattern_scale, 0.7);
    assert_eq!(r.motion, Motion::None);

    let r = RenderConfig {
        pattern_opacity: Some(9.0),
        pattern_scale: Some(3.0),
        ..RenderConfig::default()
    }
    .resolve();
    assert_eq!(r.pattern_opacity, 1.6);
    assert_eq!(r.pattern_scale, 1.4);
    assert!((r.inverted_opacity() - 1.52).abs() < 1e-9);
}

#[test]
fn nan_reads_as_absent() {
    let r = RenderConfig {
        overlay_opacity: Some(f64::NAN),
        ..RenderConfig::default()
    }
    .resolve();
    assert_eq!(r.overlay_opacity, 1.0);
}

#[test]
fn json_accepts_camel_case_strings_and_garbage() {
    let cfg: RenderConfig = serde_json::from_value(json!({
        "overlayOpacity": "0.5",
        "patternOpacity": "lots",
        "patternScale": [1, 2],
        "patternMotion": "NONE",
    }))
    .unwrap();
    assert_eq!(cfg.overlay_opacity, Some(0.5));
    assert_eq!(cfg.pattern_opacity, None);
    assert_eq!(cfg.pattern_scale, None);
    assert_eq!(cfg.motion, Some(Motion::None));
}

#[test]
fn json_unknown_motion_falls_back_to_drift() {
    let cfg: RenderConfig = serde_json::from_value(json!({ "motion": "wobble" })).unwrap();
    assert_eq!(cfg.motion, None);
    assert_eq!(cfg.resolve().motion, Motion::Drift);

    let cfg: RenderConfig = serde_json::from_value(json!({ "motion": null })).unwrap();
    assert_eq!(cfg.resolve().motion, Motion::Drift);
}

#[test]
fn json_empty_object_is_default() {
    let cfg: RenderConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, RenderConfig::default());
}
