use super::*;
use serde_json::json;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(Rgb::parse_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
    assert_eq!(Rgb::parse_hex("FF8000"), Some(Rgb::new(255, 128, 0)));
    assert_eq!(Rgb::parse_hex("#f80"), Some(Rgb::new(255, 136, 0)));
    assert_eq!(Rgb::parse_hex("#ff80"), None);
    assert_eq!(Rgb::parse_hex("#gg0000"), None);
    assert_eq!(Rgb::parse_hex("#ü0000"), None);
}

#[test]
fn displays_as_lowercase_hex() {
    assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    assert_eq!(serde_json::to_value(Rgb::new(1, 2, 3)).unwrap(), json!("#010203"));
}

#[test]
fn palette_falls_back_per_field() {
    let p: Palette = serde_json::from_value(json!({
        "paper": "#000000",
        "ink": "not a colour",
        "invertInk": 42,
    }))
    .unwrap();
    let d = Palette::default();
    assert_eq!(p.paper, Rgb::new(0, 0, 0));
    assert_eq!(p.ink, d.ink);
    assert_eq!(p.invert_ink, d.invert_ink);
    assert_eq!(p.invert_paper, d.invert_paper);
}

#[test]
fn palette_serialization_reads_back() {
    let p = Palette {
        ink: Rgb::new(10, 20, 30),
        ..Palette::default()
    };
    let v = serde_json::to_value(p).unwrap();
    let back: Palette = serde_json::from_value(v).unwrap();
    assert_eq!(back, p);
}
