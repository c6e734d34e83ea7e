use super::*;

#[test]
fn default_canvas_is_400_by_300() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (400, 300));
    assert_eq!(c.center(), Point::new(200.0, 150.0));
}

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 70_000).is_err());
    assert!(Canvas::new(64, 48).is_ok());
}

#[test]
fn millis_since_saturates() {
    assert_eq!(Millis(500).since(Millis(200)), Millis(300));
    assert_eq!(Millis(100).since(Millis(200)), Millis::ZERO);
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(1)), Millis(u64::MAX));
}

#[test]
fn hex_colors_parse_short_and_long_forms() {
    assert_eq!(Rgba8::from_hex("#000").unwrap(), Rgba8::BLACK);
    assert_eq!(Rgba8::from_hex("ffffff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::from_hex("#FF336680").unwrap(),
        Rgba8 {
            r: 0xff,
            g: 0x33,
            b: 0x66,
            a: 0x80
        }
    );
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzz").is_err());
}

#[test]
fn colors_deserialize_from_hex_or_object() {
    let c: Rgba8 = serde_json::from_str("\"#f00\"").unwrap();
    assert_eq!(c, Rgba8::opaque(255, 0, 0));
    let c: Rgba8 = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
    assert_eq!(c, Rgba8::opaque(1, 2, 3));
}
