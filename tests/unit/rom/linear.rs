use super::*;

fn indexed_frame(w: u32, h: u32, tag: u8) -> FrameRgb {
    FrameRgb::from_fn(w, h, |x, y| Rgb8::new(tag, x as u8, y as u8))
}

#[test]
fn address_formula_is_frame_then_row_then_column() {
    let geom = RomGeometry::new(200, 150, 16).unwrap();
    assert_eq!(address(geom, 0, 0, 0), 0);
    assert_eq!(address(geom, 0, 199, 0), 199);
    assert_eq!(address(geom, 0, 0, 1), 200);
    assert_eq!(address(geom, 1, 0, 0), 30_000);
    assert_eq!(address(geom, 15, 199, 149), 479_999);
}

#[test]
fn linearize_visits_every_address_once_in_order() {
    let geom = RomGeometry::new(4, 3, 3).unwrap();
    let frames: Vec<_> = (0..3).map(|f| indexed_frame(4, 3, f)).collect();

    let pairs: Vec<_> = linearize(geom, &frames).collect();
    assert_eq!(pairs.len() as u64, geom.depth());
    for (expected, (addr, _)) in pairs.iter().enumerate() {
        assert_eq!(*addr, expected as u64);
    }
}

#[test]
fn linearize_agrees_with_address_formula() {
    let geom = RomGeometry::new(5, 4, 2).unwrap();
    let frames: Vec<_> = (0..2).map(|f| indexed_frame(5, 4, f)).collect();

    for (addr, px) in linearize(geom, &frames) {
        let (f, x, y) = (px.r as u32, px.g as u32, px.b as u32);
        assert_eq!(address(geom, f, x, y), addr);
    }
}

#[test]
fn validate_sequence_rejects_wrong_count_and_size() {
    let geom = RomGeometry::new(4, 3, 2).unwrap();
    let one = vec![indexed_frame(4, 3, 0)];
    let err = validate_sequence(geom, &one).unwrap_err();
    assert!(err.to_string().contains("frame count mismatch"));

    let mixed = vec![indexed_frame(4, 3, 0), indexed_frame(3, 4, 1)];
    let err = validate_sequence(geom, &mixed).unwrap_err();
    assert!(err.to_string().contains("frame 1 size mismatch"));

    let ok = vec![indexed_frame(4, 3, 0), indexed_frame(4, 3, 1)];
    validate_sequence(geom, &ok).unwrap();
}
