use std::path::PathBuf;

use super::*;
use crate::foundation::{
    core::Rgb8,
    error::{ImgRomError, ImgRomResult},
};

struct FailingDecoder;

impl FrameDecoder for FailingDecoder {
    fn decode(&self, path: &Path) -> ImgRomResult<FrameRgb> {
        Err(ImgRomError::decode(path.display().to_string()))
    }
}

struct SolidDecoder(Rgb8);

impl FrameDecoder for SolidDecoder {
    fn decode(&self, _path: &Path) -> ImgRomResult<FrameRgb> {
        Ok(FrameRgb::filled(4, 3, self.0))
    }
}

fn tiny(frames: u32) -> RomConfig {
    RomConfig::video(frames).with_raster(4, 3)
}

#[test]
fn classify_routes_by_kind() {
    let dir = PathBuf::from("target").join("unit_source_classify");
    std::fs::create_dir_all(&dir).unwrap();
    let video = dir.join("clip.MOV");
    let still = dir.join("still.png");
    std::fs::write(&video, b"").unwrap();
    std::fs::write(&still, b"").unwrap();

    assert_eq!(InputKind::classify(&dir), InputKind::Directory);
    assert_eq!(InputKind::classify(&video), InputKind::Video);
    assert_eq!(InputKind::classify(&still), InputKind::Image);
    assert_eq!(InputKind::classify(&dir.join("missing.mp4")), InputKind::Image);
}

#[test]
fn still_falls_back_to_gradient() {
    let frame = load_still(Path::new("nope.png"), &tiny(1), &FailingDecoder);
    assert_eq!(frame, synthetic_frame(0, 4, 3));
}

#[test]
fn still_uses_decoded_frame() {
    let px = Rgb8::new(7, 7, 7);
    let frame = load_still(Path::new("any.png"), &tiny(1), &SolidDecoder(px));
    assert_eq!(frame, FrameRgb::filled(4, 3, px));
}

#[test]
fn fill_pads_shortfall_with_distinct_synthetic_frames() {
    let real: Vec<_> = (1..=3u8)
        .map(|v| FrameRgb::filled(4, 3, Rgb8::new(v, v, v)))
        .collect();
    let frames = fill_to_count(real.clone(), 16, 4, 3);

    assert_eq!(frames.len(), 16);
    assert_eq!(frames[..3], real[..]);
    for (i, f) in frames.iter().enumerate().skip(3) {
        assert_eq!(*f, synthetic_frame(i as u32, 4, 3));
        assert!(!real.contains(f));
    }
    for a in 3..16 {
        for b in (a + 1)..16 {
            assert_ne!(frames[a], frames[b]);
        }
    }
}

#[test]
fn fill_past_one_offset_period_stays_distinct() {
    let frames = fill_to_count(Vec::new(), 64, 20, 15);
    assert_eq!(frames.len(), 64);
    assert_eq!(frames[0], synthetic_frame(0, 20, 15));
    for a in 0..frames.len() {
        for b in (a + 1)..frames.len() {
            assert_ne!(frames[a], frames[b], "frames {a} and {b} collide");
        }
    }
}

#[test]
fn fill_truncates_surplus() {
    let real = vec![FrameRgb::filled(4, 3, Rgb8::BLACK); 5];
    assert_eq!(fill_to_count(real, 2, 4, 3).len(), 2);
}

#[test]
fn sequence_from_unreadable_input_is_all_synthetic() {
    let missing = Path::new("target/definitely/missing.bin");
    let frames = load_sequence(missing, &tiny(3), &FailingDecoder);
    let expected: Vec<_> = (0..3).map(|i| synthetic_frame(i, 4, 3)).collect();
    assert_eq!(frames, expected);
}

#[test]
fn sequence_from_single_image_leads_with_it() {
    let px = Rgb8::new(200, 1, 1);
    let frames = load_sequence(Path::new("target/any.png"), &tiny(3), &SolidDecoder(px));
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0], FrameRgb::filled(4, 3, px));
    assert_eq!(frames[1], synthetic_frame(1, 4, 3));
}
