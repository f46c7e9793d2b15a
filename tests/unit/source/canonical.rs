use image::{GrayImage, Luma, Rgba, RgbaImage};

use super::*;

#[test]
fn resizes_to_exact_raster_ignoring_aspect() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(37, 91, Rgba([10, 20, 30, 255])));
    let frame = canonicalize(&img, 200, 150);
    assert_eq!((frame.width, frame.height), (200, 150));
    assert_eq!(frame.data.len(), 200 * 150 * 3);
}

#[test]
fn alpha_is_discarded_not_blended() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 0])));
    let frame = canonicalize(&img, 4, 4);
    assert!(frame.data.chunks_exact(3).all(|px| px == [200, 100, 50]));
}

#[test]
fn grayscale_is_expanded_to_rgb() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 6, Luma([77])));
    let frame = canonicalize(&img, 8, 6);
    assert!(frame.data.iter().all(|&c| c == 77));
}

#[test]
fn solid_color_survives_resampling() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(640, 480, Rgba([0, 0, 0, 255])));
    let frame = canonicalize(&img, 200, 150);
    assert!(frame.data.iter().all(|&c| c == 0));
}
