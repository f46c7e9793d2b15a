use image::{DynamicImage, imageops::FilterType};

use crate::foundation::core::FrameRgb;

/// Resize `img` to exactly `width x height` and drop it to 3-channel RGB.
///
/// Aspect ratio is not preserved. Alpha is discarded, grayscale is expanded.
pub fn canonicalize(img: &DynamicImage, width: u32, height: u32) -> FrameRgb {
    let rgb = if img.width() == width && img.height() == height {
        img.to_rgb8()
    } else {
        img.resize_exact(width, height, FilterType::CatmullRom)
            .to_rgb8()
    };
    let (w, h) = rgb.dimensions();
    FrameRgb {
        width: w,
        height: h,
        data: rgb.into_raw(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/canonical.rs"]
mod tests;
