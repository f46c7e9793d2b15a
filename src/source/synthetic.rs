use crate::foundation::core::{FrameRgb, Rgb8};

/// The `10i` offsets repeat every 51 indices (`gcd(10, 255) = 5`).
const OFFSET_PERIOD: u64 = 51;

/// Number of consecutive indices guaranteed to produce pairwise distinct frames.
pub const SYNTHETIC_DISTINCT_FRAMES: u32 = (OFFSET_PERIOD * 255) as u32;

/// Deterministic placeholder for frame position `index`.
///
/// `pixel(x, y) = ((x + 10i + i / 51) % 255, (y + 10i) % 255, (x + y + 20i) % 255)`.
/// Index 0 is the plain x/y gradient used when a still image cannot be opened.
/// Any two indices below [`SYNTHETIC_DISTINCT_FRAMES`] give different frames.
pub fn synthetic_frame(index: u32, width: u32, height: u32) -> FrameRgb {
    let i = u64::from(index);
    let lap = i / OFFSET_PERIOD;
    FrameRgb::from_fn(width, height, |x, y| {
        let (x, y) = (u64::from(x), u64::from(y));
        Rgb8::new(
            ((x + i * 10 + lap) % 255) as u8,
            ((y + i * 10) % 255) as u8,
            ((x + y + i * 20) % 255) as u8,
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/source/synthetic.rs"]
mod tests;
