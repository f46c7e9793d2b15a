use crate::foundation::{
    core::{FrameRgb, Rgb8, RomGeometry},
    error::{ImgRomError, ImgRomResult},
};

/// Flat ROM address of pixel `(x, y)` in frame `frame`.
///
/// Frame-major, then row-major: `frame * W * H + y * W + x`. The generated read
/// port decomposes addresses with the same stride (see [`crate::emit_rom`]).
pub fn address(geom: RomGeometry, frame: u32, x: u32, y: u32) -> u64 {
    u64::from(frame) * geom.frame_pixels() + u64::from(y) * u64::from(geom.width) + u64::from(x)
}

/// Check that `frames` fills `geom` exactly: `F` frames, each `W x H`.
pub fn validate_sequence(geom: RomGeometry, frames: &[FrameRgb]) -> ImgRomResult<()> {
    if frames.len() as u64 != u64::from(geom.frames) {
        return Err(ImgRomError::validation(format!(
            "frame count mismatch: got {}, expected {}",
            frames.len(),
            geom.frames
        )));
    }
    for (idx, frame) in frames.iter().enumerate() {
        if frame.width != geom.width || frame.height != geom.height {
            return Err(ImgRomError::validation(format!(
                "frame {idx} size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, geom.width, geom.height
            )));
        }
        if frame.data.len() as u64 != geom.frame_pixels() * 3 {
            return Err(ImgRomError::validation(format!(
                "frame {idx} data size mismatch with width*height*3"
            )));
        }
    }
    Ok(())
}

/// Every `(address, pixel)` pair of the sequence in ascending address order.
///
/// Callers are expected to run [`validate_sequence`] first; the iterator itself
/// trusts the frame dimensions.
pub fn linearize(
    geom: RomGeometry,
    frames: &[FrameRgb],
) -> impl Iterator<Item = (u64, Rgb8)> + '_ {
    let stride = geom.frame_pixels();
    frames.iter().enumerate().flat_map(move |(f, frame)| {
        let base = f as u64 * stride;
        frame
            .pixels()
            .enumerate()
            .map(move |(i, px)| (base + i as u64, px))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/rom/linear.rs"]
mod tests;
