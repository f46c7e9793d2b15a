use std::path::Path;

use crate::{
    config::RomConfig,
    foundation::{
        core::FrameRgb,
        error::{ImgRomError, ImgRomResult},
    },
    source::canonical::canonicalize,
};

/// Turns an input file into a canonical frame.
///
/// Sources only ever see this trait, so tests and alternative image stacks can
/// plug in without touching the loaders.
pub trait FrameDecoder {
    fn decode(&self, path: &Path) -> ImgRomResult<FrameRgb>;
}

/// [`FrameDecoder`] backed by the `image` crate; the format is sniffed from content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageFileDecoder {
    pub width: u32,
    pub height: u32,
}

impl ImageFileDecoder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn for_config(cfg: &RomConfig) -> Self {
        Self::new(cfg.width, cfg.height)
    }
}

impl FrameDecoder for ImageFileDecoder {
    fn decode(&self, path: &Path) -> ImgRomResult<FrameRgb> {
        let bytes = std::fs::read(path)
            .map_err(|e| ImgRomError::decode(format!("open '{}': {e}", path.display())))?;
        decode_image_bytes(&bytes, self.width, self.height).map_err(|e| match e {
            ImgRomError::Decode(msg) => {
                ImgRomError::decode(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
    }
}

/// Decode an in-memory image and canonicalize it. The format is sniffed from content.
pub fn decode_image_bytes(bytes: &[u8], width: u32, height: u32) -> ImgRomResult<FrameRgb> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ImgRomError::decode(format!("decode image from memory: {e}")))?;
    Ok(canonicalize(&img, width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/source/decode.rs"]
mod tests;
