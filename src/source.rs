use std::path::Path;

use crate::{
    config::RomConfig,
    foundation::core::FrameRgb,
    source::{
        decode::FrameDecoder, dir::has_extension, synthetic::synthetic_frame,
        video::VIDEO_EXTENSIONS,
    },
};

pub(crate) mod canonical;
pub(crate) mod decode;
pub(crate) mod dir;
pub(crate) mod synthetic;
pub(crate) mod video;

/// How an input path is turned into frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// A file with a known video container extension.
    Video,
    /// A directory of still frames.
    Directory,
    /// Anything else, including paths that do not exist.
    Image,
}

impl InputKind {
    pub fn classify(path: &Path) -> Self {
        if path.is_dir() {
            Self::Directory
        } else if path.is_file() && has_extension(path, VIDEO_EXTENSIONS) {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// The single frame of the still profile.
///
/// Never fails: an unreadable input is replaced by `synthetic_frame(0)`.
pub fn load_still(path: &Path, cfg: &RomConfig, decoder: &dyn FrameDecoder) -> FrameRgb {
    match decoder.decode(path) {
        Ok(frame) => {
            tracing::info!(path = %path.display(), "opened image");
            frame
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "could not open image, using synthetic pattern"
            );
            synthetic_frame(0, cfg.width, cfg.height)
        }
    }
}

/// Exactly `cfg.frames` frames for the video profile.
///
/// Real frames come first, in source order; every recoverable failure only
/// shortens that prefix, and the remainder is filled by [`fill_to_count`].
pub fn load_sequence(path: &Path, cfg: &RomConfig, decoder: &dyn FrameDecoder) -> Vec<FrameRgb> {
    let kind = InputKind::classify(path);
    let real = match kind {
        InputKind::Video => {
            match video::extract_video_frames(path, cfg.frames, cfg.width, cfg.height) {
                Ok(frames) => frames,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "could not read video");
                    Vec::new()
                }
            }
        }
        InputKind::Directory => match dir::load_frame_dir(path, cfg.frames as usize, decoder) {
            Ok(frames) => frames,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not read frame directory"
                );
                Vec::new()
            }
        },
        InputKind::Image => match decoder.decode(path) {
            Ok(frame) => {
                tracing::info!(path = %path.display(), "opened image as first frame");
                vec![frame]
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "no usable frames in input");
                Vec::new()
            }
        },
    };
    tracing::info!(?kind, real = real.len(), requested = cfg.frames, "collected frames");
    fill_to_count(real, cfg.frames, cfg.width, cfg.height)
}

/// Truncate or pad `frames` to exactly `count` entries.
///
/// Padding at position `i` is `synthetic_frame(i)`, so filler frames differ from
/// each other and depend only on their position.
pub fn fill_to_count(
    mut frames: Vec<FrameRgb>,
    count: u32,
    width: u32,
    height: u32,
) -> Vec<FrameRgb> {
    let count = count as usize;
    frames.truncate(count);
    while frames.len() < count {
        let i = frames.len();
        tracing::debug!(frame = i + 1, of = count, "generating synthetic frame");
        frames.push(synthetic_frame(i as u32, width, height));
    }
    frames
}

#[cfg(test)]
#[path = "../tests/unit/source/mod.rs"]
mod tests;
