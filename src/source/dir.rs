use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{core::FrameRgb, error::ImgRomResult},
    source::decode::FrameDecoder,
};

/// Still-image extensions picked up from a frame directory (case-insensitive).
pub const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub(crate) fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| allowed.iter().any(|a| e.eq_ignore_ascii_case(a)))
}

/// Frame files in `dir`, sorted lexicographically by file name.
pub fn list_frame_files(dir: &Path) -> ImgRomResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read frame directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, FRAME_EXTENSIONS) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Decode up to `count` frames from `dir`.
///
/// Only the first `count` files (in name order) are considered. A file that
/// fails to decode is skipped with a warning, so the result may be shorter.
pub fn load_frame_dir(
    dir: &Path,
    count: usize,
    decoder: &dyn FrameDecoder,
) -> ImgRomResult<Vec<FrameRgb>> {
    let files = list_frame_files(dir)?;
    tracing::info!(dir = %dir.display(), found = files.len(), "scanned frame directory");

    let mut frames = Vec::with_capacity(count.min(files.len()));
    for (i, path) in files.iter().take(count).enumerate() {
        match decoder.decode(path) {
            Ok(frame) => {
                tracing::debug!(frame = i + 1, of = count, file = %path.display(), "loaded frame");
                frames.push(frame);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable frame");
            }
        }
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/source/dir.rs"]
mod tests;
