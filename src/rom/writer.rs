use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    config::RomConfig,
    foundation::{core::FrameRgb, error::ImgRomResult},
    rom::{emit::write_validated, linear::validate_sequence},
};

/// What [`write_rom_file`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomSummary {
    pub out_path: PathBuf,
    pub entries: u64,
    pub addr_bits: u32,
    pub frame_bits: Option<u32>,
}

pub fn ensure_parent_dir(path: &Path) -> ImgRomResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode `frames` and write the artifact to `cfg.out_path`, replacing any previous file.
///
/// The config and frames are checked before anything touches the filesystem. The
/// file is fully written and flushed before this returns `Ok`; an I/O error midway
/// may leave a partial file behind, which the next run overwrites.
pub fn write_rom_file(cfg: &RomConfig, frames: &[FrameRgb]) -> ImgRomResult<RomSummary> {
    let geom = cfg.validate()?;
    validate_sequence(geom, frames)?;
    ensure_parent_dir(&cfg.out_path)?;

    let file = File::create(&cfg.out_path)
        .with_context(|| format!("failed to create '{}'", cfg.out_path.display()))?;
    let mut out = BufWriter::new(file);
    let entries = write_validated(&mut out, &cfg.module_name, geom, frames)?;
    out.flush()
        .with_context(|| format!("failed to flush '{}'", cfg.out_path.display()))?;

    let summary = RomSummary {
        out_path: cfg.out_path.clone(),
        entries,
        addr_bits: geom.addr_bits(),
        frame_bits: geom.frame_bits(),
    };
    tracing::info!(
        path = %summary.out_path.display(),
        entries,
        frames = geom.frames,
        width = geom.width,
        height = geom.height,
        addr_bits = summary.addr_bits,
        "generated rom"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/unit/rom/writer.rs"]
mod tests;
