//! imgrom turns a still image or a short clip into a synthesizable Verilog ROM.
//!
//! Every cell of the ROM holds one 24-bit RGB pixel. The generated module exposes
//! a clock, an address port (plus a frame-select port for multi-frame ROMs) and a
//! registered 24-bit `data` output with one cycle of read latency.
//!
//! # Pipeline overview
//!
//! 1. **Source**: path -> canonical frames ([`load_still`], [`load_sequence`]).
//!    Unreadable inputs fall back to [`synthetic_frame`]; this step never fails.
//! 2. **Encode**: frames -> Verilog text ([`emit_rom`]). Addresses are
//!    `frame * W * H + y * W + x` (see [`address`]).
//! 3. **Write**: [`write_rom_file`] streams the artifact to disk, creating parent
//!    directories as needed.
//!
//! Encoding is pure and deterministic: the same frames always produce the same bytes.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod rom;
mod source;

pub use config::{
    CANONICAL_HEIGHT, CANONICAL_WIDTH, DEFAULT_IMAGE_INPUT, DEFAULT_MODULE_NAME,
    DEFAULT_OUT_PATH, DEFAULT_VIDEO_FRAMES, DEFAULT_VIDEO_INPUT, RomConfig,
};
pub use foundation::core::{FrameRgb, Rgb8, RomGeometry, bits_for};
pub use foundation::error::{ImgRomError, ImgRomResult};
pub use rom::emit::{emit_rom, render_rom_string};
pub use rom::linear::{address, linearize, validate_sequence};
pub use rom::writer::{RomSummary, ensure_parent_dir, write_rom_file};
pub use source::canonical::canonicalize;
pub use source::decode::{FrameDecoder, ImageFileDecoder, decode_image_bytes};
pub use source::dir::{FRAME_EXTENSIONS, list_frame_files, load_frame_dir};
pub use source::synthetic::{SYNTHETIC_DISTINCT_FRAMES, synthetic_frame};
pub use source::video::{
    VIDEO_EXTENSIONS, VideoSourceInfo, decode_video_frame_rgb8, extract_video_frames,
    is_ffmpeg_on_path, probe_video, sample_indices,
};
pub use source::{InputKind, fill_to_count, load_sequence, load_still};
