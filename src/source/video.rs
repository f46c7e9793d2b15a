use std::path::{Path, PathBuf};

use crate::foundation::{
    core::FrameRgb,
    error::{ImgRomError, ImgRomResult},
};

/// Container extensions routed to the video decoder (case-insensitive).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv"];

#[derive(Clone, Debug)]
pub struct VideoSourceInfo {
    pub source_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fps_num: u32,
    pub fps_den: u32,
    pub total_frames: u64,
}

impl VideoSourceInfo {
    pub fn source_fps(&self) -> f64 {
        if self.fps_den == 0 {
            0.0
        } else {
            f64::from(self.fps_num) / f64::from(self.fps_den)
        }
    }

    /// Presentation time of source frame `frame_index`, in seconds.
    pub fn frame_time_sec(&self, frame_index: u64) -> f64 {
        let fps = self.source_fps();
        if fps <= 0.0 {
            0.0
        } else {
            frame_index as f64 / fps
        }
    }
}

/// Source frame indices sampled when `count` frames are wanted out of `total_frames`.
///
/// Frames are taken every `max(1, total_frames / count)` frames starting at 0.
/// Indices past the end of a short clip are still returned; decoding stops there.
pub fn sample_indices(total_frames: u64, count: u32) -> Vec<u64> {
    let step = (total_frames / u64::from(count.max(1))).max(1);
    (0..u64::from(count)).map(|i| i * step).collect()
}

pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(feature = "media-ffmpeg")]
pub fn probe_video(source_path: &Path) -> ImgRomResult<VideoSourceInfo> {
    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| ImgRomError::media(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(ImgRomError::media(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    parse_stream_info(source_path, &out.stdout)
}

/// Build [`VideoSourceInfo`] from `ffprobe -print_format json` output.
///
/// A zero frame rate is rejected; sampling needs a usable time base.
#[cfg(feature = "media-ffmpeg")]
fn parse_stream_info(source_path: &Path, json: &[u8]) -> ImgRomResult<VideoSourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        r_frame_rate: Option<String>,
        nb_frames: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| ImgRomError::media(format!("ffprobe json parse failed: {e}")))?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| ImgRomError::media("no video stream found"))?;
    let width = video_stream
        .width
        .ok_or_else(|| ImgRomError::media("missing video width from ffprobe"))?;
    let height = video_stream
        .height
        .ok_or_else(|| ImgRomError::media("missing video height from ffprobe"))?;

    let (fps_num, fps_den) = parse_ff_ratio(video_stream.r_frame_rate.as_deref().unwrap_or("0/1"))
        .ok_or_else(|| ImgRomError::media("invalid video r_frame_rate"))?;
    if fps_num == 0 {
        return Err(ImgRomError::media(format!(
            "'{}' reports a zero frame rate",
            source_path.display()
        )));
    }
    let duration_sec = parsed
        .format
        .as_ref()
        .and_then(|f| f.duration.as_ref())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);

    // Not every container records nb_frames; fall back to duration * fps.
    let total_frames = video_stream
        .nb_frames
        .as_deref()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            let fps = f64::from(fps_num) / f64::from(fps_den);
            (duration_sec * fps).floor().max(0.0) as u64
        });

    Ok(VideoSourceInfo {
        source_path: source_path.to_path_buf(),
        width,
        height,
        fps_num,
        fps_den,
        total_frames,
    })
}

#[cfg(not(feature = "media-ffmpeg"))]
pub fn probe_video(_source_path: &Path) -> ImgRomResult<VideoSourceInfo> {
    Err(ImgRomError::media(
        "video input requires the 'media-ffmpeg' feature",
    ))
}

/// Decode source frame `frame_index` as tightly packed RGB8 at native size.
///
/// Returns `Ok(None)` when ffmpeg produces no frame at that position (past the end).
#[cfg(feature = "media-ffmpeg")]
pub fn decode_video_frame_rgb8(
    source: &VideoSourceInfo,
    frame_index: u64,
) -> ImgRomResult<Option<Vec<u8>>> {
    let out = std::process::Command::new("ffmpeg")
        .args([
            "-v",
            "error",
            "-ss",
            &format!("{:.9}", source.frame_time_sec(frame_index)),
        ])
        .arg("-i")
        .arg(&source.source_path)
        .args(["-frames:v", "1", "-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1"])
        .output()
        .map_err(|e| {
            ImgRomError::media(format!("failed to run ffmpeg for video decode: {e}"))
        })?;

    if !out.status.success() {
        return Err(ImgRomError::media(format!(
            "ffmpeg video decode failed for '{}': {}",
            source.source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    if out.stdout.is_empty() {
        return Ok(None);
    }

    let expected_len = source.width as usize * source.height as usize * 3;
    if out.stdout.len() != expected_len {
        return Err(ImgRomError::media(format!(
            "decoded video frame has invalid size: got {} bytes, expected {expected_len}",
            out.stdout.len()
        )));
    }
    Ok(Some(out.stdout))
}

#[cfg(not(feature = "media-ffmpeg"))]
pub fn decode_video_frame_rgb8(
    _source: &VideoSourceInfo,
    _frame_index: u64,
) -> ImgRomResult<Option<Vec<u8>>> {
    Err(ImgRomError::media(
        "video input requires the 'media-ffmpeg' feature",
    ))
}

/// Pull up to `count` evenly spaced frames from a video and canonicalize them.
///
/// Stops at the first frame that cannot be read, so the result may be shorter
/// than `count`. Failing to open the video at all is an error.
pub fn extract_video_frames(
    source_path: &Path,
    count: u32,
    width: u32,
    height: u32,
) -> ImgRomResult<Vec<FrameRgb>> {
    if cfg!(feature = "media-ffmpeg") && !is_ffmpeg_on_path() {
        return Err(ImgRomError::media(
            "ffmpeg is required for video input, but was not found on PATH",
        ));
    }

    let info = probe_video(source_path)?;
    tracing::info!(
        path = %source_path.display(),
        total_frames = info.total_frames,
        fps = info.source_fps(),
        "opened video"
    );

    let mut frames = Vec::with_capacity(count as usize);
    for (i, frame_index) in sample_indices(info.total_frames, count)
        .into_iter()
        .enumerate()
    {
        let raw = match decode_video_frame_rgb8(&info, frame_index) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(frame_index, "video ended before all frames were sampled");
                break;
            }
            Err(e) => {
                tracing::warn!(frame_index, error = %e, "stopping video extraction");
                break;
            }
        };
        let img = image::RgbImage::from_raw(info.width, info.height, raw)
            .ok_or_else(|| ImgRomError::media("decoded video frame does not match its size"))?;
        frames.push(crate::source::canonical::canonicalize(
            &image::DynamicImage::ImageRgb8(img),
            width,
            height,
        ));
        tracing::debug!(frame = i + 1, of = count, frame_index, "extracted frame");
    }
    Ok(frames)
}

#[cfg(feature = "media-ffmpeg")]
fn parse_ff_ratio(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.split('/');
    let a = parts.next()?.parse::<u32>().ok()?;
    let b = parts.next()?.parse::<u32>().ok()?;
    if b == 0 {
        return None;
    }
    Some((a, b))
}

#[cfg(test)]
#[path = "../../tests/unit/source/video.rs"]
mod tests;
