//! Ingestion probe: duration and thumbnail extraction for uploaded media.
//!
//! Produces the [`ProbedClip`] the library's `ingest` consumes. Duration
//! comes from ffprobe; the thumbnail is a single still grabbed by ffmpeg.
//! Thumbnail failure is not fatal — the clip just ingests without one.

use std::path::Path;
use std::process::Command;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::ffprobe::ffprobe_path;

use reelkit_core::{MediaRef, ReelKitError, Result};
use reelkit_timeline::ProbedClip;

/// Container extensions accepted for ingestion.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "mkv", "webm", "avi"];

/// Probe a media file for ingestion, without a thumbnail.
pub fn probe_clip(path: &Path) -> Result<ProbedClip> {
    check_media_type(path)?;
    if !path.exists() {
        return Err(ReelKitError::MetadataExtractionFailed(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let duration = probe_duration(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ProbedClip {
        name,
        duration,
        media: MediaRef::new(path.to_string_lossy().into_owned()),
        thumbnail: None,
    })
}

/// Probe a media file and grab a still frame into `thumb_dir`.
///
/// A thumbnail extraction failure downgrades to "no thumbnail" with a
/// warning; only metadata failures reject the clip.
pub fn probe_clip_with_thumbnail(path: &Path, thumb_dir: &Path) -> Result<ProbedClip> {
    let mut probed = probe_clip(path)?;
    match extract_thumbnail(path, thumb_dir) {
        Ok(thumb) => probed.thumbnail = Some(thumb),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "thumbnail extraction failed");
        }
    }
    Ok(probed)
}

/// Duration of a media file in seconds, via ffprobe.
pub fn probe_duration(path: &Path) -> Result<f64> {
    let output = Command::new(ffprobe_path())
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .output()
        .map_err(|e| {
            ReelKitError::MetadataExtractionFailed(format!("failed to run ffprobe: {e}"))
        })?;

    if !output.status.success() {
        return Err(ReelKitError::MetadataExtractionFailed(format!(
            "ffprobe exited with status {} for {}",
            output.status,
            path.display()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.trim().parse::<f64>().map_err(|_| {
        ReelKitError::MetadataExtractionFailed(format!(
            "unparsable ffprobe duration {:?} for {}",
            stdout.trim(),
            path.display()
        ))
    })
}

/// Grab the first frame of `path` as a JPEG in `thumb_dir`.
pub fn extract_thumbnail(path: &Path, thumb_dir: &Path) -> Result<MediaRef> {
    std::fs::create_dir_all(thumb_dir)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "thumb".to_string());
    let thumb_path = thumb_dir.join(format!("{stem}.jpg"));
    let input = path.to_string_lossy();
    let output = thumb_path.to_string_lossy();

    let mut child = FfmpegCommand::new()
        .args([
            "-y",
            "-ss",
            "0",
            "-i",
            input.as_ref(),
            "-frames:v",
            "1",
            "-q:v",
            "3",
            output.as_ref(),
        ])
        .spawn()
        .map_err(|e| {
            ReelKitError::MetadataExtractionFailed(format!("failed to spawn ffmpeg: {e}"))
        })?;

    let status = child.wait().map_err(|e| {
        ReelKitError::MetadataExtractionFailed(format!("failed to wait for ffmpeg: {e}"))
    })?;
    if !status.success() {
        return Err(ReelKitError::MetadataExtractionFailed(format!(
            "ffmpeg thumbnail grab exited with status {status}"
        )));
    }

    Ok(MediaRef::new(thumb_path.to_string_lossy().into_owned()))
}

fn check_media_type(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(ReelKitError::UnsupportedMediaType(
            path.display().to_string(),
        ))
    }
}
