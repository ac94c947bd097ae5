//! Merge backend: concatenates a manifest into a single artifact.
//!
//! [`ClipMerger`] is the seam between the assembly engine and whatever
//! produces the merged file. [`FfmpegMerger`] is the local implementation:
//! a concat-demuxer list file and a stream-copy ffmpeg run, so no
//! re-encoding happens when the inputs share codec parameters.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ffmpeg_sidecar::command::FfmpegCommand;
use reelkit_core::{MediaRef, ReelKitError, Result};

use crate::manifest::MergeManifest;

/// Produces a single merged artifact from an ordered manifest.
///
/// Implementations run on the coordinator's worker thread and may block;
/// they must either resolve to an artifact reference or fail.
pub trait ClipMerger: Send + Sync {
    fn merge(&self, manifest: &MergeManifest) -> Result<MediaRef>;
}

/// Local ffmpeg concat merger.
#[derive(Debug, Clone)]
pub struct FfmpegMerger {
    output_dir: PathBuf,
}

impl FfmpegMerger {
    /// Merger writing artifacts (and its concat list files) to `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Concat-demuxer list file body, one `file '...'` line per input.
    fn concat_list(manifest: &MergeManifest) -> String {
        let mut list = String::new();
        for media in manifest.media() {
            // Single quotes inside a quoted concat entry are closed,
            // escaped, and reopened ('\'' form).
            let escaped = media.as_str().replace('\'', "'\\''");
            list.push_str(&format!("file '{escaped}'\n"));
        }
        list
    }

    /// FFmpeg arguments for a stream-copy concat run.
    fn ffmpeg_args(list_path: &Path, output_path: &Path) -> Vec<String> {
        vec![
            "-y".into(),
            "-f".into(),
            "concat".into(),
            "-safe".into(),
            "0".into(),
            "-i".into(),
            list_path.to_string_lossy().into_owned(),
            "-c".into(),
            "copy".into(),
            output_path.to_string_lossy().into_owned(),
        ]
    }
}

impl ClipMerger for FfmpegMerger {
    fn merge(&self, manifest: &MergeManifest) -> Result<MediaRef> {
        if manifest.is_empty() {
            return Err(ReelKitError::Merge("empty manifest".into()));
        }

        fs::create_dir_all(&self.output_dir)?;
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let list_path = self.output_dir.join(format!("reel-{stamp}.txt"));
        let output_path = self.output_dir.join(format!("reel-{stamp}.mp4"));

        fs::write(&list_path, Self::concat_list(manifest))?;
        tracing::info!(
            inputs = manifest.len(),
            output = %output_path.display(),
            "running ffmpeg concat"
        );

        let mut child = FfmpegCommand::new()
            .args(Self::ffmpeg_args(&list_path, &output_path))
            .spawn()
            .map_err(|e| ReelKitError::Merge(format!("failed to spawn ffmpeg: {e}")))?;

        let status = child
            .wait()
            .map_err(|e| ReelKitError::Merge(format!("failed to wait for ffmpeg: {e}")))?;

        // The list file is only needed for the run.
        let _ = fs::remove_file(&list_path);

        if !status.success() {
            return Err(ReelKitError::Merge(format!(
                "ffmpeg exited with status: {status}"
            )));
        }

        Ok(MediaRef::new(output_path.to_string_lossy().into_owned()))
    }
}
