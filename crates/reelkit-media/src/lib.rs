//! ReelKit Media - FFmpeg integration for ingestion and merging
//!
//! This crate implements the assembly engine's external collaborators:
//! - Media probing (duration, thumbnail) for ingestion
//! - The merge backend (ffmpeg concat) behind the `ClipMerger` seam
//! - The generation coordinator driving one merge request at a time

pub mod coordinator;
pub mod manifest;
pub mod merge;
pub mod probe;

pub use coordinator::{GenerationCoordinator, GenerationState};
pub use manifest::MergeManifest;
pub use merge::{ClipMerger, FfmpegMerger};
pub use probe::{probe_clip, probe_clip_with_thumbnail, probe_duration};

/// Check media tooling availability (call once at startup).
pub fn init() {
    if ffmpeg_sidecar::command::ffmpeg_is_installed() {
        tracing::info!("ReelKit Media initialized, ffmpeg found");
    } else {
        tracing::warn!("ffmpeg not found on PATH; generation will fail until it is installed");
    }
}
