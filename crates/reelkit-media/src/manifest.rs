//! Merge request manifest.
//!
//! The merge backend receives playback order and media references, nothing
//! else — category and display name never cross this boundary.

use serde::{Deserialize, Serialize};

use reelkit_core::{Clip, MediaRef, ReelKitError, Result};

/// Immutable, ordered snapshot of the media to concatenate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeManifest {
    clips: Vec<MediaRef>,
}

impl MergeManifest {
    /// Snapshot a manifest from clips in playback order.
    pub fn from_clips(clips: &[Clip]) -> Self {
        Self {
            clips: clips.iter().map(|c| c.media.clone()).collect(),
        }
    }

    /// Media references in concatenation order.
    pub fn media(&self) -> &[MediaRef] {
        &self.clips
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// True if there is nothing to merge.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Serialize for a remote merge backend.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ReelKitError::Merge(e.to_string()))
    }

    /// Deserialize a manifest received over the wire.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReelKitError::Merge(e.to_string()))
    }
}
