//! Category-partitioned clip library.
//!
//! Clips enter the library through [`ClipLibrary::ingest`] and never leave:
//! removing a clip from the timeline does not remove it here, so it stays
//! available for re-adding. The library is session-scoped state, owned by
//! whoever drives the assembly engine — there are no globals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use reelkit_core::{Category, Clip, ClipId, MediaRef, ReelKitError, Result};

/// Metadata handed over by the ingestion collaborator for one media file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbedClip {
    /// Display name (usually the file name)
    pub name: String,
    /// Duration in seconds
    pub duration: f64,
    /// Handle to the media bytes
    pub media: MediaRef,
    /// Optional still-frame handle
    pub thumbnail: Option<MediaRef>,
}

/// Clip storage partitioned by category, with stable ingestion order.
#[derive(Debug, Default)]
pub struct ClipLibrary {
    clips: HashMap<ClipId, Clip>,
    // Ingestion order per category, for stable library display.
    by_category: [Vec<ClipId>; 3],
}

impl ClipLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a probed clip under a category, allocating a fresh identity.
    ///
    /// Rejects negative or non-finite durations with
    /// [`ReelKitError::InvalidDuration`] without creating any state. A zero
    /// duration is permitted (degenerate but legal).
    pub fn ingest(&mut self, category: Category, probed: ProbedClip) -> Result<Clip> {
        if !probed.duration.is_finite() || probed.duration < 0.0 {
            return Err(ReelKitError::InvalidDuration(probed.duration));
        }
        let clip = Clip::new(
            category,
            probed.name,
            probed.duration,
            probed.media,
            probed.thumbnail,
        );
        self.by_category[category.index()].push(clip.id);
        self.clips.insert(clip.id, clip.clone());
        Ok(clip)
    }

    /// All clips in a category, in ingestion order.
    pub fn list(&self, category: Category) -> Vec<&Clip> {
        self.by_category[category.index()]
            .iter()
            .filter_map(|id| self.clips.get(id))
            .collect()
    }

    /// Look up a clip by ID.
    pub fn get(&self, id: ClipId) -> Option<&Clip> {
        self.clips.get(&id)
    }

    /// Look up a clip by ID, failing with [`ReelKitError::ClipNotFound`].
    pub fn lookup(&self, id: ClipId) -> Result<&Clip> {
        self.clips.get(&id).ok_or(ReelKitError::ClipNotFound(id))
    }

    /// Number of clips in one category.
    pub fn count(&self, category: Category) -> usize {
        self.by_category[category.index()].len()
    }

    /// Total number of ingested clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// True if nothing has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
