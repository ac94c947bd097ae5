//! Clip entity and category types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::ClipId;

/// Library category a clip is ingested into. Fixed for the clip's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Short attention-grabbing opener.
    Hook,
    /// Main content.
    Body,
    /// Call-to-action closer.
    Cta,
}

impl Category {
    /// All categories, in canonical Hook → Body → CTA order.
    pub const ALL: [Category; 3] = [Category::Hook, Category::Body, Category::Cta];

    /// Stable index used for per-category storage.
    pub fn index(self) -> usize {
        match self {
            Category::Hook => 0,
            Category::Body => 1,
            Category::Cta => 2,
        }
    }

    /// Human-readable label (displayed in the UI and CLI).
    pub fn label(self) -> &'static str {
        match self {
            Category::Hook => "Hook",
            Category::Body => "Body",
            Category::Cta => "CTA",
        }
    }

    /// Parse a lowercase category name as used on the wire.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hook" => Some(Category::Hook),
            "body" => Some(Category::Body),
            "cta" => Some(Category::Cta),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque handle to retrievable media bytes (a path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    /// Create a new media reference.
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ingested media unit. Immutable once it enters the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip ID, stable for the session
    pub id: ClipId,
    /// Library category, fixed at ingestion
    pub category: Category,
    /// Display name (not guaranteed unique)
    pub name: String,
    /// Duration in seconds, never negative
    pub duration: f64,
    /// Handle to the clip's media bytes
    pub media: MediaRef,
    /// Optional handle to a representative still frame
    pub thumbnail: Option<MediaRef>,
}

impl Clip {
    /// Create a new clip with a fresh identity.
    ///
    /// Duration validation happens at ingestion (the library rejects
    /// negative or non-finite values before this is called).
    pub fn new(
        category: Category,
        name: impl Into<String>,
        duration: f64,
        media: MediaRef,
        thumbnail: Option<MediaRef>,
    ) -> Self {
        Self {
            id: ClipId::new(),
            category,
            name: name.into(),
            duration,
            media,
            thumbnail,
        }
    }

    /// Format the duration as `m:ss` for display.
    pub fn duration_label(&self) -> String {
        let total = self.duration.floor() as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}
