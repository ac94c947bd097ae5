//! Integration tests for the assembly pipeline.
//!
//! Exercises cross-crate interactions between reelkit-core,
//! reelkit-timeline, and reelkit-media.

use std::sync::{mpsc, Arc, Mutex};

use reelkit_core::{Category, MediaRef, ReelKitError, Result};
use reelkit_media::{ClipMerger, GenerationCoordinator, GenerationState, MergeManifest};
use reelkit_timeline::{is_ready, ClipLibrary, ProbedClip, TimelineSequence};

// ── Helpers ────────────────────────────────────────────────────

fn probed(name: &str, duration: f64) -> ProbedClip {
    ProbedClip {
        name: name.to_string(),
        duration,
        media: MediaRef::new(format!("media/{name}.mp4")),
        thumbnail: None,
    }
}

/// Merger that records manifests and resolves to "out.mp4".
struct RecordingMerger {
    manifests: Mutex<Vec<MergeManifest>>,
}

impl RecordingMerger {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            manifests: Mutex::new(Vec::new()),
        })
    }
}

impl ClipMerger for RecordingMerger {
    fn merge(&self, manifest: &MergeManifest) -> Result<MediaRef> {
        self.manifests.lock().unwrap().push(manifest.clone());
        Ok(MediaRef::new("out.mp4"))
    }
}

/// Merger that blocks until released, to hold a request in flight.
struct GatedMerger {
    gate: Mutex<mpsc::Receiver<()>>,
}

impl ClipMerger for GatedMerger {
    fn merge(&self, _manifest: &MergeManifest) -> Result<MediaRef> {
        self.gate.lock().unwrap().recv().ok();
        Ok(MediaRef::new("out.mp4"))
    }
}

// ── End-to-end scenario ────────────────────────────────────────

#[test]
fn ingest_assemble_generate() {
    let mut library = ClipLibrary::new();
    let h1 = library.ingest(Category::Hook, probed("h1", 6.0)).unwrap();
    let b1 = library.ingest(Category::Body, probed("b1", 40.0)).unwrap();
    let c1 = library.ingest(Category::Cta, probed("c1", 8.0)).unwrap();

    // Non-canonical order: Body first. Readiness ignores order.
    let mut timeline = TimelineSequence::new();
    timeline.append(b1.clone());
    timeline.append(h1.clone());
    timeline.append(c1.clone());
    assert!(is_ready(&timeline));

    let merger = RecordingMerger::new();
    let mut coordinator = GenerationCoordinator::new(merger.clone());
    coordinator.request(&timeline).unwrap();

    assert_eq!(
        coordinator.wait(),
        &GenerationState::Succeeded(MediaRef::new("out.mp4"))
    );

    // The manifest saw the playback order, media refs only.
    let manifests = merger.manifests.lock().unwrap();
    assert_eq!(manifests.len(), 1);
    let refs: Vec<&str> = manifests[0].media().iter().map(|m| m.as_str()).collect();
    assert_eq!(refs, ["media/b1.mp4", "media/h1.mp4", "media/c1.mp4"]);

    // The timeline itself is untouched by generation.
    let clips = timeline.ordered_clips();
    let order: Vec<&str> = clips.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, ["b1", "h1", "c1"]);
}

// ── Readiness across ingestion and timeline edits ──────────────

#[test]
fn readiness_tracks_timeline_not_library() {
    let mut library = ClipLibrary::new();
    let h1 = library.ingest(Category::Hook, probed("h1", 5.0)).unwrap();
    let b1 = library.ingest(Category::Body, probed("b1", 30.0)).unwrap();
    let c1 = library.ingest(Category::Cta, probed("c1", 10.0)).unwrap();

    // A fully stocked library alone is not readiness.
    let mut timeline = TimelineSequence::new();
    assert!(!is_ready(&timeline));

    timeline.append(h1);
    assert!(!is_ready(&timeline));
    timeline.append(b1);
    assert!(!is_ready(&timeline));
    let cta_slot = timeline.append(c1);
    assert!(is_ready(&timeline));

    timeline.remove(cta_slot);
    assert!(!is_ready(&timeline));

    // The clip is still in the library and can be re-added.
    let c1_again = library.list(Category::Cta)[0].clone();
    timeline.append(c1_again);
    assert!(is_ready(&timeline));
}

#[test]
fn duplicate_timeline_entries_reference_one_library_clip() {
    let mut library = ClipLibrary::new();
    let body = library.ingest(Category::Body, probed("b1", 30.0)).unwrap();

    let mut timeline = TimelineSequence::new();
    let first = timeline.append(body.clone());
    let second = timeline.append(body.clone());

    assert_eq!(timeline.get(first).unwrap().id, timeline.get(second).unwrap().id);
    assert_ne!(first, second);
    assert_eq!(library.len(), 1);

    timeline.remove(first);
    assert_eq!(timeline.position(second), Some(0));
    assert_eq!(library.len(), 1);
}

// ── Generation gating ──────────────────────────────────────────

#[test]
fn generation_is_gated_on_readiness() {
    let mut library = ClipLibrary::new();
    let h1 = library.ingest(Category::Hook, probed("h1", 5.0)).unwrap();

    let mut timeline = TimelineSequence::new();
    timeline.append(h1);

    let mut coordinator = GenerationCoordinator::new(RecordingMerger::new());
    match coordinator.request(&timeline).unwrap_err() {
        ReelKitError::NotReady(missing) => {
            assert_eq!(missing, [Category::Body, Category::Cta]);
        }
        other => panic!("expected NotReady, got {other}"),
    }
}

#[test]
fn only_one_request_in_flight_at_a_time() {
    let mut library = ClipLibrary::new();
    let h1 = library.ingest(Category::Hook, probed("h1", 5.0)).unwrap();
    let b1 = library.ingest(Category::Body, probed("b1", 30.0)).unwrap();
    let c1 = library.ingest(Category::Cta, probed("c1", 10.0)).unwrap();

    let mut timeline = TimelineSequence::new();
    timeline.append(h1);
    timeline.append(b1);
    timeline.append(c1);

    let (release, gate) = mpsc::channel();
    let mut coordinator = GenerationCoordinator::new(Arc::new(GatedMerger {
        gate: Mutex::new(gate),
    }));

    coordinator.request(&timeline).unwrap();
    assert!(coordinator.is_in_flight());
    assert!(matches!(
        coordinator.request(&timeline).unwrap_err(),
        ReelKitError::AlreadyInFlight
    ));

    // Edits during the in-flight request are permitted.
    timeline.clear();
    assert!(coordinator.is_in_flight());

    release.send(()).unwrap();
    assert!(matches!(coordinator.wait(), GenerationState::Succeeded(_)));
}
