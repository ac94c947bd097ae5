//! Integration tests for the drag-reorder protocol driving the timeline.
//!
//! Simulates full pointer gestures against a real library and sequence,
//! the way a UI layer would feed the controller.

use reelkit_core::{Category, MediaRef};
use reelkit_timeline::{
    is_ready, ClipLibrary, DragController, DragSource, DragState, HoverSide, ProbedClip,
    TimelineSequence,
};

fn probed(name: &str) -> ProbedClip {
    ProbedClip {
        name: name.to_string(),
        duration: 5.0,
        media: MediaRef::new(format!("media/{name}.mp4")),
        thumbnail: None,
    }
}

fn stocked_library() -> ClipLibrary {
    let mut library = ClipLibrary::new();
    library.ingest(Category::Hook, probed("h1")).unwrap();
    library.ingest(Category::Body, probed("b1")).unwrap();
    library.ingest(Category::Cta, probed("c1")).unwrap();
    library
}

fn names(seq: &TimelineSequence) -> Vec<String> {
    seq.entries().map(|(_, c)| c.name.clone()).collect()
}

// ── Building a timeline by dragging ────────────────────────────

#[test]
fn drag_three_clips_from_library_reaches_readiness() {
    let library = stocked_library();
    let mut timeline = TimelineSequence::new();
    let mut drag = DragController::new();

    for category in Category::ALL {
        let id = library.list(category)[0].id;
        drag.begin(DragSource::Library(id));
        drag.hover_end();
        drag.release(&library, &mut timeline).unwrap();
    }

    assert_eq!(names(&timeline), ["h1", "b1", "c1"]);
    assert!(is_ready(&timeline));
}

#[test]
fn gesture_applies_exactly_one_mutation() {
    let library = stocked_library();
    let mut timeline = TimelineSequence::new();
    for category in Category::ALL {
        timeline.append(library.list(category)[0].clone());
    }

    // A long hover path mutates nothing until the release.
    let (first_slot, _) = timeline.entries().next().unwrap();
    let mut drag = DragController::new();
    drag.begin(DragSource::Timeline(first_slot));
    let before = names(&timeline);
    for (index, side) in [(1, HoverSide::Before), (1, HoverSide::After), (2, HoverSide::Before)] {
        drag.hover_entry(&timeline, index, side);
        assert_eq!(names(&timeline), before);
    }
    drag.hover_entry(&timeline, 2, HoverSide::After);
    drag.release(&library, &mut timeline).unwrap();

    assert_eq!(names(&timeline), ["b1", "c1", "h1"]);
    assert_eq!(drag.state(), DragState::Idle);
}

#[test]
fn reorder_then_remove_then_readd_from_library() {
    let library = stocked_library();
    let mut timeline = TimelineSequence::new();
    for category in Category::ALL {
        timeline.append(library.list(category)[0].clone());
    }

    // Remove the CTA entry; readiness drops but the library keeps the clip.
    let cta_slot = timeline
        .entries()
        .find(|(_, c)| c.category == Category::Cta)
        .map(|(slot, _)| slot)
        .unwrap();
    timeline.remove(cta_slot);
    assert!(!is_ready(&timeline));

    // Drag it back in at the front.
    let cta_id = library.list(Category::Cta)[0].id;
    let mut drag = DragController::new();
    drag.begin(DragSource::Library(cta_id));
    drag.hover_entry(&timeline, 0, HoverSide::Before);
    drag.release(&library, &mut timeline).unwrap();

    assert_eq!(names(&timeline), ["c1", "h1", "b1"]);
    assert!(is_ready(&timeline));
}

#[test]
fn cancelled_gesture_leaves_everything_unchanged() {
    let library = stocked_library();
    let mut timeline = TimelineSequence::new();
    for category in Category::ALL {
        timeline.append(library.list(category)[0].clone());
    }
    let before = names(&timeline);

    let (slot, _) = timeline.entries().next().unwrap();
    let mut drag = DragController::new();
    drag.begin(DragSource::Timeline(slot));
    drag.hover_entry(&timeline, 2, HoverSide::After);
    drag.cancel();

    assert_eq!(names(&timeline), before);
    assert_eq!(drag.state(), DragState::Idle);
}
