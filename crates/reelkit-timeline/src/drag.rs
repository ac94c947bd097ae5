//! Drag-reorder protocol.
//!
//! A transient interaction state machine translating pointer gestures into
//! discrete sequence operations. Hover recomputation only ever updates the
//! predicted drop zone; the sequence is mutated at most once per completed
//! gesture, inside [`DragController::release`].
//!
//! The caller (UI layer) feeds it pointer events: `begin` on pointer-down,
//! `hover_entry` / `hover_end` on pointer-move over a drop surface, `leave`
//! when the pointer exits all surfaces, and `release` or `cancel` to finish.

use reelkit_core::{ClipId, Result, SlotId};

use crate::library::ClipLibrary;
use crate::sequence::TimelineSequence;

/// What is being dragged. Library clips and timeline entries are addressed
/// differently on purpose: a library drag carries the clip's identity, a
/// timeline drag carries the slot of one specific occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Library(ClipId),
    Timeline(SlotId),
}

/// Predicted insertion target while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// Open timeline area: append to the end.
    End,
    /// A specific position in the sequence.
    Index(usize),
}

/// Which side of a hovered entry's midpoint the pointer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverSide {
    Before,
    After,
}

/// Drag interaction state. One controller instance is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: DragSource,
    },
    Hovering {
        source: DragSource,
        zone: DropZone,
    },
}

/// The interaction state machine. Owns nothing but the transient state;
/// library and sequence are passed in by the caller at drop time.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for rendering drag feedback.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// True while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Pointer-down on a library clip or timeline entry.
    ///
    /// Starting a new gesture while one is active abandons the old one
    /// without mutating anything (equivalent to cancel-then-begin).
    pub fn begin(&mut self, source: DragSource) {
        self.state = DragState::Dragging { source };
    }

    /// Pointer over the open timeline area (not over any entry).
    pub fn hover_end(&mut self) {
        if let Some(source) = self.source() {
            self.state = DragState::Hovering {
                source,
                zone: DropZone::End,
            };
        }
    }

    /// Pointer over the entry at `hover_index`, on the given side of its
    /// midpoint. Recomputes the predicted drop zone; never mutates `seq`.
    ///
    /// For a timeline source the midpoint rule prevents flicker between
    /// adjacent entries: dragging rightward only retargets once the pointer
    /// has crossed the hovered entry's midpoint, and mirrored leftward.
    /// Until it crosses, the previous prediction (or the source's own
    /// position) is kept.
    pub fn hover_entry(&mut self, seq: &TimelineSequence, hover_index: usize, side: HoverSide) {
        let Some(source) = self.source() else {
            return;
        };
        let zone = match source {
            DragSource::Library(_) => {
                let index = match side {
                    HoverSide::Before => hover_index,
                    HoverSide::After => hover_index + 1,
                };
                DropZone::Index(index)
            }
            DragSource::Timeline(slot) => {
                let Some(drag_index) = seq.position(slot) else {
                    // Slot vanished mid-drag (removed elsewhere); keep the
                    // gesture alive without a prediction.
                    self.state = DragState::Dragging { source };
                    return;
                };
                let crossed = match (drag_index < hover_index, drag_index > hover_index) {
                    (true, _) => side == HoverSide::After,
                    (_, true) => side == HoverSide::Before,
                    _ => false, // hovering itself
                };
                if crossed {
                    DropZone::Index(hover_index)
                } else {
                    // Not past the midpoint yet: stick with the previous
                    // prediction, falling back to "no move".
                    match self.state {
                        DragState::Hovering { zone, .. } => zone,
                        _ => DropZone::Index(drag_index),
                    }
                }
            }
        };
        self.state = DragState::Hovering { source, zone };
    }

    /// Pointer left every drop surface while dragging.
    pub fn leave(&mut self) {
        if let DragState::Hovering { source, .. } = self.state {
            self.state = DragState::Dragging { source };
        }
    }

    /// Drag cancelled (escape key, pointer-capture loss). No mutation.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Pointer-release: resolve the gesture against the sequence.
    ///
    /// Applies at most one mutation and always returns to `Idle`. Returns
    /// the new slot when a library clip was placed, `None` otherwise.
    ///
    /// A library-source release with no resolved zone still appends — the
    /// forgiving drag-to-add behavior — while a timeline-source release
    /// outside any surface leaves the entry where it was.
    pub fn release(
        &mut self,
        library: &ClipLibrary,
        seq: &mut TimelineSequence,
    ) -> Result<Option<SlotId>> {
        let state = std::mem::take(&mut self.state);
        match state {
            DragState::Idle => Ok(None),
            DragState::Dragging {
                source: DragSource::Library(id),
            }
            | DragState::Hovering {
                source: DragSource::Library(id),
                zone: DropZone::End,
            } => {
                let clip = library.lookup(id)?.clone();
                Ok(Some(seq.append(clip)))
            }
            DragState::Hovering {
                source: DragSource::Library(id),
                zone: DropZone::Index(index),
            } => {
                let clip = library.lookup(id)?.clone();
                Ok(Some(seq.insert(index, clip)))
            }
            DragState::Dragging {
                source: DragSource::Timeline(_),
            } => Ok(None),
            DragState::Hovering {
                source: DragSource::Timeline(slot),
                zone,
            } => {
                let target = match zone {
                    DropZone::End => seq.len().saturating_sub(1),
                    DropZone::Index(index) => index,
                };
                seq.move_to(slot, target);
                Ok(None)
            }
        }
    }

    fn source(&self) -> Option<DragSource> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::Hovering { source, .. } => Some(source),
        }
    }
}
