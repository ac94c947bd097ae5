//! ReelKit Timeline - Timeline assembly data model
//!
//! Implements the assembly engine's state and algorithms:
//! - Category-partitioned clip library
//! - Ordered timeline sequence with slot-addressed placements
//! - Readiness validation (≥1 Hook, ≥1 Body, ≥1 CTA)
//! - Drag-reorder interaction state machine

pub mod drag;
pub mod library;
pub mod readiness;
pub mod sequence;

pub use drag::{DragController, DragSource, DragState, DropZone, HoverSide};
pub use library::{ClipLibrary, ProbedClip};
pub use readiness::{is_ready, missing_categories};
pub use sequence::TimelineSequence;
