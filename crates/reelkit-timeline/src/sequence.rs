//! Ordered timeline sequence.
//!
//! Storage is a slot arena plus an explicit order array of slot identities:
//! moves and removals edit the index array without touching entry storage,
//! and positions are implicit in the array, so they are contiguous `0..n-1`
//! by construction — no operation can leave stale indices behind.

use std::collections::HashMap;

use reelkit_core::{Clip, SlotId};

/// An ordered, mutable list of clip placements.
///
/// The same clip may appear more than once; every placement gets its own
/// [`SlotId`], and all mutating operations address slots, never clips.
#[derive(Debug, Default)]
pub struct TimelineSequence {
    slots: HashMap<SlotId, Clip>,
    order: Vec<SlotId>,
}

impl TimelineSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a clip at the end of the sequence.
    pub fn append(&mut self, clip: Clip) -> SlotId {
        let slot = SlotId::new();
        self.slots.insert(slot, clip);
        self.order.push(slot);
        slot
    }

    /// Place a clip at `index`, shifting later entries right.
    ///
    /// `index` is clamped to `[0, len]`; clamping to `len` appends.
    pub fn insert(&mut self, index: usize, clip: Clip) -> SlotId {
        let index = index.min(self.order.len());
        let slot = SlotId::new();
        self.slots.insert(slot, clip);
        self.order.insert(index, slot);
        slot
    }

    /// Remove the placement with the given slot identity.
    ///
    /// Returns `true` if an entry was removed. An absent slot is a silent
    /// no-op (`false`), so rapid duplicate removals never surface errors.
    pub fn remove(&mut self, slot: SlotId) -> bool {
        if self.slots.remove(&slot).is_none() {
            return false;
        }
        self.order.retain(|s| *s != slot);
        true
    }

    /// Relocate a placement to `target`, shifting intervening entries.
    ///
    /// `target` is clamped to the last valid index. Moving to the current
    /// position, or moving an unknown slot, is a no-op. Returns `true` if
    /// the order changed.
    pub fn move_to(&mut self, slot: SlotId, target: usize) -> bool {
        let Some(from) = self.position(slot) else {
            return false;
        };
        let target = target.min(self.order.len().saturating_sub(1));
        if from == target {
            return false;
        }
        self.order.remove(from);
        self.order.insert(target, slot);
        true
    }

    /// Current position of a slot, if present.
    pub fn position(&self, slot: SlotId) -> Option<usize> {
        self.order.iter().position(|s| *s == slot)
    }

    /// The clip placed in a slot, if present.
    pub fn get(&self, slot: SlotId) -> Option<&Clip> {
        self.slots.get(&slot)
    }

    /// Ordered iteration over `(slot, clip)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (SlotId, &Clip)> {
        self.order.iter().map(|slot| (*slot, &self.slots[slot]))
    }

    /// Owned snapshot of the clips in playback order.
    ///
    /// This is the projection consumed by the readiness validator, the
    /// generation coordinator (as its immutable manifest source), and
    /// playback.
    pub fn ordered_clips(&self) -> Vec<Clip> {
        self.order
            .iter()
            .map(|slot| self.slots[slot].clone())
            .collect()
    }

    /// Total duration of the sequence in seconds.
    pub fn duration(&self) -> f64 {
        self.order.iter().map(|slot| self.slots[slot].duration).sum()
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no clip has been placed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove every placement (the "reset timeline" action). The library
    /// is unaffected.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }
}
