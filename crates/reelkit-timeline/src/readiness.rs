//! Structural-completeness gate for generation.
//!
//! A timeline is ready when it holds at least one clip of every category.
//! Order and counts beyond "at least one" are irrelevant. Both functions
//! are pure projections over the sequence — nothing is cached, so they are
//! safe to re-evaluate after every mutation.

use smallvec::SmallVec;

use reelkit_core::Category;

use crate::sequence::TimelineSequence;

/// Categories the timeline still lacks, in canonical Hook → Body → CTA
/// order. Empty means ready.
pub fn missing_categories(seq: &TimelineSequence) -> SmallVec<[Category; 3]> {
    let mut present = [false; 3];
    for (_, clip) in seq.entries() {
        present[clip.category.index()] = true;
    }
    Category::ALL
        .into_iter()
        .filter(|c| !present[c.index()])
        .collect()
}

/// True iff the sequence contains at least one Hook, one Body, and one CTA.
pub fn is_ready(seq: &TimelineSequence) -> bool {
    missing_categories(seq).is_empty()
}
