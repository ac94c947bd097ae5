//! ReelKit Core - Foundation types for timeline assembly
//!
//! This crate provides the fundamental types used throughout ReelKit:
//! - Clip and slot identities
//! - The clip entity and its category (Hook / Body / CTA)
//! - Opaque media references
//! - The shared error type

pub mod clip;
pub mod error;
pub mod id;

pub use clip::{Category, Clip, MediaRef};
pub use error::{ReelKitError, Result};
pub use id::{ClipId, SlotId};
