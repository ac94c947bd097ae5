//! Integration test crate for ReelKit.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple reelkit crates to verify they work together.

#[cfg(test)]
mod assembly;

#[cfg(test)]
mod interaction;
