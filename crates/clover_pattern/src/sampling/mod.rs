//! Anchor sampling for cluster placement.
//!
//! This module defines the [`AnchorSampling`] trait and the uniform strategy the
//! generator uses to pick top-left cluster corners. The random source is always
//! passed in by the caller.
use glam::UVec2;
use rand::RngCore;

pub mod uniform_anchor;

pub use uniform_anchor::UniformAnchorSampling;

/// Trait for anchor sampling over a grid of `extent` cells.
pub trait AnchorSampling: Send + Sync {
    fn generate(&self, extent: UVec2, rng: &mut dyn RngCore) -> Vec<UVec2>;
}

/// Draw a uniform integer in `[0, upper]`, both ends inclusive.
///
/// Maps a 32-bit draw onto the range with a widening multiply instead of a modulo.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, upper: u32) -> u32 {
    let span = upper as u64 + 1;
    ((rng.next_u32() as u64 * span) >> 32) as u32
}
