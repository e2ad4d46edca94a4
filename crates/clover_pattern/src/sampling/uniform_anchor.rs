//! Uniform random anchor sampling strategy.
use glam::UVec2;
use rand::RngCore;

use crate::sampling::{rand_index, AnchorSampling};

/// Uniform i.i.d. anchors for square footprints that must fit inside the grid.
#[derive(Debug, Clone)]
pub struct UniformAnchorSampling {
    /// Number of anchors to generate.
    pub count: usize,
    /// Side length of the footprint anchored at each point.
    pub footprint: u32,
}

impl UniformAnchorSampling {
    /// Create a sampler producing `count` anchors for `footprint x footprint` blocks.
    pub fn new(count: usize, footprint: u32) -> Self {
        Self { count, footprint }
    }
}

impl AnchorSampling for UniformAnchorSampling {
    fn generate(&self, extent: UVec2, rng: &mut dyn RngCore) -> Vec<UVec2> {
        if self.count == 0
            || self.footprint == 0
            || extent.x < self.footprint
            || extent.y < self.footprint
        {
            return Vec::new();
        }

        let max_x = extent.x - self.footprint;
        let max_y = extent.y - self.footprint;

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            // x is drawn before y for every anchor.
            let x = rand_index(rng, max_x);
            let y = rand_index(rng, max_y);
            out.push(UVec2::new(x, y));
        }

        out
    }
}
