#![forbid(unsafe_code)]
//! clover_pattern: diagonal checkerboard text patterns overlaid with clover clusters.
//!
//! Modules:
//! - grid: glyph palette and the row-major glyph grid (base checkerboard, stamping, rendering)
//! - sampling: anchor generation for cluster placement with an injected random source
//! - pattern: configuration, generator and generation events
pub mod error;
pub mod grid;
pub mod pattern;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use clover_pattern::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{GlyphGrid, Glyphs};
    pub use crate::pattern::events::{EventSink, FnSink, PatternEvent, PatternEventKind, VecSink};
    pub use crate::pattern::generator::{
        generate, generate_pattern, generate_pattern_with_events, Pattern,
    };
    pub use crate::pattern::{Cluster, PatternConfig};
    pub use crate::sampling::{AnchorSampling, UniformAnchorSampling};
}
