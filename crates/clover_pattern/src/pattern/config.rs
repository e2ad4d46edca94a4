//! Pattern configuration with fixed defaults and validation.
use crate::error::{Error, Result};
use crate::grid::Glyphs;
use crate::pattern::{DEFAULT_CLUSTER_COUNT, DEFAULT_CLUSTER_SIZE};

/// Default grid width in columns.
pub const DEFAULT_WIDTH: usize = 120;
/// Height as a fraction of width.
pub const DEFAULT_ASPECT: f64 = 0.55;

/// Configuration for generating a pattern.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternConfig {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// Number of clusters stamped after the base grid is built.
    pub cluster_count: usize,
    /// Side length of every cluster.
    pub cluster_size: usize,
    /// Base and overlay glyphs.
    pub glyphs: Glyphs,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl PatternConfig {
    /// Creates a config of the given width with the default aspect ratio.
    pub fn new(width: usize) -> Self {
        Self::with_aspect(width, DEFAULT_ASPECT)
    }

    /// Creates a config with `height = round(width * ratio)`.
    pub fn with_aspect(width: usize, ratio: f64) -> Self {
        let height = (width as f64 * ratio).round();
        let height = if height.is_finite() && height > 0.0 {
            height as usize
        } else {
            0
        };
        Self::with_dimensions(width, height)
    }

    /// Creates a config with explicit dimensions.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cluster_count: DEFAULT_CLUSTER_COUNT,
            cluster_size: DEFAULT_CLUSTER_SIZE,
            glyphs: Glyphs::default(),
        }
    }

    /// Sets the number of clusters.
    pub fn with_cluster_count(mut self, cluster_count: usize) -> Self {
        self.cluster_count = cluster_count;
        self
    }

    /// Sets the cluster side length.
    pub fn with_cluster_size(mut self, cluster_size: usize) -> Self {
        self.cluster_size = cluster_size;
        self
    }

    /// Sets the glyph palette.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(
                "width and height must be > 0".into(),
            ));
        }
        if self.cluster_size == 0 {
            return Err(Error::InvalidConfig("cluster_size must be > 0".into()));
        }
        if u32::try_from(self.width).is_err() || u32::try_from(self.height).is_err() {
            return Err(Error::InvalidConfig(
                "width and height must fit in 32 bits".into(),
            ));
        }
        if self.cluster_count > 0
            && (self.width < self.cluster_size || self.height < self.cluster_size)
        {
            return Err(Error::GridTooSmall {
                width: self.width,
                height: self.height,
                cluster_size: self.cluster_size,
            });
        }

        Ok(())
    }
}
