//! Pattern generator: base checkerboard, sequential cluster stamping, rendering.
use glam::UVec2;
use rand::RngCore;
use tracing::{debug, info};

use crate::error::Result;
use crate::grid::GlyphGrid;
use crate::pattern::events::{EventSink, PatternEvent, PatternEventKind};
use crate::pattern::{Cluster, PatternConfig};
use crate::sampling::{AnchorSampling, UniformAnchorSampling};

/// A generated pattern together with the clusters stamped into it, in stamp order.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub grid: GlyphGrid,
    pub clusters: Vec<Cluster>,
}

impl Pattern {
    /// Rows joined by newlines, no trailing newline.
    pub fn render(&self) -> String {
        self.grid.render()
    }

    /// Distinct cells that ended up covered by at least one cluster.
    pub fn overlay_cells(&self) -> usize {
        (0..self.grid.height())
            .flat_map(|y| (0..self.grid.width()).map(move |x| UVec2::new(x as u32, y as u32)))
            .filter(|cell| self.clusters.iter().any(|c| c.contains(*cell)))
            .count()
    }
}

/// Generate a `width x height` pattern with the default clusters and glyphs.
///
/// Fails with [`crate::error::Error::GridTooSmall`] when either dimension is
/// smaller than a cluster.
pub fn generate<R: RngCore>(width: usize, height: usize, rng: &mut R) -> Result<String> {
    let config = PatternConfig::with_dimensions(width, height);
    generate_pattern(&config, rng).map(|p| p.render())
}

/// Generate a pattern for `config`.
pub fn generate_pattern<R: RngCore>(config: &PatternConfig, rng: &mut R) -> Result<Pattern> {
    generate_pattern_with_events(config, rng, &mut ())
}

pub fn generate_pattern_with_events<R: RngCore>(
    config: &PatternConfig,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<Pattern> {
    config.validate()?;

    if sink.wants(PatternEventKind::GenerationStarted) {
        sink.send(PatternEvent::GenerationStarted {
            config: config.clone(),
        });
    }

    let mut grid = GlyphGrid::checkerboard(config.width, config.height, &config.glyphs);
    if sink.wants(PatternEventKind::BaseGridBuilt) {
        sink.send(PatternEvent::BaseGridBuilt {
            width: config.width,
            height: config.height,
        });
    }

    // validate() guarantees both dimensions fit in u32.
    let extent = UVec2::new(config.width as u32, config.height as u32);
    let size = config.cluster_size as u32;
    let sampler = UniformAnchorSampling::new(config.cluster_count, size);
    let anchors = sampler.generate(extent, rng);

    let mut clusters = Vec::with_capacity(anchors.len());
    for (index, anchor) in anchors.into_iter().enumerate() {
        grid.stamp_block(
            anchor.x as usize,
            anchor.y as usize,
            config.cluster_size,
            config.glyphs.overlay,
        )?;
        let cluster = Cluster::new(anchor, size);
        debug!("Cluster {} stamped at ({}, {}).", index, anchor.x, anchor.y);
        if sink.wants(PatternEventKind::ClusterStamped) {
            sink.send(PatternEvent::ClusterStamped { index, cluster });
        }
        clusters.push(cluster);
    }

    let pattern = Pattern { grid, clusters };

    if sink.wants(PatternEventKind::GenerationFinished) {
        sink.send(PatternEvent::GenerationFinished {
            overlay_cells: pattern.overlay_cells(),
        });
    }

    info!(
        "Generated {}x{} pattern | clusters: {}.",
        config.width,
        config.height,
        pattern.clusters.len(),
    );

    Ok(pattern)
}
