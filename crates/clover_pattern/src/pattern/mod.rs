//! Pattern generation: configuration, cluster placement and generation events.
use glam::UVec2;

pub mod config;
pub mod events;
pub mod generator;

pub use config::PatternConfig;

/// Side length of a clover cluster in cells.
pub const DEFAULT_CLUSTER_SIZE: usize = 3;
/// Number of clusters stamped per generation.
pub const DEFAULT_CLUSTER_COUNT: usize = 10;

/// A square overlay block stamped at `anchor` (its top-left cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cluster {
    pub anchor: UVec2,
    pub size: u32,
}

impl Cluster {
    pub fn new(anchor: UVec2, size: u32) -> Self {
        Self { anchor, size }
    }

    /// Cells covered by this cluster, row by row.
    pub fn cells(&self) -> impl Iterator<Item = UVec2> + '_ {
        let size = self.size;
        (0..size).flat_map(move |dy| (0..size).map(move |dx| self.anchor + UVec2::new(dx, dy)))
    }

    /// Whether `cell` lies inside this cluster.
    pub fn contains(&self, cell: UVec2) -> bool {
        cell.x >= self.anchor.x
            && cell.y >= self.anchor.y
            && cell.x < self.anchor.x + self.size
            && cell.y < self.anchor.y + self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_cover_block_row_major() {
        let c = Cluster::new(UVec2::new(4, 2), 3);
        let cells: Vec<_> = c.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], UVec2::new(4, 2));
        assert_eq!(cells[2], UVec2::new(6, 2));
        assert_eq!(cells[8], UVec2::new(6, 4));
        assert!(cells.iter().all(|p| c.contains(*p)));
    }

    #[test]
    fn contains_excludes_neighbours() {
        let c = Cluster::new(UVec2::new(1, 1), 3);
        assert!(!c.contains(UVec2::new(0, 1)));
        assert!(!c.contains(UVec2::new(4, 1)));
        assert!(!c.contains(UVec2::new(1, 4)));
    }
}
