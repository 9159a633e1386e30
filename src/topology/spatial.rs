//! Grid hash for tolerance-based node lookup.
//!
//! Plan space is split into square cells of side `cell_size`. A lookup scans
//! the 3x3 block of cells around the query, so any node within `cell_size`
//! of the query is found regardless of which side of a cell border it fell on.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::math::{distance_sq, Point2};

use super::node::{NodeData, NodeId};

#[derive(Debug, Default)]
pub struct SpatialIndex {
    cell_size: f64,
    grid: FxHashMap<(i64, i64), Vec<NodeId>>,
}

impl SpatialIndex {
    /// Creates an empty index. `cell_size` should be >= the query tolerance.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            grid: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, id: NodeId, point: &Point2) {
        let cell = self.cell_coords(point);
        self.grid.entry(cell).or_default().push(id);
    }

    /// Returns the closest node within `tolerance` of `point`.
    #[must_use]
    pub fn find_near(
        &self,
        nodes: &SlotMap<NodeId, NodeData>,
        point: &Point2,
        tolerance: f64,
    ) -> Option<NodeId> {
        let (cx, cy) = self.cell_coords(point);
        let tol_sq = tolerance * tolerance;
        let mut best: Option<(NodeId, f64)> = None;

        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(ids) = self.grid.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &id in ids {
                    let Some(node) = nodes.get(id) else {
                        continue;
                    };
                    let d = distance_sq(&node.point, point);
                    if d <= tol_sq && best.is_none_or(|(_, bd)| d < bd) {
                        best = Some((id, d));
                    }
                }
            }
        }

        best.map(|(id, _)| id)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell_coords(&self, point: &Point2) -> (i64, i64) {
        (
            (point.x / self.cell_size).floor() as i64,
            (point.y / self.cell_size).floor() as i64,
        )
    }
}
