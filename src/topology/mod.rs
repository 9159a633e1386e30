mod footprint;
mod node;
mod spatial;

pub use footprint::{Footprint, MAX_BOUNDARY_STEPS};
pub use node::{NodeData, NodeId};

use slotmap::SlotMap;

use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Point2, Segment2, POINT_MERGE_TOLERANCE};
use crate::model::{WallId, WallSegment};
use spatial::SpatialIndex;

/// Point-adjacency graph over wall endpoints.
///
/// Coincident endpoints (within [`POINT_MERGE_TOLERANCE`]) collapse into a
/// single canonical node; every wall links its two end nodes. Nodes live in
/// an arena and are addressed by generational [`NodeId`]s.
#[derive(Debug)]
pub struct WallGraph {
    nodes: SlotMap<NodeId, NodeData>,
    index: SpatialIndex,
}

impl Default for WallGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WallGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            index: SpatialIndex::new(POINT_MERGE_TOLERANCE),
        }
    }

    /// Builds the graph from a set of walls.
    #[must_use]
    pub fn from_walls(walls: &[WallSegment]) -> Self {
        let mut graph = Self::new();
        for wall in walls {
            graph.add_wall(wall);
        }
        tracing::debug!(
            walls = walls.len(),
            nodes = graph.node_count(),
            "built wall graph"
        );
        graph
    }

    /// Adds a wall, merging its endpoints with existing nodes.
    ///
    /// A wall whose endpoints merge into one node registers the node but adds
    /// no edge.
    pub fn add_wall(&mut self, wall: &WallSegment) {
        let a = self.find_or_add_node(wall.start);
        let b = self.find_or_add_node(wall.end);
        self.nodes[a].attach(wall.id);
        self.nodes[b].attach(wall.id);
        if a == b {
            tracing::debug!(wall = %wall.id, "wall collapses to a single node");
            return;
        }
        self.nodes[a].link(b);
        self.nodes[b].link(a);
    }

    /// Returns the node within merge tolerance of `point`, if any.
    #[must_use]
    pub fn node_at(&self, point: &Point2) -> Option<NodeId> {
        self.index.find_near(&self.nodes, point, POINT_MERGE_TOLERANCE)
    }

    /// Returns the node data, if the id is valid.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Nodes one wall away from `id`.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id) {
            Some(node) => &node.neighbors,
            None => &[],
        }
    }

    /// Walls ending at `id`.
    #[must_use]
    pub fn walls_at(&self, id: NodeId) -> &[WallId] {
        match self.nodes.get(id) {
            Some(node) => &node.walls,
            None => &[],
        }
    }

    /// Number of distinct neighbors of `id`.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Number of canonical nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Bounded segment intersection (see [`segment_segment_intersect_2d`]).
    #[must_use]
    pub fn intersect(a: &Segment2, b: &Segment2) -> Option<Point2> {
        segment_segment_intersect_2d(a, b)
    }

    /// Traces the outer outline of the network.
    ///
    /// Degenerate or disconnected networks yield an empty footprint.
    #[must_use]
    pub fn build_footprint(&self) -> Footprint {
        let footprint = footprint::trace_outer_boundary(self);
        tracing::debug!(
            points = footprint.len(),
            complete = footprint.complete,
            "traced footprint"
        );
        footprint
    }

    fn find_or_add_node(&mut self, point: Point2) -> NodeId {
        if let Some(id) = self.node_at(&point) {
            return id;
        }
        let id = self.nodes.insert(NodeData::new(point));
        self.index.insert(id, &point);
        id
    }
}

/// Builds the wall graph and traces its outer outline in one call.
#[must_use]
pub fn build_footprint(walls: &[WallSegment]) -> Footprint {
    WallGraph::from_walls(walls).build_footprint()
}
