use crate::math::Point2;
use crate::model::WallId;

slotmap::new_key_type! {
    /// Unique identifier for a node in the wall graph.
    pub struct NodeId;
}

/// A canonical wall endpoint shared by every wall that ends there.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The plan position of the node.
    pub point: Point2,
    /// Nodes reachable along a single wall, without duplicates.
    pub neighbors: Vec<NodeId>,
    /// Walls that start or end at this node.
    pub walls: Vec<WallId>,
}

impl NodeData {
    /// Creates an isolated node at the given point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            neighbors: Vec::new(),
            walls: Vec::new(),
        }
    }

    pub(super) fn link(&mut self, other: NodeId) {
        if !self.neighbors.contains(&other) {
            self.neighbors.push(other);
        }
    }

    pub(super) fn attach(&mut self, wall: WallId) {
        if !self.walls.contains(&wall) {
            self.walls.push(wall);
        }
    }
}
