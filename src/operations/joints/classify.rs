use crate::math::intersect_2d::supporting_lines_intersect_2d;
use crate::math::{distance_sq, Point2, JOINT_TOLERANCE};
use crate::model::{JointMethod, JointRecord, WallSegment};
use crate::topology::WallGraph;

use super::orientation::{end_side, EndSide, WallEnd};
use super::{find_wall, joints_of};

/// Joint method applied at each end of a wall, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndJoints {
    pub left: JointMethod,
    pub right: JointMethod,
}

impl EndJoints {
    /// Creates end joints from explicit methods.
    #[must_use]
    pub fn new(left: JointMethod, right: JointMethod) -> Self {
        Self { left, right }
    }

    fn merge(&mut self, side: EndSide, method: JointMethod) {
        let slot = match side {
            EndSide::Left => &mut self.left,
            EndSide::Right => &mut self.right,
        };
        *slot = slot.dominant(method);
    }
}

/// Determines which joint method applies at the left and right end of a wall.
///
/// Every joint record touching the wall is located on the wall by finding
/// where the neighbor meets it, then assigned to the nearer end. Ends with no
/// joint, or only joints to walls that no longer exist, stay `ButtIn`.
pub struct ClassifyEnds<'a> {
    wall: &'a WallSegment,
    joints: &'a [JointRecord],
    walls: &'a [WallSegment],
}

impl<'a> ClassifyEnds<'a> {
    /// Creates a new `ClassifyEnds` query.
    #[must_use]
    pub fn new(wall: &'a WallSegment, joints: &'a [JointRecord], walls: &'a [WallSegment]) -> Self {
        Self {
            wall,
            joints,
            walls,
        }
    }

    /// Executes the query. Never fails; dangling joints are logged and skipped.
    #[must_use]
    pub fn execute(&self) -> EndJoints {
        let mut ends = EndJoints::default();

        for joint in joints_of(self.wall.id, self.joints) {
            let Some(other_id) = joint.other(self.wall.id) else {
                continue;
            };
            let Some(neighbor) = find_wall(self.walls, other_id) else {
                tracing::warn!(
                    wall = %self.wall.id,
                    neighbor = %other_id,
                    "joint references a missing wall, ignoring it"
                );
                continue;
            };
            let contact = contact_point(self.wall, neighbor);
            let side = end_side(self.wall, nearest_end(self.wall, &contact));
            ends.merge(side, joint.method);
        }

        tracing::debug!(
            wall = %self.wall.id,
            left = ?ends.left,
            right = ?ends.right,
            "classified wall ends"
        );
        ends
    }
}

/// Where `neighbor` meets `wall`.
///
/// Tries, in order: an endpoint of the neighbor touching either end of the
/// wall, the bounded crossing, the crossing of the supporting lines (walls
/// drawn short of each other), and finally the neighbor endpoint nearest to
/// the wall for parallel walls.
fn contact_point(wall: &WallSegment, neighbor: &WallSegment) -> Point2 {
    let tol_sq = JOINT_TOLERANCE * JOINT_TOLERANCE;
    for p in [neighbor.start, neighbor.end] {
        if distance_sq(&p, &wall.start) <= tol_sq || distance_sq(&p, &wall.end) <= tol_sq {
            return p;
        }
    }

    let (a, b) = (wall.segment(), neighbor.segment());
    if let Some(p) = WallGraph::intersect(&a, &b) {
        return p;
    }
    if let Some(p) = supporting_lines_intersect_2d(&a, &b) {
        return p;
    }

    let gap = |p: &Point2| distance_sq(p, &wall.start).min(distance_sq(p, &wall.end));
    if gap(&neighbor.start) <= gap(&neighbor.end) {
        neighbor.start
    } else {
        neighbor.end
    }
}

/// The wall endpoint closer to `point`; ties go to the start.
fn nearest_end(wall: &WallSegment, point: &Point2) -> WallEnd {
    if distance_sq(point, &wall.start) <= distance_sq(point, &wall.end) {
        WallEnd::Start
    } else {
        WallEnd::End
    }
}
