use crate::math::Point2;
use crate::model::{JointMethod, JointRecord, WallSegment};

use super::orientation::{line_side, LineSide};
use super::{find_wall, joints_of};

/// Decides whether a wall's panel order must be mirrored.
///
/// For each 45° joint on the wall, the connected wall's midpoint and the
/// building interior are classified against the wall's infinite line. A wall
/// whose bevel neighbor sits on the opposite side from the interior mirrors.
///
/// When several bevel joints vote differently the first disagreeing joint
/// wins; the conflict is logged so it can be reviewed.
pub struct ShouldMirror<'a> {
    wall: &'a WallSegment,
    joints: &'a [JointRecord],
    walls: &'a [WallSegment],
    interior: Point2,
}

impl<'a> ShouldMirror<'a> {
    /// Creates a new `ShouldMirror` query.
    #[must_use]
    pub fn new(
        wall: &'a WallSegment,
        joints: &'a [JointRecord],
        walls: &'a [WallSegment],
        interior: Point2,
    ) -> Self {
        Self {
            wall,
            joints,
            walls,
            interior,
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let interior_side = line_side(self.wall, &self.interior);
        if interior_side == LineSide::On {
            tracing::debug!(
                wall = %self.wall.id,
                "interior point lies on the wall line, not mirroring"
            );
            return false;
        }

        let votes: Vec<bool> = joints_of(self.wall.id, self.joints)
            .filter(|j| j.method == JointMethod::FortyFiveCut)
            .filter_map(|j| {
                let other = j.other(self.wall.id)?;
                let Some(neighbor) = find_wall(self.walls, other) else {
                    tracing::warn!(
                        wall = %self.wall.id,
                        neighbor = %other,
                        "joint references a missing wall, ignoring it"
                    );
                    return None;
                };
                match line_side(self.wall, &neighbor.midpoint()) {
                    LineSide::On => None,
                    side => Some(side != interior_side),
                }
            })
            .collect();

        let mirrored = votes.iter().any(|&disagrees| disagrees);
        if mirrored && votes.iter().any(|&disagrees| !disagrees) {
            tracing::warn!(
                wall = %self.wall.id,
                "bevel joints disagree about the interior side, first match wins"
            );
        }
        tracing::debug!(wall = %self.wall.id, mirrored, "mirror decision");
        mirrored
    }
}
