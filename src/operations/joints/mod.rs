mod classify;
mod mirror;
pub mod orientation;

pub use classify::{ClassifyEnds, EndJoints};
pub use mirror::ShouldMirror;

use crate::model::{JointRecord, WallId, WallSegment};

/// Looks up a wall by id.
pub(crate) fn find_wall(walls: &[WallSegment], id: WallId) -> Option<&WallSegment> {
    walls.iter().find(|w| w.id == id)
}

/// Joint records that involve `wall`, in recorded order.
pub(crate) fn joints_of(
    wall: WallId,
    joints: &[JointRecord],
) -> impl Iterator<Item = &JointRecord> {
    joints.iter().filter(move |j| j.touches(wall))
}
