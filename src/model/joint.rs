use super::WallId;

/// How two walls meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JointMethod {
    /// Square junction: one wall butts into the face of the other.
    #[default]
    ButtIn,
    /// Mitered junction: both walls are beveled at 45°.
    FortyFiveCut,
}

impl JointMethod {
    /// Rank used when several joints land on the same wall end.
    ///
    /// A bevel anywhere on an end forces bevel treatment of that end.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            JointMethod::ButtIn => 0,
            JointMethod::FortyFiveCut => 1,
        }
    }

    /// Returns whichever of the two methods wins on a shared wall end.
    #[must_use]
    pub fn dominant(self, other: Self) -> Self {
        if other.priority() > self.priority() {
            other
        } else {
            self
        }
    }
}

/// A recorded junction between two walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointRecord {
    pub wall_a: WallId,
    pub wall_b: WallId,
    pub method: JointMethod,
}

impl JointRecord {
    /// Creates a new joint record.
    #[must_use]
    pub fn new(wall_a: WallId, wall_b: WallId, method: JointMethod) -> Self {
        Self {
            wall_a,
            wall_b,
            method,
        }
    }

    /// Whether the joint involves `wall`.
    #[must_use]
    pub fn touches(&self, wall: WallId) -> bool {
        self.wall_a == wall || self.wall_b == wall
    }

    /// The wall on the other side of the joint from `wall`.
    ///
    /// Returns `None` if the joint does not involve `wall`, or if it joins
    /// the wall to itself.
    #[must_use]
    pub fn other(&self, wall: WallId) -> Option<WallId> {
        if self.wall_a == self.wall_b {
            None
        } else if self.wall_a == wall {
            Some(self.wall_b)
        } else if self.wall_b == wall {
            Some(self.wall_a)
        } else {
            None
        }
    }
}
