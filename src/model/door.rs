use crate::error::{ensure_finite, ensure_positive, GeometryError, Result};

use super::WallId;

/// A door placed on a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub wall_id: WallId,
    /// Center of the opening as a fraction (0..1) of the wall run, measured
    /// from the wall's start.
    pub position: f64,
    pub width: f64,
    /// Head height of the opening above the floor.
    pub height: f64,
    pub door_type: String,
}

impl Door {
    /// Creates a door with an empty type tag.
    #[must_use]
    pub fn new(wall_id: WallId, position: f64, width: f64, height: f64) -> Self {
        Self {
            wall_id,
            position,
            width,
            height,
            door_type: String::new(),
        }
    }

    /// Sets the door type tag.
    #[must_use]
    pub fn with_door_type(mut self, door_type: impl Into<String>) -> Self {
        self.door_type = door_type.into();
        self
    }

    /// The opening interval `[start, end]` along a run of `run_length`.
    ///
    /// When the wall is mirrored its offsets are read from the far end, so the
    /// stored fraction is flipped to `1 - position`.
    #[must_use]
    pub fn cutout(&self, run_length: f64, mirrored: bool) -> (f64, f64) {
        let fraction = if mirrored {
            1.0 - self.position
        } else {
            self.position
        };
        let center = fraction * run_length;
        let half = self.width * 0.5;
        (center - half, center + half)
    }

    /// Checks position and dimensions.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the position is outside
    /// `[0, 1]` or a dimension is non-positive.
    pub fn validate(&self) -> Result<()> {
        let position = ensure_finite("door.position", self.position)?;
        if !(0.0..=1.0).contains(&position) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "door.position",
                value: position,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        ensure_positive("door.width", self.width)?;
        ensure_positive("door.height", self.height)?;
        Ok(())
    }
}
