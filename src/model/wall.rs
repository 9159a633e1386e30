use std::fmt;

use crate::error::{ensure_finite, ensure_positive, GeometryError, Result};
use crate::math::{Point2, Segment2};

/// Wall thickness used when the caller does not supply one (mm).
pub const DEFAULT_WALL_THICKNESS: f64 = 100.0;

/// Wall height used when the caller does not supply one (mm).
pub const DEFAULT_WALL_HEIGHT: f64 = 3000.0;

/// Identifier of a wall, assigned by the project data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallId(pub u64);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A straight wall drawn on the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSegment {
    pub id: WallId,
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    pub height: f64,
    /// Free-form usage tag from the data store (e.g. "exterior", "partition").
    pub application_type: String,
}

impl WallSegment {
    /// Creates a wall with default thickness and height.
    #[must_use]
    pub fn new(id: WallId, start: Point2, end: Point2) -> Self {
        Self {
            id,
            start,
            end,
            thickness: DEFAULT_WALL_THICKNESS,
            height: DEFAULT_WALL_HEIGHT,
            application_type: String::new(),
        }
    }

    /// Sets the wall thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the wall height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the application type tag.
    #[must_use]
    pub fn with_application_type(mut self, application_type: impl Into<String>) -> Self {
        self.application_type = application_type.into();
        self
    }

    /// The centerline as a segment.
    #[must_use]
    pub fn segment(&self) -> Segment2 {
        Segment2::new(self.start, self.end)
    }

    /// Euclidean length of the centerline.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segment().length()
    }

    /// Midpoint of the centerline.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.segment().midpoint()
    }

    /// The same wall with start and end swapped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            ..self.clone()
        }
    }

    /// Checks that coordinates are finite and dimensions positive.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` for NaN/infinite coordinates,
    /// `GeometryError::ParameterOutOfRange` for non-positive thickness or
    /// height, and `GeometryError::Degenerate` for a zero-length wall.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("wall.start.x", self.start.x)?;
        ensure_finite("wall.start.y", self.start.y)?;
        ensure_finite("wall.end.x", self.end.x)?;
        ensure_finite("wall.end.y", self.end.y)?;
        ensure_positive("wall.thickness", self.thickness)?;
        ensure_positive("wall.height", self.height)?;
        if self.length() <= 0.0 {
            return Err(
                GeometryError::Degenerate(format!("wall {} has zero length", self.id)).into(),
            );
        }
        Ok(())
    }
}
