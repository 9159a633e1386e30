pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type (plan coordinates, millimeters).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type (plan coordinates plus elevation).
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Determinants below this magnitude are treated as parallel.
pub const TOLERANCE: f64 = 1e-10;

/// Distance under which two wall endpoints are merged into one graph node.
pub const POINT_MERGE_TOLERANCE: f64 = 1e-4;

/// Distance under which a wall endpoint is considered to touch a neighbor.
pub const JOINT_TOLERANCE: f64 = 1.0;

/// Allowed drift between the sum of panel widths and the run length.
pub const WIDTH_TOLERANCE: f64 = 0.01;

/// A straight 2D segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    /// The same segment traversed end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Squared distance between two points.
#[must_use]
pub fn distance_sq(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm_squared()
}
