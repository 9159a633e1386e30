use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, JOINT_TOLERANCE, TOLERANCE};
use crate::model::WallSegment;

/// Dominant direction of a wall on the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallAxis {
    Horizontal,
    Vertical,
}

impl WallAxis {
    /// Vertical when `|dy| > |dx|`, horizontal otherwise (45° counts as horizontal).
    #[must_use]
    pub fn of(wall: &WallSegment) -> Self {
        let d = wall.end - wall.start;
        if d.y.abs() > d.x.abs() {
            WallAxis::Vertical
        } else {
            WallAxis::Horizontal
        }
    }
}

/// One of a wall's two geometric endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallEnd {
    Start,
    End,
}

/// One of a wall's two ends in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndSide {
    Left,
    Right,
}

/// Whether a wall's geometric start is its left end.
///
/// Horizontal walls read left to right, vertical walls bottom to top.
#[must_use]
pub fn start_is_left(wall: &WallSegment) -> bool {
    match WallAxis::of(wall) {
        WallAxis::Horizontal => wall.start.x <= wall.end.x,
        WallAxis::Vertical => wall.start.y <= wall.end.y,
    }
}

/// Maps a geometric endpoint to its reading-order side.
#[must_use]
pub fn end_side(wall: &WallSegment, end: WallEnd) -> EndSide {
    match (end, start_is_left(wall)) {
        (WallEnd::Start, true) | (WallEnd::End, false) => EndSide::Left,
        (WallEnd::Start, false) | (WallEnd::End, true) => EndSide::Right,
    }
}

/// Returns `(left, right)` endpoints of a wall.
#[must_use]
pub fn left_right(wall: &WallSegment) -> (Point2, Point2) {
    if start_is_left(wall) {
        (wall.start, wall.end)
    } else {
        (wall.end, wall.start)
    }
}

/// Which side of a wall's infinite line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    Positive,
    Negative,
    On,
}

/// Classifies `point` against the infinite line through `wall`.
///
/// Axis-aligned walls compare a single coordinate; diagonal walls use the
/// signed distance along the left normal of the reading direction, so the
/// answer does not depend on which end the wall was drawn from. `Positive`
/// is above a horizontal wall and left of a vertical one. Points within
/// [`JOINT_TOLERANCE`] of the line are `On`.
#[must_use]
pub fn line_side(wall: &WallSegment, point: &Point2) -> LineSide {
    let d = wall.end - wall.start;
    let offset = if d.y.abs() < TOLERANCE {
        point.y - wall.start.y
    } else if d.x.abs() < TOLERANCE {
        wall.start.x - point.x
    } else {
        let (left, right) = left_right(wall);
        let reading = right - left;
        (point - left).dot(&(left_normal(reading) / reading.norm()))
    };

    if offset > JOINT_TOLERANCE {
        LineSide::Positive
    } else if offset < -JOINT_TOLERANCE {
        LineSide::Negative
    } else {
        LineSide::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WallId;

    fn wall(ax: f64, ay: f64, bx: f64, by: f64) -> WallSegment {
        WallSegment::new(WallId(1), Point2::new(ax, ay), Point2::new(bx, by))
    }

    #[test]
    fn axis_from_dominant_delta() {
        assert_eq!(WallAxis::of(&wall(0.0, 0.0, 100.0, 10.0)), WallAxis::Horizontal);
        assert_eq!(WallAxis::of(&wall(0.0, 0.0, 10.0, 100.0)), WallAxis::Vertical);
        assert_eq!(WallAxis::of(&wall(0.0, 0.0, 50.0, 50.0)), WallAxis::Horizontal);
    }

    #[test]
    fn left_end_follows_reading_order() {
        assert!(start_is_left(&wall(0.0, 0.0, 100.0, 0.0)));
        assert!(!start_is_left(&wall(100.0, 0.0, 0.0, 0.0)));
        assert!(start_is_left(&wall(0.0, 0.0, 0.0, 100.0)));
        assert!(!start_is_left(&wall(0.0, 100.0, 0.0, 0.0)));
    }

    #[test]
    fn end_side_mapping() {
        let reversed = wall(100.0, 0.0, 0.0, 0.0);
        assert_eq!(end_side(&reversed, WallEnd::Start), EndSide::Right);
        assert_eq!(end_side(&reversed, WallEnd::End), EndSide::Left);
        let (l, r) = left_right(&reversed);
        assert_eq!(l, Point2::new(0.0, 0.0));
        assert_eq!(r, Point2::new(100.0, 0.0));
    }

    #[test]
    fn line_side_ignores_wall_direction() {
        let forward = wall(0.0, 0.0, 1000.0, 0.0);
        let backward = forward.flipped();
        let above = Point2::new(500.0, 300.0);
        assert_eq!(line_side(&forward, &above), line_side(&backward, &above));
        assert_ne!(
            line_side(&forward, &above),
            line_side(&forward, &Point2::new(500.0, -300.0))
        );
        assert_eq!(line_side(&forward, &Point2::new(2000.0, 0.5)), LineSide::On);
        assert_eq!(line_side(&forward, &above), LineSide::Positive);
        assert_eq!(line_side(&backward, &above), LineSide::Positive);
    }

    #[test]
    fn vertical_side_ignores_wall_direction() {
        let up = wall(0.0, 0.0, 0.0, 1000.0);
        let left = Point2::new(-200.0, 500.0);
        assert_eq!(line_side(&up, &left), LineSide::Positive);
        assert_eq!(line_side(&up.flipped(), &left), LineSide::Positive);
    }

    #[test]
    fn line_side_vertical_and_diagonal() {
        let vertical = wall(0.0, 0.0, 0.0, 1000.0);
        assert_ne!(
            line_side(&vertical, &Point2::new(-10.0, 500.0)),
            line_side(&vertical, &Point2::new(10.0, 500.0))
        );
        let diagonal = wall(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(
            line_side(&diagonal, &Point2::new(0.0, 1000.0)),
            line_side(&diagonal.flipped(), &Point2::new(0.0, 1000.0))
        );
        assert_eq!(line_side(&diagonal, &Point2::new(500.0, 500.0)), LineSide::On);
    }
}
