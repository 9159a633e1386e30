use super::{Point2, Segment2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `None` when the segments are parallel or coincident, or when the
/// crossing lies outside either segment (`t` or `u` outside `[0, 1]`).
#[must_use]
pub fn segment_segment_intersect_2d(a: &Segment2, b: &Segment2) -> Option<Point2> {
    let (t, u) = line_line_intersect_2d(&a.start, &a.direction(), &b.start, &b.direction())?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a.point_at(t))
    } else {
        None
    }
}

/// Intersection of the infinite lines supporting two segments.
///
/// Returns `None` only when the lines are parallel.
#[must_use]
pub fn supporting_lines_intersect_2d(a: &Segment2, b: &Segment2) -> Option<Point2> {
    line_line_intersect_2d(&a.start, &a.direction(), &b.start, &b.direction())
        .map(|(t, _)| a.point_at(t))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment2 {
        Segment2::new(Point2::new(ax, ay), Point2::new(bx, by))
    }

    #[test]
    fn crossing_segments() {
        let p =
            segment_segment_intersect_2d(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0));
        assert_relative_eq!(p.unwrap(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn touching_at_endpoint() {
        let p = segment_segment_intersect_2d(&seg(0.0, 0.0, 5.0, 0.0), &seg(5.0, 0.0, 5.0, 4.0));
        assert_relative_eq!(p.unwrap(), Point2::new(5.0, 0.0));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let base = seg(0.0, 0.0, 5.0, 0.0);
        assert!(segment_segment_intersect_2d(&base, &seg(0.0, 1.0, 5.0, 1.0)).is_none());
        assert!(segment_segment_intersect_2d(&base, &seg(1.0, 0.0, 4.0, 0.0)).is_none());
    }

    #[test]
    fn out_of_range_parameters() {
        let short = seg(0.0, 0.0, 4.0, 0.0);
        assert!(segment_segment_intersect_2d(&short, &seg(5.0, -1.0, 5.0, 1.0)).is_none());
    }

    #[test]
    fn supporting_lines_reach_past_gap() {
        // Wall ends 100 short of the neighbor's centerline.
        let wall = seg(0.0, 0.0, 4900.0, 0.0);
        let neighbor = seg(5000.0, 50.0, 5000.0, 4000.0);
        let p = supporting_lines_intersect_2d(&wall, &neighbor);
        assert_relative_eq!(p.unwrap(), Point2::new(5000.0, 0.0));
    }
}
