use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Area centroid of a simple polygon.
///
/// Falls back to the vertex average when the polygon has no area.
#[must_use]
pub fn polygon_centroid_2d(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        #[allow(clippy::cast_precision_loss)]
        let inv = 1.0 / points.len() as f64;
        let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
        return Some(Point2::from(sum * inv));
    }
    let n = points.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    let k = 1.0 / (6.0 * area);
    Some(Point2::new(cx * k, cy * k))
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Whether `b` lies on the straight line through `a` and `c`.
///
/// Uses the cross product normalized by the segment lengths, so the result
/// does not depend on the plan scale.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let ab = b - a;
    let bc = c - b;
    let scale = ab.norm() * bc.norm();
    if scale < TOLERANCE {
        return true;
    }
    (ab.perp(&bc) / scale).abs() < 1e-9
}

/// Removes vertices that lie on the line through their neighbors.
#[must_use]
pub fn remove_collinear(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let mut kept: Vec<Point2> = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        if !is_collinear(&prev, &points[i], &next) {
            kept.push(points[i]);
        }
    }
    kept
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert_relative_eq!(signed_area_2d(&square()), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert_relative_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_rectangle() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5000.0, 0.0),
            Point2::new(5000.0, 4000.0),
            Point2::new(0.0, 4000.0),
        ];
        let c = polygon_centroid_2d(&pts).unwrap();
        assert_relative_eq!(c, Point2::new(2500.0, 2000.0), epsilon = 1e-9);
    }

    #[test]
    fn centroid_of_flat_polygon_averages() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(4.0, 0.0)];
        let c = polygon_centroid_2d(&pts).unwrap();
        assert_relative_eq!(c, Point2::new(2.0, 0.0));
        assert!(polygon_centroid_2d(&[]).is_none());
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(Vector2::new(1.0, 0.0));
        assert_relative_eq!(n, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn collinear_vertices_are_dropped() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2500.0, 0.0),
            Point2::new(5000.0, 0.0),
            Point2::new(5000.0, 4000.0),
            Point2::new(0.0, 4000.0),
        ];
        let simplified = remove_collinear(&pts);
        assert_eq!(simplified.len(), 4);
        assert!(!simplified.contains(&Point2::new(2500.0, 0.0)));
    }
}
