use std::f64::consts::{FRAC_PI_2, PI, TAU};

use rustc_hash::FxHashSet;

use crate::math::polygon_2d::{polygon_centroid_2d, remove_collinear, signed_area_2d};
use crate::math::{distance_sq, Point2, POINT_MERGE_TOLERANCE};

use super::node::NodeId;
use super::WallGraph;

/// Step bound on the boundary walk; guarantees termination on malformed graphs.
pub const MAX_BOUNDARY_STEPS: usize = 1000;

/// Outer outline of a connected wall network.
///
/// The last point implicitly connects back to the first. `complete` is false
/// when the walk stopped before closing the loop (dead end or step bound);
/// the collected points are still returned so callers can decide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Footprint {
    pub points: Vec<Point2>,
    pub complete: bool,
}

impl Footprint {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Enclosed area (always non-negative).
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points).abs()
    }

    /// Area centroid, used as the building interior reference point.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        polygon_centroid_2d(&self.points)
    }

    /// Length of the closed outline.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| (self.points[(i + 1) % n] - self.points[i]).norm())
            .sum()
    }
}

/// Traces the outer face of the graph component holding the leftmost node.
///
/// Starts at the minimum-x node (ties broken by minimum y) and repeatedly
/// takes the unvisited neighbor with the smallest signed turn relative to the
/// incoming edge. The first step behaves as if arriving heading straight down,
/// which sends the walk counter-clockwise along the outside.
pub(super) fn trace_outer_boundary(graph: &WallGraph) -> Footprint {
    let Some(start) = find_start_node(graph) else {
        return Footprint::default();
    };

    let mut boundary = vec![graph.nodes[start].point];
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    visited.insert(start);

    let mut current = start;
    let mut incoming_angle = -FRAC_PI_2;
    let mut complete = false;
    let mut steps = 0;

    while steps < MAX_BOUNDARY_STEPS {
        steps += 1;
        let next = pick_next_node(
            graph,
            current,
            start,
            incoming_angle,
            &visited,
            boundary.len(),
        );
        let Some(next) = next else {
            tracing::warn!(points = boundary.len(), "boundary walk reached a dead end");
            break;
        };
        if next == start {
            complete = true;
            break;
        }
        let from = graph.nodes[current].point;
        let to = graph.nodes[next].point;
        incoming_angle = (to.y - from.y).atan2(to.x - from.x);
        boundary.push(to);
        visited.insert(next);
        current = next;
    }

    if steps >= MAX_BOUNDARY_STEPS && !complete {
        tracing::warn!(
            steps,
            points = boundary.len(),
            "boundary walk hit the step bound, returning partial outline"
        );
    }

    finish(boundary, complete)
}

/// Drops a closing duplicate and collinear pass-through points.
fn finish(mut boundary: Vec<Point2>, complete: bool) -> Footprint {
    let tol_sq = POINT_MERGE_TOLERANCE * POINT_MERGE_TOLERANCE;
    if boundary.len() > 1 {
        let first = boundary[0];
        let last = boundary[boundary.len() - 1];
        if distance_sq(&first, &last) < tol_sq {
            boundary.pop();
        }
    }

    let points = remove_collinear(&boundary);
    if points.len() < 3 {
        return Footprint::default();
    }
    Footprint { points, complete }
}

/// Leftmost node, ties broken by lowest y.
fn find_start_node(graph: &WallGraph) -> Option<NodeId> {
    let mut best: Option<(NodeId, Point2)> = None;
    for (id, node) in &graph.nodes {
        let p = node.point;
        let better = match best {
            None => true,
            Some((_, b)) => {
                p.x < b.x - POINT_MERGE_TOLERANCE
                    || ((p.x - b.x).abs() <= POINT_MERGE_TOLERANCE && p.y < b.y)
            }
        };
        if better {
            best = Some((id, p));
        }
    }
    best.map(|(id, _)| id)
}

/// Picks the neighbor with the smallest signed turn from the incoming heading.
///
/// The start node only becomes a candidate once three points are collected.
fn pick_next_node(
    graph: &WallGraph,
    current: NodeId,
    start: NodeId,
    incoming_angle: f64,
    visited: &FxHashSet<NodeId>,
    collected: usize,
) -> Option<NodeId> {
    let here = graph.nodes[current].point;
    let mut best: Option<(NodeId, f64)> = None;

    for &next in &graph.nodes[current].neighbors {
        let closes_loop = next == start && collected >= 3;
        if visited.contains(&next) && !closes_loop {
            continue;
        }
        let there = graph.nodes[next].point;
        let outgoing = (there.y - here.y).atan2(there.x - here.x);
        let turn = normalize_turn(outgoing - incoming_angle);
        if best.is_none_or(|(_, bt)| turn < bt) {
            best = Some((next, turn));
        }
    }

    best.map(|(id, _)| id)
}

/// Normalizes an angle to `(-pi, pi]`.
fn normalize_turn(a: f64) -> f64 {
    let r = a % TAU;
    if r > PI {
        r - TAU
    } else if r <= -PI {
        r + TAU
    } else {
        r
    }
}
