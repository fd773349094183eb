use itertools::Itertools;

use super::line::Line;
use super::vector::Vector;

/// Connect a point sequence into the polyline visiting the points in order.
/// m points make m - 1 lines; fewer than two points make none.
pub fn connect(points: &[Vector]) -> Vec<Line> {
    return points
        .iter()
        .tuple_windows()
        .map(|(p0, p1)| Line::from_points(*p0, *p1))
        .collect();
}

/// Total length of the polyline through the given points.
pub fn length(points: &[Vector]) -> f64 {
    return points
        .iter()
        .tuple_windows()
        .map(|(p0, p1)| p0.distance(*p1))
        .sum();
}
