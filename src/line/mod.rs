use crate::subdivide::Subdivide;
use crate::Evaluate;

use super::vector::Vector;

mod evaluate;
mod kurbo;

// A line segment parameterized over 0-1. Evaluating outside that range extrapolates
// along the infinite line through the two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vector,
    pub end: Vector,
}

impl Line {
    pub fn from_points(start: Vector, end: Vector) -> Self {
        return Line { start, end };
    }

    pub fn midpoint(&self) -> Vector {
        return self.start.lerp(self.end, 0.5);
    }

    pub fn length(&self) -> f64 {
        return self.start.distance(self.end);
    }

    pub fn reverse(&self) -> Self {
        Line::from_points(self.end, self.start)
    }
}

impl Subdivide for Line {
    fn split(&self, t: f64) -> Option<(Line, Line)> {
        if t == 1. || t == 0. {
            return None;
        }

        let mid = self.at(t);

        let first_half = Line::from_points(self.start, mid);
        let second_half = Line::from_points(mid, self.end);

        Some((first_half, second_half))
    }
}
