use super::super::{Bezier, Evaluate, Rect, Vector};
use super::bernstein_sum;
use crate::vec2;

impl Evaluate for Bezier {
    fn at(&self, t: f64) -> Vector {
        return bernstein_sum(self.control_points(), t);
    }

    fn tangent_at(&self, t: f64) -> Vector {
        let points = self.control_points();

        // A degree 0 curve is a stationary point.
        if points.len() < 2 {
            return vec2!(0., 0.);
        }

        // The derivative of a degree n curve is the degree n - 1 curve over the
        // scaled forward differences of the control polygon.
        let n = (points.len() - 1) as f64;
        let derivative: Vec<Vector> = points.windows(2).map(|w| (w[1] - w[0]) * n).collect();

        return bernstein_sum(&derivative, t);
    }

    fn bounds(&self) -> Rect {
        return Rect::AABB_from_points(self.control_points());
    }

    fn apply_transform<F>(&self, transform: F) -> Self
    where
        F: Fn(&Vector) -> Vector,
    {
        let transformed: Vec<Vector> = self.control_points().iter().map(|p| transform(p)).collect();

        return Bezier {
            points: transformed,
        };
    }

    fn start_point(&self) -> Vector {
        return self.control_points()[0];
    }

    fn end_point(&self) -> Vector {
        let points = self.control_points();
        return points[points.len() - 1];
    }
}
