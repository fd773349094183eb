use super::super::{Evaluate, Line, Rect, Vector};

impl Evaluate for Line {
    fn at(&self, t: f64) -> Vector {
        return self.start.lerp(self.end, t);
    }

    // The tangent of a line is constant along its whole length.
    fn tangent_at(&self, _t: f64) -> Vector {
        return self.end - self.start;
    }

    fn bounds(&self) -> Rect {
        return Rect::AABB_from_points(&[self.start, self.end]);
    }

    fn apply_transform<F>(&self, transform: F) -> Self
    where
        F: Fn(&Vector) -> Vector,
    {
        return Line {
            start: transform(&self.start),
            end: transform(&self.end),
        };
    }

    fn start_point(&self) -> Vector {
        return self.start;
    }

    fn end_point(&self) -> Vector {
        return self.end;
    }
}
