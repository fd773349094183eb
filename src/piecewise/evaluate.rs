use crate::evaluate::Evaluate;
use crate::piecewise::Piecewise;
use crate::rect::Rect;
use crate::vector::Vector;

// Implements the evaluate trait for Piecewise
impl<T: Evaluate> Evaluate for Piecewise<T> {
    // return the x, y of our curve at time t
    fn at(&self, t: f64) -> Vector {
        let curve_index = self.seg_n(t);
        let offset_time = self.seg_t(t);

        let ref seg = self.segs[curve_index];

        return seg.at(offset_time);
    }

    // returns the derivative at time t
    fn tangent_at(&self, t: f64) -> Vector {
        let curve_index = self.seg_n(t);
        let offset_time = self.seg_t(t);

        let ref seg = self.segs[curve_index];

        return seg.tangent_at(offset_time);
    }

    fn bounds(&self) -> Rect {
        // again maybe success/failure? These are mainly here to catch bugs right now.
        if self.segs.len() == 0 {
            panic!("An empty piecewise knows no bounds!")
        }

        let mut output = Rect {
            left: f64::INFINITY,
            bottom: f64::INFINITY,
            right: -f64::INFINITY,
            top: -f64::INFINITY,
        };

        for curve in &self.segs {
            output = output.encapsulate_rect(curve.bounds());
        }

        return output;
    }

    fn apply_transform<F>(&self, transform: F) -> Self
    where
        F: Fn(&Vector) -> Vector,
    {
        let output = self
            .segs
            .iter()
            .map(|seg| seg.apply_transform(&transform))
            .collect();

        return Piecewise::new(output, Some(self.cuts.clone()));
    }

    fn start_point(&self) -> Vector {
        if let Some(first_curve) = self.segs.first() {
            return first_curve.start_point();
        }

        panic!("Empty piecewise has no start point.")
    }

    fn end_point(&self) -> Vector {
        if let Some(last_curve) = self.segs.last() {
            return last_curve.end_point();
        }

        panic!("Empty piecewise has no end point.")
    }
}
