use crate::{subdivide::Subdivide, Evaluate};

use super::error::{CurveError, CurveResult};
use super::line::Line;
use super::linspace::linspace;
use super::piecewise::Piecewise;
use super::polyline::connect;
use super::vector::Vector;
use crate::vec2;

mod evaluate;

// A Bezier curve of arbitrary degree. The control point list is never empty; a
// single point is a degree 0 curve that evaluates to itself everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier {
    points: Vec<Vector>,
}

impl Bezier {
    pub fn new(points: Vec<Vector>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyInput);
        }

        return Ok(Bezier { points });
    }

    pub fn line(p0: Vector, p1: Vector) -> Self {
        return Bezier {
            points: vec![p0, p1],
        };
    }

    pub fn quadratic(p0: Vector, p1: Vector, p2: Vector) -> Self {
        return Bezier {
            points: vec![p0, p1, p2],
        };
    }

    pub fn cubic(p0: Vector, p1: Vector, p2: Vector, p3: Vector) -> Self {
        return Bezier {
            points: vec![p0, p1, p2, p3],
        };
    }

    pub fn control_points(&self) -> &[Vector] {
        return &self.points;
    }

    pub fn into_control_points(self) -> Vec<Vector> {
        return self.points;
    }

    pub fn degree(&self) -> usize {
        return self.points.len() - 1;
    }

    pub fn reverse(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        return Bezier { points };
    }

    /// Approximate the curve on [0, u] with the polyline through samples taken
    /// every `rate` units of parameter. The endpoint sample is always included.
    pub fn flatten_to(&self, u: f64, rate: f64) -> CurveResult<Piecewise<Line>> {
        let samples = linspace(0., u, rate)?;

        log::trace!(
            "flattening degree {} curve to u = {} with {} samples",
            self.degree(),
            u,
            samples.len()
        );
        if samples.len() > 100_000 {
            log::warn!(
                "flattening produced {} samples, rate {} is probably finer than intended",
                samples.len(),
                rate
            );
        }

        let points: Vec<Vector> = samples.iter().map(|t| self.at(*t)).collect();

        return Ok(Piecewise::new(connect(&points), None));
    }

    /// Approximate the whole curve with a polyline. See flatten_to.
    pub fn flatten(&self, rate: f64) -> CurveResult<Piecewise<Line>> {
        return self.flatten_to(1.0, rate);
    }
}

/// The Bernstein basis polynomial of degree n at index i, evaluated at u. These
/// are the weights that blend the control points of a degree n curve. Zero for
/// i past the degree, like the binomial underneath it.
pub fn bernstein(n: usize, i: usize, u: f64) -> f64 {
    if i > n {
        return 0.;
    }

    return binomial(n, i) as f64 * u.powi(i as i32) * (1. - u).powi((n - i) as i32);
}

/// Evaluate the curve defined by an arbitrary control point slice at u, as the
/// Bernstein-weighted sum of the points.
pub fn evaluate(points: &[Vector], u: f64) -> CurveResult<Vector> {
    if points.is_empty() {
        return Err(CurveError::EmptyInput);
    }

    return Ok(bernstein_sum(points, u));
}

// Callers in this module guarantee points is non-empty.
fn bernstein_sum(points: &[Vector], u: f64) -> Vector {
    let n = points.len() - 1;

    let mut sum = vec2!(0., 0.);
    for (i, point) in points.iter().enumerate() {
        sum += *point * bernstein(n, i, u);
    }

    return sum;
}

// Integer multiplication ladder, not a factorial ratio. Each partial product is
// itself a binomial coefficient, so the division at every step is exact.
fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }

    let n = n as u128;
    return (1..=k as u128).fold(1u128, |acc, i| acc * (n + 1 - i) / i);
}

impl Subdivide for Bezier {
    fn split(&self, t: f64) -> Option<(Bezier, Bezier)> {
        if t == 1. || t == 0. {
            return None;
        }

        // Perform de Casteljau's algorithm to split the curve at t. The first
        // point of every generation walks the left half's control polygon, the
        // last point walks the right half's in reverse.
        let mut left = Vec::with_capacity(self.points.len());
        let mut right = Vec::with_capacity(self.points.len());

        let mut current = self.points.clone();
        left.push(current[0]);
        right.push(current[current.len() - 1]);

        while current.len() > 1 {
            let mut next = Vec::with_capacity(current.len() - 1);
            for pair in current.windows(2) {
                next.push(pair[0].lerp(pair[1], t));
            }

            left.push(next[0]);
            right.push(next[next.len() - 1]);
            current = next;
        }

        right.reverse();

        let first_half = Bezier { points: left };
        let second_half = Bezier { points: right };

        Some((first_half, second_half))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_coefficients() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(4, 0), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(4, 4), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(10, 5), 252);
        assert_eq!(binomial(3, 5), 0);

        // Large enough that a f64 factorial ratio would have drifted.
        assert_eq!(binomial(60, 30), 118264581564861424);
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for &u in &[0., 0.25, 0.5, 0.75, 1.] {
            let sum: f64 = (0..=5).map(|i| bernstein(5, i, u)).sum();
            assert!((sum - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn bernstein_past_the_degree_is_zero() {
        assert_eq!(bernstein(3, 4, 0.5), 0.);
        assert_eq!(bernstein(0, 1, 0.25), 0.);
    }
}
