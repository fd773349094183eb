use super::error::CurveResult;
use super::linspace::linspace;
use super::vector::Vector;
use crate::vec2;

/// Control points for a degree `degree` curve, spaced evenly around a circle.
///
/// Walks the angles [0, 360] in steps of 360 / (degree + 1) and keeps the first
/// degree + 1 of them. The sampler's guaranteed final 360 degree sample would
/// double the first point, so it is dropped by the truncation.
pub fn inscribed_in_circle(degree: usize, center: Vector, radius: f64) -> CurveResult<Vec<Vector>> {
    let increment = 360. / (degree + 1) as f64;
    let angles = linspace(0., 360., increment)?;

    let points = angles
        .iter()
        .take(degree + 1)
        .map(|angle| {
            let rad = angle.to_radians();
            vec2!(
                center.x + radius * f64::cos(rad),
                center.y + radius * f64::sin(rad)
            )
        })
        .collect();

    return Ok(points);
}
