use super::error::{CurveError, CurveResult};

/// Sample the closed interval [start, end] by stepping from the start in units of
/// increment. The end bound is always part of the output, whether or not the
/// accumulated step lands on it exactly, so callers sampling a curve always see
/// its last point.
///
/// A nonpositive or NaN increment, or a start past the end, would produce nothing
/// sensible and comes back as an error instead.
pub fn linspace(start: f64, end: f64, increment: f64) -> CurveResult<Vec<f64>> {
    // Negated comparisons so NaN in any position falls into the error arm.
    if !(increment > 0.) || !(start <= end) {
        return Err(CurveError::InvalidRange {
            start,
            end,
            increment,
        });
    }

    let mut output = Vec::new();

    let mut current = start;
    while current <= end {
        output.push(current);
        current = current + increment;
    }

    // The accumulated step usually overshoots the end bound. The end belongs to
    // the sample set regardless, so append it when the loop did not land on it.
    if output.last() != Some(&end) {
        output.push(end);
    }

    return Ok(output);
}
