use super::line::Line;
use super::polyline::connect;
use super::vector::Vector;
use crate::Evaluate;

mod kurbo;
pub use self::kurbo::KurboElement;

// What the construction hands a consumer to draw: the scaffolding lines between
// each generation of points, and the interpolated points themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    Line(Line),
    Point(Vector),
}

/// The full de Casteljau construction over a control polygon at parameter u.
///
/// Each generation connects the previous generation's points into lines, then
/// interpolates each line at u to produce the next, one point shorter,
/// generation. The output is level-ordered: a generation's lines, then its
/// points, then the following generation. A consumer drawing the elements in
/// sequence paints later generations on top of earlier ones.
///
/// The final element is the single point the generations collapse to, which is
/// the point on the curve itself.
pub fn construct(points: &[Vector], u: f64) -> Vec<Element> {
    let mut output = Vec::new();

    if points.is_empty() {
        return output;
    }

    log::trace!(
        "de Casteljau construction over {} control points at u = {}",
        points.len(),
        u
    );

    let mut current = points.to_vec();
    while current.len() > 1 {
        let lines = connect(&current);
        let next: Vec<Vector> = lines.iter().map(|l| l.at(u)).collect();

        output.extend(lines.iter().map(|l| Element::Line(*l)));
        output.extend(next.iter().map(|p| Element::Point(*p)));

        current = next;
    }

    output.push(Element::Point(current[0]));

    return output;
}

/// The interpolated point generations of the construction, without the lines.
/// The input generation is not repeated; the first entry is one point shorter
/// than the input, the last holds the single point on the curve.
pub fn levels(points: &[Vector], u: f64) -> Vec<Vec<Vector>> {
    let mut output = Vec::new();

    let mut current = points.to_vec();
    while current.len() > 1 {
        let next: Vec<Vector> = current.windows(2).map(|w| w[0].lerp(w[1], u)).collect();

        output.push(next.clone());
        current = next;
    }

    return output;
}

/// Run the generations down to the terminal point without keeping the
/// scaffolding. None on an empty control polygon.
pub fn point_at(points: &[Vector], u: f64) -> Option<Vector> {
    if points.is_empty() {
        return None;
    }

    let mut current = points.to_vec();
    while current.len() > 1 {
        current = current.windows(2).map(|w| w[0].lerp(w[1], u)).collect();
    }

    return Some(current[0]);
}
