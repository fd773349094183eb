use super::Element;

// The construction lowered to kurbo shapes for consumers that already draw them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KurboElement {
    Line(kurbo::Line),
    Circle(kurbo::Circle),
}

impl Element {
    /// Points become circles of the given radius, since a bare point has no
    /// area to draw.
    pub fn to_kurbo(&self, point_radius: f64) -> KurboElement {
        match self {
            Element::Line(l) => KurboElement::Line(l.to_kurbo_line()),
            Element::Point(p) => {
                KurboElement::Circle(kurbo::Circle::new(p.to_kurbo_point(), point_radius))
            }
        }
    }
}
