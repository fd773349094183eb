use super::Line;
use crate::vector::Vector;

impl Line {
    pub fn to_kurbo_line(self) -> kurbo::Line {
        return kurbo::Line::new(self.start.to_kurbo_point(), self.end.to_kurbo_point());
    }

    pub fn from_kurbo_line(l: &kurbo::Line) -> Self {
        return Line {
            start: Vector::from_kurbo_point(&l.p0),
            end: Vector::from_kurbo_point(&l.p1),
        };
    }
}

impl From<kurbo::Line> for Line {
    fn from(l: kurbo::Line) -> Line {
        Line::from_kurbo_line(&l)
    }
}

impl From<Line> for kurbo::Line {
    fn from(l: Line) -> kurbo::Line {
        l.to_kurbo_line()
    }
}
