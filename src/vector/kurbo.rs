use super::Vector;

impl Vector {
    pub fn to_kurbo_point(self) -> kurbo::Point {
        return kurbo::Point::new(self.x, self.y);
    }

    pub fn from_kurbo_point(p: &kurbo::Point) -> Self {
        return Vector { x: p.x, y: p.y };
    }
}

impl From<kurbo::Point> for Vector {
    fn from(p: kurbo::Point) -> Vector {
        Vector::from_kurbo_point(&p)
    }
}

impl From<Vector> for kurbo::Point {
    fn from(v: Vector) -> kurbo::Point {
        v.to_kurbo_point()
    }
}
