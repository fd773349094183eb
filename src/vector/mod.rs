mod conv;
mod flo;
mod kurbo;

#[derive(Clone, Copy, Debug)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[macro_export]
macro_rules! vec2 {
    ($x: expr, $y: expr) => {
        Vector { x: $x, y: $y }
    };
}

impl Vector {
    pub fn from_components(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn is_near(self, v1: Vector, eps: f64) -> bool {
        self.x - v1.x <= eps
            && self.x - v1.x >= -eps
            && self.y - v1.y <= eps
            && self.y - v1.y >= -eps
    }

    pub fn magnitude(self) -> f64 {
        f64::sqrt(f64::powi(self.x, 2) + f64::powi(self.y, 2))
    }

    pub fn distance(self, v1: Vector) -> f64 {
        let v0 = self;
        f64::sqrt(f64::powi(v1.x - v0.x, 2) + f64::powi(v1.y - v0.y, 2))
    }

    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        Vector {
            x: self.x / magnitude,
            y: self.y / magnitude,
        }
    }

    pub fn dot(self, v1: Vector) -> f64 {
        self.x * v1.x + self.y * v1.y
    }

    pub fn lerp(self, v1: Vector, t: f64) -> Self {
        let v0 = self;
        Vector {
            x: (1. - t) * v0.x + t * v1.x,
            y: (1. - t) * v0.y + t * v1.y,
        }
    }
}
