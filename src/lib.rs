pub mod arclenparameterization;
pub mod bezier;
pub mod consts;
pub mod decasteljau;
pub mod error;
pub mod evaluate;
pub mod line;
pub mod linspace;
pub mod parameterization;
pub mod piecewise;
pub mod polygon;
pub mod polyline;
pub mod rect;
pub mod subdivide;
pub mod vector;

pub use self::arclenparameterization::ArcLengthParameterization;
pub use self::bezier::Bezier;
pub use self::decasteljau::{construct, levels, point_at, Element, KurboElement};
pub use self::error::{CurveError, CurveResult};
pub use self::line::Line;
pub use self::linspace::linspace;
pub use self::parameterization::Parameterization;
pub use self::piecewise::{Piecewise, SegmentIterator};
pub use self::rect::Rect;
pub use self::subdivide::Subdivide;
pub use self::vector::Vector;

pub use self::evaluate::Evaluate;
pub use self::evaluate::{EvalRotate, EvalScale, EvalTranslate};
