// A parameterization maps our 0-1 evaluation parameter onto some other 0-1 space, for
// example one where equal steps move equal distances along the curve.
pub trait Parameterization {
    fn parameterize(&self, u: f64) -> f64;
}
