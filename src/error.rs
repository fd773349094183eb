use thiserror::Error;

pub type CurveResult<T> = Result<T, CurveError>;

// The two ways a caller can hand us something we cannot work with. Everything
// else in the crate is total over well-typed input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CurveError {
    /// A sampling configuration that produces no values: a nonpositive
    /// increment, or a start bound already past the end bound.
    #[error("invalid sample range [{start}, {end}] with increment {increment}")]
    InvalidRange {
        start: f64,
        end: f64,
        increment: f64,
    },

    /// An empty control polygon; no Bernstein sum exists for it.
    #[error("empty control polygon")]
    EmptyInput,
}
