//! Operator module: dense linear operators acting on complex vectors.

pub mod dense;
pub use dense::LinearOperator;
