//! Vector module: dense complex vectors.

pub mod dense;
pub use dense::ComplexVector;
