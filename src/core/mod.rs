//! Shared traits and scalar coercion.

pub mod scalar;
pub mod traits;

pub use scalar::IntoComplex;
pub use traits::{Apply, InnerProduct, Shape};
