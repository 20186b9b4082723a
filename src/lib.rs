//! cvspace: exact, immutable complex vector spaces and dense linear operators.
//!
//! This crate provides two value types: [`ComplexVector`], a fixed-dimension tuple of
//! complex scalars, and [`LinearOperator`], a dense row-major matrix acting on them.
//! Every operation returns a new value; nothing is mutated after construction.
//!
//! Inner products follow the physics convention: conjugate-linear in the first argument.

pub mod config;
pub mod core;
pub mod error;
pub mod operator;
pub mod vector;

// Re-exports for convenience
pub use self::core::*;
pub use error::*;
pub use operator::LinearOperator;
pub use vector::ComplexVector;

pub use num_complex::Complex64;
