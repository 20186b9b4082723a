//! Feature-gated behaviour.
//!
//! With the `approx` feature (on by default) both value types implement
//! `approx::AbsDiffEq` and `approx::RelativeEq`. `PartialEq` always stays exact.

#[cfg(feature = "approx")]
pub mod tolerance;
