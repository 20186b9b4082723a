//! Core linear-algebra traits for cvspace.

use crate::error::{Result, check_dim};

/// Operator application: y ← A x.
pub trait Apply<V> {
    /// Result of applying the operator.
    type Output;
    /// Compute y = A · x, failing if `x` does not live in the operator's domain.
    fn apply(&self, x: &V) -> Result<Self::Output>;
}

/// Inner products & norms.
pub trait InnerProduct<Rhs = Self> {
    /// Associated scalar type.
    type Scalar;
    /// Real type of the induced norm.
    type Real;
    /// Compute ⟨self, other⟩, conjugate-linear in `self`.
    fn inner_product(&self, other: &Rhs) -> Result<Self::Scalar>;
    /// Compute ‖self‖ = √Re⟨self, self⟩.
    fn norm(&self) -> Self::Real;
}

/// Domain and codomain dimensions of a linear map.
pub trait Shape {
    /// Dimension of the vectors the map accepts (column count).
    fn input_dim(&self) -> usize;
    /// Dimension of the vectors the map produces (row count).
    fn output_dim(&self) -> usize;

    fn is_square(&self) -> bool {
        self.input_dim() == self.output_dim()
    }

    /// True when `self ∘ inner` is defined.
    fn composes_with<S: Shape + ?Sized>(&self, inner: &S) -> bool {
        self.input_dim() == inner.output_dim()
    }

    /// Fails with `DimensionMismatch` unless `self ∘ inner` is defined.
    fn check_composable<S: Shape + ?Sized>(&self, inner: &S) -> Result<()> {
        check_dim("operator composition", self.input_dim(), inner.output_dim())
    }
}
