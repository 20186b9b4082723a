//! Dense complex vectors.
//!
//! `ComplexVector` is an immutable, fixed-dimension tuple of `Complex64` coordinates.
//! Arithmetic follows the usual vector-space rules and always produces a new vector.
//!
//! # Operators
//! - `+`/`-` panic on a dimension mismatch; use [`ComplexVector::try_add`] and
//!   [`ComplexVector::try_sub`] to get a `Result` instead.
//! - `*` scales by any [`IntoComplex`] scalar, on either side.
//! - unary `-` negates every coordinate.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::slice;

use num_complex::{Complex, Complex64};
use num_traits::Zero;

use crate::core::scalar::{IntoComplex, for_each_real_scalar};
use crate::core::traits::InnerProduct;
use crate::error::{LinalgError, Result, check_dim, or_panic};

/// An element of the complex vector space ℂⁿ.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexVector {
    coordinates: Vec<Complex64>,
}

impl ComplexVector {
    /// Build a vector from any sequence of numeric values.
    ///
    /// Every element is coerced to `Complex64`. An empty sequence gives the
    /// zero-dimensional vector.
    pub fn new<I, T>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoComplex,
    {
        coordinates.into_iter().map(IntoComplex::into_complex).collect()
    }

    /// The zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            coordinates: vec![Complex64::zero(); dim],
        }
    }

    /// Standard basis vector eₖ of dimension `dim`.
    pub fn basis(dim: usize, k: usize) -> Result<Self> {
        if k >= dim {
            return Err(LinalgError::DimensionMismatch {
                op: "basis vector",
                expected: dim,
                found: k + 1,
            });
        }
        let mut coordinates = vec![Complex64::zero(); dim];
        coordinates[k] = Complex64::new(1.0, 0.0);
        Ok(Self { coordinates })
    }

    /// Read-only view of the coordinates.
    pub fn coordinates(&self) -> &[Complex64] {
        &self.coordinates
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn get(&self, i: usize) -> Option<Complex64> {
        self.coordinates.get(i).copied()
    }

    pub fn iter(&self) -> slice::Iter<'_, Complex64> {
        self.coordinates.iter()
    }

    /// True iff every coordinate is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.coordinates.iter().all(|c| c.is_zero())
    }

    /// Component-wise sum, failing on a dimension mismatch.
    pub fn try_add(&self, other: &ComplexVector) -> Result<ComplexVector> {
        check_dim("vector addition", self.dimension(), other.dimension())?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// `self + (-other)`, failing on a dimension mismatch.
    pub fn try_sub(&self, other: &ComplexVector) -> Result<ComplexVector> {
        check_dim("vector subtraction", self.dimension(), other.dimension())?;
        Ok(self.zip_with(&-other, |a, b| a + b))
    }

    /// Multiply every coordinate by `scalar`.
    pub fn scale<S: IntoComplex>(&self, scalar: S) -> ComplexVector {
        let s = scalar.into_complex();
        self.coordinates.iter().map(|c| c * s).collect()
    }

    /// Component-wise complex conjugate.
    pub fn conjugate(&self) -> ComplexVector {
        self.coordinates.iter().map(Complex64::conj).collect()
    }

    /// ⟨self, other⟩ = Σᵢ conj(selfᵢ) · otherᵢ.
    ///
    /// The conjugate is taken on `self`, so swapping the arguments conjugates the result.
    pub fn inner_product(&self, other: &ComplexVector) -> Result<Complex64> {
        check_dim("inner product", self.dimension(), other.dimension())?;
        Ok(self.dot(other))
    }

    /// Euclidean norm √Re⟨self, self⟩.
    ///
    /// The squared sum is not rescaled, so a nonzero vector whose coordinates are all
    /// below ~1e-154 underflows to a norm of exactly 0.
    pub fn norm(&self) -> f64 {
        self.dot(self).re.sqrt()
    }

    // Callers check dimensions.
    fn dot(&self, other: &ComplexVector) -> Complex64 {
        self.coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(a, b)| a.conj() * b)
            .fold(Complex64::zero(), |acc, v| acc + v)
    }

    fn zip_with(
        &self,
        other: &ComplexVector,
        f: impl Fn(Complex64, Complex64) -> Complex64,
    ) -> ComplexVector {
        self.coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }
}

impl InnerProduct for ComplexVector {
    type Scalar = Complex64;
    type Real = f64;

    fn inner_product(&self, other: &ComplexVector) -> Result<Complex64> {
        ComplexVector::inner_product(self, other)
    }

    fn norm(&self) -> f64 {
        ComplexVector::norm(self)
    }
}

impl From<Vec<Complex64>> for ComplexVector {
    fn from(coordinates: Vec<Complex64>) -> Self {
        Self { coordinates }
    }
}

impl FromIterator<Complex64> for ComplexVector {
    fn from_iter<I: IntoIterator<Item = Complex64>>(iter: I) -> Self {
        Self {
            coordinates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComplexVector {
    type Item = &'a Complex64;
    type IntoIter = slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ComplexVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComplexVector(")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({c})")?;
        }
        write!(f, ")")
    }
}

/// Forwards the owned/borrowed combinations of a binary vector operator to the
/// `&ComplexVector op &ComplexVector` implementation.
macro_rules! forward_vector_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<ComplexVector> for ComplexVector {
            type Output = ComplexVector;
            fn $method(self, rhs: ComplexVector) -> ComplexVector {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&ComplexVector> for ComplexVector {
            type Output = ComplexVector;
            fn $method(self, rhs: &ComplexVector) -> ComplexVector {
                (&self).$method(rhs)
            }
        }

        impl $imp<ComplexVector> for &ComplexVector {
            type Output = ComplexVector;
            fn $method(self, rhs: ComplexVector) -> ComplexVector {
                self.$method(&rhs)
            }
        }
    };
}

impl Add<&ComplexVector> for &ComplexVector {
    type Output = ComplexVector;

    fn add(self, rhs: &ComplexVector) -> ComplexVector {
        or_panic(self.try_add(rhs))
    }
}

impl Sub<&ComplexVector> for &ComplexVector {
    type Output = ComplexVector;

    fn sub(self, rhs: &ComplexVector) -> ComplexVector {
        or_panic(self.try_sub(rhs))
    }
}

forward_vector_binop!(Add, add);
forward_vector_binop!(Sub, sub);

impl Neg for &ComplexVector {
    type Output = ComplexVector;

    fn neg(self) -> ComplexVector {
        self.scale(-1)
    }
}

impl Neg for ComplexVector {
    type Output = ComplexVector;

    fn neg(self) -> ComplexVector {
        -&self
    }
}

impl<S: IntoComplex> Mul<S> for &ComplexVector {
    type Output = ComplexVector;

    fn mul(self, scalar: S) -> ComplexVector {
        self.scale(scalar)
    }
}

impl<S: IntoComplex> Mul<S> for ComplexVector {
    type Output = ComplexVector;

    fn mul(self, scalar: S) -> ComplexVector {
        self.scale(scalar)
    }
}

// Left scalar multiplication: `s * v == v * s`.
macro_rules! impl_left_scalar_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<&ComplexVector> for $t {
                type Output = ComplexVector;
                fn mul(self, v: &ComplexVector) -> ComplexVector {
                    v.scale(self)
                }
            }

            impl Mul<ComplexVector> for $t {
                type Output = ComplexVector;
                fn mul(self, v: ComplexVector) -> ComplexVector {
                    v.scale(self)
                }
            }
        )*
    };
}

for_each_real_scalar!(impl_left_scalar_mul);
impl_left_scalar_mul!(Complex64, Complex<f32>);
