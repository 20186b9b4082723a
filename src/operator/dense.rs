//! Dense linear operators between complex vector spaces.
//!
//! A `LinearOperator` stores its matrix row-major: entry (i, j) is row i, column j.
//! It maps vectors of dimension `input_dim` (columns) to vectors of dimension
//! `output_dim` (rows).
//!
//! Construction from nested rows treats a matrix with no rows as 0×0, since there is
//! no first row to take a column count from. [`LinearOperator::from_fn`] and
//! [`LinearOperator::zeros`] take the shape explicitly and can describe a true 0×N map.

use std::fmt;
use std::ops::Mul;

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::core::scalar::IntoComplex;
use crate::core::traits::{Apply, Shape};
use crate::error::{LinalgError, Result, check_dim, or_panic};
use crate::vector::ComplexVector;

/// A linear map ℂⁿ → ℂᵐ backed by a dense m×n matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearOperator {
    entries: Vec<Complex64>,
    nrows: usize,
    ncols: usize,
}

impl LinearOperator {
    /// Build an operator from a rectangular sequence of rows.
    ///
    /// Every entry is coerced to `Complex64`. Fails with `NotRectangular` on the first
    /// row whose length differs from the first row's.
    pub fn new<R, I, T>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: IntoComplex,
    {
        let mut entries = Vec::new();
        let mut nrows = 0;
        let mut ncols = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let start = entries.len();
            entries.extend(row.into_iter().map(IntoComplex::into_complex));
            let len = entries.len() - start;
            if i == 0 {
                ncols = len;
            } else if len != ncols {
                return Err(LinalgError::NotRectangular {
                    row: i,
                    expected: ncols,
                    found: len,
                });
            }
            nrows += 1;
        }
        Ok(Self {
            entries,
            nrows,
            ncols,
        })
    }

    /// Build an `output_dim`×`input_dim` operator with entry (i, j) = f(i, j).
    pub fn from_fn<T, F>(output_dim: usize, input_dim: usize, mut f: F) -> Self
    where
        T: IntoComplex,
        F: FnMut(usize, usize) -> T,
    {
        let mut entries = Vec::with_capacity(output_dim * input_dim);
        for i in 0..output_dim {
            for j in 0..input_dim {
                entries.push(f(i, j).into_complex());
            }
        }
        Self {
            entries,
            nrows: output_dim,
            ncols: input_dim,
        }
    }

    pub fn zeros(output_dim: usize, input_dim: usize) -> Self {
        Self {
            entries: vec![Complex64::zero(); output_dim * input_dim],
            nrows: output_dim,
            ncols: input_dim,
        }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| {
            if i == j {
                Complex64::one()
            } else {
                Complex64::zero()
            }
        })
    }

    pub fn get(&self, i: usize, j: usize) -> Option<Complex64> {
        if i < self.nrows && j < self.ncols {
            Some(self.at(i, j))
        } else {
            None
        }
    }

    /// Read-only view of row `i`.
    pub fn row(&self, i: usize) -> Option<&[Complex64]> {
        (i < self.nrows).then(|| &self.entries[i * self.ncols..(i + 1) * self.ncols])
    }

    /// Iterate over the rows as read-only slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Complex64]> + '_ {
        (0..self.nrows).map(move |i| &self.entries[i * self.ncols..(i + 1) * self.ncols])
    }

    /// Deep copy of the matrix as nested rows.
    pub fn matrix(&self) -> Vec<Vec<Complex64>> {
        self.rows().map(<[Complex64]>::to_vec).collect()
    }

    /// Row-major entries.
    #[cfg_attr(not(feature = "approx"), allow(dead_code))]
    pub(crate) fn entries(&self) -> &[Complex64] {
        &self.entries
    }

    /// y = A x, with yᵢ = Σⱼ A[i][j] · xⱼ.
    pub fn apply(&self, vector: &ComplexVector) -> Result<ComplexVector> {
        check_dim("operator application", self.ncols, vector.dimension())?;
        Ok(self
            .rows()
            .map(|row| {
                row.iter()
                    .zip(vector.iter())
                    .map(|(a, x)| a * x)
                    .fold(Complex64::zero(), |acc, v| acc + v)
            })
            .collect())
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    ///
    /// Requires `self.input_dim() == other.output_dim()`. The result maps
    /// `other.input_dim()` to `self.output_dim()`.
    pub fn compose(&self, other: &LinearOperator) -> Result<LinearOperator> {
        self.check_composable(other)?;
        Ok(Self::from_fn(self.nrows, other.ncols, |i, j| {
            (0..self.ncols)
                .map(|k| self.at(i, k) * other.at(k, j))
                .fold(Complex64::zero(), |acc, v| acc + v)
        }))
    }

    /// Conjugate transpose: result[i][j] = conj(self[j][i]).
    pub fn adjoint(&self) -> LinearOperator {
        Self::from_fn(self.ncols, self.nrows, |i, j| self.at(j, i).conj())
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> Complex64 {
        self.entries[i * self.ncols + j]
    }
}

/// Columns are the domain, rows the codomain.
impl Shape for LinearOperator {
    fn input_dim(&self) -> usize {
        self.ncols
    }

    fn output_dim(&self) -> usize {
        self.nrows
    }
}

impl Apply<ComplexVector> for LinearOperator {
    type Output = ComplexVector;

    fn apply(&self, x: &ComplexVector) -> Result<ComplexVector> {
        LinearOperator::apply(self, x)
    }
}

impl Apply<LinearOperator> for LinearOperator {
    type Output = LinearOperator;

    fn apply(&self, x: &LinearOperator) -> Result<LinearOperator> {
        self.compose(x)
    }
}

impl fmt::Display for LinearOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearOperator(dims={}x{})", self.nrows, self.ncols)
    }
}

/// `&a * &v` applies `a` to `v`; panics on a dimension mismatch.
impl Mul<&ComplexVector> for &LinearOperator {
    type Output = ComplexVector;

    fn mul(self, rhs: &ComplexVector) -> ComplexVector {
        or_panic(self.apply(rhs))
    }
}

/// `&a * &b` is the composition `a ∘ b`; panics on a dimension mismatch.
impl Mul<&LinearOperator> for &LinearOperator {
    type Output = LinearOperator;

    fn mul(self, rhs: &LinearOperator) -> LinearOperator {
        or_panic(self.compose(rhs))
    }
}
