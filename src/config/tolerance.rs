//! Tolerance-based comparison for vectors and operators.
//!
//! Real and imaginary parts are compared separately with `f64`'s own `approx`
//! implementations. Values of different shape are never approximately equal.

use approx::{AbsDiffEq, RelativeEq};
use num_complex::Complex64;

use crate::core::traits::Shape;
use crate::operator::LinearOperator;
use crate::vector::ComplexVector;

fn all_close(a: &[Complex64], b: &[Complex64], close: impl Fn(f64, f64) -> bool) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| close(x.re, y.re) && close(x.im, y.im))
}

impl AbsDiffEq for ComplexVector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        all_close(self.coordinates(), other.coordinates(), |x, y| {
            x.abs_diff_eq(&y, epsilon)
        })
    }
}

impl RelativeEq for ComplexVector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        all_close(self.coordinates(), other.coordinates(), |x, y| {
            x.relative_eq(&y, epsilon, max_relative)
        })
    }
}

impl AbsDiffEq for LinearOperator {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.output_dim() == other.output_dim()
            && self.input_dim() == other.input_dim()
            && all_close(self.entries(), other.entries(), |x, y| {
                x.abs_diff_eq(&y, epsilon)
            })
    }
}

impl RelativeEq for LinearOperator {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.output_dim() == other.output_dim()
            && self.input_dim() == other.input_dim()
            && all_close(self.entries(), other.entries(), |x, y| {
                x.relative_eq(&y, epsilon, max_relative)
            })
    }
}
