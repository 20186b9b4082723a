//! Coercion of numeric values into the canonical complex scalar.
//!
//! Every construction and scalar-multiplication entry point accepts any `IntoComplex`
//! value, so integers, reals and complex numbers mix freely. Real inputs get a zero
//! imaginary part.

use num_complex::{Complex, Complex64};

/// Conversion into a `Complex64`.
pub trait IntoComplex {
    fn into_complex(self) -> Complex64;
}

macro_rules! impl_into_complex_real {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoComplex for $t {
                #[inline]
                fn into_complex(self) -> Complex64 {
                    Complex64::new(self as f64, 0.0)
                }
            }
        )*
    };
}

/// Invokes `$mac!` with every real primitive that coerces to `Complex64`.
macro_rules! for_each_real_scalar {
    ($mac:ident) => {
        $mac!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
    };
}

pub(crate) use for_each_real_scalar;

for_each_real_scalar!(impl_into_complex_real);

impl IntoComplex for Complex64 {
    #[inline]
    fn into_complex(self) -> Complex64 {
        self
    }
}

impl IntoComplex for Complex<f32> {
    #[inline]
    fn into_complex(self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }
}

impl<T: IntoComplex + Copy> IntoComplex for &T {
    #[inline]
    fn into_complex(self) -> Complex64 {
        (*self).into_complex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_get_zero_imaginary_part() {
        assert_eq!(3i32.into_complex(), Complex64::new(3.0, 0.0));
        assert_eq!(7u8.into_complex(), Complex64::new(7.0, 0.0));
        assert_eq!((-2.5f64).into_complex(), Complex64::new(-2.5, 0.0));
        assert_eq!(0.5f32.into_complex(), Complex64::new(0.5, 0.0));
    }

    #[test]
    fn complex_values_pass_through() {
        let z = Complex64::new(1.0, -2.0);
        assert_eq!(z.into_complex(), z);
        assert_eq!((&z).into_complex(), z);
        assert_eq!(Complex::<f32>::new(0.25, 4.0).into_complex(), Complex64::new(0.25, 4.0));
    }
}
