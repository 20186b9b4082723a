//! Tests for `ComplexVector`: construction, vector-space arithmetic, the inner product and norm.
//!
//! Fixed scenarios check exact values; randomized checks over small dimensions verify the
//! algebraic properties (conjugate symmetry, triangle inequality, scalar commutativity).

use approx::assert_abs_diff_eq;
use cvspace::{Complex64, ComplexVector, InnerProduct, LinalgError};
use num_complex::Complex;
use rand::Rng;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Random vector with coordinates in [-1, 1) + i[-1, 1).
fn random_vector(rng: &mut impl Rng, dim: usize) -> ComplexVector {
    (0..dim)
        .map(|_| c(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

#[test]
fn construction_coerces_to_complex() {
    let v = ComplexVector::new([c(1.0, 0.0), c(0.0, 2.0)]);
    assert_eq!(v.dimension(), 2);
    assert_eq!(v.coordinates(), &[c(1.0, 0.0), c(0.0, 2.0)]);

    let ints = ComplexVector::new([1, -2, 3]);
    assert_eq!(ints.coordinates(), &[c(1.0, 0.0), c(-2.0, 0.0), c(3.0, 0.0)]);
    assert_eq!(ints, ComplexVector::new([1.0, -2.0, 3.0]));
}

#[test]
fn addition_is_componentwise() {
    let v = ComplexVector::new([1, 2]);
    let w = ComplexVector::new([3, 4]);
    let sum = &v + &w;
    assert_eq!(sum, ComplexVector::new([4, 6]));
    assert_eq!(sum.dimension(), 2);
    // Inputs are untouched.
    assert_eq!(v, ComplexVector::new([1, 2]));
}

#[test]
fn scalar_multiplication_commutes() {
    let v = ComplexVector::new([1, -1]);
    assert_eq!(&v * 2, ComplexVector::new([2, -2]));
    assert_eq!(3.0 * &v, ComplexVector::new([3, -3]));

    let s = c(0.5, -2.0);
    assert_eq!(s * &v, &v * s);
    assert_eq!(-1.5 * v.clone(), v.clone() * -1.5);
    assert_eq!(7i64 * &v, &v * 7i64);

    // Every coercible scalar type multiplies from the left as well.
    assert_eq!(2u8 * &v, &v * 2u8);
    assert_eq!(2u8 * &v, ComplexVector::new([2, -2]));
    assert_eq!(2usize * &v, &v * 2usize);
    assert_eq!(3i16 * v.clone(), v.clone() * 3i16);
    assert_eq!(4u64 * &v, &v * 4u64);
    let z = Complex::<f32>::new(0.5, -2.0);
    assert_eq!(z * &v, &v * z);
    assert_eq!(z * &v, &v * c(0.5, -2.0));
}

#[test]
fn additive_inverse_gives_zero_vector() {
    let mut rng = rand::thread_rng();
    for dim in 0..6 {
        let v = random_vector(&mut rng, dim);
        let z = &v + &(-&v);
        assert_eq!(z, ComplexVector::zeros(dim));
        assert!((&v - &v).is_zero());
    }
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let v = ComplexVector::new([1]);
    let w = ComplexVector::new([1, 2]);
    let err = v.try_add(&w).unwrap_err();
    assert_eq!(
        err,
        LinalgError::DimensionMismatch {
            op: "vector addition",
            expected: 1,
            found: 2
        }
    );
    assert!(v.try_sub(&w).is_err());
    assert!(v.inner_product(&w).is_err());
}

#[test]
fn inner_product_is_conjugate_linear_in_first_argument() {
    let v = ComplexVector::new([c(0.0, 1.0), c(1.0, 0.0)]);
    assert_eq!(v.inner_product(&v).unwrap(), c(2.0, 0.0));

    // ⟨e₀, i·e₀⟩ = i while ⟨i·e₀, e₀⟩ = -i.
    let e0 = ComplexVector::new([1]);
    let ie0 = ComplexVector::new([c(0.0, 1.0)]);
    assert_eq!(e0.inner_product(&ie0).unwrap(), c(0.0, 1.0));
    assert_eq!(ie0.inner_product(&e0).unwrap(), c(0.0, -1.0));
}

#[test]
fn inner_product_conjugate_symmetry() {
    let v = ComplexVector::new([c(1.0, 2.0), c(3.0, 0.0)]);
    let w = ComplexVector::new([c(2.0, -1.0), c(4.0, 0.0)]);
    let vw = v.inner_product(&w).unwrap();
    let wv = w.inner_product(&v).unwrap().conj();
    assert_abs_diff_eq!(vw.re, wv.re, epsilon = 1e-12);
    assert_abs_diff_eq!(vw.im, wv.im, epsilon = 1e-12);

    let mut rng = rand::thread_rng();
    for dim in 1..8 {
        let v = random_vector(&mut rng, dim);
        let w = random_vector(&mut rng, dim);
        let vw = InnerProduct::inner_product(&v, &w).unwrap();
        let wv = InnerProduct::inner_product(&w, &v).unwrap().conj();
        assert_abs_diff_eq!(vw.re, wv.re, epsilon = 1e-12);
        assert_abs_diff_eq!(vw.im, wv.im, epsilon = 1e-12);
    }
}

#[test]
fn norm_of_pythagorean_vector() {
    let v = ComplexVector::new([c(3.0, 0.0), c(0.0, 4.0)]);
    assert_eq!(v.norm(), 5.0);
}

#[test]
fn norm_is_definite() {
    assert_eq!(ComplexVector::new([0, 0]).norm(), 0.0);
    assert!(ComplexVector::new([1e-9, 0.0]).norm() > 0.0);

    let mut rng = rand::thread_rng();
    for dim in 1..8 {
        let v = random_vector(&mut rng, dim);
        assert!(v.norm() >= 0.0);
        assert_eq!(v.norm() == 0.0, v.is_zero());
    }
}

#[test]
fn triangle_inequality() {
    let v = ComplexVector::new([c(1.0, 1.0), c(2.0, 0.0)]);
    let w = ComplexVector::new([c(3.0, 0.0), c(0.0, 4.0)]);
    assert!((&v + &w).norm() <= v.norm() + w.norm() + 1e-9);

    let mut rng = rand::thread_rng();
    for dim in 1..8 {
        let v = random_vector(&mut rng, dim);
        let w = random_vector(&mut rng, dim);
        assert!((&v + &w).norm() <= v.norm() + w.norm() + 1e-12);
    }
}

#[test]
fn conjugate_flips_imaginary_parts() {
    let v = ComplexVector::new([c(1.0, 2.0), c(-3.0, -4.0)]);
    assert_eq!(v.conjugate(), ComplexVector::new([c(1.0, -2.0), c(-3.0, 4.0)]));
    assert_eq!(v.conjugate().conjugate(), v);
}
