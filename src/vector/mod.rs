//! Fixed-arity vector kernels.
//!
//! Value forms take and return `[T; N]`; arity 2, 3 and 4 (or any other) come
//! from the const parameter. The offset-addressed forms in [`ex`] load their
//! operands from buffers, call these, and store the result.
//!
//! ```
//! use linbuf::vector;
//!
//! let a = [1.0_f64, 2.0, 3.0];
//! let b = [4.0_f64, 5.0, 6.0];
//! assert_eq!(vector::dot(a, b), 32.0);
//! assert_eq!(vector::cross(a, b), [-3.0, 6.0, -3.0]);
//! assert_eq!(vector::add(a, b), [5.0, 7.0, 9.0]);
//! ```

pub mod ex;

use crate::error::ArrayError;
use crate::traits::{within, FloatScalar, Scalar};

// ── Element-wise ────────────────────────────────────────────────────

/// `a + b`.
#[inline]
pub fn add<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    core::array::from_fn(|i| a[i] + b[i])
}

/// `a - b`.
#[inline]
pub fn sub<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    core::array::from_fn(|i| a[i] - b[i])
}

/// `-a`.
#[inline]
pub fn neg<T: Scalar, const N: usize>(a: [T; N]) -> [T; N] {
    a.map(|x| T::zero() - x)
}

/// Element-wise (Hadamard) product.
#[inline]
pub fn mul<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    core::array::from_fn(|i| a[i] * b[i])
}

/// `a * k` for a scalar `k`.
#[inline]
pub fn scale<T: Scalar, const N: usize>(a: [T; N], k: T) -> [T; N] {
    a.map(|x| x * k)
}

/// Linear interpolation: `a + (b - a) * t`.
#[inline]
pub fn lerp<T: Scalar, const N: usize>(a: [T; N], b: [T; N], t: T) -> [T; N] {
    core::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}

// ── Comparison ──────────────────────────────────────────────────────

/// Component-wise equality within `eps`: true iff every `|a_i - b_i| <= eps`.
///
/// `eps = 0` is exact equality. Reflexive and symmetric, not transitive.
///
/// ```
/// use linbuf::vector;
/// assert!(vector::equals([1.0, 2.0], [1.0, 2.0], 0.0));
/// assert!(vector::equals([1.0, 2.0], [1.05, 1.95], 0.1));
/// assert!(!vector::equals([1.0, 2.0], [1.0, 2.5], 0.1));
/// ```
#[inline]
pub fn equals<T: Scalar, const N: usize>(a: [T; N], b: [T; N], eps: T) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| within(x, y, eps))
}

// ── Products ────────────────────────────────────────────────────────

/// Inner product `Σ a_i b_i`.
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        sum = sum + a[i] * b[i];
    }
    sum
}

/// Cross product of two 3-vectors.
#[inline]
pub fn cross<T: Scalar>(a: [T; 3], b: [T; 3]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// ── Norms ───────────────────────────────────────────────────────────

/// Squared Euclidean length. No sqrt, works with integers.
#[inline]
pub fn length_squared<T: Scalar, const N: usize>(a: [T; N]) -> T {
    dot(a, a)
}

/// Largest absolute component, or zero for an all-zero vector. NaN
/// components are skipped.
#[inline]
fn max_abs<T: FloatScalar, const N: usize>(a: [T; N]) -> T {
    a.iter().fold(T::zero(), |m, &x| m.max(x.abs()))
}

/// Euclidean length.
///
/// Components are scaled by the largest magnitude before squaring, so the
/// result is finite whenever the true length is.
///
/// ```
/// use linbuf::vector;
/// assert_eq!(vector::length([3.0, 4.0]), 5.0);
/// assert!((vector::length([3e200_f64, 4e200]) / 5e200 - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn length<T: FloatScalar, const N: usize>(a: [T; N]) -> T {
    let m = max_abs(a);
    if m == T::zero() || !m.is_finite() {
        return length_squared(a).sqrt();
    }
    m * length_squared(a.map(|x| x / m)).sqrt()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<T: FloatScalar, const N: usize>(a: [T; N], b: [T; N]) -> T {
    length(sub(a, b))
}

/// Unit vector in the direction of `a`.
///
/// Fails with [`ArrayError::ZeroLength`] when `a` has zero length; the caller
/// decides what a direction-less vector should become. Any other vector,
/// however large or small its components, comes back with unit length.
/// Non-finite components give a non-finite result.
///
/// ```
/// use linbuf::{vector, ArrayError};
/// assert_eq!(vector::normalize([1.0, 0.0]), Ok([1.0, 0.0]));
/// assert_eq!(vector::normalize([0.0_f64, 0.0]), Err(ArrayError::ZeroLength));
/// ```
#[inline]
pub fn normalize<T: FloatScalar, const N: usize>(a: [T; N]) -> Result<[T; N], ArrayError> {
    let m = max_abs(a);
    if m == T::zero() {
        return Err(ArrayError::ZeroLength);
    }
    // Largest component becomes ±1, so the squares below neither overflow nor vanish.
    let s = a.map(|x| x / m);
    let n = length_squared(s).sqrt();
    Ok(s.map(|x| x / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn element_wise_arities() {
        assert_eq!(add([1, 2], [3, 4]), [4, 6]);
        assert_eq!(sub([1.0, 2.0, 3.0], [3.0, 2.0, 1.0]), [-2.0, 0.0, 2.0]);
        assert_eq!(neg([1, -2, 3, -4]), [-1, 2, -3, 4]);
        assert_eq!(mul([1, 2, 3, 4], [2, 2, 2, 2]), [2, 4, 6, 8]);
        assert_eq!(scale([1.5, -1.0], 2.0), [3.0, -2.0]);
    }

    #[test]
    fn lerp_endpoints() {
        let a = [0.0, 10.0];
        let b = [4.0, 20.0];
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), [2.0, 15.0]);
    }

    #[test]
    fn equals_reflexive_symmetric() {
        let a = [0.1, 0.2, 0.3, 0.4];
        let b = [0.1, 0.25, 0.3, 0.35];
        assert!(equals(a, a, 0.0));
        assert_eq!(equals(a, b, 0.06), equals(b, a, 0.06));
        assert!(equals(a, b, 0.06));
        assert!(!equals(a, b, 0.04));
    }

    #[test]
    fn equals_matches_max_abs_diff() {
        let a = [1.0, 5.0, -3.0];
        let b = [1.5, 4.0, -3.25];
        let max = a
            .iter()
            .zip(b.iter())
            .map(|(x, y): (&f64, &f64)| (x - y).abs())
            .fold(0.0, f64::max);
        assert!(equals(a, b, max));
        assert!(!equals(a, b, max - 1e-9));
    }

    #[test]
    fn equals_integers() {
        assert!(equals([3u32, 7], [4, 6], 1));
        assert!(!equals([3u32, 7], [5, 7], 1));
    }

    #[test]
    fn dot_and_cross() {
        assert_eq!(dot([1, 2, 3], [4, 5, 6]), 32);
        assert_eq!(dot([1.0, 2.0], [3.0, 4.0]), 11.0);
        assert_eq!(cross([1, 2, 3], [4, 5, 6]), [-3, 6, -3]);
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = [0.3, -1.2, 2.5];
        let b = [4.0, 0.7, -0.1];
        let c = cross(a, b);
        assert!(approx_eq(dot(a, c), 0.0));
        assert!(approx_eq(dot(b, c), 0.0));
    }

    #[test]
    fn lengths() {
        assert_eq!(length_squared([3, 4]), 25);
        assert!(approx_eq(length([3.0, 4.0]), 5.0));
        assert!(approx_eq(length([1.0, 2.0, 2.0, 4.0]), 5.0));
        assert!(approx_eq(distance([1.0, 1.0, 1.0], [2.0, 3.0, 3.0]), 3.0));
    }

    #[test]
    fn normalize_unit_length() {
        for v in [[3.0, 4.0, 0.0], [-1.0, 2.0, 7.5], [1e-3, 0.0, -2e-3]] {
            let u = normalize(v).unwrap();
            assert!(approx_eq(length(u), 1.0));
        }
        assert_eq!(normalize([1.0, 0.0]).unwrap(), [1.0, 0.0]);
        assert_eq!(normalize([0.0_f32; 4]), Err(ArrayError::ZeroLength));
    }

    #[test]
    fn normalize_extreme_magnitudes() {
        let big = normalize([1e200, 1e200]).unwrap();
        assert!(approx_eq(big[0], core::f64::consts::FRAC_1_SQRT_2));
        assert!(approx_eq(big[1], big[0]));
        assert_eq!(normalize([1e-170, 0.0]), Ok([1.0, 0.0]));
        assert_eq!(normalize([0.0, -5e-324]), Ok([0.0, -1.0]));
        assert_eq!(normalize([f32::MAX, 0.0, 0.0]), Ok([1.0, 0.0, 0.0]));
        for v in [[1e300, -2e300, 3e300], [1e-300, 1e-310, -4e-300]] {
            assert!(approx_eq(length(normalize(v).unwrap()), 1.0));
        }
    }

    #[test]
    fn length_extreme_magnitudes() {
        assert_eq!(length([1e300, 0.0]), 1e300);
        assert!(((length([1e-170, 1e-170]) / 1e-170) - core::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(length([f64::INFINITY, 1.0]), f64::INFINITY);
        assert!(length([f64::NAN, 1.0]).is_nan());
        assert!(normalize([f64::NAN, 1.0]).unwrap()[0].is_nan());
    }
}
