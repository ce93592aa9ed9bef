use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be stored in a buffer and fed to the kernels.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types. `PartialOrd` is required so
/// tolerance comparisons work without an `abs` (unsigned integers included).
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + PartialOrd + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `sin`, `cos`
/// (lengths, normalisation, rotation builders).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// `|a - b|` without requiring a signed type.
#[inline]
pub(crate) fn abs_diff<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Tolerance comparison shared by every `equals` kernel.
///
/// NaN never compares equal, whatever the tolerance.
#[inline]
pub(crate) fn within<T: Scalar>(a: T, b: T, eps: T) -> bool {
    abs_diff(a, b) <= eps
}
