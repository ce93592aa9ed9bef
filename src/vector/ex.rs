//! Offset-addressed vector kernels.
//!
//! Every operand is `(buffer, offset)`: an `N`-vector occupies `N`
//! consecutive slots from `offset`. Nothing is allocated. Two families:
//!
//! - `*_ex` reads from source buffers and writes to a separate destination.
//!   Sources and destination are distinct borrows, so they cannot alias.
//! - `*_within` works inside a single buffer, and any of the offsets may
//!   coincide or overlap. Operands are copied to the stack before the result
//!   is written, so aliasing is always safe.
//!
//! A destination that cannot hold the result is rejected before anything is
//! written.
//!
//! ```
//! use linbuf::vector::ex;
//!
//! // Two xyz points packed back to back; write their sum after them.
//! let mut buf = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 0.0];
//! ex::add_within::<f64, 3>(&mut buf, 0, 3, 6).unwrap();
//! assert_eq!(&buf[6..], &[5.0, 7.0, 9.0]);
//!
//! // In place: scale the first point by 2.
//! ex::scale_within::<f64, 3>(&mut buf, 0, 2.0, 0).unwrap();
//! assert_eq!(&buf[..3], &[2.0, 4.0, 6.0]);
//! ```

use crate::buffer::{load, store, BufferMut, BufferRef};
use crate::error::ArrayError;
use crate::traits::{FloatScalar, Scalar};

macro_rules! binary_kernel {
    ($ex:ident, $within:ident, $op:ident, $what:literal) => {
        #[doc = concat!("Offset form of [`", stringify!($op), "`](super::", stringify!($op), "): writes ", $what, " to `dst[id..id + N]`.")]
        #[inline]
        pub fn $ex<T: Scalar, const N: usize>(
            a: &(impl BufferRef<T> + ?Sized),
            ia: usize,
            b: &(impl BufferRef<T> + ?Sized),
            ib: usize,
            dst: &mut (impl BufferMut<T> + ?Sized),
            id: usize,
        ) -> Result<(), ArrayError> {
            let r = super::$op(load::<T, N>(a, ia)?, load::<T, N>(b, ib)?);
            store(dst, id, &r)
        }

        #[doc = concat!("Single-buffer form of [`", stringify!($ex), "`]; offsets may alias.")]
        #[inline]
        pub fn $within<T: Scalar, const N: usize>(
            buf: &mut (impl BufferMut<T> + ?Sized),
            ia: usize,
            ib: usize,
            id: usize,
        ) -> Result<(), ArrayError> {
            let r = super::$op(load::<T, N>(&*buf, ia)?, load::<T, N>(&*buf, ib)?);
            store(buf, id, &r)
        }
    };
}

binary_kernel!(add_ex, add_within, add, "`a + b`");
binary_kernel!(sub_ex, sub_within, sub, "`a - b`");
binary_kernel!(mul_ex, mul_within, mul, "the element-wise product");

// ── Unary ───────────────────────────────────────────────────────────

/// Writes `-a` to `dst[id..id + N]`.
#[inline]
pub fn neg_ex<T: Scalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    store(dst, id, &super::neg(load::<T, N>(a, ia)?))
}

#[inline]
pub fn neg_within<T: Scalar, const N: usize>(
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    id: usize,
) -> Result<(), ArrayError> {
    let r = super::neg(load::<T, N>(&*buf, ia)?);
    store(buf, id, &r)
}

/// Writes `a * k` to `dst[id..id + N]`.
#[inline]
pub fn scale_ex<T: Scalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    k: T,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    store(dst, id, &super::scale(load::<T, N>(a, ia)?, k))
}

#[inline]
pub fn scale_within<T: Scalar, const N: usize>(
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    k: T,
    id: usize,
) -> Result<(), ArrayError> {
    let r = super::scale(load::<T, N>(&*buf, ia)?, k);
    store(buf, id, &r)
}

/// Writes the unit vector along `a` to `dst[id..id + N]`.
///
/// Fails with [`ArrayError::ZeroLength`] (and writes nothing) if `a` is zero.
#[inline]
pub fn normalize_ex<T: FloatScalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    store(dst, id, &super::normalize(load::<T, N>(a, ia)?)?)
}

#[inline]
pub fn normalize_within<T: FloatScalar, const N: usize>(
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    id: usize,
) -> Result<(), ArrayError> {
    let r = super::normalize(load::<T, N>(&*buf, ia)?)?;
    store(buf, id, &r)
}

// ── Cross product ───────────────────────────────────────────────────

/// Writes `a × b` to `dst[id..id + 3]`.
#[inline]
pub fn cross_ex<T: Scalar>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    store(dst, id, &super::cross(load(a, ia)?, load(b, ib)?))
}

/// Single-buffer cross product. The destination may overlap either operand.
#[inline]
pub fn cross_within<T: Scalar>(
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    ib: usize,
    id: usize,
) -> Result<(), ArrayError> {
    let r = super::cross(load(&*buf, ia)?, load(&*buf, ib)?);
    store(buf, id, &r)
}

// ── Scalar results ──────────────────────────────────────────────────

/// Inner product of `a[ia..ia + N]` and `b[ib..ib + N]`.
#[inline]
pub fn dot_ex<T: Scalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
) -> Result<T, ArrayError> {
    Ok(super::dot(load::<T, N>(a, ia)?, load::<T, N>(b, ib)?))
}

#[inline]
pub fn length_squared_ex<T: Scalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
) -> Result<T, ArrayError> {
    Ok(super::length_squared(load::<T, N>(a, ia)?))
}

#[inline]
pub fn length_ex<T: FloatScalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
) -> Result<T, ArrayError> {
    Ok(super::length(load::<T, N>(a, ia)?))
}

#[inline]
pub fn distance_ex<T: FloatScalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
) -> Result<T, ArrayError> {
    Ok(super::distance(load::<T, N>(a, ia)?, load::<T, N>(b, ib)?))
}

/// Tolerance comparison of `a[ia..ia + N]` and `b[ib..ib + N]`.
#[inline]
pub fn equals_ex<T: Scalar, const N: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    eps: T,
) -> Result<bool, ArrayError> {
    Ok(super::equals(load::<T, N>(a, ia)?, load::<T, N>(b, ib)?, eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view;

    #[test]
    fn add_at_offsets() {
        let a = [0.0, 1.0, 2.0, 3.0];
        let b = [10.0, 20.0, 30.0];
        let mut dst = [0.0; 5];
        add_ex::<f64, 2>(&a, 2, &b, 1, &mut dst, 3).unwrap();
        assert_eq!(dst, [0.0, 0.0, 0.0, 22.0, 33.0]);
    }

    #[test]
    fn within_full_alias() {
        let mut buf = [1, 2, 3, 4];
        add_within::<i32, 4>(&mut buf, 0, 0, 0).unwrap();
        assert_eq!(buf, [2, 4, 6, 8]);
    }

    #[test]
    fn within_partial_alias() {
        // dst starts one slot into a: forward element-by-element writes would
        // read back already-updated values.
        let mut buf = [1, 2, 3, 0, 10, 20, 30];
        add_within::<i32, 3>(&mut buf, 0, 4, 1).unwrap();
        assert_eq!(buf, [1, 11, 22, 33, 10, 20, 30]);
    }

    #[test]
    fn cross_within_overlapping() {
        let mut buf = [1, 2, 3, 4, 5, 6];
        cross_within(&mut buf, 0, 3, 1).unwrap();
        assert_eq!(buf, [1, -3, 6, -3, 5, 6]);
    }

    #[test]
    fn destination_too_short_writes_nothing() {
        let a = [1.0, 2.0, 3.0];
        let mut dst = [9.0; 4];
        assert_eq!(
            neg_ex::<f64, 3>(&a, 0, &mut dst, 2),
            Err(ArrayError::DestinationTooShort { needed: 5, len: 4 })
        );
        assert_eq!(dst, [9.0; 4]);
    }

    #[test]
    fn source_out_of_range() {
        let a = [1.0, 2.0, 3.0];
        assert_eq!(
            dot_ex::<f64, 3>(&a, 1, &a, 0),
            Err(ArrayError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn scalar_results() {
        let a = [0.0, 3.0, 4.0];
        let b = [1.0, 2.0, 3.0];
        assert_eq!(dot_ex::<f64, 2>(&a, 1, &b, 1).unwrap(), 18.0);
        assert_eq!(length_squared_ex::<f64, 2>(&a, 1).unwrap(), 25.0);
        assert!((length_ex::<f64, 2>(&a, 1).unwrap() - 5.0).abs() < 1e-12);
        assert!((distance_ex::<f64, 2>(&a, 1, &b, 1).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(equals_ex::<f64, 2>(&a, 1, &[3.01, 3.99], 0, 0.02).unwrap());
        assert!(!equals_ex::<f64, 2>(&a, 1, &[3.01, 3.99], 0, 0.001).unwrap());
    }

    #[test]
    fn normalize_in_place() {
        let mut buf = [9.0, 3.0, 0.0, 4.0];
        normalize_within::<f64, 3>(&mut buf, 1, 1).unwrap();
        assert_eq!(buf, [9.0, 0.6, 0.0, 0.8]);

        let mut zero = [0.0_f64; 2];
        assert_eq!(normalize_within::<f64, 2>(&mut zero, 0, 0), Err(ArrayError::ZeroLength));

        let mut dst = [0.0; 2];
        normalize_ex::<f64, 2>(&[0.0, -2.0], 0, &mut dst, 0).unwrap();
        assert_eq!(dst, [0.0, -1.0]);
    }

    #[test]
    fn kernels_over_strided_views() {
        // Component arrays interleaved as x0 y0 x1 y1 ...; operate on the xs only.
        let mut xy = [1.0, 10.0, 2.0, 20.0, 3.0, 30.0];
        let ones = [1.0; 3];
        let mut xs = view::stride(&mut xy, 0, 2, 3).unwrap();
        let snapshot = [1.0, 2.0, 3.0];
        add_ex::<f64, 3>(&snapshot, 0, &ones, 0, &mut xs, 0).unwrap();
        scale_within::<f64, 3>(&mut xs, 0, 10.0, 0).unwrap();
        assert_eq!(xy, [20.0, 10.0, 30.0, 20.0, 40.0, 30.0]);
    }

    #[test]
    fn sub_mul_ex() {
        let a = [5, 6, 7, 8];
        let b = [1, 2, 3, 4];
        let mut d = [0; 8];
        sub_ex::<i32, 4>(&a, 0, &b, 0, &mut d, 0).unwrap();
        mul_ex::<i32, 4>(&a, 0, &b, 0, &mut d, 4).unwrap();
        assert_eq!(d, [4, 4, 4, 4, 5, 12, 21, 32]);
        let mut c = [0; 3];
        cross_ex(&[1, 0, 0], 0, &[0, 1, 0], 0, &mut c, 0).unwrap();
        assert_eq!(c, [0, 0, 1]);
        let mut v = [1, 2];
        neg_within::<i32, 2>(&mut v, 0, 0).unwrap();
        scale_ex::<i32, 2>(&[1, 2], 0, 3, &mut d, 0).unwrap();
        sub_within::<i32, 2>(&mut d, 0, 4, 0).unwrap();
        mul_within::<i32, 2>(&mut d, 0, 0, 6).unwrap();
        assert_eq!(v, [-1, -2]);
        assert_eq!(d, [-2, -6, 4, 4, 5, 12, 4, 36]);
    }
}
