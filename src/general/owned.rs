//! Allocating wrappers over the runtime-shaped kernels.
//!
//! Each operand is a whole buffer holding exactly one matrix, so a buffer
//! whose length disagrees with its shape is rejected up front.

use alloc::vec;
use alloc::vec::Vec;

use crate::buffer::BufferRef;
use crate::error::ArrayError;
use crate::layout::Layout;
use crate::traits::Scalar;

use super::{add_ex, mul_ex, neg_ex, scale_ex, transpose_ex, Shape};

fn exact<T>(shape: Shape, buf: &(impl BufferRef<T> + ?Sized)) -> Result<usize, ArrayError> {
    let n = shape.checked_len()?;
    if buf.len() != n {
        log::debug!("buffer of length {} cannot hold a {shape} matrix", buf.len());
        return Err(ArrayError::LengthMismatch {
            expected: n,
            got: buf.len(),
        });
    }
    Ok(n)
}

/// `a * b` as a new `a.rows × b.cols` buffer in `layout`.
///
/// ```
/// use linbuf::general::{self, Shape};
/// use linbuf::Layout;
///
/// let a = vec![1.0, 2.0, 3.0, 4.0];
/// let id = general::identity::<f64>(2).unwrap();
/// let (c, s) = general::mul(Shape::square(2), &a, Shape::square(2), &id, Layout::ColumnMajor).unwrap();
/// assert_eq!(s, Shape::square(2));
/// assert_eq!(c, a);
/// ```
pub fn mul<T: Scalar>(
    sa: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    sb: Shape,
    b: &(impl BufferRef<T> + ?Sized),
    layout: Layout,
) -> Result<(Vec<T>, Shape), ArrayError> {
    exact(sa, a)?;
    exact(sb, b)?;
    let n = Shape::new(sa.rows, sb.cols).checked_len()?;
    let mut out = vec![T::zero(); n];
    let so = mul_ex(sa, a, 0, sb, b, 0, &mut out, 0, layout)?;
    Ok((out, so))
}

/// `aᵀ` as a new buffer in `layout`.
pub fn transpose<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    layout: Layout,
) -> Result<Vec<T>, ArrayError> {
    let n = exact(shape, a)?;
    let mut out = vec![T::zero(); n];
    transpose_ex(shape, a, 0, &mut out, 0, layout)?;
    Ok(out)
}

/// `a + b` as a new buffer.
pub fn add<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    b: &(impl BufferRef<T> + ?Sized),
) -> Result<Vec<T>, ArrayError> {
    let n = exact(shape, a)?;
    exact(shape, b)?;
    let mut out = vec![T::zero(); n];
    add_ex(shape, a, 0, b, 0, &mut out, 0)?;
    Ok(out)
}

/// `a * k` as a new buffer.
pub fn scale<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    k: T,
) -> Result<Vec<T>, ArrayError> {
    let n = exact(shape, a)?;
    let mut out = vec![T::zero(); n];
    scale_ex(shape, a, 0, k, &mut out, 0)?;
    Ok(out)
}

/// `-a` as a new buffer.
pub fn neg<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
) -> Result<Vec<T>, ArrayError> {
    let n = exact(shape, a)?;
    let mut out = vec![T::zero(); n];
    neg_ex(shape, a, 0, &mut out, 0)?;
    Ok(out)
}

/// The `n×n` identity.
pub fn identity<T: Scalar>(n: usize) -> Result<Vec<T>, ArrayError> {
    let mut out = zeros(Shape::square(n))?;
    for i in 0..n {
        out[i * n + i] = T::one();
    }
    Ok(out)
}

/// A zero-filled `shape` buffer.
pub fn zeros<T: Scalar>(shape: Shape) -> Result<Vec<T>, ArrayError> {
    Ok(vec![T::zero(); shape.checked_len()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general::{equals_ex, identity_ex};

    #[test]
    fn identity_matches_kernel() {
        let id = identity::<i64>(3).unwrap();
        let mut k = [5; 9];
        identity_ex::<i64>(3, &mut k, 0).unwrap();
        assert_eq!(id, k);
        assert_eq!(zeros::<f32>(Shape::new(2, 3)).unwrap(), vec![0.0; 6]);
    }

    #[test]
    fn oversized_shapes_fail_without_allocating() {
        let overflow = Err(ArrayError::ShapeOverflow {
            rows: usize::MAX,
            cols: usize::MAX,
        });
        assert_eq!(identity::<f64>(usize::MAX), overflow);
        assert_eq!(zeros::<f64>(Shape::square(usize::MAX)), overflow);
        let empty: [f64; 0] = [];
        assert_eq!(
            mul(Shape::new(usize::MAX, 0), &empty, Shape::new(0, usize::MAX), &empty, Layout::RowMajor),
            Err(ArrayError::ShapeOverflow {
                rows: usize::MAX,
                cols: usize::MAX
            })
        );
        assert_eq!(
            add(Shape::new(usize::MAX, 2), &empty, &empty),
            Err(ArrayError::ShapeOverflow {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn mul_non_square() {
        let a = vec![1, 2, 3, 4, 5, 6]; // 2×3 row-major
        let b = vec![1, 0, 1, 1, 0, 1]; // 3×2 row-major: [[1, 0], [1, 1], [0, 1]]
        let (c, s) = mul(Shape::new(2, 3), &a, Shape::new(3, 2), &b, Layout::RowMajor).unwrap();
        assert_eq!(s, Shape::new(2, 2));
        assert_eq!(c, vec![3, 5, 9, 11]);
    }

    #[test]
    fn length_mismatch_fails_fast() {
        let a = vec![1.0; 5];
        assert_eq!(
            transpose(Shape::new(2, 3), &a, Layout::ColumnMajor),
            Err(ArrayError::LengthMismatch { expected: 6, got: 5 })
        );
        assert!(add(Shape::new(1, 5), &a, &[1.0; 4]).is_err());
        assert!(mul(Shape::new(1, 5), &a, Shape::new(4, 1), &[0.0; 4], Layout::RowMajor).is_err());
    }

    #[test]
    fn add_scale_transpose() {
        let s = Shape::new(2, 2);
        let a = [1.0, 2.0, 3.0, 4.0];
        let sum = add(s, &a, &a).unwrap();
        let twice = scale(s, &a, 2.0).unwrap();
        assert_eq!(equals_ex(s, &sum, 0, &twice, 0, 0.0), Ok(true));
        assert_eq!(transpose(s, &a, Layout::RowMajor).unwrap(), vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn neg_is_scale_by_minus_one() {
        let s = Shape::new(1, 3);
        let a = [1.0, -2.0, 0.5];
        assert_eq!(neg(s, &a).unwrap(), scale(s, &a, -1.0).unwrap());
        assert_eq!(
            neg(s, &a[..2]),
            Err(ArrayError::LengthMismatch { expected: 3, got: 2 })
        );
    }
}
