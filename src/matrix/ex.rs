//! Offset-addressed fixed-size matrix kernels.
//!
//! An `R×C` operand at offset `o` occupies `buf[o..o + R*C]`. Kernels whose
//! result depends on element order take a [`Layout`]; element-wise kernels
//! do not need one, since inputs and output share whatever layout the caller
//! uses.
//!
//! Every kernel loads its operands into [`Matrix`] values on the stack,
//! computes, then stores. The `*_within` forms therefore tolerate any overlap
//! between operands and destination, including a non-square transpose
//! written back over its own source.
//!
//! ```
//! use linbuf::matrix::ex;
//! use linbuf::Layout;
//!
//! // A = [[1, 2], [3, 4]] and B = I, column-major, back to back.
//! let mut buf = [1.0, 3.0, 2.0, 4.0, 1.0, 0.0, 0.0, 1.0];
//! // A := A * B, written over A itself.
//! ex::mul_within::<f64, 2, 2, 2>(&mut buf, 0, 4, 0, Layout::ColumnMajor).unwrap();
//! assert_eq!(buf[..4], [1.0, 3.0, 2.0, 4.0]);
//! ```

use crate::buffer::{load, store, BufferMut, BufferRef};
use crate::error::ArrayError;
use crate::layout::Layout;
use crate::traits::Scalar;
use crate::{Matrix, Matrix3, Matrix4};

// Element-wise kernels go through column-major, which is just the flat order.
const FLAT: Layout = Layout::ColumnMajor;

#[inline]
fn fetch<T: Scalar, const R: usize, const C: usize>(
    buf: &(impl BufferRef<T> + ?Sized),
    offset: usize,
) -> Result<Matrix<T, R, C>, ArrayError> {
    Matrix::load(buf, offset, FLAT)
}

// ── Constructors ────────────────────────────────────────────────────

/// Write the `N×N` identity to `dst[id..]`.
pub fn identity_ex<T: Scalar, const N: usize>(
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    Matrix::<T, N, N>::eye().store(dst, id, FLAT)
}

/// Write an `R×C` block of zeros to `dst[id..]`.
pub fn zeros_ex<T: Scalar, const R: usize, const C: usize>(
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    Matrix::<T, R, C>::zeros().store(dst, id, FLAT)
}

// ── Element-wise ────────────────────────────────────────────────────

/// `dst = a + b`.
pub fn add_ex<T: Scalar, const R: usize, const C: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    let r = fetch::<T, R, C>(a, ia)? + fetch::<T, R, C>(b, ib)?;
    r.store(dst, id, FLAT)
}

/// `dst = a - b`.
pub fn sub_ex<T: Scalar, const R: usize, const C: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    let r = fetch::<T, R, C>(a, ia)? - fetch::<T, R, C>(b, ib)?;
    r.store(dst, id, FLAT)
}

/// `dst = -a`.
pub fn neg_ex<T: Scalar, const R: usize, const C: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    (-fetch::<T, R, C>(a, ia)?).store(dst, id, FLAT)
}

/// `dst = a * k`.
pub fn scale_ex<T: Scalar, const R: usize, const C: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    k: T,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    (fetch::<T, R, C>(a, ia)? * k).store(dst, id, FLAT)
}

/// Element-wise comparison within `eps`, see [`Matrix::equals`].
pub fn equals_ex<T: Scalar, const R: usize, const C: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    eps: T,
) -> Result<bool, ArrayError> {
    Ok(fetch::<T, R, C>(a, ia)?.equals(&fetch::<T, R, C>(b, ib)?, eps))
}

/// Single-buffer `buf[id..] = buf[ia..] + buf[ib..]`; offsets may alias.
pub fn add_within<T: Scalar, const R: usize, const C: usize>(
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    ib: usize,
    id: usize,
) -> Result<(), ArrayError> {
    let r = fetch::<T, R, C>(&*buf, ia)? + fetch::<T, R, C>(&*buf, ib)?;
    r.store(buf, id, FLAT)
}

// ── Layout-dependent ────────────────────────────────────────────────

/// `dst (R×C) = a (R×K) * b (K×C)`, all three in `layout`.
///
/// ```
/// use linbuf::matrix::ex;
/// use linbuf::Layout;
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2×3 row-major
/// let b = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0]; // 3×2 row-major
/// let mut c = [0.0; 4];
/// ex::mul_ex::<f64, 2, 3, 2>(&a, 0, &b, 0, &mut c, 0, Layout::RowMajor).unwrap();
/// assert_eq!(c, [4.0, 5.0, 10.0, 11.0]);
/// ```
pub fn mul_ex<T: Scalar, const R: usize, const K: usize, const C: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let a = Matrix::<T, R, K>::load(a, ia, layout)?;
    let b = Matrix::<T, K, C>::load(b, ib, layout)?;
    (a * b).store(dst, id, layout)
}

/// Single-buffer form of [`mul_ex`]; the destination may overlap either source.
pub fn mul_within<T: Scalar, const R: usize, const K: usize, const C: usize>(
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    ib: usize,
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let a = Matrix::<T, R, K>::load(&*buf, ia, layout)?;
    let b = Matrix::<T, K, C>::load(&*buf, ib, layout)?;
    (a * b).store(buf, id, layout)
}

/// `dst (C×R) = aᵀ`, both in `layout`.
pub fn transpose_ex<T: Scalar, const R: usize, const C: usize>(
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    Matrix::<T, R, C>::load(a, ia, layout)?
        .transpose()
        .store(dst, id, layout)
}

/// Single-buffer form of [`transpose_ex`]; `id == ia` transposes in place,
/// square or not.
///
/// ```
/// use linbuf::matrix::ex;
/// use linbuf::Layout;
/// let mut buf = [1, 2, 3, 4, 5, 6]; // 2×3 row-major
/// ex::transpose_within::<i32, 2, 3>(&mut buf, 0, 0, Layout::RowMajor).unwrap();
/// assert_eq!(buf, [1, 4, 2, 5, 3, 6]); // 3×2 row-major
/// ```
pub fn transpose_within<T: Scalar, const R: usize, const C: usize>(
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let t = Matrix::<T, R, C>::load(&*buf, ia, layout)?.transpose();
    t.store(buf, id, layout)
}

/// `dst[id..id + R] = m * v`, with `m` (R×C) in `layout` and `v` a plain
/// `C`-vector.
pub fn mul_vec_ex<T: Scalar, const R: usize, const C: usize>(
    m: &(impl BufferRef<T> + ?Sized),
    im: usize,
    v: &(impl BufferRef<T> + ?Sized),
    iv: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let m = Matrix::<T, R, C>::load(m, im, layout)?;
    store(dst, id, &m.mul_vec(&load::<T, C>(v, iv)?))
}

/// 2-D homogeneous transform of a point by a 3×3 matrix, see
/// [`Matrix3::transform_point`](crate::Matrix3).
pub fn transform_point2_ex<T: Scalar>(
    m: &(impl BufferRef<T> + ?Sized),
    im: usize,
    p: &(impl BufferRef<T> + ?Sized),
    ip: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let m = Matrix3::load(m, im, layout)?;
    store(dst, id, &m.transform_point(load::<T, 2>(p, ip)?))
}

/// 3-D homogeneous transform of a point by a 4×4 matrix, see
/// [`Matrix4::transform_point`](crate::Matrix4).
pub fn transform_point3_ex<T: Scalar>(
    m: &(impl BufferRef<T> + ?Sized),
    im: usize,
    p: &(impl BufferRef<T> + ?Sized),
    ip: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let m = Matrix4::load(m, im, layout)?;
    store(dst, id, &m.transform_point(load::<T, 3>(p, ip)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view;

    fn a2x3() -> Matrix<f64, 2, 3> {
        Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn constructors_at_offset() {
        let mut buf = [9; 6];
        identity_ex::<i32, 2>(&mut buf, 1).unwrap();
        assert_eq!(buf, [9, 1, 0, 0, 1, 9]);
        zeros_ex::<i32, 1, 2>(&mut buf, 4).unwrap();
        assert_eq!(buf, [9, 1, 0, 0, 0, 0]);
        assert_eq!(
            identity_ex::<i32, 2>(&mut buf, 3),
            Err(ArrayError::DestinationTooShort { needed: 7, len: 6 })
        );
        assert_eq!(buf, [9, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn element_wise_offsets() {
        let a = [0.0, 1.0, 2.0, 3.0, 4.0];
        let b = [10.0, 20.0, 30.0, 40.0];
        let mut d = [0.0; 6];
        add_ex::<f64, 2, 2>(&a, 1, &b, 0, &mut d, 2).unwrap();
        assert_eq!(d, [0.0, 0.0, 11.0, 22.0, 33.0, 44.0]);
        sub_ex::<f64, 2, 2>(&b, 0, &a, 1, &mut d, 0).unwrap();
        assert_eq!(d[..4], [9.0, 18.0, 27.0, 36.0]);
        neg_ex::<f64, 1, 2>(&a, 3, &mut d, 4).unwrap();
        assert_eq!(d[4..], [-3.0, -4.0]);
        scale_ex::<f64, 2, 1>(&b, 2, 0.5, &mut d, 0).unwrap();
        assert_eq!(d[..2], [15.0, 20.0]);
    }

    #[test]
    fn add_within_every_alias() {
        let mut buf = [1, 2, 3, 4];
        add_within::<i32, 2, 2>(&mut buf, 0, 0, 0).unwrap();
        assert_eq!(buf, [2, 4, 6, 8]);

        let mut buf = [1, 2, 3, 4, 5, 6];
        // Destination straddles both sources.
        add_within::<i32, 1, 4>(&mut buf, 0, 2, 1).unwrap();
        assert_eq!(buf, [1, 4, 6, 8, 10, 6]);
    }

    #[test]
    fn mul_both_layouts_agree() {
        let a = a2x3();
        let b = Matrix::new([[1.0, -1.0], [0.5, 2.0], [3.0, 0.0]]);
        let expected = a * b;
        for layout in [Layout::ColumnMajor, Layout::RowMajor] {
            let mut abuf = [0.0; 6];
            let mut bbuf = [0.0; 7];
            a.store(&mut abuf, 0, layout).unwrap();
            b.store(&mut bbuf, 1, layout).unwrap();
            let mut d = [0.0; 4];
            mul_ex::<f64, 2, 3, 2>(&abuf, 0, &bbuf, 1, &mut d, 0, layout).unwrap();
            let got: Matrix<f64, 2, 2> = Matrix::load(&d, 0, layout).unwrap();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn mul_within_over_either_source() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let b = Matrix::new([[0, 1], [1, 0]]);
        for (dst, expected) in [(0, a * b), (4, a * b)] {
            let mut buf = [0; 8];
            a.store(&mut buf, 0, FLAT).unwrap();
            b.store(&mut buf, 4, FLAT).unwrap();
            mul_within::<i32, 2, 2, 2>(&mut buf, 0, 4, dst, FLAT).unwrap();
            let got: Matrix<i32, 2, 2> = Matrix::load(&buf, dst, FLAT).unwrap();
            assert_eq!(got, expected);
        }
        // Squaring in place.
        let mut buf = [0; 4];
        a.store(&mut buf, 0, FLAT).unwrap();
        mul_within::<i32, 2, 2, 2>(&mut buf, 0, 0, 0, FLAT).unwrap();
        assert_eq!(Matrix::<i32, 2, 2>::load(&buf, 0, FLAT).unwrap(), a * a);
    }

    #[test]
    fn mul_short_destination_untouched() {
        let a = [1.0; 4];
        let mut d = [5.0; 3];
        assert_eq!(
            mul_ex::<f64, 2, 2, 2>(&a, 0, &a, 0, &mut d, 0, FLAT),
            Err(ArrayError::DestinationTooShort { needed: 4, len: 3 })
        );
        assert_eq!(d, [5.0; 3]);
    }

    #[test]
    fn transpose_non_square_in_place() {
        let a = a2x3();
        let mut buf = [0.0; 7];
        a.store(&mut buf, 1, FLAT).unwrap();
        transpose_within::<f64, 2, 3>(&mut buf, 1, 1, FLAT).unwrap();
        let t: Matrix<f64, 3, 2> = Matrix::load(&buf, 1, FLAT).unwrap();
        assert_eq!(t, a.transpose());

        let mut d = [0.0; 6];
        transpose_ex::<f64, 3, 2>(&buf, 1, &mut d, 0, FLAT).unwrap();
        assert_eq!(Matrix::<f64, 2, 3>::load(&d, 0, FLAT).unwrap(), a);
    }

    #[test]
    fn mul_vec_row_major() {
        let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = [0.0, 7.0, 8.0, 9.0];
        let mut d = [0.0; 2];
        mul_vec_ex::<f64, 2, 3>(&m, 0, &v, 1, &mut d, 0, Layout::RowMajor).unwrap();
        assert_eq!(d, [50.0, 122.0]);
    }

    #[test]
    fn transform_points_from_buffer() {
        let mut buf = [0.0; 16];
        Matrix3::translation([1.0, 2.0]).store(&mut buf, 0, FLAT).unwrap();
        let pts = [5.0, 5.0];
        let mut out = [0.0; 2];
        transform_point2_ex::<f64>(&buf, 0, &pts, 0, &mut out, 0, FLAT).unwrap();
        assert_eq!(out, [6.0, 7.0]);

        Matrix4::scaling([2.0, 3.0, 4.0])
            .store(&mut buf, 0, Layout::RowMajor)
            .unwrap();
        let mut out = [0.0; 3];
        transform_point3_ex::<f64>(&buf, 0, &[1.0, 1.0, 1.0], 0, &mut out, 0, Layout::RowMajor).unwrap();
        assert_eq!(out, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn equals_over_views() {
        // Same 2×2 matrix, once contiguous and once spread with stride 2.
        let a = [1.0, 2.0, 3.0, 4.0];
        let spread = [1.0, 0.0, 2.0, 0.0, 3.0, 0.0, 4.0];
        let s = view::stride(&spread, 0, 2, 4).unwrap();
        assert_eq!(equals_ex::<f64, 2, 2>(&a, 0, &s, 0, 0.0), Ok(true));
        assert_eq!(equals_ex::<f64, 2, 2>(&a, 0, &spread, 0, 0.5), Ok(false));
        assert!(equals_ex::<f64, 2, 2>(&a, 1, &a, 0, 0.0).is_err());
    }
}
