use crate::buffer::{ensure_room, ensure_span, BufferMut, BufferRef};
use crate::error::ArrayError;
use crate::layout::Layout;
use crate::traits::Scalar;

use super::{shape_mismatch, Shape};

/// Element `(i, j)` of a `shape` matrix stored at `off` in `layout`.
#[inline]
fn elem<T: Scalar>(
    buf: &(impl BufferRef<T> + ?Sized),
    off: usize,
    shape: Shape,
    layout: Layout,
    i: usize,
    j: usize,
) -> Result<T, ArrayError> {
    buf.at(off + layout.index(shape.rows, shape.cols, i, j))
}

/// Result shape of `a * b` and its element count.
fn product_shape(op: &str, a: Shape, b: Shape) -> Result<(Shape, usize), ArrayError> {
    if a.cols != b.rows {
        return Err(shape_mismatch(op, a, b));
    }
    let so = Shape::new(a.rows, b.cols);
    Ok((so, so.checked_len()?))
}

/// Write `a * b` into `out`, which holds `out_shape` in `layout` starting at `io`.
#[allow(clippy::too_many_arguments)]
fn product_into<T: Scalar>(
    sa: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    sb: Shape,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    out: &mut (impl BufferMut<T> + ?Sized),
    io: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let so = Shape::new(sa.rows, sb.cols);
    if so.is_empty() {
        return Ok(());
    }
    for i in 0..so.rows {
        for j in 0..so.cols {
            let mut sum = T::zero();
            for k in 0..sa.cols {
                sum = sum + elem(a, ia, sa, layout, i, k)? * elem(b, ib, sb, layout, k, j)?;
            }
            out.set(io + layout.index(so.rows, so.cols, i, j), sum)?;
        }
    }
    Ok(())
}

fn transpose_into<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    out: &mut (impl BufferMut<T> + ?Sized),
    io: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    if shape.is_empty() {
        return Ok(());
    }
    let t = shape.transposed();
    for i in 0..shape.rows {
        for j in 0..shape.cols {
            out.set(io + layout.index(t.rows, t.cols, j, i), elem(a, ia, shape, layout, i, j)?)?;
        }
    }
    Ok(())
}

fn ensure_scratch<T>(scratch: &[T], needed: usize) -> Result<(), ArrayError> {
    if scratch.len() < needed {
        return Err(ArrayError::DestinationTooShort {
            needed,
            len: scratch.len(),
        });
    }
    Ok(())
}

fn copy_out<T: Scalar>(
    src: &[T],
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    for (k, &x) in src.iter().enumerate() {
        dst.set(id + k, x)?;
    }
    Ok(())
}

// ── Distinct buffers ────────────────────────────────────────────────

/// `dst = a * b` for runtime shapes, all three in `layout`.
///
/// Returns the result shape `(a.rows, b.cols)`. Fails with
/// [`ArrayError::ShapeMismatch`] when `a.cols != b.rows`, and with
/// [`ArrayError::DestinationTooShort`] before writing anything when `dst`
/// cannot hold the result.
#[allow(clippy::too_many_arguments)]
pub fn mul_ex<T: Scalar>(
    sa: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    sb: Shape,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<Shape, ArrayError> {
    let (so, n) = product_shape("mul_ex", sa, sb)?;
    ensure_span(a, ia, sa.checked_len()?)?;
    ensure_span(b, ib, sb.checked_len()?)?;
    ensure_room(dst, id, n)?;
    product_into(sa, a, ia, sb, b, ib, dst, id, layout)?;
    Ok(so)
}

/// `dst = aᵀ`; the result is `shape.transposed()` in the same `layout`.
pub fn transpose_ex<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    let n = shape.checked_len()?;
    ensure_span(a, ia, n)?;
    ensure_room(dst, id, n)?;
    transpose_into(shape, a, ia, dst, id, layout)
}

/// `dst[id..id + rows] = m * v` for a `shape` matrix `m` and a `cols`-vector `v`.
#[allow(clippy::too_many_arguments)]
pub fn mul_vec_ex<T: Scalar>(
    shape: Shape,
    m: &(impl BufferRef<T> + ?Sized),
    im: usize,
    v: &(impl BufferRef<T> + ?Sized),
    iv: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    layout: Layout,
) -> Result<(), ArrayError> {
    ensure_span(m, im, shape.checked_len()?)?;
    ensure_span(v, iv, shape.cols)?;
    ensure_room(dst, id, shape.rows)?;
    for i in 0..shape.rows {
        let mut sum = T::zero();
        for j in 0..shape.cols {
            sum = sum + elem(m, im, shape, layout, i, j)? * v.at(iv + j)?;
        }
        dst.set(id + i, sum)?;
    }
    Ok(())
}

// ── Single buffer, staged through scratch ───────────────────────────

/// Single-buffer [`mul_ex`]. The product is built in `scratch` (at least
/// `a.rows * b.cols` long) and then copied to `buf[id..]`, so any overlap
/// between the sources and the destination is fine.
///
/// ```
/// use linbuf::general::{mul_within, Shape};
/// use linbuf::Layout;
///
/// // Square a 2×2 matrix in place.
/// let mut buf = [1, 2, 3, 4];
/// let mut scratch = [0; 4];
/// let s = Shape::square(2);
/// mul_within(s, s, &mut buf, 0, 0, 0, &mut scratch, Layout::RowMajor).unwrap();
/// assert_eq!(buf, [7, 10, 15, 22]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn mul_within<T: Scalar>(
    sa: Shape,
    sb: Shape,
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    ib: usize,
    id: usize,
    scratch: &mut [T],
    layout: Layout,
) -> Result<Shape, ArrayError> {
    let (so, n) = product_shape("mul_within", sa, sb)?;
    ensure_scratch(scratch, n)?;
    ensure_span(&*buf, ia, sa.checked_len()?)?;
    ensure_span(&*buf, ib, sb.checked_len()?)?;
    ensure_room(&*buf, id, n)?;
    let out = &mut scratch[..n];
    product_into(sa, &*buf, ia, sb, &*buf, ib, out, 0, layout)?;
    copy_out(out, buf, id)?;
    Ok(so)
}

/// Single-buffer [`transpose_ex`] staged through `scratch` (at least
/// `shape.len()` long). `id == ia` transposes in place, square or not.
pub fn transpose_within<T: Scalar>(
    shape: Shape,
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    id: usize,
    scratch: &mut [T],
    layout: Layout,
) -> Result<(), ArrayError> {
    let n = shape.checked_len()?;
    ensure_scratch(scratch, n)?;
    ensure_span(&*buf, ia, n)?;
    ensure_room(&*buf, id, n)?;
    let out = &mut scratch[..n];
    transpose_into(shape, &*buf, ia, out, 0, layout)?;
    copy_out(out, buf, id)
}
