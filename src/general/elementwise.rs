use crate::buffer::{ensure_room, ensure_span, BufferMut, BufferRef};
use crate::error::ArrayError;
use crate::traits::{within, Scalar};

use super::{ensure_equal_or_disjoint, Shape};

// Element-wise kernels are layout-agnostic: element k of every operand pairs
// with element k of every other.

/// Apply `f` to element `k` of `a` for every `k`, writing into `dst`.
fn map_ex<T: Scalar>(
    n: usize,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    f: impl Fn(T) -> T,
) -> Result<(), ArrayError> {
    ensure_span(a, ia, n)?;
    ensure_room(dst, id, n)?;
    for k in 0..n {
        dst.set(id + k, f(a.at(ia + k)?))?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn zip_ex<T: Scalar>(
    n: usize,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
    f: impl Fn(T, T) -> T,
) -> Result<(), ArrayError> {
    ensure_span(a, ia, n)?;
    ensure_span(b, ib, n)?;
    ensure_room(dst, id, n)?;
    for k in 0..n {
        dst.set(id + k, f(a.at(ia + k)?, b.at(ib + k)?))?;
    }
    Ok(())
}

// In-place walk. Callers have checked each source is the destination or clear of it.
fn map_within<T: Scalar>(
    n: usize,
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    id: usize,
    f: impl Fn(T) -> T,
) -> Result<(), ArrayError> {
    ensure_span(&*buf, ia, n)?;
    ensure_room(&*buf, id, n)?;
    for k in 0..n {
        let x = buf.at(ia + k)?;
        buf.set(id + k, f(x))?;
    }
    Ok(())
}

// ── Constructors ────────────────────────────────────────────────────

/// Fill `dst[id..id + shape.len()]` with zeros.
pub fn zeros_ex<T: Scalar>(
    shape: Shape,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    let n = shape.checked_len()?;
    ensure_room(dst, id, n)?;
    for k in 0..n {
        dst.set(id + k, T::zero())?;
    }
    Ok(())
}

/// Write the `n×n` identity to `dst[id..id + n*n]`. Same in either layout.
pub fn identity_ex<T: Scalar>(
    n: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    // Checks n*n before anything is written.
    zeros_ex(Shape::square(n), dst, id)?;
    for i in 0..n {
        dst.set(id + i * n + i, T::one())?;
    }
    Ok(())
}

// ── Arithmetic ──────────────────────────────────────────────────────

/// `dst = a + b`, all of `shape`.
pub fn add_ex<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    zip_ex(shape.checked_len()?, a, ia, b, ib, dst, id, |x, y| x + y)
}

/// `dst = a - b`, all of `shape`.
pub fn sub_ex<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    zip_ex(shape.checked_len()?, a, ia, b, ib, dst, id, |x, y| x - y)
}

/// `dst = -a`.
pub fn neg_ex<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    map_ex(shape.checked_len()?, a, ia, dst, id, |x| T::zero() - x)
}

/// `dst = a * k`.
pub fn scale_ex<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    k: T,
    dst: &mut (impl BufferMut<T> + ?Sized),
    id: usize,
) -> Result<(), ArrayError> {
    map_ex(shape.checked_len()?, a, ia, dst, id, |x| x * k)
}

/// Element-wise comparison within `eps`.
pub fn equals_ex<T: Scalar>(
    shape: Shape,
    a: &(impl BufferRef<T> + ?Sized),
    ia: usize,
    b: &(impl BufferRef<T> + ?Sized),
    ib: usize,
    eps: T,
) -> Result<bool, ArrayError> {
    let n = shape.checked_len()?;
    ensure_span(a, ia, n)?;
    ensure_span(b, ib, n)?;
    for k in 0..n {
        if !within(a.at(ia + k)?, b.at(ib + k)?, eps) {
            return Ok(false);
        }
    }
    Ok(true)
}

// ── Single buffer ───────────────────────────────────────────────────

/// `buf[id..] = buf[ia..] + buf[ib..]`.
///
/// Each source must be the destination range itself or clear of it; a
/// partial overlap is [`ArrayError::Overlap`]. The two sources may overlap
/// each other freely. Ranges are compared as logical indices, so `buf` must
/// not map two logical indices onto one backing slot.
///
/// ```
/// use linbuf::general::{add_within, Shape};
/// use linbuf::ArrayError;
///
/// let mut buf = [1, 2, 3, 4, 10, 20, 30, 40];
/// add_within(Shape::new(2, 2), &mut buf, 0, 4, 0).unwrap();
/// assert_eq!(buf[..4], [11, 22, 33, 44]);
/// assert_eq!(add_within(Shape::new(2, 2), &mut buf, 0, 4, 1), Err(ArrayError::Overlap));
/// ```
pub fn add_within<T: Scalar>(
    shape: Shape,
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    ib: usize,
    id: usize,
) -> Result<(), ArrayError> {
    let n = shape.checked_len()?;
    ensure_equal_or_disjoint("add_within", ia, id, n)?;
    ensure_equal_or_disjoint("add_within", ib, id, n)?;
    ensure_span(&*buf, ia, n)?;
    ensure_span(&*buf, ib, n)?;
    ensure_room(&*buf, id, n)?;
    for k in 0..n {
        let x = buf.at(ia + k)? + buf.at(ib + k)?;
        buf.set(id + k, x)?;
    }
    Ok(())
}

/// `buf[id..] = -buf[ia..]`; same overlap rule as [`add_within`].
pub fn neg_within<T: Scalar>(
    shape: Shape,
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    id: usize,
) -> Result<(), ArrayError> {
    let n = shape.checked_len()?;
    ensure_equal_or_disjoint("neg_within", ia, id, n)?;
    map_within(n, buf, ia, id, |x| T::zero() - x)
}

/// `buf[id..] = buf[ia..] * k`; same overlap rule as [`add_within`].
pub fn scale_within<T: Scalar>(
    shape: Shape,
    buf: &mut (impl BufferMut<T> + ?Sized),
    ia: usize,
    k: T,
    id: usize,
) -> Result<(), ArrayError> {
    let n = shape.checked_len()?;
    ensure_equal_or_disjoint("scale_within", ia, id, n)?;
    map_within(n, buf, ia, id, |x| x * k)
}
