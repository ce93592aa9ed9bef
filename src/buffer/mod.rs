//! The buffer contract every other module is written against.
//!
//! A buffer is anything with a length and checked element access: plain
//! slices, arrays and `Vec`s, views over other buffers, and foreign memory
//! wrapped in a [`RawBuffer`]. Kernels never assume more than this.

mod raw;

pub use raw::RawBuffer;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::ArrayError;
use crate::traits::Scalar;

/// Read-only access to a linearly addressed sequence.
///
/// Indices are 0-based; `get` returns `None` outside `[0, len)`.
pub trait BufferRef<T> {
    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// Element at `i`, or `None` when `i >= len()`.
    fn get(&self, i: usize) -> Option<&T>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checked read, failing with [`ArrayError::OutOfRange`].
    ///
    /// ```
    /// use linbuf::BufferRef;
    /// let data = [1.0_f64, 2.0];
    /// assert_eq!(BufferRef::at(&data, 1), Ok(2.0));
    /// assert!(BufferRef::at(&data, 2).is_err());
    /// ```
    #[inline]
    fn at(&self, i: usize) -> Result<T, ArrayError>
    where
        T: Copy,
    {
        match self.get(i) {
            Some(v) => Ok(*v),
            None => Err(ArrayError::out_of_range(i, self.len())),
        }
    }

    /// Copy the logical contents into a new `Vec`.
    #[cfg(feature = "alloc")]
    fn to_vec(&self) -> Vec<T>
    where
        T: Copy,
    {
        (0..self.len()).filter_map(|i| self.get(i).copied()).collect()
    }
}

/// Mutable access to a linearly addressed sequence.
pub trait BufferMut<T>: BufferRef<T> {
    /// Mutable element at `i`, or `None` when `i >= len()`.
    fn get_mut(&mut self, i: usize) -> Option<&mut T>;

    /// Checked write, failing with [`ArrayError::OutOfRange`].
    #[inline]
    fn set(&mut self, i: usize, value: T) -> Result<(), ArrayError> {
        let len = self.len();
        match self.get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ArrayError::out_of_range(i, len)),
        }
    }
}

// ── Plain storage ───────────────────────────────────────────────────

impl<T> BufferRef<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        <[T]>::get(self, i)
    }
}

impl<T> BufferMut<T> for [T] {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, i)
    }
}

impl<T, const N: usize> BufferRef<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }
}

impl<T, const N: usize> BufferMut<T> for [T; N] {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }
}

#[cfg(feature = "alloc")]
impl<T> BufferRef<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }
}

#[cfg(feature = "alloc")]
impl<T> BufferMut<T> for Vec<T> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }
}

// ── Borrowed buffers ────────────────────────────────────────────────
// Views hold their backing by value, so `&B` and `&mut B` must be buffers too.

impl<T, B: BufferRef<T> + ?Sized> BufferRef<T> for &B {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        (**self).get(i)
    }
}

impl<T, B: BufferRef<T> + ?Sized> BufferRef<T> for &mut B {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        (**self).get(i)
    }
}

impl<T, B: BufferMut<T> + ?Sized> BufferMut<T> for &mut B {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        (**self).get_mut(i)
    }
}

// ── Fixed-width transfers ───────────────────────────────────────────

/// Read `N` consecutive elements starting at `offset`.
///
/// ```
/// use linbuf::buffer::load;
/// let data = [0.0_f64, 1.0, 2.0, 3.0];
/// assert_eq!(load::<f64, 2>(&data, 1), Ok([1.0, 2.0]));
/// assert!(load::<f64, 2>(&data, 3).is_err());
/// ```
#[inline]
pub fn load<T: Scalar, const N: usize>(
    buf: &(impl BufferRef<T> + ?Sized),
    offset: usize,
) -> Result<[T; N], ArrayError> {
    ensure_span(buf, offset, N)?;
    let mut out = [T::zero(); N];
    for (k, slot) in out.iter_mut().enumerate() {
        *slot = buf.at(offset + k)?;
    }
    Ok(out)
}

/// Write `values` to `N` consecutive slots starting at `offset`.
///
/// The whole range is validated first, so a failed call writes nothing.
#[inline]
pub fn store<T: Copy, const N: usize>(
    dst: &mut (impl BufferMut<T> + ?Sized),
    offset: usize,
    values: &[T; N],
) -> Result<(), ArrayError> {
    ensure_room(dst, offset, N)?;
    for (k, &v) in values.iter().enumerate() {
        dst.set(offset + k, v)?;
    }
    Ok(())
}

/// Fail unless `count` slots starting at `offset` fit in `dst`.
#[inline]
pub(crate) fn ensure_room<T>(
    dst: &(impl BufferRef<T> + ?Sized),
    offset: usize,
    count: usize,
) -> Result<(), ArrayError> {
    match offset.checked_add(count) {
        Some(needed) if needed <= dst.len() => Ok(()),
        Some(needed) => Err(ArrayError::DestinationTooShort {
            needed,
            len: dst.len(),
        }),
        None => Err(ArrayError::DestinationTooShort {
            needed: usize::MAX,
            len: dst.len(),
        }),
    }
}

/// Fail unless `count` readable elements start at `offset` in `src`.
#[inline]
pub(crate) fn ensure_span<T>(
    src: &(impl BufferRef<T> + ?Sized),
    offset: usize,
    count: usize,
) -> Result<(), ArrayError> {
    if count == 0 {
        return Ok(());
    }
    match offset.checked_add(count) {
        Some(end) if end <= src.len() => Ok(()),
        Some(end) => Err(ArrayError::out_of_range(end - 1, src.len())),
        None => Err(ArrayError::OutOfRange {
            index: isize::MAX,
            len: src.len(),
        }),
    }
}
