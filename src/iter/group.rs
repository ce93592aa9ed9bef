use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::buffer::{self, BufferRef};
use crate::error::ArrayError;
use crate::traits::Scalar;

/// Iterator over consecutive, non-overlapping `N`-element windows.
///
/// Created by [`group`] and [`group_ex`]. A trailing remainder shorter than
/// `N` is dropped.
pub struct Group<'a, T, B: ?Sized, const N: usize> {
    buf: &'a B,
    pos: usize,
    end: usize,
    _elem: PhantomData<fn() -> T>,
}

// Manual impls: a derive would demand `B: Clone`, which unsized buffers can't meet.
impl<T, B: ?Sized, const N: usize> Clone for Group<'_, T, B, N> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            pos: self.pos,
            end: self.end,
            _elem: PhantomData,
        }
    }
}

impl<T, B: ?Sized, const N: usize> core::fmt::Debug for Group<'_, T, B, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Group")
            .field("arity", &N)
            .field("pos", &self.pos)
            .field("end", &self.end)
            .finish()
    }
}

/// Group the whole of `buf` into `[T; N]` windows.
///
/// Yields `buf.len() / N` items. Each call starts a fresh pass.
///
/// ```
/// use linbuf::iter::group;
/// let seq = [1, 2, 3, 4, 5, 6];
/// let pairs: Vec<[i32; 2]> = group::<i32, 2, _>(&seq).collect();
/// assert_eq!(pairs, vec![[1, 2], [3, 4], [5, 6]]);
/// ```
pub fn group<T: Scalar, const N: usize, B: BufferRef<T> + ?Sized>(buf: &B) -> Group<'_, T, B, N> {
    const { assert!(N > 0, "group arity must be non-zero") };
    Group {
        buf,
        pos: 0,
        end: buf.len(),
        _elem: PhantomData,
    }
}

/// Group the sub-range `[start, start + count)` of `buf`.
///
/// Fails with [`ArrayError::OutOfRange`] if the sub-range leaves the buffer.
///
/// ```
/// use linbuf::iter::group_ex;
/// let seq = [1, 2, 3, 4, 5, 6];
/// let pairs: Vec<[i32; 2]> = group_ex::<i32, 2, _>(&seq, 1, 4).unwrap().collect();
/// assert_eq!(pairs, vec![[2, 3], [4, 5]]);
/// ```
pub fn group_ex<T: Scalar, const N: usize, B: BufferRef<T> + ?Sized>(
    buf: &B,
    start: usize,
    count: usize,
) -> Result<Group<'_, T, B, N>, ArrayError> {
    const { assert!(N > 0, "group arity must be non-zero") };
    buffer::ensure_span(buf, start, count)?;
    Ok(Group {
        buf,
        pos: start,
        end: start + count,
        _elem: PhantomData,
    })
}

impl<T: Scalar, B: BufferRef<T> + ?Sized, const N: usize> Iterator for Group<'_, T, B, N> {
    type Item = [T; N];

    #[inline]
    fn next(&mut self) -> Option<[T; N]> {
        if self.end - self.pos < N {
            self.pos = self.end;
            return None;
        }
        let item = buffer::load(self.buf, self.pos).ok()?;
        self.pos += N;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.pos) / N;
        (n, Some(n))
    }
}

impl<T: Scalar, B: BufferRef<T> + ?Sized, const N: usize> ExactSizeIterator for Group<'_, T, B, N> {}

impl<T: Scalar, B: BufferRef<T> + ?Sized, const N: usize> FusedIterator for Group<'_, T, B, N> {}
