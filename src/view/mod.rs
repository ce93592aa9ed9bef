//! Zero-copy views: slice, stride, reverse, and interleave.
//!
//! Each view holds a backing buffer plus an index mapping and is itself a
//! buffer, so views compose (a stride over a slice over an interleave) and
//! can be handed to any kernel. Reads and writes go straight through to the
//! backing storage; nothing is copied.
//!
//! The backing is held by value. Pass `&data` for a read-only view or
//! `&mut data` for a writable one; the borrow keeps the view from outliving
//! its storage.
//!
//! | View | Logical `i` maps to | Length |
//! |------|---------------------|--------|
//! | [`Slice`] | `start + i` | `count` |
//! | [`Stride`] | `start + i * stride` | `count` |
//! | [`reverse_from`] | `start + count - 1 - i` | `count` |
//! | [`Interleave`] | `start + (i / group) * stride + i % group` | `group * count` |
//!
//! ```
//! use linbuf::view;
//! use linbuf::BufferRef;
//!
//! // x, y, r, g, b records: pull out the positions only.
//! let records = [1.0_f64, 2.0, 0.1, 0.2, 0.3, 3.0, 4.0, 0.4, 0.5, 0.6];
//! let pos = view::interleave(&records, 0, 2, 5, 2).unwrap();
//! assert_eq!(pos.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
//!
//! // Every other x coordinate, walking backwards.
//! let xs = view::stride(&pos, 2, -2, 2).unwrap();
//! assert_eq!(xs.to_vec(), vec![3.0, 1.0]);
//! ```

mod interleave;
mod slice;
mod stride;

pub use interleave::Interleave;
pub use slice::Slice;
pub use stride::Stride;

use crate::buffer::BufferRef;
use crate::error::ArrayError;

/// Contiguous window `[start, start + count)` of `backing`.
#[inline]
pub fn slice<T, B: BufferRef<T>>(
    backing: B,
    start: usize,
    count: usize,
) -> Result<Slice<B>, ArrayError> {
    Slice::new(backing, start, count)
}

/// Every `stride`-th element of `backing`, `count` of them, starting at `start`.
#[inline]
pub fn stride<T, B: BufferRef<T>>(
    backing: B,
    start: usize,
    stride: isize,
    count: usize,
) -> Result<Stride<B>, ArrayError> {
    Stride::new(backing, start, stride, count)
}

/// The first `count` elements of `backing`, last one first.
///
/// ```
/// use linbuf::{view, BufferRef};
/// let data = [1, 2, 3, 4, 5];
/// let r = view::reverse(&data, 4).unwrap();
/// assert_eq!(r.to_vec(), vec![4, 3, 2, 1]);
/// ```
#[inline]
pub fn reverse<T, B: BufferRef<T>>(backing: B, count: usize) -> Result<Stride<B>, ArrayError> {
    Stride::reversed(backing, 0, count)
}

/// The `count` elements starting at `start`, last one first.
#[inline]
pub fn reverse_from<T, B: BufferRef<T>>(
    backing: B,
    start: usize,
    count: usize,
) -> Result<Stride<B>, ArrayError> {
    Stride::reversed(backing, start, count)
}

/// `count` records of `group` consecutive elements, records `stride` apart.
#[inline]
pub fn interleave<T, B: BufferRef<T>>(
    backing: B,
    start: usize,
    group: usize,
    stride: usize,
    count: usize,
) -> Result<Interleave<B>, ArrayError> {
    Interleave::new(backing, start, group, stride, count)
}

/// Log and build the error for a view whose mapped range leaves its backing.
#[cold]
fn rejected(kind: &str, index: isize, len: usize) -> ArrayError {
    log::debug!("{kind} view rejected: maps to index {index}, backing length {len}");
    ArrayError::OutOfRange { index, len }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferMut;
    use crate::error::ErrorKind;

    #[test]
    fn views_compose() {
        let data: Vec<i32> = (0..20).collect();
        // [5..15) -> every third -> reversed
        let s = slice(&data, 5, 10).unwrap();
        let st = stride(s, 0, 3, 4).unwrap();
        let r = reverse(st, 4).unwrap();
        assert_eq!(r.to_vec(), vec![14, 11, 8, 5]);
    }

    #[test]
    fn writes_reach_backing_through_nested_views() {
        let mut data = [0; 8];
        {
            let inner = slice(&mut data, 2, 6).unwrap();
            let mut outer = stride(inner, 1, 2, 3).unwrap();
            for i in 0..outer.len() {
                outer.set(i, 10 + i as i32).unwrap();
            }
        }
        assert_eq!(data, [0, 0, 0, 10, 0, 11, 0, 12]);
    }

    #[test]
    fn construction_errors_are_typed() {
        let data = [0.0_f32; 4];
        assert_eq!(stride(&data, 0, 0, 2).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(slice(&data, 3, 2).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(
            interleave(&data, 0, 0, 2, 1).unwrap_err().kind(),
            ErrorKind::Domain
        );
        assert_eq!(reverse(&data, 5).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn view_past_end_reads_none() {
        let data = [1, 2, 3];
        let s = slice(&data, 1, 2).unwrap();
        assert_eq!(s.get(2), None);
        assert_eq!(s.at(2), Err(ArrayError::OutOfRange { index: 2, len: 2 }));
    }
}
