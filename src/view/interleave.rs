use crate::buffer::{BufferMut, BufferRef};
use crate::error::ArrayError;

/// One packed group out of a run of fixed-size records.
///
/// The backing holds `count` records spaced `stride` elements apart; each
/// record starts with the `group` elements of interest. The view reads them
/// back to back:
///
/// ```text
/// logical i  ->  start + (i / group) * stride + (i % group)
/// len        =   group * count
/// ```
///
/// ```
/// use linbuf::view::Interleave;
/// use linbuf::BufferRef;
///
/// // position (x, y) followed by color (r, g, b), twice
/// let verts = [0.0_f32, 1.0, 9.0, 9.0, 9.0, 2.0, 3.0, 9.0, 9.0, 9.0];
/// let colors = Interleave::new(&verts, 2, 3, 5, 2).unwrap();
/// assert_eq!(colors.len(), 6);
/// assert_eq!(colors.to_vec(), vec![9.0; 6]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Interleave<B> {
    backing: B,
    start: usize,
    group: usize,
    stride: usize,
    count: usize,
}

impl<B> Interleave<B> {
    /// `count` groups of `group` elements, groups `stride` apart, starting at `start`.
    ///
    /// Fails with [`ArrayError::ZeroGroupSize`] or [`ArrayError::ZeroStride`]
    /// for degenerate parameters and with [`ArrayError::OutOfRange`] when the
    /// last group does not fit in the backing.
    ///
    /// `stride < group` is allowed and gives overlapping windows: distinct
    /// logical indices then share backing slots, and the overlap checks in
    /// [`general`](crate::general) do not see it.
    pub fn new<T>(
        backing: B,
        start: usize,
        group: usize,
        stride: usize,
        count: usize,
    ) -> Result<Self, ArrayError>
    where
        B: BufferRef<T>,
    {
        if group == 0 {
            log::debug!("interleave view rejected: zero group size");
            return Err(ArrayError::ZeroGroupSize);
        }
        if stride == 0 {
            log::debug!("interleave view rejected: zero stride");
            return Err(ArrayError::ZeroStride);
        }
        let len = backing.len();
        if count > 0 {
            let last = (count - 1)
                .checked_mul(stride)
                .and_then(|d| d.checked_add(start))
                .and_then(|d| d.checked_add(group - 1));
            match last {
                Some(last) if last < len => {}
                Some(last) => return Err(super::rejected("interleave", last as isize, len)),
                None => return Err(super::rejected("interleave", isize::MAX, len)),
            }
        }
        Ok(Self {
            backing,
            start,
            group,
            stride,
            count,
        })
    }

    /// Backing index of logical element `i`. Valid for `i < len()`.
    #[inline]
    pub fn backing_index(&self, i: usize) -> usize {
        self.start + (i / self.group) * self.stride + i % self.group
    }

    /// Elements per group.
    #[inline]
    pub fn group(&self) -> usize {
        self.group
    }

    /// Number of groups.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn backing(&self) -> &B {
        &self.backing
    }

    #[inline]
    pub fn into_inner(self) -> B {
        self.backing
    }
}

impl<T, B: BufferRef<T>> BufferRef<T> for Interleave<B> {
    #[inline]
    fn len(&self) -> usize {
        self.group * self.count
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        if i < self.len() {
            self.backing.get(self.backing_index(i))
        } else {
            None
        }
    }
}

impl<T, B: BufferMut<T>> BufferMut<T> for Interleave<B> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.group * self.count {
            let j = self.backing_index(i);
            self.backing.get_mut(j)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleave_formula() {
        let data: Vec<i32> = (0..40).collect();
        let (start, g, s, n) = (3usize, 3usize, 7usize, 5usize);
        let v = Interleave::new(&data, start, g, s, n).unwrap();
        assert_eq!(v.len(), g * n);
        for k in 0..n {
            for j in 0..g {
                assert_eq!(v.at(k * g + j), Ok(data[start + k * s + j]));
            }
        }
    }

    #[test]
    fn exact_fit_and_overrun() {
        let data = [0u8; 10];
        // last group ends at 1 + 2*4 + 1 = 10 -> one past the end
        assert_eq!(
            Interleave::new(&data, 1, 2, 4, 3).unwrap_err(),
            ArrayError::OutOfRange { index: 10, len: 10 }
        );
        assert!(Interleave::new(&data, 0, 2, 4, 3).is_ok());
        assert!(Interleave::new(&data, 0, 2, 4, 0).unwrap().is_empty());
    }

    #[test]
    fn degenerate_parameters() {
        let data = [0u8; 10];
        assert_eq!(
            Interleave::new(&data, 0, 0, 4, 2).unwrap_err(),
            ArrayError::ZeroGroupSize
        );
        assert_eq!(
            Interleave::new(&data, 0, 2, 0, 2).unwrap_err(),
            ArrayError::ZeroStride
        );
    }

    #[test]
    fn writes_only_touch_the_group() {
        let mut data = [0; 9];
        let mut v = Interleave::new(&mut data, 1, 2, 3, 3).unwrap();
        assert_eq!((v.group(), v.count()), (2, 3));
        for i in 0..v.len() {
            v.set(i, 1).unwrap();
        }
        assert_eq!(data, [0, 1, 1, 0, 1, 1, 0, 1, 1]);
    }

    #[test]
    fn overlapping_windows_share_slots() {
        let mut data = [1, 2, 3, 4];
        let mut v = Interleave::new(&mut data, 0, 3, 1, 2).unwrap();
        assert_eq!(v.to_vec(), vec![1, 2, 3, 2, 3, 4]);
        assert_eq!(v.backing_index(1), v.backing_index(3));
        v.set(1, 20).unwrap();
        assert_eq!(v.at(3), Ok(20));

        // An in-place walk over logically disjoint halves still collides.
        let mut data = [1, 2, 3, 4];
        let mut v = Interleave::new(&mut data, 0, 3, 1, 2).unwrap();
        crate::general::neg_within(crate::Shape::new(1, 3), &mut v, 0, 3).unwrap();
        assert_eq!(data, [1, -1, 1, -1]);
    }

    #[test]
    fn dense_interleave_is_identity() {
        let data = [1, 2, 3, 4, 5, 6];
        let v = Interleave::new(&data, 0, 2, 2, 3).unwrap();
        assert_eq!(v.to_vec(), data.to_vec());
        assert_eq!(v.backing_index(5), 5);
    }
}
