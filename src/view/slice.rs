use crate::buffer::{BufferMut, BufferRef};
use crate::error::ArrayError;

/// Contiguous window over a backing buffer: logical `i` is backing `start + i`.
///
/// ```
/// use linbuf::view::Slice;
/// use linbuf::{BufferMut, BufferRef};
///
/// let mut data = [1, 2, 3, 4, 5];
/// let mut mid = Slice::new(&mut data, 1, 3).unwrap();
/// assert_eq!(mid.at(0), Ok(2));
/// mid.set(2, 40).unwrap();
/// assert_eq!(data, [1, 2, 3, 40, 5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Slice<B> {
    backing: B,
    start: usize,
    count: usize,
}

impl<B> Slice<B> {
    /// Window of `count` elements starting at `start`.
    ///
    /// Fails with [`ArrayError::OutOfRange`] if `start + count` exceeds the backing length.
    pub fn new<T>(backing: B, start: usize, count: usize) -> Result<Self, ArrayError>
    where
        B: BufferRef<T>,
    {
        let len = backing.len();
        let fits = match start.checked_add(count) {
            Some(end) => end <= len,
            None => false,
        };
        if !fits {
            let last = start.saturating_add(count.max(1) - 1);
            return Err(super::rejected("slice", last as isize, len));
        }
        Ok(Self {
            backing,
            start,
            count,
        })
    }

    /// First backing index covered.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
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

impl<T, B: BufferRef<T>> BufferRef<T> for Slice<B> {
    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        if i < self.count {
            self.backing.get(self.start + i)
        } else {
            None
        }
    }
}

impl<T, B: BufferMut<T>> BufferMut<T> for Slice<B> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.count {
            self.backing.get_mut(self.start + i)
        } else {
            None
        }
    }
}
