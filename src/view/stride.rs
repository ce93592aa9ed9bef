use crate::buffer::{BufferMut, BufferRef};
use crate::error::ArrayError;

/// Every `stride`-th element of a backing buffer.
///
/// Logical `i` maps to backing `start + i * stride`. A negative stride walks
/// the backing downwards; `stride == -1` is a reversal (see
/// [`view::reverse`](super::reverse)). The typical use is pulling one
/// component out of an array-of-structs layout.
///
/// ```
/// use linbuf::view::Stride;
/// use linbuf::BufferRef;
///
/// // x0 y0 z0 x1 y1 z1 x2 y2 z2
/// let xyz = [1.0_f32, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0];
/// let xs = Stride::new(&xyz, 0, 3, 3).unwrap();
/// assert_eq!(xs.to_vec(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stride<B> {
    backing: B,
    start: usize,
    stride: isize,
    count: usize,
}

impl<B> Stride<B> {
    /// `count` elements starting at `start`, `stride` apart.
    ///
    /// Fails with [`ArrayError::ZeroStride`] for `stride == 0`, and with
    /// [`ArrayError::OutOfRange`] if the first or last mapped index leaves the backing.
    pub fn new<T>(backing: B, start: usize, stride: isize, count: usize) -> Result<Self, ArrayError>
    where
        B: BufferRef<T>,
    {
        if stride == 0 {
            log::debug!("stride view rejected: zero stride");
            return Err(ArrayError::ZeroStride);
        }
        let len = backing.len();
        if count > 0 {
            if start >= len {
                return Err(super::rejected("stride", start as isize, len));
            }
            // Linear map: if both ends are in range, so is everything between.
            let last = isize::try_from(count - 1)
                .ok()
                .and_then(|n| n.checked_mul(stride))
                .and_then(|d| d.checked_add(start as isize));
            match last {
                Some(last) if last >= 0 && (last as usize) < len => {}
                Some(last) => return Err(super::rejected("stride", last, len)),
                None => return Err(super::rejected("stride", isize::MAX, len)),
            }
        }
        Ok(Self {
            backing,
            start,
            stride,
            count,
        })
    }

    /// `count` elements starting at `start`, in reverse order.
    pub fn reversed<T>(backing: B, start: usize, count: usize) -> Result<Self, ArrayError>
    where
        B: BufferRef<T>,
    {
        if count == 0 {
            return Self::new(backing, start, -1, 0);
        }
        match start.checked_add(count - 1) {
            Some(last) => Self::new(backing, last, -1, count),
            None => Err(super::rejected("reverse", isize::MAX, backing.len())),
        }
    }

    /// Backing index of logical element `i`. Valid for `i < len()`.
    #[inline]
    pub fn backing_index(&self, i: usize) -> usize {
        (self.start as isize + i as isize * self.stride) as usize
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
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

impl<T, B: BufferRef<T>> BufferRef<T> for Stride<B> {
    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        if i < self.count {
            self.backing.get(self.backing_index(i))
        } else {
            None
        }
    }
}

impl<T, B: BufferMut<T>> BufferMut<T> for Stride<B> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.count {
            let j = self.backing_index(i);
            self.backing.get_mut(j)
        } else {
            None
        }
    }
}
