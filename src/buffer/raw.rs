use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{BufferMut, BufferRef};

/// A buffer over memory the library does not own.
///
/// Wraps a pointer and an element count handed over by foreign code (an FFI
/// allocation, a mapped region, a GPU staging area). The lifetime `'a` stands
/// in for whatever keeps that memory alive; the wrapper never frees it.
///
/// ```
/// use linbuf::{BufferMut, BufferRef, RawBuffer};
///
/// let mut storage = [1.0_f64, 2.0, 3.0];
/// let mut raw = RawBuffer::from_slice(&mut storage);
/// raw.set(1, 20.0).unwrap();
/// assert_eq!(raw.at(1), Ok(20.0));
/// assert!(raw.at(3).is_err());
/// assert_eq!(storage, [1.0, 20.0, 3.0]);
/// ```
#[derive(Debug)]
pub struct RawBuffer<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// Same thread-safety as the `&'a mut [T]` it stands in for.
unsafe impl<T: Send> Send for RawBuffer<'_, T> {}
unsafe impl<T: Sync> Sync for RawBuffer<'_, T> {}

impl<'a, T> RawBuffer<'a, T> {
    /// Wrap `len` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` consecutive,
    /// initialised, properly aligned `T`s for the whole of `'a`, and nothing
    /// else may access that memory while the `RawBuffer` is alive.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Wrap a mutable slice. Safe counterpart of [`from_raw_parts`](Self::from_raw_parts).
    #[inline]
    pub fn from_slice(slice: &'a mut [T]) -> Self {
        let len = slice.len();
        Self {
            ptr: NonNull::from(slice).cast(),
            len,
            _marker: PhantomData,
        }
    }

    /// Raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }
}

impl<T> BufferRef<T> for RawBuffer<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            // Safety: in bounds, and the constructor contract keeps the region valid for 'a.
            Some(unsafe { &*self.ptr.as_ptr().add(i) })
        } else {
            None
        }
    }
}

impl<T> BufferMut<T> for RawBuffer<'_, T> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.len {
            // Safety: as above; `&mut self` guarantees exclusive access.
            Some(unsafe { &mut *self.ptr.as_ptr().add(i) })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector;

    #[test]
    fn raw_parts_round_trip() {
        let mut storage = vec![0.0_f32; 6];
        let ptr = NonNull::new(storage.as_mut_ptr()).unwrap();
        let mut raw = unsafe { RawBuffer::from_raw_parts(ptr, storage.len()) };
        for i in 0..6 {
            raw.set(i, i as f32).unwrap();
        }
        assert_eq!(raw.len(), 6);
        assert!(raw.set(6, 1.0).is_err());
        drop(raw);
        assert_eq!(storage, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn kernels_accept_raw_buffers() {
        let mut a = [1.0_f64, 2.0, 3.0];
        let b = [4.0_f64, 5.0, 6.0];
        let raw = RawBuffer::from_slice(&mut a);
        let dot = vector::ex::dot_ex::<f64, 3>(&raw, 0, &b, 0).unwrap();
        assert_eq!(dot, 32.0);
    }

    #[test]
    fn empty_region() {
        let mut storage: [u8; 0] = [];
        let raw = RawBuffer::from_slice(&mut storage);
        assert!(raw.is_empty());
        assert_eq!(raw.get(0), None);
    }
}
