use crate::buffer::{self, BufferMut, BufferRef};
use crate::error::ArrayError;
use crate::layout::Layout;
use crate::traits::Scalar;
use crate::Matrix;

// ── Slice access ────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// View the entire matrix as a flat slice in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in column-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// View column `j` as a slice. Columns are contiguous, so this never copies.
    #[inline]
    pub fn col_slice(&self, j: usize) -> &[T] {
        &self.data[j]
    }
}

// ── Buffer transfer ─────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Read an `R×C` matrix stored at `buf[offset..offset + R*C]` in `layout` order.
    ///
    /// ```
    /// use linbuf::{Layout, Matrix};
    /// let buf = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let m: Matrix<f64, 2, 3> = Matrix::load(&buf, 1, Layout::RowMajor).unwrap();
    /// assert_eq!(m, Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
    /// let m: Matrix<f64, 2, 3> = Matrix::load(&buf, 1, Layout::ColumnMajor).unwrap();
    /// assert_eq!(m, Matrix::new([[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]));
    /// ```
    pub fn load(
        buf: &(impl BufferRef<T> + ?Sized),
        offset: usize,
        layout: Layout,
    ) -> Result<Self, ArrayError> {
        buffer::ensure_span(buf, offset, R * C)?;
        let mut m = Self::zeros();
        for j in 0..C {
            for i in 0..R {
                m.data[j][i] = buf.at(offset + layout.index(R, C, i, j))?;
            }
        }
        Ok(m)
    }

    /// Write this matrix to `dst[offset..offset + R*C]` in `layout` order.
    ///
    /// Nothing is written if the destination is too short.
    pub fn store(
        &self,
        dst: &mut (impl BufferMut<T> + ?Sized),
        offset: usize,
        layout: Layout,
    ) -> Result<(), ArrayError> {
        buffer::ensure_room(dst, offset, R * C)?;
        for j in 0..C {
            for i in 0..R {
                dst.set(offset + layout.index(R, C, i, j), self.data[j][i])?;
            }
        }
        Ok(())
    }

    /// Create a matrix from a flat slice in column-major order.
    ///
    /// Fails with [`ArrayError::LengthMismatch`] if `slice.len() != R * C`.
    ///
    /// ```
    /// use linbuf::Matrix;
    /// // Column-major: col0=[1,4], col1=[2,5], col2=[3,6]
    /// let m: Matrix<f64, 2, 3> = Matrix::from_col_major(&[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// ```
    pub fn from_col_major(slice: &[T]) -> Result<Self, ArrayError> {
        Self::from_exact(slice, Layout::ColumnMajor)
    }

    /// Create a matrix from a flat slice in row-major order.
    pub fn from_row_major(slice: &[T]) -> Result<Self, ArrayError> {
        Self::from_exact(slice, Layout::RowMajor)
    }

    fn from_exact(slice: &[T], layout: Layout) -> Result<Self, ArrayError> {
        if slice.len() != R * C {
            return Err(ArrayError::LengthMismatch {
                expected: R * C,
                got: slice.len(),
            });
        }
        Self::load(slice, 0, layout)
    }
}

// ── Iterators ───────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Iterate over all elements in column-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements in column-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// A matrix is itself a buffer, addressed column-major, so kernels can read
// from and write into one directly.
impl<T, const R: usize, const C: usize> BufferRef<T> for Matrix<T, R, C> {
    #[inline]
    fn len(&self) -> usize {
        R * C
    }

    #[inline]
    fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }
}

impl<T, const R: usize, const C: usize> BufferMut<T> for Matrix<T, R, C> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }
}
