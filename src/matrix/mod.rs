//! Fixed-size matrices and their kernels.
//!
//! [`Matrix<T, R, C>`] is the value form: an `R×C` matrix on the stack,
//! stored column-major. It moves in and out of flat buffers with
//! [`Matrix::load`] / [`Matrix::store`] under either [`Layout`]. The
//! offset-addressed kernels in [`ex`] are built on exactly that: load the
//! operands, compute on the stack, store the result.
//!
//! ```
//! use linbuf::{Layout, Matrix, Matrix2};
//!
//! let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! let b: Matrix2<f64> = Matrix::eye();
//! assert_eq!(a * b, a);
//!
//! let mut buf = [0.0; 4];
//! a.store(&mut buf, 0, Layout::ColumnMajor).unwrap();
//! assert_eq!(buf, [1.0, 3.0, 2.0, 4.0]);
//! a.store(&mut buf, 0, Layout::RowMajor).unwrap();
//! assert_eq!(buf, [1.0, 2.0, 3.0, 4.0]);
//! ```

pub mod aliases;
pub mod ex;
mod ops;
mod slice;
mod transform;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is column-major: `data[col][row]`.
/// Stack-allocated, no-std compatible.
///
/// # Examples
///
/// ```
/// use linbuf::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; R]; C],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (R arrays of C elements each).
    /// Internally transposed to column-major storage.
    #[inline]
    pub fn new(rows: [[T; C]; R]) -> Self
    where
        T: Copy,
    {
        Self {
            data: core::array::from_fn(|col| core::array::from_fn(|row| rows[row][col])),
        }
    }

    /// Create a matrix from its columns.
    #[inline]
    pub const fn from_cols(cols: [[T; R]; C]) -> Self {
        Self { data: cols }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); R]; C],
        }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use linbuf::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        let mut m = Self::zeros();
        for j in 0..C {
            for i in 0..R {
                m.data[j][i] = f(i, j);
            }
        }
        m
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

// Index by (row, col) tuple
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col][row]
    }
}

pub use aliases::*;
