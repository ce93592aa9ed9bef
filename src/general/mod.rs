//! Runtime-shaped matrix kernels.
//!
//! The fixed-size kernels in [`matrix::ex`](crate::matrix::ex) need `R` and
//! `C` at compile time. These take a [`Shape`] instead and walk the buffers
//! element by element, so nothing is staged on the stack. Distinct-buffer
//! `*_ex` forms write straight into the destination. Single-buffer forms
//! either reject unsafe overlap ([`add_within`], [`neg_within`],
//! [`scale_within`]) or stage the result in caller scratch
//! ([`mul_within`], [`transpose_within`]).
//!
//! Overlap is judged on logical indices. A view that maps two logical
//! indices onto one backing slot (an [`Interleave`](crate::view::Interleave)
//! with `stride < group`, say) can still alias inside a "disjoint" walk.
//!
//! With `alloc`, [`mul`], [`transpose`], [`add`], [`neg`], [`scale`], [`identity`] and
//! [`zeros`] return a fresh `Vec`.
//!
//! ```
//! use linbuf::general::{self, Shape};
//! use linbuf::Layout;
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2×3 row-major
//! let b = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0]; // 3×2 row-major
//! let mut c = [0.0; 4];
//! let s = general::mul_ex(
//!     Shape::new(2, 3), &a, 0,
//!     Shape::new(3, 2), &b, 0,
//!     &mut c, 0, Layout::RowMajor,
//! ).unwrap();
//! assert_eq!(s, Shape::new(2, 2));
//! assert_eq!(c, [4.0, 5.0, 10.0, 11.0]);
//! ```

mod elementwise;
#[cfg(feature = "alloc")]
mod owned;
mod product;

pub use elementwise::*;
#[cfg(feature = "alloc")]
pub use owned::*;
pub use product::*;

use core::fmt;

use crate::error::ArrayError;

/// Dimensions of a runtime-shaped matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// `n×n`.
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    /// Number of elements, `rows * cols`, saturating at `usize::MAX`.
    ///
    /// Kernels go through [`Shape::checked_len`] instead.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// `rows * cols`, or [`ArrayError::ShapeOverflow`] when the product does
    /// not fit in `usize`.
    ///
    /// ```
    /// use linbuf::general::Shape;
    /// use linbuf::ArrayError;
    ///
    /// assert_eq!(Shape::new(2, 3).checked_len(), Ok(6));
    /// assert_eq!(
    ///     Shape::new(usize::MAX, 2).checked_len(),
    ///     Err(ArrayError::ShapeOverflow { rows: usize::MAX, cols: 2 })
    /// );
    /// ```
    #[inline]
    pub fn checked_len(self) -> Result<usize, ArrayError> {
        match self.rows.checked_mul(self.cols) {
            Some(n) => Ok(n),
            None => Err(shape_overflow(self)),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// `cols×rows`.
    #[inline]
    pub const fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    #[inline]
    pub(crate) const fn dims(self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

#[cold]
fn shape_mismatch(op: &str, lhs: Shape, rhs: Shape) -> ArrayError {
    log::debug!("{op} rejected: incompatible shapes {lhs} and {rhs}");
    ArrayError::ShapeMismatch {
        lhs: lhs.dims(),
        rhs: rhs.dims(),
    }
}

#[cold]
fn shape_overflow(shape: Shape) -> ArrayError {
    log::debug!("rejected shape {shape}: element count overflows usize");
    ArrayError::ShapeOverflow {
        rows: shape.rows,
        cols: shape.cols,
    }
}

#[cold]
fn overlap(op: &str, src: usize, dst: usize, len: usize) -> ArrayError {
    log::debug!("{op} rejected: source at {src} partially overlaps destination at {dst} (length {len})");
    ArrayError::Overlap
}

/// Fail unless `[src, src+len)` and `[dst, dst+len)` are identical or disjoint.
fn ensure_equal_or_disjoint(op: &str, src: usize, dst: usize, len: usize) -> Result<(), ArrayError> {
    if src == dst || src.saturating_add(len) <= dst || dst.saturating_add(len) <= src {
        Ok(())
    } else {
        Err(overlap(op, src, dst, len))
    }
}
