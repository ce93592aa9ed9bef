/// Errors from view construction and the buffer kernels.
///
/// Every failure is reported immediately to the caller; nothing is clamped,
/// truncated, or replaced with a default.
///
/// ```
/// use linbuf::{ArrayError, ErrorKind};
/// use linbuf::view::Slice;
///
/// let data = [1.0_f64, 2.0, 3.0];
/// let err = Slice::new(&data, 2, 4).unwrap_err();
/// assert_eq!(err, ArrayError::OutOfRange { index: 5, len: 3 });
/// assert_eq!(err.kind(), ErrorKind::Range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// An index or computed offset falls outside `[0, len)` of the buffer it addresses.
    OutOfRange {
        /// Offending index; negative when a downward stride runs past the start.
        index: isize,
        /// Length of the addressed buffer.
        len: usize,
    },
    /// Incompatible matrix dimensions, as `(rows, cols)` of each operand.
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// `rows * cols` does not fit in `usize`.
    ShapeOverflow { rows: usize, cols: usize },
    /// A buffer's length does not match the shape it is supposed to hold.
    LengthMismatch { expected: usize, got: usize },
    /// The destination cannot hold the result.
    DestinationTooShort {
        /// One past the last destination index the result needs.
        needed: usize,
        len: usize,
    },
    /// Source and destination ranges partially overlap in a kernel that
    /// cannot buffer the result.
    Overlap,
    /// Zero stride in a stride or interleave view.
    ZeroStride,
    /// Zero group size in an interleave view.
    ZeroGroupSize,
    /// Normalising a vector of zero length.
    ZeroLength,
}

/// Coarse classification of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Index or offset outside a buffer.
    Range,
    /// Shape, arity or destination-size mismatch.
    Shape,
    /// Mathematically undefined request.
    Domain,
}

impl ArrayError {
    /// Which of the three error kinds this is.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::OutOfRange { .. } => ErrorKind::Range,
            ArrayError::ShapeMismatch { .. }
            | ArrayError::ShapeOverflow { .. }
            | ArrayError::LengthMismatch { .. }
            | ArrayError::DestinationTooShort { .. }
            | ArrayError::Overlap => ErrorKind::Shape,
            ArrayError::ZeroStride | ArrayError::ZeroGroupSize | ArrayError::ZeroLength => {
                ErrorKind::Domain
            }
        }
    }

    #[inline]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        ArrayError::OutOfRange {
            index: index as isize,
            len,
        }
    }
}

impl core::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArrayError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for buffer of length {}", index, len)
            }
            ArrayError::ShapeMismatch { lhs, rhs } => write!(
                f,
                "shape mismatch: {}x{} is incompatible with {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            ArrayError::ShapeOverflow { rows, cols } => {
                write!(f, "shape {}x{} has more elements than usize can count", rows, cols)
            }
            ArrayError::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {}, got {}", expected, got)
            }
            ArrayError::DestinationTooShort { needed, len } => write!(
                f,
                "destination too short: result needs {} slots, buffer has {}",
                needed, len
            ),
            ArrayError::Overlap => write!(f, "source and destination ranges partially overlap"),
            ArrayError::ZeroStride => write!(f, "stride must be non-zero"),
            ArrayError::ZeroGroupSize => write!(f, "group size must be non-zero"),
            ArrayError::ZeroLength => write!(f, "cannot normalise a zero-length vector"),
        }
    }
}

impl core::error::Error for ArrayError {}
