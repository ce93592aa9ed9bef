/// Major order used to address an `R×C` matrix stored flat in a buffer.
///
/// Passed explicitly to every kernel that cares; there is no global switch.
///
/// ```
/// use linbuf::Layout;
///
/// // (row 1, col 2) of a 2×3 matrix
/// assert_eq!(Layout::ColumnMajor.index(2, 3, 1, 2), 5);
/// assert_eq!(Layout::RowMajor.index(2, 3, 1, 2), 5);
/// assert_eq!(Layout::ColumnMajor.index(2, 3, 1, 0), 1);
/// assert_eq!(Layout::RowMajor.index(2, 3, 1, 0), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Element `(r, c)` at `c * rows + r`.
    #[default]
    ColumnMajor,
    /// Element `(r, c)` at `r * cols + c`.
    RowMajor,
}

impl Layout {
    /// Flat position of `(row, col)` in a `rows × cols` matrix, relative to its offset.
    #[inline]
    pub const fn index(self, rows: usize, cols: usize, row: usize, col: usize) -> usize {
        match self {
            Layout::ColumnMajor => col * rows + row,
            Layout::RowMajor => row * cols + col,
        }
    }

    /// The other major order.
    ///
    /// A column-major `R×C` matrix read as row-major is its `C×R` transpose.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Layout::ColumnMajor => Layout::RowMajor,
            Layout::RowMajor => Layout::ColumnMajor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_column_major() {
        assert_eq!(Layout::default(), Layout::ColumnMajor);
    }

    #[test]
    fn flipped_reads_transpose() {
        // A 2×3 column-major block read as 3×2 row-major gives the transpose.
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(
                    Layout::ColumnMajor.index(2, 3, r, c),
                    Layout::ColumnMajor.flipped().index(3, 2, c, r)
                );
            }
        }
    }

    #[test]
    fn indices_cover_block() {
        let mut seen = [false; 12];
        for r in 0..3 {
            for c in 0..4 {
                seen[Layout::RowMajor.index(3, 4, r, c)] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
