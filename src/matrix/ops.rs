use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::{within, Scalar};
use crate::vector;
use crate::Matrix;

// Element-wise ops work column by column through the vector kernels.

// ── Addition / subtraction ──────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_cols(core::array::from_fn(|j| vector::add(self.data[j], rhs.data[j])))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(core::array::from_fn(|j| vector::sub(self.data[j], rhs.data[j])))
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_cols(self.data.map(vector::neg))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        -*self
    }
}

// ── Product: (R×K) * (K×C) → (R×C) ─────────────────────────────────

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        // Column j of the product is self applied to column j of rhs.
        Matrix::from_cols(rhs.data.map(|col| self.mul_vec(&col)))
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, k: T) -> Self {
        Self::from_cols(self.data.map(|col| vector::scale(col, k)))
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, k: T) {
        *self = *self * k;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn mul(self, k: T) -> Matrix<T, R, C> {
        *self * k
    }
}

// ── Reference variants ──────────────────────────────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>> for Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>> for &Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: &Matrix<T, K, C>) -> Matrix<T, R, C> {
        *self * *rhs
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Named kernels ───────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Matrix-vector product `A v`, with `v` as a plain array.
    ///
    /// ```
    /// use linbuf::Matrix;
    /// let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(a.mul_vec(&[7.0, 8.0, 9.0]), [50.0, 122.0]);
    /// ```
    pub fn mul_vec(&self, v: &[T; C]) -> [T; R] {
        let mut out = [T::zero(); R];
        for (col, &x) in self.data.iter().zip(v.iter()) {
            for (o, &a) in out.iter_mut().zip(col.iter()) {
                *o = *o + a * x;
            }
        }
        out
    }

    /// Element-wise (Hadamard) product.
    pub fn element_mul(&self, rhs: &Self) -> Self {
        Self::from_cols(core::array::from_fn(|j| vector::mul(self.data[j], rhs.data[j])))
    }

    /// Transpose: (R×C) → (C×R).
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self[(j, i)])
    }

    /// Element-wise equality within `eps`.
    ///
    /// `eps = 0` is exact equality. Unlike `==` this takes a tolerance, so it
    /// is the comparison to use after floating-point arithmetic.
    ///
    /// ```
    /// use linbuf::Matrix2;
    /// let a = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix2::new([[1.0, 2.0], [3.0, 4.0 + 1e-9]]);
    /// assert!(a.equals(&b, 1e-6));
    /// assert!(!a.equals(&b, 0.0));
    /// ```
    pub fn equals(&self, rhs: &Self, eps: T) -> bool {
        self.iter().zip(rhs.iter()).all(|(&a, &b)| within(a, b, eps))
    }
}
