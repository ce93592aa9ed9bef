use crate::error::ArrayError;
use crate::traits::{FloatScalar, Scalar};
use crate::vector;
use crate::{Matrix3, Matrix4};

// Homogeneous transforms: a 3×3 acts on 2-D points, a 4×4 on 3-D points.
// Builders compose by left-multiplication, so `t * r` rotates, then translates.

// ── 2-D (3×3) ───────────────────────────────────────────────────────

impl<T: Scalar> Matrix3<T> {
    /// Apply to a 2-D point: append `1`, multiply, drop the trailing coordinate.
    ///
    /// ```
    /// use linbuf::Matrix3;
    /// let t = Matrix3::translation([2.0, -1.0]);
    /// assert_eq!(t.transform_point([1.0, 1.0]), [3.0, 0.0]);
    /// ```
    pub fn transform_point(&self, p: [T; 2]) -> [T; 2] {
        let [x, y, _] = self.mul_vec(&[p[0], p[1], T::one()]);
        [x, y]
    }

    /// Apply to a 2-D direction: append `0`, so translation has no effect.
    pub fn transform_vector(&self, v: [T; 2]) -> [T; 2] {
        let [x, y, _] = self.mul_vec(&[v[0], v[1], T::zero()]);
        [x, y]
    }

    /// Translation by `t`.
    pub fn translation(t: [T; 2]) -> Self {
        let mut m = Self::eye();
        m[(0, 2)] = t[0];
        m[(1, 2)] = t[1];
        m
    }

    /// Axis-aligned scaling by `s`.
    pub fn scaling(s: [T; 2]) -> Self {
        let mut m = Self::eye();
        m[(0, 0)] = s[0];
        m[(1, 1)] = s[1];
        m
    }
}

impl<T: FloatScalar> Matrix3<T> {
    /// Counter-clockwise rotation by `angle` radians about the origin.
    ///
    /// ```
    /// use linbuf::Matrix3;
    /// let r = Matrix3::rotation(core::f64::consts::FRAC_PI_2);
    /// let [x, y] = r.transform_point([1.0, 0.0]);
    /// assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix3::new([
            [c, -s, T::zero()],
            [s, c, T::zero()],
            [T::zero(), T::zero(), T::one()],
        ])
    }
}

// ── 3-D (4×4) ───────────────────────────────────────────────────────

impl<T: Scalar> Matrix4<T> {
    /// Apply to a 3-D point: append `1`, multiply, drop the trailing coordinate.
    pub fn transform_point(&self, p: [T; 3]) -> [T; 3] {
        let [x, y, z, _] = self.mul_vec(&[p[0], p[1], p[2], T::one()]);
        [x, y, z]
    }

    /// Apply to a 3-D direction: append `0`, so translation has no effect.
    pub fn transform_vector(&self, v: [T; 3]) -> [T; 3] {
        let [x, y, z, _] = self.mul_vec(&[v[0], v[1], v[2], T::zero()]);
        [x, y, z]
    }

    /// Translation by `t`.
    pub fn translation(t: [T; 3]) -> Self {
        let mut m = Self::eye();
        for (i, &ti) in t.iter().enumerate() {
            m[(i, 3)] = ti;
        }
        m
    }

    /// Axis-aligned scaling by `s`.
    pub fn scaling(s: [T; 3]) -> Self {
        let mut m = Self::eye();
        for (i, &si) in s.iter().enumerate() {
            m[(i, i)] = si;
        }
        m
    }
}

impl<T: FloatScalar> Matrix4<T> {
    /// Rotation by `angle` radians around `axis` (right-handed), via the
    /// Rodrigues formula `R = cI + s[k]× + (1 - c)kkᵀ`.
    ///
    /// `axis` is normalized first; a zero axis is [`ArrayError::ZeroLength`].
    ///
    /// ```
    /// use linbuf::Matrix4;
    /// let r = Matrix4::rotation_around_axis([0.0, 0.0, 2.0], core::f64::consts::FRAC_PI_2).unwrap();
    /// let p = r.transform_point([1.0, 0.0, 0.0]);
    /// assert!(linbuf::vector::equals(p, [0.0, 1.0, 0.0], 1e-12));
    /// ```
    pub fn rotation_around_axis(axis: [T; 3], angle: T) -> Result<Self, ArrayError> {
        let [x, y, z] = vector::normalize(axis)?;
        let (s, c) = angle.sin_cos();
        let t = T::one() - c;
        let o = T::zero();
        Ok(Matrix4::new([
            [c + x * x * t, x * y * t - z * s, x * z * t + y * s, o],
            [y * x * t + z * s, c + y * y * t, y * z * t - x * s, o],
            [z * x * t - y * s, z * y * t + x * s, c + z * z * t, o],
            [o, o, o, T::one()],
        ]))
    }
}
