use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::mat2::Matrix2;
use crate::mat4::Matrix4;
use crate::scalar::Scalar;
use crate::vec3::Vector3;

/// A 3x3 column-major matrix.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Matrix3<S> {
    pub c0: Vector3<S>,
    pub c1: Vector3<S>,
    pub c2: Vector3<S>,
}

impl<S: Scalar> Matrix3<S> {
    /// Constructs from entries in column-major order (`mIJ` is column `I`,
    /// row `J`).
    #[inline]
    pub fn new(
        m00: S, m01: S, m02: S,
        m10: S, m11: S, m12: S,
        m20: S, m21: S, m22: S,
    ) -> Self {
        Matrix3::from_cols(
            Vector3::new(m00, m01, m02),
            Vector3::new(m10, m11, m12),
            Vector3::new(m20, m21, m22),
        )
    }

    #[inline]
    pub fn from_cols(c0: Vector3<S>, c1: Vector3<S>, c2: Vector3<S>) -> Self {
        Matrix3 { c0, c1, c2 }
    }

    #[inline]
    pub fn identity() -> Self {
        Matrix3::new(
            S::ONE, S::ZERO, S::ZERO,
            S::ZERO, S::ONE, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Truncates to the top-left 2x2 block.
    #[inline]
    pub fn as_mat2(self) -> Matrix2<S> {
        Matrix2::from_cols(self.c0.as_vec2(), self.c1.as_vec2())
    }

    /// Embeds into a 4x4 matrix, extending the diagonal with 1.
    #[inline]
    pub fn as_mat4(self) -> Matrix4<S> {
        Matrix4::from_cols(
            self.c0.as_vec4(S::ZERO),
            self.c1.as_vec4(S::ZERO),
            self.c2.as_vec4(S::ZERO),
            Vector3::zero().as_vec4(S::ONE),
        )
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Matrix3::new(
            self.c0.x, self.c1.x, self.c2.x,
            self.c0.y, self.c1.y, self.c2.y,
            self.c0.z, self.c1.z, self.c2.z,
        )
    }

    /// The determinant, as the scalar triple product of the columns.
    #[inline]
    pub fn det(self) -> S {
        self.c0.dot(self.c1.cross(self.c2))
    }

    /// The inverse, as adjugate over determinant.
    ///
    /// The adjugate rows are the pairwise cross products of the columns.
    /// Singular matrices are not detected; a zero determinant propagates
    /// Inf/NaN into every entry. Check [`det`](Self::det) first when that
    /// matters.
    pub fn inverse(self) -> Self {
        let adj = Matrix3::from_cols(
            self.c1.cross(self.c2),
            self.c2.cross(self.c0),
            self.c0.cross(self.c1),
        )
        .transpose();
        adj / self.det()
    }

    /// Columnwise linear interpolation, extrapolating when `t` is outside
    /// `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        Matrix3::from_cols(
            self.c0.lerp(other.c0, t),
            self.c1.lerp(other.c1, t),
            self.c2.lerp(other.c2, t),
        )
    }
}

impl<S: Scalar> Default for Matrix3<S> {
    #[inline]
    fn default() -> Self {
        Matrix3::identity()
    }
}

impl<S: Scalar> Neg for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Matrix3::from_cols(-self.c0, -self.c1, -self.c2)
    }
}

impl<S: Scalar> Add<S> for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: S) -> Self {
        Matrix3::from_cols(self.c0 + rhs, self.c1 + rhs, self.c2 + rhs)
    }
}

impl<S: Scalar> Sub<S> for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: S) -> Self {
        Matrix3::from_cols(self.c0 - rhs, self.c1 - rhs, self.c2 - rhs)
    }
}

impl<S: Scalar> Mul<S> for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Matrix3::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

impl<S: Scalar> Div<S> for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        self * (S::ONE / rhs)
    }
}

impl<S: Scalar> Mul<Vector3<S>> for Matrix3<S> {
    type Output = Vector3<S>;
    #[inline]
    fn mul(self, rhs: Vector3<S>) -> Vector3<S> {
        self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z
    }
}

impl<S: Scalar> Mul for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Matrix3::from_cols(self * rhs.c0, self * rhs.c1, self * rhs.c2)
    }
}

impl<S: Scalar> Add for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Matrix3::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<S: Scalar> Sub for Matrix3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Matrix3::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<S: Scalar> AddAssign<S> for Matrix3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: S) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign<S> for Matrix3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: S) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Matrix3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Matrix3<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> AddAssign for Matrix3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Matrix3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Matrix3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S> Index<usize> for Matrix3<S> {
    type Output = Vector3<S>;
    fn index(&self, index: usize) -> &Vector3<S> {
        match index {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            _ => panic!("matrix column index out of range: {}", index),
        }
    }
}

impl<S> IndexMut<usize> for Matrix3<S> {
    fn index_mut(&mut self, index: usize) -> &mut Vector3<S> {
        match index {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            _ => panic!("matrix column index out of range: {}", index),
        }
    }
}

#[cfg(test)]
use crate::vec3;

#[cfg(test)]
fn fuzzy_eq_mat3(a: &Matrix3<f32>, b: &Matrix3<f32>, epsilon: f32) -> bool {
    let mut ok = true;
    for i in 0..3 {
        for j in 0..3 {
            ok &= f32::abs(a[i][j] - b[i][j]) <= epsilon;
        }
    }
    ok
}

#[test]
fn test_identity() {
    let id: Matrix3<f32> = Matrix3::identity();
    assert_eq!(Matrix3::default(), id);
    assert_eq!(id.det(), 1.0);
    assert_eq!(id.inverse(), id);
    assert_eq!(id * vec3(1.0, -2.0, 3.0), vec3(1.0, -2.0, 3.0));
}

#[test]
fn test_transpose() {
    let m = Matrix3::new(
        1.0, 2.0, 3.0,
        4.0, 5.0, 6.0,
        7.0, 8.0, 9.0,
    );
    assert_eq!(m.transpose().c0, vec3(1.0, 4.0, 7.0));
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn test_det() {
    let m = Matrix3::new(
        2.0, 0.0, 0.0,
        0.0, 3.0, 0.0,
        0.0, 0.0, 4.0,
    );
    assert_eq!(m.det(), 24.0);

    // Linearly dependent columns.
    let singular = Matrix3::new(
        1.0, 2.0, 3.0,
        2.0, 4.0, 6.0,
        0.5, 1.0, 1.5,
    );
    assert_eq!(singular.det(), 0.0);
}

#[test]
fn test_inverse() {
    let m = Matrix3::new(
        2.0, 0.0, 0.0,
        0.0, 4.0, 0.0,
        0.0, 0.0, 8.0,
    );
    assert_eq!(
        m.inverse(),
        Matrix3::new(
            0.5, 0.0, 0.0,
            0.0, 0.25, 0.0,
            0.0, 0.0, 0.125,
        )
    );

    let m = Matrix3::new(
        1.0, 2.0, 0.0,
        0.0, 1.0, 1.0,
        3.0, 0.0, 1.0,
    );
    let id = Matrix3::identity();
    assert!(fuzzy_eq_mat3(&(m * m.inverse()), &id, 1e-6));
    assert!(fuzzy_eq_mat3(&(m.inverse() * m), &id, 1e-6));
    assert!(fuzzy_eq_mat3(&m.inverse().inverse(), &m, 1e-6));
}

#[test]
fn test_mul() {
    let m = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, 2.0, 0.0,
        0.0, 0.0, 3.0,
    );
    assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(1.0, 2.0, 3.0));

    // Column j of a product is the left matrix applied to rhs column j.
    let n = Matrix3::new(
        0.0, 1.0, 0.0,
        1.0, 0.0, 0.0,
        0.0, 0.0, 1.0,
    );
    assert_eq!((m * n).c0, vec3(0.0, 2.0, 0.0));
    assert_eq!((m * n).c1, vec3(1.0, 0.0, 0.0));
    assert_eq!(m * Matrix3::identity(), m);

    let mut acc = n;
    acc *= n;
    assert_eq!(acc, Matrix3::identity());
}

#[test]
fn test_elementwise() {
    let m = Matrix3::identity();
    assert_eq!((m + 1.0).c1, vec3(1.0, 2.0, 1.0));
    assert_eq!((m * 3.0).c2, vec3(0.0, 0.0, 3.0));
    assert_eq!((m - 1.0).c0, vec3(0.0, -1.0, -1.0));
    assert_eq!((m / 2.0).c0, vec3(0.5, 0.0, 0.0));
    assert_eq!((-m).c1, vec3(0.0, -1.0, 0.0));

    let sum = m + m;
    assert_eq!(sum, m * 2.0);
    assert_eq!(sum - m, m);
}

#[test]
fn test_conversions() {
    let m = Matrix3::new(
        1.0, 2.0, 3.0,
        4.0, 5.0, 6.0,
        7.0, 8.0, 9.0,
    );
    assert_eq!(m.as_mat2(), Matrix2::new(1.0, 2.0, 4.0, 5.0));
    let m4 = m.as_mat4();
    assert_eq!(m4.c0, crate::vec4(1.0, 2.0, 3.0, 0.0));
    assert_eq!(m4.c3, crate::vec4(0.0, 0.0, 0.0, 1.0));
    assert_eq!(m4.as_mat3(), m);

    assert_eq!(Matrix3::<f32>::identity().as_mat4(), Matrix4::identity());
    assert_eq!(Matrix3::<f32>::identity().as_mat2(), Matrix2::identity());
}

#[test]
fn test_lerp() {
    let a = Matrix3::identity();
    let b = Matrix3::new(
        2.0, 0.0, 0.0,
        0.0, 4.0, 0.0,
        0.0, 0.0, 6.0,
    );
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(
        a.lerp(b, 0.5),
        Matrix3::new(
            1.5, 0.0, 0.0,
            0.0, 2.5, 0.0,
            0.0, 0.0, 3.5,
        )
    );
}

#[test]
fn test_index() {
    let mut m = Matrix3::identity();
    assert_eq!(m[2], vec3(0.0, 0.0, 1.0));
    m[0] = vec3(2.0, 0.0, 0.0);
    assert_eq!(m.c0.x, 2.0);
}
