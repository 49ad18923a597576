use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::mat3::Matrix3;
use crate::mat4::Matrix4;
use crate::scalar::Scalar;
use crate::vec2::Vector2;

/// A 2x2 column-major matrix.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Matrix2<S> {
    pub c0: Vector2<S>,
    pub c1: Vector2<S>,
}

impl<S: Scalar> Matrix2<S> {
    /// Constructs from entries in column-major order (`mIJ` is column `I`,
    /// row `J`).
    #[inline]
    pub fn new(m00: S, m01: S, m10: S, m11: S) -> Self {
        Matrix2::from_cols(Vector2::new(m00, m01), Vector2::new(m10, m11))
    }

    #[inline]
    pub fn from_cols(c0: Vector2<S>, c1: Vector2<S>) -> Self {
        Matrix2 { c0, c1 }
    }

    #[inline]
    pub fn identity() -> Self {
        Matrix2::new(S::ONE, S::ZERO, S::ZERO, S::ONE)
    }

    /// Embeds into a 3x3 matrix, extending the diagonal with 1.
    #[inline]
    pub fn as_mat3(self) -> Matrix3<S> {
        Matrix3::from_cols(
            self.c0.as_vec3(S::ZERO),
            self.c1.as_vec3(S::ZERO),
            Vector2::zero().as_vec3(S::ONE),
        )
    }

    /// Embeds into a 4x4 matrix, extending the diagonal with 1.
    #[inline]
    pub fn as_mat4(self) -> Matrix4<S> {
        self.as_mat3().as_mat4()
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Matrix2::new(self.c0.x, self.c1.x, self.c0.y, self.c1.y)
    }

    #[inline]
    pub fn det(self) -> S {
        self.c0.x * self.c1.y - self.c0.y * self.c1.x
    }

    /// The inverse, as adjugate over determinant.
    ///
    /// Singular matrices are not detected; a zero determinant propagates
    /// Inf/NaN into every entry. Check [`det`](Self::det) first when that
    /// matters.
    #[inline]
    pub fn inverse(self) -> Self {
        let adj = Matrix2::new(self.c1.y, -self.c0.y, -self.c1.x, self.c0.x);
        adj / self.det()
    }

    /// Columnwise linear interpolation, extrapolating when `t` is outside
    /// `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        Matrix2::from_cols(self.c0.lerp(other.c0, t), self.c1.lerp(other.c1, t))
    }
}

impl<S: Scalar> Default for Matrix2<S> {
    #[inline]
    fn default() -> Self {
        Matrix2::identity()
    }
}

impl<S: Scalar> Neg for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Matrix2::from_cols(-self.c0, -self.c1)
    }
}

impl<S: Scalar> Add<S> for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: S) -> Self {
        Matrix2::from_cols(self.c0 + rhs, self.c1 + rhs)
    }
}

impl<S: Scalar> Sub<S> for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: S) -> Self {
        Matrix2::from_cols(self.c0 - rhs, self.c1 - rhs)
    }
}

impl<S: Scalar> Mul<S> for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Matrix2::from_cols(self.c0 * rhs, self.c1 * rhs)
    }
}

impl<S: Scalar> Div<S> for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        self * (S::ONE / rhs)
    }
}

impl<S: Scalar> Mul<Vector2<S>> for Matrix2<S> {
    type Output = Vector2<S>;
    #[inline]
    fn mul(self, rhs: Vector2<S>) -> Vector2<S> {
        self.c0 * rhs.x + self.c1 * rhs.y
    }
}

impl<S: Scalar> Mul for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Matrix2::from_cols(self * rhs.c0, self * rhs.c1)
    }
}

impl<S: Scalar> Add for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Matrix2::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl<S: Scalar> Sub for Matrix2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Matrix2::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl<S: Scalar> AddAssign<S> for Matrix2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: S) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign<S> for Matrix2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: S) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Matrix2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Matrix2<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> AddAssign for Matrix2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Matrix2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Matrix2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S> Index<usize> for Matrix2<S> {
    type Output = Vector2<S>;
    fn index(&self, index: usize) -> &Vector2<S> {
        match index {
            0 => &self.c0,
            1 => &self.c1,
            _ => panic!("matrix column index out of range: {}", index),
        }
    }
}

impl<S> IndexMut<usize> for Matrix2<S> {
    fn index_mut(&mut self, index: usize) -> &mut Vector2<S> {
        match index {
            0 => &mut self.c0,
            1 => &mut self.c1,
            _ => panic!("matrix column index out of range: {}", index),
        }
    }
}

#[cfg(test)]
use crate::vec2;

#[test]
fn test_identity() {
    let id: Matrix2<f32> = Matrix2::identity();
    assert_eq!(Matrix2::default(), id);
    assert_eq!(id.det(), 1.0);
    assert_eq!(id.inverse(), id);
    assert_eq!(id * vec2(3.0, -4.0), vec2(3.0, -4.0));
}

#[test]
fn test_transpose() {
    let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(m.transpose(), Matrix2::new(1.0, 3.0, 2.0, 4.0));
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn test_det_inverse() {
    // Diagonal case, no rounding involved.
    let m = Matrix2::new(4.0, 0.0, 0.0, 2.0);
    assert_eq!(m.det(), 8.0);
    assert_eq!(m.inverse(), Matrix2::new(0.25, 0.0, 0.0, 0.5));
    assert_eq!(m * m.inverse(), Matrix2::identity());

    let shear = Matrix2::new(1.0, 0.0, 3.0, 1.0);
    assert_eq!(shear.det(), 1.0);
    assert_eq!(shear.inverse(), Matrix2::new(1.0, 0.0, -3.0, 1.0));

    // Inverting a singular matrix silently propagates Inf/NaN.
    let singular = Matrix2::new(1.0f32, 2.0, 2.0, 4.0);
    assert_eq!(singular.det(), 0.0);
    assert!(!singular.inverse().c0.x.is_finite());
}

#[test]
fn test_mul() {
    let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    // First column maps the x basis vector, second the y basis vector.
    assert_eq!(m * vec2(1.0, 0.0), vec2(1.0, 2.0));
    assert_eq!(m * vec2(0.0, 1.0), vec2(3.0, 4.0));
    assert_eq!(m * vec2(1.0, 1.0), vec2(4.0, 6.0));

    let n = Matrix2::new(0.0, 1.0, 1.0, 0.0);
    assert_eq!(m * n, Matrix2::new(3.0, 4.0, 1.0, 2.0));
    assert_eq!(m * Matrix2::identity(), m);
}

#[test]
fn test_elementwise() {
    let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let n = Matrix2::new(0.5, 0.5, 0.5, 0.5);

    assert_eq!(m + n, Matrix2::new(1.5, 2.5, 3.5, 4.5));
    assert_eq!(m - n, Matrix2::new(0.5, 1.5, 2.5, 3.5));
    assert_eq!(m * 2.0, Matrix2::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(m / 2.0, Matrix2::new(0.5, 1.0, 1.5, 2.0));
    assert_eq!(-m, Matrix2::new(-1.0, -2.0, -3.0, -4.0));

    let mut acc = m;
    acc += 1.0;
    acc -= n;
    acc *= 2.0;
    assert_eq!(acc, Matrix2::new(3.0, 5.0, 7.0, 9.0));
}

#[test]
fn test_conversions() {
    let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    let m3 = m.as_mat3();
    assert_eq!(m3.c0, crate::vec3(1.0, 2.0, 0.0));
    assert_eq!(m3.c2, crate::vec3(0.0, 0.0, 1.0));
    assert_eq!(m3.as_mat2(), m);

    // Embedding the identity preserves the identity.
    assert_eq!(Matrix2::<f32>::identity().as_mat4(), Matrix4::identity());
}

#[test]
fn test_lerp() {
    let a = Matrix2::new(1.0, 0.0, 0.0, 1.0);
    let b = Matrix2::new(3.0, 2.0, -2.0, 5.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Matrix2::new(2.0, 1.0, -1.0, 3.0));
}

#[test]
fn test_index() {
    let mut m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(m[0], vec2(1.0, 2.0));
    assert_eq!(m[1], vec2(3.0, 4.0));
    m[1].y = 7.0;
    assert_eq!(m.c1, vec2(3.0, 7.0));
}
