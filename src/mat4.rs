use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::angle::Angle;
use crate::mat2::Matrix2;
use crate::mat3::Matrix3;
use crate::scalar::Scalar;
use crate::vec3::Vector3;
use crate::vec4::Vector4;

/// A 4x4 column-major matrix.
///
/// This is the workhorse for homogeneous 3D transforms; the static
/// constructors build the usual affine building blocks and compose through
/// multiplication:
///
/// ```
/// use glint::{vec3, Angle, Matrix4};
///
/// let model = Matrix4::translation(vec3(0.0, 1.0, 0.0))
///     * Matrix4::rotation_y(Angle::degrees(45.0))
///     * Matrix4::scale(vec3(2.0, 2.0, 2.0));
/// # let _ = model;
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Matrix4<S> {
    pub c0: Vector4<S>,
    pub c1: Vector4<S>,
    pub c2: Vector4<S>,
    pub c3: Vector4<S>,
}

impl<S: Scalar> Matrix4<S> {
    /// Constructs from entries in column-major order (`mIJ` is column `I`,
    /// row `J`).
    #[inline]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Matrix4::from_cols(
            Vector4::new(m00, m01, m02, m03),
            Vector4::new(m10, m11, m12, m13),
            Vector4::new(m20, m21, m22, m23),
            Vector4::new(m30, m31, m32, m33),
        )
    }

    #[inline]
    pub fn from_cols(c0: Vector4<S>, c1: Vector4<S>, c2: Vector4<S>, c3: Vector4<S>) -> Self {
        Matrix4 { c0, c1, c2, c3 }
    }

    #[inline]
    pub fn identity() -> Self {
        Matrix4::new(
            S::ONE, S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, S::ONE, S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, S::ONE, S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// A scale along the three axes, with the homogeneous part left at
    /// identity.
    #[inline]
    pub fn scale(v: Vector3<S>) -> Self {
        Matrix4::new(
            v.x, S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, v.y, S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, v.z, S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// A translation, embedded in the last column.
    #[inline]
    pub fn translation(v: Vector3<S>) -> Self {
        Matrix4::from_cols(
            Vector4::new(S::ONE, S::ZERO, S::ZERO, S::ZERO),
            Vector4::new(S::ZERO, S::ONE, S::ZERO, S::ZERO),
            Vector4::new(S::ZERO, S::ZERO, S::ONE, S::ZERO),
            v.as_vec4(S::ONE),
        )
    }

    /// A right-handed rotation of `angle` around `axis`, by Rodrigues'
    /// formula. `axis` is expected to be unit length and is not renormalized
    /// here.
    pub fn rotation(axis: Vector3<S>, angle: Angle<S>) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        let t = S::ONE - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Matrix4::new(
            c + t * x * x, t * x * y + s * z, t * x * z - s * y, S::ZERO,
            t * x * y - s * z, c + t * y * y, t * y * z + s * x, S::ZERO,
            t * x * z + s * y, t * y * z - s * x, c + t * z * z, S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// A right-handed rotation around the x axis.
    pub fn rotation_x(angle: Angle<S>) -> Self {
        let c = angle.cos();
        let s = angle.sin();

        Matrix4::new(
            S::ONE, S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, c, s, S::ZERO,
            S::ZERO, -s, c, S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// A right-handed rotation around the y axis.
    pub fn rotation_y(angle: Angle<S>) -> Self {
        let c = angle.cos();
        let s = angle.sin();

        Matrix4::new(
            c, S::ZERO, -s, S::ZERO,
            S::ZERO, S::ONE, S::ZERO, S::ZERO,
            s, S::ZERO, c, S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// A right-handed rotation around the z axis.
    pub fn rotation_z(angle: Angle<S>) -> Self {
        let c = angle.cos();
        let s = angle.sin();

        Matrix4::new(
            c, s, S::ZERO, S::ZERO,
            -s, c, S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, S::ONE, S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// A right-handed view matrix looking from `eye` towards `target`.
    ///
    /// The rotation rows are the camera basis (so the matrix applies the
    /// inverse rotation) and the last column carries the translation that
    /// moves `eye` to the origin.
    pub fn look_at(eye: Vector3<S>, target: Vector3<S>, up: Vector3<S>) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);

        Matrix4::new(
            x.x, y.x, z.x, S::ZERO,
            x.y, y.y, z.y, S::ZERO,
            x.z, y.z, z.z, S::ZERO,
            -x.dot(eye), -y.dot(eye), -z.dot(eye), S::ONE,
        )
    }

    /// Truncates to the top-left 2x2 block.
    #[inline]
    pub fn as_mat2(self) -> Matrix2<S> {
        self.as_mat3().as_mat2()
    }

    /// Truncates to the top-left 3x3 block.
    #[inline]
    pub fn as_mat3(self) -> Matrix3<S> {
        Matrix3::from_cols(self.c0.as_vec3(), self.c1.as_vec3(), self.c2.as_vec3())
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Matrix4::new(
            self.c0.x, self.c1.x, self.c2.x, self.c3.x,
            self.c0.y, self.c1.y, self.c2.y, self.c3.y,
            self.c0.z, self.c1.z, self.c2.z, self.c3.z,
            self.c0.w, self.c1.w, self.c2.w, self.c3.w,
        )
    }

    /// The determinant, by cofactor expansion grouped into 2x2 blocks.
    pub fn det(self) -> S {
        let (s, t, u, v) = self.block_cofactors();
        s.dot(v) + t.dot(u)
    }

    /// The inverse, as adjugate over determinant.
    ///
    /// Singular matrices are not detected; a zero determinant propagates
    /// Inf/NaN into every entry. Check [`det`](Self::det) first when that
    /// matters.
    pub fn inverse(self) -> Self {
        let a = self.c0.as_vec3();
        let b = self.c1.as_vec3();
        let c = self.c2.as_vec3();
        let d = self.c3.as_vec3();

        let (s, t, u, v) = self.block_cofactors();
        let inv_det = S::ONE / (s.dot(v) + t.dot(u));
        let s = s * inv_det;
        let t = t * inv_det;
        let u = u * inv_det;
        let v = v * inv_det;

        // Rows of the inverse.
        let r0 = b.cross(v) + t * self.c1.w;
        let r1 = v.cross(a) - t * self.c0.w;
        let r2 = d.cross(u) + s * self.c3.w;
        let r3 = u.cross(c) - s * self.c2.w;

        Matrix4::new(
            r0.x, r1.x, r2.x, r3.x,
            r0.y, r1.y, r2.y, r3.y,
            r0.z, r1.z, r2.z, r3.z,
            -b.dot(t), a.dot(t), -d.dot(s), c.dot(s),
        )
    }

    // The four cofactor vectors shared by det() and inverse(): cross
    // products of the upper 3x3 column pairs and their lower-row weighted
    // differences.
    fn block_cofactors(self) -> (Vector3<S>, Vector3<S>, Vector3<S>, Vector3<S>) {
        let a = self.c0.as_vec3();
        let b = self.c1.as_vec3();
        let c = self.c2.as_vec3();
        let d = self.c3.as_vec3();

        let s = a.cross(b);
        let t = c.cross(d);
        let u = a * self.c1.w - b * self.c0.w;
        let v = c * self.c3.w - d * self.c2.w;

        (s, t, u, v)
    }

    /// Columnwise linear interpolation, extrapolating when `t` is outside
    /// `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        Matrix4::from_cols(
            self.c0.lerp(other.c0, t),
            self.c1.lerp(other.c1, t),
            self.c2.lerp(other.c2, t),
            self.c3.lerp(other.c3, t),
        )
    }
}

impl<S: Scalar> Default for Matrix4<S> {
    #[inline]
    fn default() -> Self {
        Matrix4::identity()
    }
}

impl<S: Scalar> Neg for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Matrix4::from_cols(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<S: Scalar> Add<S> for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: S) -> Self {
        Matrix4::from_cols(self.c0 + rhs, self.c1 + rhs, self.c2 + rhs, self.c3 + rhs)
    }
}

impl<S: Scalar> Sub<S> for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: S) -> Self {
        Matrix4::from_cols(self.c0 - rhs, self.c1 - rhs, self.c2 - rhs, self.c3 - rhs)
    }
}

impl<S: Scalar> Mul<S> for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Matrix4::from_cols(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs, self.c3 * rhs)
    }
}

impl<S: Scalar> Div<S> for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        self * (S::ONE / rhs)
    }
}

impl<S: Scalar> Mul<Vector4<S>> for Matrix4<S> {
    type Output = Vector4<S>;
    #[inline]
    fn mul(self, rhs: Vector4<S>) -> Vector4<S> {
        self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z + self.c3 * rhs.w
    }
}

impl<S: Scalar> Mul for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Matrix4::from_cols(self * rhs.c0, self * rhs.c1, self * rhs.c2, self * rhs.c3)
    }
}

impl<S: Scalar> Add for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Matrix4::from_cols(
            self.c0 + rhs.c0,
            self.c1 + rhs.c1,
            self.c2 + rhs.c2,
            self.c3 + rhs.c3,
        )
    }
}

impl<S: Scalar> Sub for Matrix4<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Matrix4::from_cols(
            self.c0 - rhs.c0,
            self.c1 - rhs.c1,
            self.c2 - rhs.c2,
            self.c3 - rhs.c3,
        )
    }
}

impl<S: Scalar> AddAssign<S> for Matrix4<S> {
    #[inline]
    fn add_assign(&mut self, rhs: S) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign<S> for Matrix4<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: S) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Matrix4<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Matrix4<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> AddAssign for Matrix4<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Matrix4<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Matrix4<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S> Index<usize> for Matrix4<S> {
    type Output = Vector4<S>;
    fn index(&self, index: usize) -> &Vector4<S> {
        match index {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            3 => &self.c3,
            _ => panic!("matrix column index out of range: {}", index),
        }
    }
}

impl<S> IndexMut<usize> for Matrix4<S> {
    fn index_mut(&mut self, index: usize) -> &mut Vector4<S> {
        match index {
            0 => &mut self.c0,
            1 => &mut self.c1,
            2 => &mut self.c2,
            3 => &mut self.c3,
            _ => panic!("matrix column index out of range: {}", index),
        }
    }
}

#[cfg(test)]
use crate::{vec3, vec4};

#[cfg(test)]
fn fuzzy_eq_vec4(a: Vector4<f32>, b: Vector4<f32>, epsilon: f32) -> bool {
    f32::abs(a.x - b.x) <= epsilon
        && f32::abs(a.y - b.y) <= epsilon
        && f32::abs(a.z - b.z) <= epsilon
        && f32::abs(a.w - b.w) <= epsilon
}

#[cfg(test)]
fn fuzzy_eq_mat4(a: &Matrix4<f32>, b: &Matrix4<f32>, epsilon: f32) -> bool {
    fuzzy_eq_vec4(a.c0, b.c0, epsilon)
        && fuzzy_eq_vec4(a.c1, b.c1, epsilon)
        && fuzzy_eq_vec4(a.c2, b.c2, epsilon)
        && fuzzy_eq_vec4(a.c3, b.c3, epsilon)
}

#[test]
fn test_identity() {
    let id: Matrix4<f32> = Matrix4::identity();
    assert_eq!(Matrix4::default(), id);
    assert_eq!(id.det(), 1.0);
    assert_eq!(id.inverse(), id);
    assert_eq!(id.transpose(), id);
    assert_eq!(id * vec4(1.0, 2.0, 3.0, 4.0), vec4(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn test_transpose() {
    let m = Matrix4::new(
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    );
    assert_eq!(m.transpose().c0, vec4(1.0, 5.0, 9.0, 13.0));
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn test_det() {
    assert_eq!(Matrix4::scale(vec3(2.0f32, 3.0, 4.0)).det(), 24.0);
    assert_eq!(Matrix4::translation(vec3(5.0f32, -2.0, 9.0)).det(), 1.0);

    // A rank-deficient matrix (two equal columns).
    let m = Matrix4::from_cols(
        vec4(1.0f32, 2.0, 3.0, 4.0),
        vec4(1.0, 2.0, 3.0, 4.0),
        vec4(0.0, 1.0, 0.0, 0.0),
        vec4(0.0, 0.0, 0.0, 1.0),
    );
    assert_eq!(m.det(), 0.0);
}

#[test]
fn test_inverse() {
    // Translation inverts exactly.
    let t = Matrix4::translation(vec3(1.0f32, -2.0, 3.0));
    assert_eq!(t.inverse(), Matrix4::translation(vec3(-1.0, 2.0, -3.0)));

    let s = Matrix4::scale(vec3(2.0f32, 4.0, 8.0));
    assert_eq!(s.inverse(), Matrix4::scale(vec3(0.5, 0.25, 0.125)));

    // A composed affine transform round-trips through its inverse.
    let m = Matrix4::translation(vec3(1.0f32, 2.0, 3.0))
        * Matrix4::rotation_y(Angle::degrees(30.0))
        * Matrix4::scale(vec3(2.0, 2.0, 2.0));
    let id = Matrix4::identity();
    assert!(fuzzy_eq_mat4(&(m * m.inverse()), &id, 1e-5));
    assert!(fuzzy_eq_mat4(&(m.inverse() * m), &id, 1e-5));
    assert!(fuzzy_eq_mat4(&m.inverse().inverse(), &m, 1e-4));

    // A non-affine matrix (projective bottom row) still inverts.
    let p = Matrix4::new(
        1.0f32, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, -1.0,
        0.0, 0.0, 0.5, 0.0,
    );
    assert!(fuzzy_eq_mat4(&(p * p.inverse()), &id, 1e-6));

    // Inverting a singular matrix silently propagates Inf/NaN.
    let singular = Matrix4::scale(vec3(1.0f32, 0.0, 1.0));
    assert_eq!(singular.det(), 0.0);
    assert!(!singular.inverse().c1.y.is_finite());
}

#[test]
fn test_mul() {
    let t = Matrix4::translation(vec3(1.0f32, 2.0, 3.0));
    // Points (w = 1) are translated, directions (w = 0) are not.
    assert_eq!(t * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    assert_eq!(t * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));

    let s = Matrix4::scale(vec3(2.0f32, 2.0, 2.0));
    let ts = t * s;
    let st = s * t;
    // Scale-then-translate differs from translate-then-scale.
    assert_eq!(ts * vec4(1.0, 0.0, 0.0, 1.0), vec4(3.0, 2.0, 3.0, 1.0));
    assert_eq!(st * vec4(1.0, 0.0, 0.0, 1.0), vec4(4.0, 4.0, 6.0, 1.0));

    let mut acc = t;
    acc *= s;
    assert_eq!(acc, ts);
}

#[test]
fn test_elementwise() {
    let id = Matrix4::<f32>::identity();
    assert_eq!((id * 2.0).c0, vec4(2.0, 0.0, 0.0, 0.0));
    assert_eq!((id / 2.0).c3, vec4(0.0, 0.0, 0.0, 0.5));
    assert_eq!((id + 1.0).c1, vec4(1.0, 2.0, 1.0, 1.0));
    assert_eq!((id - 1.0).c2, vec4(-1.0, -1.0, 0.0, -1.0));
    assert_eq!((-id).c0, vec4(-1.0, 0.0, 0.0, 0.0));
    assert_eq!(id + id, id * 2.0);
    assert_eq!((id + id) - id, id);

    let mut acc = id;
    acc += 1.0;
    acc /= 2.0;
    assert_eq!(acc.c0, vec4(1.0, 0.5, 0.5, 0.5));
}

#[test]
fn test_rotation_x() {
    // Right-handed: rotating +y by 90 degrees around x lands on +z.
    let m = Matrix4::rotation_x(Angle::degrees(90.0f32));
    let v = m * vec4(0.0, 1.0, 0.0, 0.0);
    assert!(fuzzy_eq_vec4(v, vec4(0.0, 0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn test_rotation_y() {
    // Rotating +z by 90 degrees around y lands on +x.
    let m = Matrix4::rotation_y(Angle::degrees(90.0f32));
    let v = m * vec4(0.0, 0.0, 1.0, 0.0);
    assert!(fuzzy_eq_vec4(v, vec4(1.0, 0.0, 0.0, 0.0), 1e-6));
}

#[test]
fn test_rotation_z() {
    // Rotating +x by 90 degrees around z lands on +y.
    let m = Matrix4::rotation_z(Angle::degrees(90.0f32));
    let v = m * vec4(1.0, 0.0, 0.0, 0.0);
    assert!(fuzzy_eq_vec4(v, vec4(0.0, 1.0, 0.0, 0.0), 1e-6));
}

#[test]
fn test_rotation_axis_angle() {
    // The axis-angle constructor agrees with the principal-axis ones.
    for degrees in [-90.0f32, 30.0, 45.0, 120.0] {
        let angle = Angle::degrees(degrees);
        assert!(fuzzy_eq_mat4(
            &Matrix4::rotation(vec3(1.0, 0.0, 0.0), angle),
            &Matrix4::rotation_x(angle),
            1e-6
        ));
        assert!(fuzzy_eq_mat4(
            &Matrix4::rotation(vec3(0.0, 1.0, 0.0), angle),
            &Matrix4::rotation_y(angle),
            1e-6
        ));
        assert!(fuzzy_eq_mat4(
            &Matrix4::rotation(vec3(0.0, 0.0, 1.0), angle),
            &Matrix4::rotation_z(angle),
            1e-6
        ));
    }

    // The rotation axis itself is left untouched.
    let axis = vec3(1.0f32, 1.0, 1.0).normalize();
    let m = Matrix4::rotation(axis, Angle::degrees(77.0));
    let rotated = m * axis.as_vec4(0.0);
    assert!(fuzzy_eq_vec4(rotated, axis.as_vec4(0.0), 1e-6));

    // Rotations preserve determinant 1.
    assert!(f32::abs(m.det() - 1.0) <= 1e-6);
}

#[test]
fn test_look_at() {
    let eye = vec3(1.0f32, 2.0, 3.0);
    let target = vec3(0.0, 0.0, 0.0);
    let view = Matrix4::look_at(eye, target, vec3(0.0, 1.0, 0.0));

    // The eye maps to the origin.
    let at_origin = view * eye.as_vec4(1.0);
    assert!(fuzzy_eq_vec4(at_origin, vec4(0.0, 0.0, 0.0, 1.0), 1e-6));

    // The view direction maps to -z.
    let forward = (target - eye).normalize();
    let in_view = view * forward.as_vec4(0.0);
    assert!(fuzzy_eq_vec4(in_view, vec4(0.0, 0.0, -1.0, 0.0), 1e-6));

    // A view matrix is rigid: its determinant is 1.
    assert!(f32::abs(view.det() - 1.0) <= 1e-6);
}

#[test]
fn test_conversions() {
    let m = Matrix4::new(
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    );
    let m3 = m.as_mat3();
    assert_eq!(m3.c0, vec3(1.0, 2.0, 3.0));
    assert_eq!(m3.c2, vec3(9.0, 10.0, 11.0));
    assert_eq!(m.as_mat2(), Matrix2::new(1.0, 2.0, 5.0, 6.0));

    assert_eq!(Matrix4::<f32>::identity().as_mat3(), Matrix3::identity());
}

#[test]
fn test_lerp() {
    let a = Matrix4::<f32>::identity();
    let b = Matrix4::scale(vec3(3.0, 3.0, 3.0));
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Matrix4::scale(vec3(2.0, 2.0, 2.0)));
}

#[test]
fn test_index() {
    let mut m = Matrix4::<f32>::identity();
    assert_eq!(m[3], vec4(0.0, 0.0, 0.0, 1.0));
    m[3] = vec4(1.0, 2.0, 3.0, 1.0);
    assert_eq!(m, Matrix4::translation(vec3(1.0, 2.0, 3.0)));
}
