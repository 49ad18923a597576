use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::Scalar;
use crate::vec2::Vector2;
use crate::vec3::Vector3;

/// A 4-component vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Vector4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Vector4<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Vector4 { x, y, z, w }
    }

    /// A vector with all components set to `v`.
    #[inline]
    pub fn splat(v: S) -> Self {
        Vector4::new(v, v, v, v)
    }

    #[inline]
    pub fn zero() -> Self {
        Vector4::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn from_array(array: [S; 4]) -> Self {
        Vector4::new(array[0], array[1], array[2], array[3])
    }

    #[inline]
    pub fn to_array(self) -> [S; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Truncates to two components, dropping `z` and `w`.
    #[inline]
    pub fn as_vec2(self) -> Vector2<S> {
        Vector2::new(self.x, self.y)
    }

    /// Truncates to three components, dropping `w`.
    #[inline]
    pub fn as_vec3(self) -> Vector3<S> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn square_length(self) -> S {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> S {
        self.square_length().sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector has no direction to preserve: its components come out
    /// as NaN, following the usual float division rules.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (S::ONE / self.length())
    }

    /// Linearly interpolates towards `other`, extrapolating when `t` is
    /// outside `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self * (S::ONE - t) + other * t
    }

    /// The projection of this vector onto `other`.
    #[inline]
    pub fn proj(self, other: Self) -> Self {
        other * (self.dot(other) / other.dot(other))
    }

    /// The component of this vector orthogonal to `other`.
    #[inline]
    pub fn perp(self, other: Self) -> Self {
        self - self.proj(other)
    }

    /// Reflects against a surface normal. `normal` is expected to be unit
    /// length and is not renormalized here.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (self.dot(normal) * S::TWO)
    }

    /// Snell's law refraction through a surface with the given normal, where
    /// `eta` is the ratio of the refraction indices.
    ///
    /// Returns the zero vector on total internal reflection.
    pub fn refract(self, normal: Self, eta: S) -> Self {
        let n_dot_i = self.dot(normal);
        let k = S::ONE - eta * eta * (S::ONE - n_dot_i * n_dot_i);
        if k < S::ZERO {
            Vector4::zero()
        } else {
            self * eta - normal * (eta * n_dot_i + k.sqrt())
        }
    }
}

impl<S: Scalar> Default for Vector4<S> {
    #[inline]
    fn default() -> Self {
        Vector4::zero()
    }
}

impl<S> From<[S; 4]> for Vector4<S> {
    #[inline]
    fn from(array: [S; 4]) -> Self {
        let [x, y, z, w] = array;
        Vector4 { x, y, z, w }
    }
}

impl<S> From<Vector4<S>> for [S; 4] {
    #[inline]
    fn from(v: Vector4<S>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<S: Scalar> Neg for Vector4<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vector4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<S: Scalar> Add<S> for Vector4<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: S) -> Self {
        Vector4::new(self.x + rhs, self.y + rhs, self.z + rhs, self.w + rhs)
    }
}

impl<S: Scalar> Sub<S> for Vector4<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: S) -> Self {
        Vector4::new(self.x - rhs, self.y - rhs, self.z - rhs, self.w - rhs)
    }
}

impl<S: Scalar> Mul<S> for Vector4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Vector4::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<S: Scalar> Div<S> for Vector4<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        self * (S::ONE / rhs)
    }
}

impl<S: Scalar> Add for Vector4<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector4::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<S: Scalar> Sub for Vector4<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector4::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<S: Scalar> Mul for Vector4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Vector4::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}

impl<S: Scalar> Div for Vector4<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Vector4::new(
            self.x / rhs.x,
            self.y / rhs.y,
            self.z / rhs.z,
            self.w / rhs.w,
        )
    }
}

impl<S: Scalar> AddAssign<S> for Vector4<S> {
    #[inline]
    fn add_assign(&mut self, rhs: S) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign<S> for Vector4<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: S) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Vector4<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Vector4<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> AddAssign for Vector4<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Vector4<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Vector4<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign for Vector4<S> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<S> Index<usize> for Vector4<S> {
    type Output = S;
    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

impl<S> IndexMut<usize> for Vector4<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

#[cfg(test)]
use crate::vec4;

#[cfg(test)]
fn fuzzy_eq(a: f32, b: f32, epsilon: f32) -> bool {
    f32::abs(a - b) <= epsilon
}

#[test]
fn test_arithmetic() {
    let a = vec4(1.0, 2.0, 3.0, 4.0);
    let b = vec4(-2.0, 4.0, 0.5, 1.0);

    assert_eq!(a + b, vec4(-1.0, 6.0, 3.5, 5.0));
    assert_eq!(a - b, vec4(3.0, -2.0, 2.5, 3.0));
    assert_eq!(a * b, vec4(-2.0, 8.0, 1.5, 4.0));
    assert_eq!(a / b, vec4(-0.5, 0.5, 6.0, 4.0));
    assert_eq!(-a, vec4(-1.0, -2.0, -3.0, -4.0));

    assert_eq!(a * 2.0, vec4(2.0, 4.0, 6.0, 8.0));
    assert_eq!(a / 4.0, vec4(0.25, 0.5, 0.75, 1.0));
}

#[test]
fn test_compound_assign() {
    let mut v = vec4(1.0, 2.0, 3.0, 4.0);
    v += 1.0;
    v *= vec4(1.0, 1.0, 2.0, 0.5);
    v -= vec4(0.0, 3.0, 0.0, 0.5);
    v /= 2.0;
    assert_eq!(v, vec4(1.0, 0.0, 4.0, 1.0));
}

#[test]
fn test_length_normalize() {
    assert_eq!(vec4(2.0, 0.0, 0.0, 0.0).normalize(), vec4(1.0, 0.0, 0.0, 0.0));
    assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).length(), 2.0);
    assert!(fuzzy_eq(vec4(3.0, -1.0, 2.0, 0.5).normalize().length(), 1.0, 1e-6));

    let nan = Vector4::<f32>::zero().normalize();
    assert!(nan.x.is_nan() && nan.w.is_nan());
}

#[test]
fn test_proj_perp_reflect() {
    let v = vec4(1.0, 2.0, 3.0, 4.0);
    let axis = vec4(0.0, 1.0, 0.0, 0.0);

    assert_eq!(v.proj(axis), vec4(0.0, 2.0, 0.0, 0.0));
    assert_eq!(v.perp(axis), vec4(1.0, 0.0, 3.0, 4.0));
    assert_eq!(v.reflect(axis), vec4(1.0, -2.0, 3.0, 4.0));
}

#[test]
fn test_refract_total_internal_reflection() {
    let grazing = vec4(1.0, -0.01, 0.0, 0.0).normalize();
    assert_eq!(
        grazing.refract(vec4(0.0, 1.0, 0.0, 0.0), 1.5),
        Vector4::zero()
    );
}

#[test]
fn test_conversions() {
    let v = vec4(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.as_vec2(), crate::vec2(1.0, 2.0));
    assert_eq!(v.as_vec3(), crate::vec3(1.0, 2.0, 3.0));
    assert_eq!(v.as_vec3().as_vec4(v.w), v);
    assert_eq!(Vector4::from_array([1.0, 2.0, 3.0, 4.0]), v);
    assert_eq!(<[f32; 4]>::from(v), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_lerp() {
    let a = vec4(0.0, 2.0, -2.0, 1.0);
    let b = vec4(1.0, 0.0, 2.0, 1.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), vec4(0.5, 1.0, 0.0, 1.0));
}

#[test]
fn test_index() {
    let mut v = vec4(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v[3], 4.0);
    v[2] += 1.0;
    assert_eq!(v, vec4(1.0, 2.0, 4.0, 4.0));
}
