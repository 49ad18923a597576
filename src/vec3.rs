use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::Scalar;
use crate::vec2::Vector2;
use crate::vec4::Vector4;

/// A 3-component vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Vector3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vector3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self {
        Vector3 { x, y, z }
    }

    /// A vector with all components set to `v`.
    #[inline]
    pub fn splat(v: S) -> Self {
        Vector3::new(v, v, v)
    }

    #[inline]
    pub fn zero() -> Self {
        Vector3::new(S::ZERO, S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn from_array(array: [S; 3]) -> Self {
        Vector3::new(array[0], array[1], array[2])
    }

    #[inline]
    pub fn to_array(self) -> [S; 3] {
        [self.x, self.y, self.z]
    }

    /// Truncates to two components, dropping `z`.
    #[inline]
    pub fn as_vec2(self) -> Vector2<S> {
        Vector2::new(self.x, self.y)
    }

    /// Extends to four components, filling `w` with the provided value.
    #[inline]
    pub fn as_vec4(self, w: S) -> Vector4<S> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
            Vector3::zero()
        } else {
            self * eta - normal * (eta * n_dot_i + k.sqrt())
        }
    }
}

impl<S: Scalar> Default for Vector3<S> {
    #[inline]
    fn default() -> Self {
        Vector3::zero()
    }
}

impl<S> From<[S; 3]> for Vector3<S> {
    #[inline]
    fn from(array: [S; 3]) -> Self {
        let [x, y, z] = array;
        Vector3 { x, y, z }
    }
}

impl<S> From<Vector3<S>> for [S; 3] {
    #[inline]
    fn from(v: Vector3<S>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<S: Scalar> Neg for Vector3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl<S: Scalar> Add<S> for Vector3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: S) -> Self {
        Vector3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl<S: Scalar> Sub<S> for Vector3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: S) -> Self {
        Vector3::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl<S: Scalar> Mul<S> for Vector3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<S: Scalar> Div<S> for Vector3<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        self * (S::ONE / rhs)
    }
}

impl<S: Scalar> Add for Vector3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<S: Scalar> Sub for Vector3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar> Mul for Vector3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl<S: Scalar> Div for Vector3<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Vector3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl<S: Scalar> AddAssign<S> for Vector3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: S) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign<S> for Vector3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: S) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Vector3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Vector3<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> AddAssign for Vector3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Vector3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Vector3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign for Vector3<S> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<S> Index<usize> for Vector3<S> {
    type Output = S;
    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

impl<S> IndexMut<usize> for Vector3<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

#[cfg(test)]
use crate::vec3;

#[cfg(test)]
fn fuzzy_eq(a: f32, b: f32, epsilon: f32) -> bool {
    f32::abs(a - b) <= epsilon
}

#[test]
fn test_arithmetic() {
    let a = vec3(1.0, 2.0, 3.0);
    let b = vec3(4.0, -5.0, 6.0);

    assert_eq!(a + b, vec3(5.0, -3.0, 9.0));
    assert_eq!(a - b, vec3(-3.0, 7.0, -3.0));
    assert_eq!(a * b, vec3(4.0, -10.0, 18.0));
    assert_eq!(b / a, vec3(4.0, -2.5, 2.0));
    assert_eq!(-b, vec3(-4.0, 5.0, -6.0));

    assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
    assert_eq!(a / 2.0, vec3(0.5, 1.0, 1.5));
    assert_eq!(a + 1.0, vec3(2.0, 3.0, 4.0));
    assert_eq!(a - 1.0, vec3(0.0, 1.0, 2.0));
}

#[test]
fn test_compound_assign() {
    let mut v = vec3(1.0, 2.0, 3.0);
    v *= 2.0;
    v += vec3(1.0, 0.0, -1.0);
    v -= 1.0;
    v /= vec3(2.0, 1.0, 4.0);
    assert_eq!(v, vec3(1.0, 3.0, 1.0));
}

#[test]
fn test_dot_cross() {
    let x = vec3(1.0, 0.0, 0.0);
    let y = vec3(0.0, 1.0, 0.0);
    let z = vec3(0.0, 0.0, 1.0);

    assert_eq!(x.cross(y), z);
    assert_eq!(y.cross(z), x);
    assert_eq!(z.cross(x), y);
    assert_eq!(y.cross(x), -z);

    let v = vec3(1.5, -2.0, 4.0);
    assert_eq!(v.cross(v), Vector3::zero());
    assert!(fuzzy_eq(v.dot(v.cross(vec3(0.3, 0.4, 0.5))), 0.0, 1e-6));
    assert_eq!(x.dot(y), 0.0);
    assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(4.0, 5.0, 6.0)), 32.0);
}

#[test]
fn test_length_normalize() {
    assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
    assert!(fuzzy_eq(vec3(0.1, -0.2, 10.0).normalize().length(), 1.0, 1e-6));

    let nan = Vector3::<f32>::zero().normalize();
    assert!(nan.x.is_nan() && nan.y.is_nan() && nan.z.is_nan());
}

#[test]
fn test_proj_perp() {
    let v = vec3(1.0, 2.0, 3.0);
    let axis = vec3(0.0, 0.0, 2.0);

    assert_eq!(v.proj(axis), vec3(0.0, 0.0, 3.0));
    assert_eq!(v.perp(axis), vec3(1.0, 2.0, 0.0));
    assert_eq!(v.perp(axis).dot(axis), 0.0);
}

#[test]
fn test_reflect_refract() {
    let incoming = vec3(1.0, -1.0, 0.0);
    assert_eq!(incoming.reflect(vec3(0.0, 1.0, 0.0)), vec3(1.0, 1.0, 0.0));

    // Total internal reflection yields the zero vector.
    let grazing = vec3(1.0, -0.01, 0.0).normalize();
    assert_eq!(grazing.refract(vec3(0.0, 1.0, 0.0), 1.5), Vector3::zero());

    // Entering a denser medium bends the ray towards the normal.
    let slanted = vec3(1.0, -1.0, 0.0).normalize();
    let bent = slanted.refract(vec3(0.0, 1.0, 0.0), 1.0 / 1.5);
    assert!(fuzzy_eq(bent.length(), 1.0, 1e-6));
    assert!(bent.x < slanted.x && bent.x > 0.0);
    assert!(bent.y < 0.0);
}

#[test]
fn test_conversions() {
    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v.as_vec2(), crate::vec2(1.0, 2.0));
    assert_eq!(v.as_vec4(4.0), crate::vec4(1.0, 2.0, 3.0, 4.0));
    // Narrowing then widening with the dropped component restores the value.
    assert_eq!(v.as_vec2().as_vec3(v.z), v);
    assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn test_lerp() {
    let a = vec3(0.0, 1.0, 2.0);
    let b = vec3(4.0, -1.0, 2.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.25), vec3(1.0, 0.5, 2.0));
    assert_eq!(a.lerp(b, -1.0), vec3(-4.0, 3.0, 2.0));
}

#[test]
fn test_index() {
    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v[2], 3.0);
    v[0] = -1.0;
    assert_eq!(v, vec3(-1.0, 2.0, 3.0));
}
