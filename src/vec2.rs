use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::Scalar;
use crate::vec3::Vector3;
use crate::vec4::Vector4;

/// A 2-component vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Vector2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vector2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Vector2 { x, y }
    }

    /// A vector with both components set to `v`.
    #[inline]
    pub fn splat(v: S) -> Self {
        Vector2::new(v, v)
    }

    #[inline]
    pub fn zero() -> Self {
        Vector2::new(S::ZERO, S::ZERO)
    }

    #[inline]
    pub fn from_array(array: [S; 2]) -> Self {
        Vector2::new(array[0], array[1])
    }

    #[inline]
    pub fn to_array(self) -> [S; 2] {
        [self.x, self.y]
    }

    /// Extends to three components, filling `z` with the provided value.
    #[inline]
    pub fn as_vec3(self, z: S) -> Vector3<S> {
        Vector3::new(self.x, self.y, z)
    }

    /// Extends to four components, filling `z` and `w` with the provided values.
    #[inline]
    pub fn as_vec4(self, z: S, w: S) -> Vector4<S> {
        Vector4::new(self.x, self.y, z, w)
    }

    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y
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
            Vector2::zero()
        } else {
            self * eta - normal * (eta * n_dot_i + k.sqrt())
        }
    }
}

impl<S: Scalar> Default for Vector2<S> {
    #[inline]
    fn default() -> Self {
        Vector2::zero()
    }
}

impl<S> From<[S; 2]> for Vector2<S> {
    #[inline]
    fn from(array: [S; 2]) -> Self {
        let [x, y] = array;
        Vector2 { x, y }
    }
}

impl<S> From<Vector2<S>> for [S; 2] {
    #[inline]
    fn from(v: Vector2<S>) -> Self {
        [v.x, v.y]
    }
}

impl<S: Scalar> Neg for Vector2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vector2::new(-self.x, -self.y)
    }
}

impl<S: Scalar> Add<S> for Vector2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: S) -> Self {
        Vector2::new(self.x + rhs, self.y + rhs)
    }
}

impl<S: Scalar> Sub<S> for Vector2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: S) -> Self {
        Vector2::new(self.x - rhs, self.y - rhs)
    }
}

impl<S: Scalar> Mul<S> for Vector2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl<S: Scalar> Div<S> for Vector2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        self * (S::ONE / rhs)
    }
}

impl<S: Scalar> Add for Vector2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Scalar> Sub for Vector2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Scalar> Mul for Vector2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<S: Scalar> Div for Vector2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Vector2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<S: Scalar> AddAssign<S> for Vector2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: S) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign<S> for Vector2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: S) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Vector2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Vector2<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> AddAssign for Vector2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Vector2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Vector2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign for Vector2<S> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<S> Index<usize> for Vector2<S> {
    type Output = S;
    fn index(&self, index: usize) -> &S {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

impl<S> IndexMut<usize> for Vector2<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("vector component index out of range: {}", index),
        }
    }
}

#[cfg(test)]
use crate::vec2;

#[cfg(test)]
fn fuzzy_eq(a: f32, b: f32, epsilon: f32) -> bool {
    f32::abs(a - b) <= epsilon
}

#[test]
fn test_arithmetic() {
    let a = vec2(1.0, 2.0);
    let b = vec2(3.0, -4.0);

    assert_eq!(a + b, vec2(4.0, -2.0));
    assert_eq!(a - b, vec2(-2.0, 6.0));
    assert_eq!(a * b, vec2(3.0, -8.0));
    assert_eq!(b / a, vec2(3.0, -2.0));
    assert_eq!(-a, vec2(-1.0, -2.0));

    assert_eq!(a + 1.0, vec2(2.0, 3.0));
    assert_eq!(a - 1.0, vec2(0.0, 1.0));
    assert_eq!(a * 2.0, vec2(2.0, 4.0));
    assert_eq!(a / 2.0, vec2(0.5, 1.0));
}

#[test]
fn test_compound_assign() {
    let mut v = vec2(1.0, 2.0);
    v += vec2(1.0, 1.0);
    v -= 0.5;
    v *= 2.0;
    v /= vec2(1.0, 5.0);
    assert_eq!(v, vec2(3.0, 1.0));
}

#[test]
fn test_length_normalize() {
    assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    assert_eq!(vec2(0.0, -2.0).normalize(), vec2(0.0, -1.0));
    assert!(fuzzy_eq(vec2(12.3, -4.56).normalize().length(), 1.0, 1e-6));

    // The zero vector normalizes to NaN rather than being special-cased.
    let nan = Vector2::<f32>::zero().normalize();
    assert!(nan.x.is_nan() && nan.y.is_nan());
}

#[test]
fn test_proj_perp() {
    let v = vec2(2.0, 3.0);
    let axis = vec2(5.0, 0.0);

    assert_eq!(v.proj(axis), vec2(2.0, 0.0));
    assert_eq!(v.perp(axis), vec2(0.0, 3.0));
    assert_eq!(v.proj(axis) + v.perp(axis), v);
}

#[test]
fn test_reflect_refract() {
    let down = vec2(1.0, -1.0);
    assert_eq!(down.reflect(vec2(0.0, 1.0)), vec2(1.0, 1.0));

    // Grazing incidence with eta > 1 goes into total internal reflection.
    let grazing = vec2(1.0, -0.01).normalize();
    assert_eq!(grazing.refract(vec2(0.0, 1.0), 1.5), Vector2::zero());

    // Straight-on transmission is unchanged regardless of eta.
    let straight = vec2(0.0, -1.0);
    let through = straight.refract(vec2(0.0, 1.0), 0.75);
    assert!(fuzzy_eq(through.x, 0.0, 1e-6));
    assert!(fuzzy_eq(through.y, -1.0, 1e-6));
}

#[test]
fn test_conversions() {
    let v = vec2(1.0, 2.0);
    assert_eq!(v.as_vec3(3.0), crate::vec3(1.0, 2.0, 3.0));
    assert_eq!(v.as_vec4(3.0, 4.0), crate::vec4(1.0, 2.0, 3.0, 4.0));
    assert_eq!(Vector2::from_array([1.0, 2.0]), v);
    assert_eq!(v.to_array(), [1.0, 2.0]);
    assert_eq!(<[f32; 2]>::from(v), [1.0, 2.0]);
}

#[test]
fn test_lerp() {
    let a = vec2(1.0, 2.0);
    let b = vec2(-3.0, 6.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), vec2(-1.0, 4.0));
    // t outside [0, 1] extrapolates.
    assert_eq!(a.lerp(b, 2.0), vec2(-7.0, 10.0));
}

#[test]
fn test_index() {
    let mut v = vec2(1.0, 2.0);
    assert_eq!(v[0], 1.0);
    assert_eq!(v[1], 2.0);
    v[1] = 5.0;
    assert_eq!(v, vec2(1.0, 5.0));
}
