#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Fixed-size vector and matrix types for graphics and geometry code.
//!
//! # Overview
//!
//! This crate implements the small, stack-allocated numeric primitives that
//! rendering and geometry code keeps reaching for:
//!
//! - 2, 3 and 4 component vectors,
//! - 2x2, 3x3 and 4x4 column-major matrices,
//! - an [`Angle`] wrapper that keeps radians and degrees from getting mixed up,
//! - constructors for the common 3D transforms (scale, translation, axis-angle
//!   and principal-axis rotations, look-at).
//!
//! Everything is generic over a [`Scalar`] floating point type, with `f32`
//! aliases ([`Vec2`], [`Mat4`], ...) as the primary surface.
//!
//! # Degenerate inputs
//!
//! In the spirit of real-time graphics math, degenerate inputs are not
//! checked: normalizing a zero-length vector or inverting a singular matrix
//! produces NaN/Inf components following the usual IEEE-754 rules, and it is
//! up to the caller to test `length()` or `det()` first when that matters.
//! The one exception is [`Vector3::refract`] (and its 2/4 component
//! siblings), which returns the zero vector on total internal reflection.

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod angle;
mod mat2;
mod mat3;
mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub use crate::angle::Angle;
pub use crate::mat2::Matrix2;
pub use crate::mat3::Matrix3;
pub use crate::mat4::Matrix4;
pub use crate::vec2::Vector2;
pub use crate::vec3::Vector3;
pub use crate::vec4::Vector4;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst};

    use core::fmt::Debug;
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    /// The floating point types that vectors and matrices can be built from.
    pub trait Scalar:
        Float + FloatConst + Sized + Debug + AddAssign + SubAssign + MulAssign + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `Vector2<f32>`.
pub type Vec2 = Vector2<f32>;

/// Alias for `Vector3<f32>`.
pub type Vec3 = Vector3<f32>;

/// Alias for `Vector4<f32>`.
pub type Vec4 = Vector4<f32>;

/// Alias for `Matrix2<f32>`.
pub type Mat2 = Matrix2<f32>;

/// Alias for `Matrix3<f32>`.
pub type Mat3 = Matrix3<f32>;

/// Alias for `Matrix4<f32>`.
pub type Mat4 = Matrix4<f32>;

/// Shorthand for `Vector2::new(x, y)`.
#[inline]
pub fn vec2<S: Scalar>(x: S, y: S) -> Vector2<S> {
    Vector2::new(x, y)
}

/// Shorthand for `Vector3::new(x, y, z)`.
#[inline]
pub fn vec3<S: Scalar>(x: S, y: S, z: S) -> Vector3<S> {
    Vector3::new(x, y, z)
}

/// Shorthand for `Vector4::new(x, y, z, w)`.
#[inline]
pub fn vec4<S: Scalar>(x: S, y: S, z: S, w: S) -> Vector4<S> {
    Vector4::new(x, y, z, w)
}

// Bytemuck impls for the concrete float instantiations (generic structs
// can't derive Pod).
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: #[repr(C)], nothing but float fields, no padding.
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vector2<f32>);
    impl_pod!(Vector2<f64>);
    impl_pod!(Vector3<f32>);
    impl_pod!(Vector3<f64>);
    impl_pod!(Vector4<f32>);
    impl_pod!(Vector4<f64>);
    impl_pod!(Matrix2<f32>);
    impl_pod!(Matrix2<f64>);
    impl_pod!(Matrix3<f32>);
    impl_pod!(Matrix3<f64>);
    impl_pod!(Matrix4<f32>);
    impl_pod!(Matrix4<f64>);
}
