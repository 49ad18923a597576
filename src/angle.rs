use crate::scalar::Scalar;

/// A unit-safe angle, stored in radians.
///
/// `Angle` has no arithmetic of its own; it exists so that APIs taking a
/// rotation parameter cannot be handed degrees where radians are expected
/// (or the other way around).
///
/// ```
/// use glint::{Angle, Mat4, Matrix4};
///
/// let turn: Angle<f32> = Angle::degrees(90.0);
/// let _m: Mat4 = Matrix4::rotation_z(turn);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Angle<S> {
    radians: S,
}

impl<S: Scalar> Angle<S> {
    #[inline]
    pub fn radians(radians: S) -> Self {
        Angle { radians }
    }

    #[inline]
    pub fn degrees(degrees: S) -> Self {
        Angle {
            radians: degrees * S::PI() / S::value(180.0),
        }
    }

    #[inline]
    pub fn as_radians(self) -> S {
        self.radians
    }

    #[inline]
    pub fn as_degrees(self) -> S {
        self.radians * S::value(180.0) / S::PI()
    }

    #[inline]
    pub fn cos(self) -> S {
        self.radians.cos()
    }

    #[inline]
    pub fn sin(self) -> S {
        self.radians.sin()
    }
}

#[test]
fn test_degrees_radians() {
    use core::f32::consts::PI;

    assert_eq!(Angle::radians(PI).as_radians(), PI);
    assert!((Angle::degrees(180.0f32).as_radians() - PI).abs() < 1e-6);
    assert!((Angle::radians(PI / 2.0).as_degrees() - 90.0).abs() < 1e-4);
    assert!((Angle::degrees(45.0f32).as_degrees() - 45.0).abs() < 1e-4);
}

#[test]
fn test_trig() {
    let a: Angle<f32> = Angle::degrees(90.0);
    assert!(a.cos().abs() < 1e-6);
    assert!((a.sin() - 1.0).abs() < 1e-6);

    let b: Angle<f64> = Angle::degrees(60.0);
    assert!((b.cos() - 0.5).abs() < 1e-12);
}
