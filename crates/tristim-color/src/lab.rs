//! CIE L*a*b*.

use crate::hub::{sealed, ColorModel, HubSpace};
use crate::{LinearRgb, Xyz};
use tristim_core::ModelId;
use tristim_math::Vec3;
use tristim_profile::WorkingProfile;

// 6/29 breakpoint of the Lab companding curve
const DELTA: f64 = 6.0 / 29.0;
const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

/// CIE L*a*b* relative to the profile white.
///
/// L* runs 0-100; a* and b* are the green-red and blue-yellow opponent
/// axes, unbounded in principle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness L*.
    pub l: f64,
    /// Green-red opponent a*.
    pub a: f64,
    /// Blue-yellow opponent b*.
    pub b: f64,
}

impl Lab {
    /// Creates a Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts from XYZ under the given white point (Y=1).
    pub fn from_xyz(xyz: Xyz, white: Vec3) -> Self {
        let fx = lab_f(xyz.x / white.x);
        let fy = lab_f(xyz.y / white.y);
        let fz = lab_f(xyz.z / white.z);
        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Converts to XYZ under the given white point (Y=1).
    pub fn to_xyz(&self, white: Vec3) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        Xyz::new(
            white.x * lab_f_inv(fx),
            white.y * lab_f_inv(fy),
            white.z * lab_f_inv(fz),
        )
    }
}

fn lab_f(t: f64) -> f64 {
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

impl sealed::Sealed for Lab {}

impl HubSpace for Lab {
    fn into_linear_rgb(self, profile: &WorkingProfile) -> LinearRgb {
        self.to_xyz(profile.white_xyz()).into_linear_rgb(profile)
    }

    fn from_linear_rgb(rgb: LinearRgb, profile: &WorkingProfile) -> Self {
        Self::from_xyz(Xyz::from_linear_rgb(rgb, profile), profile.white_xyz())
    }
}

impl ColorModel for Lab {
    const ID: ModelId = ModelId::Lab;
    type Hub = Lab;

    #[inline]
    fn to_hub(&self, _profile: &WorkingProfile) -> Lab {
        *self
    }

    #[inline]
    fn from_hub(hub: Lab, _profile: &WorkingProfile) -> Self {
        hub
    }
}
