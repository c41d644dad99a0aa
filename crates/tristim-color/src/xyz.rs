//! CIE XYZ tristimulus: the secondary hub the perceptual spaces build on.

use crate::hub::{sealed, ColorModel, HubSpace};
use crate::LinearRgb;
use tristim_core::ModelId;
use tristim_math::Vec3;
use tristim_profile::WorkingProfile;

/// CIE XYZ with Y normalized so the profile white has Y = 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus.
    pub x: f64,
    /// Y tristimulus (relative luminance).
    pub y: f64,
    /// Z tristimulus.
    pub z: f64,
}

impl Xyz {
    /// Creates an XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from a [`Vec3`].
    #[inline]
    pub const fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Converts to a [`Vec3`].
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl sealed::Sealed for Xyz {}

impl HubSpace for Xyz {
    #[inline]
    fn into_linear_rgb(self, profile: &WorkingProfile) -> LinearRgb {
        LinearRgb::from_vec3(*profile.xyz_to_rgb() * self.to_vec3())
    }

    #[inline]
    fn from_linear_rgb(rgb: LinearRgb, profile: &WorkingProfile) -> Self {
        Self::from_vec3(*profile.rgb_to_xyz() * rgb.to_vec3())
    }
}

impl ColorModel for Xyz {
    const ID: ModelId = ModelId::Xyz;
    type Hub = Xyz;

    #[inline]
    fn to_hub(&self, _profile: &WorkingProfile) -> Xyz {
        *self
    }

    #[inline]
    fn from_hub(hub: Xyz, _profile: &WorkingProfile) -> Self {
        hub
    }
}
