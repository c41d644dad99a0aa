//! Linear RGB: the primary hub space.

use crate::hub::{sealed, ColorModel, HubSpace};
use tristim_core::ModelId;
use tristim_math::Vec3;
use tristim_profile::WorkingProfile;

/// Linear (non-companded) RGB in the profile's gamut.
///
/// This is the primary hub: every conversion chain passes through it.
/// Values are scene-referred and unbounded; [0, 1] is only the nominal
/// display range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red, linear.
    pub r: f64,
    /// Green, linear.
    pub g: f64,
    /// Blue, linear.
    pub b: f64,
}

impl LinearRgb {
    /// Creates a linear RGB value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates from a [`Vec3`].
    #[inline]
    pub const fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Converts to a [`Vec3`].
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }
}

impl sealed::Sealed for LinearRgb {}

impl HubSpace for LinearRgb {
    #[inline]
    fn into_linear_rgb(self, _profile: &WorkingProfile) -> LinearRgb {
        self
    }

    #[inline]
    fn from_linear_rgb(rgb: LinearRgb, _profile: &WorkingProfile) -> Self {
        rgb
    }
}

impl ColorModel for LinearRgb {
    const ID: ModelId = ModelId::LinearRgb;
    type Hub = LinearRgb;

    #[inline]
    fn to_hub(&self, _profile: &WorkingProfile) -> LinearRgb {
        *self
    }

    #[inline]
    fn from_hub(hub: LinearRgb, _profile: &WorkingProfile) -> Self {
        hub
    }
}
