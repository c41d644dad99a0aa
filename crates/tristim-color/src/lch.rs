//! Cylindrical L*C*h over Lab.

use crate::hub::{sealed, ColorModel, HubSpace};
use crate::{Lab, LinearRgb};
use tristim_core::ModelId;
use tristim_profile::WorkingProfile;

/// L*C*h(ab): Lab in cylindrical coordinates.
///
/// Hue is in degrees, [0, 360). Zero chroma is the achromatic axis, where
/// hue is undefined; the conversion pins it to 0 there.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Lightness L*.
    pub l: f64,
    /// Chroma C*.
    pub c: f64,
    /// Hue angle h, degrees.
    pub h: f64,
}

impl Lch {
    /// Creates an LCh value.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Converts from Lab.
    pub fn from_lab(lab: Lab) -> Self {
        let c = lab.a.hypot(lab.b);
        let h = if c == 0.0 {
            0.0
        } else {
            let deg = lab.b.atan2(lab.a).to_degrees();
            if deg < 0.0 { deg + 360.0 } else { deg }
        };
        Self::new(lab.l, c, h)
    }

    /// Converts to Lab.
    pub fn into_lab(self) -> Lab {
        let hr = self.h.to_radians();
        Lab::new(self.l, self.c * hr.cos(), self.c * hr.sin())
    }
}

impl sealed::Sealed for Lch {}

impl HubSpace for Lch {
    fn into_linear_rgb(self, profile: &WorkingProfile) -> LinearRgb {
        self.into_lab().into_linear_rgb(profile)
    }

    fn from_linear_rgb(rgb: LinearRgb, profile: &WorkingProfile) -> Self {
        Self::from_lab(Lab::from_linear_rgb(rgb, profile))
    }
}

impl ColorModel for Lch {
    const ID: ModelId = ModelId::Lch;
    type Hub = Lch;

    #[inline]
    fn to_hub(&self, _profile: &WorkingProfile) -> Lch {
        *self
    }

    #[inline]
    fn from_hub(hub: Lch, _profile: &WorkingProfile) -> Self {
        hub
    }
}
