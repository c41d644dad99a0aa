//! CIE L*u*v*.

use crate::hub::{sealed, ColorModel, HubSpace};
use crate::{LinearRgb, Xyz};
use tristim_core::ModelId;
use tristim_math::Vec3;
use tristim_profile::WorkingProfile;

// CIE-exact thresholds
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// CIE L*u*v* relative to the profile white.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Luv {
    /// Lightness L* (shared with Lab).
    pub l: f64,
    /// u* chromaticity axis.
    pub u: f64,
    /// v* chromaticity axis.
    pub v: f64,
}

impl Luv {
    /// Creates a Luv value.
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    /// Converts from XYZ under the given white point (Y=1).
    ///
    /// A zero-sum denominator (pure black) collapses to the zero value.
    pub fn from_xyz(xyz: Xyz, white: Vec3) -> Self {
        let yr = xyz.y / white.y;
        let l = if yr > EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            KAPPA * yr
        };

        let (up, vp) = prime_coords(xyz.x, xyz.y, xyz.z);
        let (upn, vpn) = prime_coords(white.x, white.y, white.z);

        Self::new(l, 13.0 * l * (up - upn), 13.0 * l * (vp - vpn))
    }

    /// Converts to XYZ under the given white point (Y=1).
    ///
    /// Zero lightness collapses to XYZ zero.
    pub fn to_xyz(&self, white: Vec3) -> Xyz {
        if self.l == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let (upn, vpn) = prime_coords(white.x, white.y, white.z);
        let up = self.u / (13.0 * self.l) + upn;
        let vp = self.v / (13.0 * self.l) + vpn;

        let y = if self.l > KAPPA * EPSILON {
            white.y * ((self.l + 16.0) / 116.0).powi(3)
        } else {
            white.y * self.l / KAPPA
        };

        if vp.abs() < 1e-12 {
            return Xyz::new(0.0, y, 0.0);
        }

        let x = y * 9.0 * up / (4.0 * vp);
        let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);
        Xyz::new(x, y, z)
    }
}

/// u'v' chromaticity of an XYZ triple; (0, 0) when the denominator
/// vanishes.
fn prime_coords(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom.abs() < 1e-12 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

impl sealed::Sealed for Luv {}

impl HubSpace for Luv {
    fn into_linear_rgb(self, profile: &WorkingProfile) -> LinearRgb {
        self.to_xyz(profile.white_xyz()).into_linear_rgb(profile)
    }

    fn from_linear_rgb(rgb: LinearRgb, profile: &WorkingProfile) -> Self {
        Self::from_xyz(Xyz::from_linear_rgb(rgb, profile), profile.white_xyz())
    }
}

impl ColorModel for Luv {
    const ID: ModelId = ModelId::Luv;
    type Hub = Luv;

    #[inline]
    fn to_hub(&self, _profile: &WorkingProfile) -> Luv {
        *self
    }

    #[inline]
    fn from_hub(hub: Luv, _profile: &WorkingProfile) -> Self {
        hub
    }
}
