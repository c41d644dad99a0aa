//! Y'PbPr component video.

use crate::hub::{sealed, ColorModel, HubSpace};
use crate::LinearRgb;
use tristim_core::ModelId;
use tristim_profile::WorkingProfile;

/// Y'PbPr: encoded luma plus two chroma-difference channels.
///
/// The luma weights are not a fixed table; they come from the Y row of the
/// profile's derived RGB-to-XYZ matrix, so Rec.709 primaries yield the
/// published 0.2126/0.7152/0.0722 and other gamuts get their own exact
/// weights. Components are computed from tone-encoded R'G'B', per the
/// broadcast definitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YPbPr {
    /// Luma Y', nominally [0, 1].
    pub y: f64,
    /// Blue-difference chroma, nominally [-0.5, 0.5].
    pub pb: f64,
    /// Red-difference chroma, nominally [-0.5, 0.5].
    pub pr: f64,
}

impl YPbPr {
    /// Creates a Y'PbPr value.
    #[inline]
    pub const fn new(y: f64, pb: f64, pr: f64) -> Self {
        Self { y, pb, pr }
    }
}

impl sealed::Sealed for YPbPr {}

impl HubSpace for YPbPr {
    fn into_linear_rgb(self, profile: &WorkingProfile) -> LinearRgb {
        let k = profile.luma_coefficients();
        let tone = profile.tone();

        let rp = self.y + 2.0 * (1.0 - k.x) * self.pr;
        let bp = self.y + 2.0 * (1.0 - k.z) * self.pb;
        let gp = if k.y.abs() < 1e-12 {
            0.0
        } else {
            (self.y - k.x * rp - k.z * bp) / k.y
        };

        LinearRgb::new(
            tone.transfer_inverse(rp),
            tone.transfer_inverse(gp),
            tone.transfer_inverse(bp),
        )
    }

    fn from_linear_rgb(rgb: LinearRgb, profile: &WorkingProfile) -> Self {
        let k = profile.luma_coefficients();
        let tone = profile.tone();

        let rp = tone.transfer(rgb.r);
        let gp = tone.transfer(rgb.g);
        let bp = tone.transfer(rgb.b);
        let y = k.x * rp + k.y * gp + k.z * bp;

        let pb = if (1.0 - k.z).abs() < 1e-12 {
            0.0
        } else {
            0.5 * (bp - y) / (1.0 - k.z)
        };
        let pr = if (1.0 - k.x).abs() < 1e-12 {
            0.0
        } else {
            0.5 * (rp - y) / (1.0 - k.x)
        };

        Self::new(y, pb, pr)
    }
}

impl ColorModel for YPbPr {
    const ID: ModelId = ModelId::YPbPr;
    type Hub = YPbPr;

    #[inline]
    fn to_hub(&self, _profile: &WorkingProfile) -> YPbPr {
        *self
    }

    #[inline]
    fn from_hub(hub: YPbPr, _profile: &WorkingProfile) -> Self {
        hub
    }
}
