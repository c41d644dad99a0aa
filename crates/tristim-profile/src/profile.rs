//! The working profile: declared configuration plus derived matrices.

use crate::primaries::{self, Primaries};
use crate::{ProfileError, Surround, ToneResponse, ViewingConditions};
use tristim_math::{Mat3, Vec3};

/// A working profile: one RGB-like color space under explicit viewing
/// assumptions.
///
/// Holds the declared inputs (primaries + white point, tone response,
/// viewing conditions) and the values derived from them once at
/// construction: the white point XYZ and both RGB/XYZ matrices. The value
/// is immutable, so the derived matrices can never desync from the declared
/// primaries, and instances are freely shareable across threads.
///
/// # Example
///
/// ```rust
/// use tristim_profile::{ToneResponse, ViewingConditions, WorkingProfile};
/// use tristim_profile::ADOBE_RGB;
///
/// let custom = WorkingProfile::new(
///     ADOBE_RGB,
///     ToneResponse::Gamma(563.0 / 256.0),
///     ViewingConditions::srgb(),
/// )
/// .unwrap();
/// assert_eq!(custom.primaries().name, "Adobe RGB");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingProfile {
    primaries: Primaries,
    tone: ToneResponse,
    viewing: ViewingConditions,
    white_xyz: Vec3,
    rgb_to_xyz: Mat3,
    xyz_to_rgb: Mat3,
}

impl WorkingProfile {
    /// Builds a profile, deriving white XYZ and the RGB/XYZ matrix pair.
    ///
    /// # Errors
    ///
    /// [`ProfileError::DegeneratePrimaries`] when the primaries cannot
    /// produce an invertible matrix.
    pub fn new(
        primaries: Primaries,
        tone: ToneResponse,
        viewing: ViewingConditions,
    ) -> Result<Self, ProfileError> {
        let rgb_to_xyz = primaries::rgb_to_xyz_matrix(&primaries)?;
        let xyz_to_rgb = rgb_to_xyz
            .inverse()
            .ok_or(ProfileError::DegeneratePrimaries {
                name: primaries.name,
            })?;
        Ok(Self {
            white_xyz: primaries.white_xyz(),
            primaries,
            tone,
            viewing,
            rgb_to_xyz,
            xyz_to_rgb,
        })
    }

    /// The declared primaries and white point.
    #[inline]
    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    /// The tone-response strategy.
    #[inline]
    pub fn tone(&self) -> &ToneResponse {
        &self.tone
    }

    /// The CIECAM02 viewing conditions.
    #[inline]
    pub fn viewing(&self) -> &ViewingConditions {
        &self.viewing
    }

    /// White point XYZ derived from the declared chromaticity (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        self.white_xyz
    }

    /// The derived RGB-to-XYZ matrix.
    #[inline]
    pub fn rgb_to_xyz(&self) -> &Mat3 {
        &self.rgb_to_xyz
    }

    /// The derived XYZ-to-RGB matrix.
    #[inline]
    pub fn xyz_to_rgb(&self) -> &Mat3 {
        &self.xyz_to_rgb
    }

    /// True when the declared white chromaticities are exactly equal.
    ///
    /// This is the hub's adaptation short-circuit: value equality, not an
    /// epsilon test, so identity conversions pick up no adaptation noise.
    #[inline]
    pub fn same_white(&self, other: &Self) -> bool {
        self.primaries.w == other.primaries.w
    }

    /// True when the declared gamuts (primaries and white) are exactly
    /// equal, making linear RGB values directly interchangeable.
    #[inline]
    pub fn same_gamut(&self, other: &Self) -> bool {
        self.primaries.r == other.primaries.r
            && self.primaries.g == other.primaries.g
            && self.primaries.b == other.primaries.b
            && self.primaries.w == other.primaries.w
    }

    /// Luma coefficients: the Y row of the derived RGB-to-XYZ matrix.
    ///
    /// The row sums to the white's Y (1.0), so these drive the Y'PbPr
    /// weighting directly; sRGB primaries reproduce the published Rec.709
    /// coefficients.
    #[inline]
    pub fn luma_coefficients(&self) -> Vec3 {
        self.rgb_to_xyz.row(1)
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// sRGB: Rec.709 gamut, piecewise sRGB curve, D65, typical desk viewing.
    pub fn srgb() -> Self {
        Self::preset(primaries::SRGB, ToneResponse::Srgb)
    }

    /// Rec.709: sRGB gamut with the BT.709 camera curve, dim surround.
    pub fn rec709() -> Self {
        let viewing = Self::preset_viewing(&primaries::REC709, 4.0, Surround::Dim);
        Self::new(primaries::REC709, ToneResponse::Rec709, viewing)
            .expect("builtin Rec.709 preset is well-formed")
    }

    /// Rec.2020: wide gamut UHDTV, BT.709-shaped camera curve, dim surround.
    pub fn rec2020() -> Self {
        let viewing = Self::preset_viewing(&primaries::REC2020, 4.0, Surround::Dim);
        Self::new(primaries::REC2020, ToneResponse::Rec709, viewing)
            .expect("builtin Rec.2020 preset is well-formed")
    }

    /// Adobe RGB (1998): gamma 563/256, D65.
    pub fn adobe_rgb() -> Self {
        Self::preset(primaries::ADOBE_RGB, ToneResponse::Gamma(563.0 / 256.0))
    }

    /// DCI-P3: theatrical gamut, gamma 2.6, dark surround.
    pub fn dci_p3() -> Self {
        let viewing = Self::preset_viewing(&primaries::DCI_P3, 10.0, Surround::Dark);
        Self::new(primaries::DCI_P3, ToneResponse::Gamma(2.6), viewing)
            .expect("builtin DCI-P3 preset is well-formed")
    }

    /// Display P3: DCI-P3 gamut with D65 white and the sRGB curve.
    pub fn display_p3() -> Self {
        Self::preset(primaries::DISPLAY_P3, ToneResponse::Srgb)
    }

    /// ProPhoto RGB: very wide gamut, gamma 1.8, D50.
    pub fn prophoto_rgb() -> Self {
        Self::preset(primaries::PROPHOTO_RGB, ToneResponse::Gamma(1.8))
    }

    fn preset(primaries: Primaries, tone: ToneResponse) -> Self {
        let viewing = Self::preset_viewing(&primaries, 4.0, Surround::Average);
        Self::new(primaries, tone, viewing).expect("builtin preset is well-formed")
    }

    fn preset_viewing(primaries: &Primaries, la: f64, surround: Surround) -> ViewingConditions {
        ViewingConditions::new(primaries.white_xyz() * 100.0, la, 20.0, surround)
            .expect("builtin preset viewing conditions are well-formed")
    }
}
