//! CIECAM02 viewing conditions.
//!
//! A [`ViewingConditions`] value captures the four declared inputs of the
//! appearance model - reference white, adapting-field luminance, background
//! relative luminance, surround class - and caches every derived term
//! (D, FL, n, z, Nbb, Ncb, Aw, the per-cone adaptation gains) at
//! construction. The appearance model itself lives in `tristim-color`; it
//! only reads the cached terms from here.
//!
//! XYZ values here are on the [0, 100] scale the appearance model works in.

use crate::ProfileError;
use tristim_math::{Mat3, Vec3, CAT02};

/// Hunt-Pointer-Estevez cone-response matrix.
///
/// The post-adaptation cone basis of CIECAM02 (distinct from the sharpened
/// CAT02 basis used for the adaptation step).
pub const HPE: Mat3 = Mat3::from_rows([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.00000, 0.00000, 1.00000],
]);

/// Surround classification of the viewing environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surround {
    /// Normal room viewing (surface colors, monitors in lit rooms).
    Average,
    /// Dim surround (television viewing).
    Dim,
    /// Dark surround (cinema projection).
    Dark,
}

impl Surround {
    /// Degree-of-adaptation factor F.
    pub const fn f(self) -> f64 {
        match self {
            Surround::Average => 1.0,
            Surround::Dim => 0.9,
            Surround::Dark => 0.8,
        }
    }

    /// Impact-of-surround exponent c.
    pub const fn c(self) -> f64 {
        match self {
            Surround::Average => 0.69,
            Surround::Dim => 0.59,
            Surround::Dark => 0.525,
        }
    }

    /// Chromatic induction factor Nc.
    pub const fn nc(self) -> f64 {
        match self {
            Surround::Average => 1.0,
            Surround::Dim => 0.9,
            Surround::Dark => 0.8,
        }
    }
}

/// CIECAM02 viewing conditions with cached derived terms.
///
/// Immutable after construction; all accessors are read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    white: Vec3,
    adapting_luminance: f64,
    background_luminance: f64,
    surround: Surround,
    // Derived once at construction
    d: f64,
    fl: f64,
    n: f64,
    z: f64,
    nbb: f64,
    ncb: f64,
    aw: f64,
    gain: Vec3,
}

impl ViewingConditions {
    /// Builds viewing conditions and computes the derived model terms.
    ///
    /// * `white` - reference white XYZ on the [0, 100] scale
    /// * `adapting_luminance` - La, cd/m2 of the adapting field
    /// * `background_luminance` - Yb, relative luminance of the background
    /// * `surround` - surround classification
    ///
    /// # Errors
    ///
    /// [`ProfileError::InvalidViewingConditions`] when a luminance is not
    /// positive or the white point has a non-positive Y.
    pub fn new(
        white: Vec3,
        adapting_luminance: f64,
        background_luminance: f64,
        surround: Surround,
    ) -> Result<Self, ProfileError> {
        if !(white.y > 0.0) || !white.is_finite() {
            return Err(ProfileError::InvalidViewingConditions(
                "reference white must have positive Y",
            ));
        }
        if !(adapting_luminance > 0.0) {
            return Err(ProfileError::InvalidViewingConditions(
                "adapting luminance must be positive",
            ));
        }
        if !(background_luminance > 0.0) {
            return Err(ProfileError::InvalidViewingConditions(
                "background luminance must be positive",
            ));
        }

        let la = adapting_luminance;
        let f = surround.f();

        let d = (f * (1.0 - (1.0 / 3.6) * ((-la - 42.0) / 92.0).exp())).clamp(0.0, 1.0);

        let k = 1.0 / (5.0 * la + 1.0);
        let k4 = k * k * k * k;
        let fl = 0.2 * k4 * (5.0 * la)
            + 0.1 * (1.0 - k4) * (1.0 - k4) * (5.0 * la).powf(1.0 / 3.0);

        let n = background_luminance / white.y;
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 * (1.0 / n).powf(0.2);
        let ncb = nbb;

        // Process the white through the adaptation and cone stages once;
        // forward and inverse transforms reuse the cached results.
        let rgb_w = CAT02 * white;
        let gain = Vec3::new(
            d * white.y / rgb_w.x + 1.0 - d,
            d * white.y / rgb_w.y + 1.0 - d,
            d * white.y / rgb_w.z + 1.0 - d,
        );
        let cat02_inv = CAT02.inverse().unwrap_or(Mat3::IDENTITY);
        let rgb_wp = (HPE * cat02_inv) * (rgb_w * gain);
        let rgb_wa = rgb_wp.map(|v| post_adaptation_compress(v, fl));
        let aw = (2.0 * rgb_wa.x + rgb_wa.y + rgb_wa.z / 20.0 - 0.305) * nbb;

        Ok(Self {
            white,
            adapting_luminance,
            background_luminance,
            surround,
            d,
            fl,
            n,
            z,
            nbb,
            ncb,
            aw,
            gain,
        })
    }

    /// Conventional sRGB ambient: D65 white, La = 4 cd/m2, Yb = 20,
    /// average surround.
    pub fn srgb() -> Self {
        Self::new(
            tristim_math::D65 * 100.0,
            4.0,
            20.0,
            Surround::Average,
        )
        .expect("sRGB viewing conditions are well-formed")
    }

    /// Reference white XYZ, [0, 100] scale.
    #[inline]
    pub fn white(&self) -> Vec3 {
        self.white
    }

    /// Adapting-field luminance La (cd/m2).
    #[inline]
    pub fn adapting_luminance(&self) -> f64 {
        self.adapting_luminance
    }

    /// Background relative luminance Yb.
    #[inline]
    pub fn background_luminance(&self) -> f64 {
        self.background_luminance
    }

    /// Surround classification.
    #[inline]
    pub fn surround(&self) -> Surround {
        self.surround
    }

    /// Degree of adaptation D, clamped to [0, 1].
    #[inline]
    pub fn degree_of_adaptation(&self) -> f64 {
        self.d
    }

    /// Luminance-level adaptation factor FL.
    #[inline]
    pub fn fl(&self) -> f64 {
        self.fl
    }

    /// Background induction ratio n = Yb / Yw.
    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Base exponential nonlinearity z.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Brightness induction factor Nbb.
    #[inline]
    pub fn nbb(&self) -> f64 {
        self.nbb
    }

    /// Chromatic induction factor Ncb.
    #[inline]
    pub fn ncb(&self) -> f64 {
        self.ncb
    }

    /// Achromatic response of the reference white.
    #[inline]
    pub fn aw(&self) -> f64 {
        self.aw
    }

    /// Per-cone von Kries gains for the degree-of-adaptation rescale.
    #[inline]
    pub fn adaptation_gain(&self) -> Vec3 {
        self.gain
    }
}

/// CIECAM02 post-adaptation cone compression.
///
/// Sign-symmetric hyperbolic nonlinearity; the 0.1 offset matches the
/// published model so opponent terms cancel exactly on the gray axis.
#[inline]
pub fn post_adaptation_compress(v: f64, fl: f64) -> f64 {
    let x = (fl * v.abs() / 100.0).powf(0.42);
    (400.0 * x / (27.13 + x)).copysign(v) + 0.1
}

/// Inverse of [`post_adaptation_compress`].
///
/// Compressed magnitudes saturate at 400; inputs at or beyond the asymptote
/// are pulled just inside it so the result stays finite.
#[inline]
pub fn post_adaptation_uncompress(v: f64, fl: f64) -> f64 {
    let x = v - 0.1;
    let m = x.abs().min(400.0 - 1e-9);
    let t = 27.13 * m / (400.0 - m);
    (100.0 / fl * t.powf(1.0 / 0.42)).copysign(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cie_example() -> ViewingConditions {
        // Worked example from CIE 159:2004
        ViewingConditions::new(
            Vec3::new(95.05, 100.0, 108.88),
            318.31,
            20.0,
            Surround::Average,
        )
        .unwrap()
    }

    #[test]
    fn test_derived_terms_match_published() {
        let vc = cie_example();
        assert!((vc.degree_of_adaptation() - 0.9944).abs() < 1e-3);
        assert!((vc.fl() - 1.1680).abs() < 1e-3);
        assert!((vc.n() - 0.2).abs() < 1e-12);
        assert!((vc.z() - 1.9272).abs() < 1e-4);
        assert!((vc.nbb() - 1.0003).abs() < 1e-4);
        assert_eq!(vc.nbb(), vc.ncb());
    }

    #[test]
    fn test_compress_roundtrip() {
        let vc = cie_example();
        for v in [-250.0, -10.0, -0.5, 0.0, 0.5, 10.0, 100.0, 250.0] {
            let back = post_adaptation_uncompress(post_adaptation_compress(v, vc.fl()), vc.fl());
            assert!((v - back).abs() < 1e-6 * v.abs().max(1.0), "v={v}, back={back}");
        }
    }

    #[test]
    fn test_compress_zero_is_offset() {
        assert!((post_adaptation_compress(0.0, 1.0) - 0.1).abs() < 1e-15);
        assert_eq!(post_adaptation_uncompress(0.1, 1.0), 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let w = Vec3::new(95.05, 100.0, 108.88);
        assert!(ViewingConditions::new(w, 0.0, 20.0, Surround::Average).is_err());
        assert!(ViewingConditions::new(w, 4.0, -1.0, Surround::Average).is_err());
        assert!(ViewingConditions::new(Vec3::ZERO, 4.0, 20.0, Surround::Average).is_err());
    }

    #[test]
    fn test_surround_table() {
        assert_eq!(Surround::Average.c(), 0.69);
        assert_eq!(Surround::Dim.f(), 0.9);
        assert_eq!(Surround::Dark.nc(), 0.8);
    }

    #[test]
    fn test_srgb_default() {
        let vc = ViewingConditions::srgb();
        assert_eq!(vc.surround(), Surround::Average);
        assert!((vc.white().y - 100.0).abs() < 1e-9);
    }
}
