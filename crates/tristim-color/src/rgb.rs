//! Companded (display-encoded) RGB.

use crate::hub::ColorModel;
use crate::LinearRgb;
use tristim_core::ModelId;
use tristim_profile::WorkingProfile;

/// RGB after the profile's tone response, nominally [0, 1] per channel.
///
/// The 0-255 integer domain is a separate encoding, reached only through
/// the explicit [`Rgb::from_8bit`] / [`Rgb::to_8bit`] conversions - there is
/// no implicit coupling between the two domains.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red, encoded.
    pub r: f64,
    /// Green, encoded.
    pub g: f64,
    /// Blue, encoded.
    pub b: f64,
}

impl Rgb {
    /// Creates an encoded RGB value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates from 8-bit channel values.
    ///
    /// ```rust
    /// use tristim_color::Rgb;
    ///
    /// let red = Rgb::from_8bit(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_8bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    /// Quantizes to 8-bit channel values, rounding and clamping to [0, 255].
    ///
    /// The clamp belongs to the quantization step only; the `f64` channels
    /// themselves are never clamped by conversions.
    #[inline]
    pub fn to_8bit(self) -> [u8; 3] {
        let q = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl ColorModel for Rgb {
    const ID: ModelId = ModelId::Rgb;
    type Hub = LinearRgb;

    fn to_hub(&self, profile: &WorkingProfile) -> LinearRgb {
        let tone = profile.tone();
        LinearRgb::new(
            tone.transfer_inverse(self.r),
            tone.transfer_inverse(self.g),
            tone.transfer_inverse(self.b),
        )
    }

    fn from_hub(hub: LinearRgb, profile: &WorkingProfile) -> Self {
        let tone = profile.tone();
        Self::new(
            tone.transfer(hub.r),
            tone.transfer(hub.g),
            tone.transfer(hub.b),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_8bit_roundtrip() {
        let rgb = Rgb::from_8bit(200, 100, 50);
        assert_eq!(rgb.to_8bit(), [200, 100, 50]);
    }

    #[test]
    fn test_8bit_quantization_clamps() {
        assert_eq!(Rgb::new(1.2, -0.1, 0.5).to_8bit(), [255, 0, 128]);
    }

    #[test]
    fn test_tone_roundtrip_through_hub() {
        let srgb = WorkingProfile::srgb();
        let rgb = Rgb::new(0.5, 0.25, 0.125);
        let back = Rgb::from_hub(rgb.to_hub(&srgb), &srgb);
        assert!((back.r - rgb.r).abs() < 1e-12);
        assert!((back.g - rgb.g).abs() < 1e-12);
        assert!((back.b - rgb.b).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_survives() {
        // Specular highlight above 1.0 passes through the tone response
        let srgb = WorkingProfile::srgb();
        let hot = Rgb::new(1.5, 1.0, -0.2);
        let linear = hot.to_hub(&srgb);
        assert!(linear.r.is_finite() && linear.r > 1.0);
        assert!(linear.b.is_finite() && linear.b < 0.0);
        let back = Rgb::from_hub(linear, &srgb);
        assert!((back.r - 1.5).abs() < 1e-9);
        assert!((back.b + 0.2).abs() < 1e-9);
    }
}
