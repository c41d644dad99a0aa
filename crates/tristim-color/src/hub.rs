//! The canonical conversion hub.
//!
//! Every color model reaches the hub through exactly one home hub space;
//! every hub space funnels through linear RGB. Any-to-any conversion is the
//! chain
//!
//! ```text
//! source -> home hub -> linear RGB -> [adapt] -> linear RGB -> home hub -> target
//! ```
//!
//! so each model pays two hops instead of one formula per model pair, and
//! cross-profile adaptation cannot be skipped by a shortcut path.
//!
//! [`HubSpace`] is sealed: only the six hub types in this crate implement
//! it, which is what guarantees the funnel.

use crate::LinearRgb;
use tristim_core::ModelId;
use tristim_math::{adapt_xyz, BRADFORD};
use tristim_profile::WorkingProfile;

pub(crate) mod sealed {
    /// Restricts [`super::HubSpace`] to the hub types in this crate.
    pub trait Sealed {}
}

/// A hub space: one of the six canonical representations conversions route
/// through.
///
/// Sealed; implemented exactly by [`LinearRgb`], [`crate::Xyz`],
/// [`crate::Lab`], [`crate::Luv`], [`crate::Lch`] and [`crate::YPbPr`].
pub trait HubSpace: sealed::Sealed + Copy + Sized {
    /// Hop down to linear RGB under the given profile.
    fn into_linear_rgb(self, profile: &WorkingProfile) -> LinearRgb;

    /// Hop up from linear RGB under the given profile.
    fn from_linear_rgb(rgb: LinearRgb, profile: &WorkingProfile) -> Self;
}

/// The contract every color model implements: a bidirectional conversion to
/// exactly one home hub space.
///
/// Conversions must be total over the reals. A model with singular inputs
/// (zero-sum normalization, zero saturation) yields its own zero value
/// instead of propagating NaN.
pub trait ColorModel: Sized {
    /// Registry tag for this model.
    const ID: ModelId;

    /// The model's home hub space.
    type Hub: HubSpace;

    /// Converts this value to its home hub.
    fn to_hub(&self, profile: &WorkingProfile) -> Self::Hub;

    /// Reconstructs a value from its home hub.
    fn from_hub(hub: Self::Hub, profile: &WorkingProfile) -> Self;
}

/// Converts a value of model `S` under `source` to model `T` under `target`.
///
/// Chromatic adaptation (Bradford, through XYZ cone space) runs only when
/// the two profiles declare different white chromaticities; equal whites
/// short-circuit on value equality so identity conversions stay noise-free.
///
/// # Example
///
/// ```rust
/// use tristim_color::{convert, Rgb, Xyz};
/// use tristim_profile::WorkingProfile;
///
/// let srgb = WorkingProfile::srgb();
/// let red = Rgb::from_8bit(255, 0, 0);
/// let xyz: Xyz = convert(&red, &srgb, &srgb);
/// assert!((xyz.x - 0.4125).abs() < 1e-3);
/// ```
pub fn convert<S: ColorModel, T: ColorModel>(
    value: &S,
    source: &WorkingProfile,
    target: &WorkingProfile,
) -> T {
    let rgb = value.to_hub(source).into_linear_rgb(source);
    let rgb = bridge(rgb, source, target);
    T::from_hub(<T::Hub>::from_linear_rgb(rgb, target), target)
}

/// Converts between two models under a single profile.
pub fn convert_within<S: ColorModel, T: ColorModel>(value: &S, profile: &WorkingProfile) -> T {
    convert(value, profile, profile)
}

/// Carries linear RGB from one profile's gamut to another's, adapting the
/// white point when it differs.
fn bridge(rgb: LinearRgb, source: &WorkingProfile, target: &WorkingProfile) -> LinearRgb {
    if source.same_gamut(target) {
        return rgb;
    }
    let mut xyz = *source.rgb_to_xyz() * rgb.to_vec3();
    if !source.same_white(target) {
        xyz = adapt_xyz(xyz, BRADFORD, source.white_xyz(), target.white_xyz());
    }
    LinearRgb::from_vec3(*target.xyz_to_rgb() * xyz)
}
