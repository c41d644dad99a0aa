//! # tristim-profile
//!
//! Working profiles: everything a conversion needs to know about the
//! viewing assumptions it runs under.
//!
//! A [`WorkingProfile`] bundles four declared inputs:
//!
//! - three primary chromaticities and a white point ([`Primaries`])
//! - a tone-response strategy ([`ToneResponse`])
//! - CIECAM02 viewing conditions ([`ViewingConditions`])
//!
//! and derives the rest - white XYZ and both RGB/XYZ matrices - once, at
//! construction. Profiles are immutable values: derived data can never drift
//! from the declared inputs, and profiles can be shared across threads
//! freely.
//!
//! Degenerate configurations (collinear primaries, a white point on a
//! primary) fail fast at construction with [`ProfileError`]; conversions
//! themselves never fail.
//!
//! # Usage
//!
//! ```rust
//! use tristim_profile::WorkingProfile;
//!
//! let srgb = WorkingProfile::srgb();
//! let white = srgb.rgb_to_xyz().transform(tristim_math::Vec3::ONE);
//! assert!((white.y - 1.0).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `tristim-color` - every hub conversion takes a profile

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod primaries;
mod profile;
mod tone;
mod viewing;

pub use error::ProfileError;
pub use primaries::{
    Primaries, rgb_to_xyz_matrix, xy_to_xyz, xyz_to_rgb_matrix, ADOBE_RGB, D50_XY, D65_XY,
    DCI_P3, DCI_XY, DISPLAY_P3, PROPHOTO_RGB, REC2020, REC709, SRGB,
};
pub use profile::WorkingProfile;
pub use tone::ToneResponse;
pub use viewing::{
    post_adaptation_compress, post_adaptation_uncompress, Surround, ViewingConditions, HPE,
};
