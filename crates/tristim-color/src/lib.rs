//! # tristim-color
//!
//! The conversion core of the tristim colorimetry engine: the canonical
//! conversion hub, the hub-space models, the CIECAM02 appearance model and
//! the color difference metrics.
//!
//! # Architecture
//!
//! ```text
//!                  tristim-color
//!                       |
//!     +-----------------+----------------+
//!     |                 |                |
//! tristim-transfer  tristim-profile  tristim-core
//!     |                 |
//!     +--------+--------+
//!              |
//!         tristim-math
//! ```
//!
//! Every model implements [`ColorModel`]: a bidirectional conversion to its
//! single home hub space. The sealed [`HubSpace`] trait funnels all six hub
//! spaces through [`LinearRgb`], so any-to-any conversion is two hops per
//! model and chromatic adaptation always happens in one place.
//!
//! # Quick Start
//!
//! ```rust
//! use tristim_color::{convert, Lab, Rgb};
//! use tristim_profile::WorkingProfile;
//!
//! let srgb = WorkingProfile::srgb();
//! let adobe = WorkingProfile::adobe_rgb();
//!
//! // sRGB red, as Lab under the Adobe RGB profile
//! let red = Rgb::from_8bit(255, 0, 0);
//! let lab: Lab = convert(&red, &srgb, &adobe);
//! assert!(lab.l > 50.0 && lab.l < 56.0);
//! ```
//!
//! # Conversion totality
//!
//! Conversions never fail and never produce NaN from finite input: each
//! model collapses its own singular inputs (zero luminance, zero chroma,
//! zero saturation) to its zero value. Only profile *construction* can
//! fail, over in `tristim-profile`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cam02;
pub mod deltae;
mod hub;
mod lab;
mod lch;
mod linear_rgb;
mod luv;
mod rgb;
mod xyz;
mod ypbpr;

pub use hub::{convert, convert_within, ColorModel, HubSpace};
pub use lab::Lab;
pub use lch::Lch;
pub use linear_rgb::LinearRgb;
pub use luv::Luv;
pub use rgb::Rgb;
pub use xyz::Xyz;
pub use ypbpr::YPbPr;

// Re-export sub-crates for convenience
pub use tristim_core::{registry, ComponentDescriptor, HubId, ModelId};
pub use tristim_math as math;
pub use tristim_profile as profile;
pub use tristim_transfer as transfer;

/// Prelude with commonly used types.
pub mod prelude {
    pub use crate::{
        convert, convert_within, ColorModel, HubSpace, Lab, Lch, LinearRgb, Luv, Rgb, Xyz,
        YPbPr,
    };

    pub use crate::cam02::{Cam02, Cam02Jch, Cam02Jmh, Cam02Jsh, Cam02Qch, Cam02Qmh, Cam02Qsh};

    pub use crate::deltae::{color_difference, DeltaEFormula};

    pub use tristim_profile::{
        Surround, ToneResponse, ViewingConditions, WorkingProfile,
    };

    pub use tristim_math::{Mat3, Vec3};
}
