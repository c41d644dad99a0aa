//! # tristim-core
//!
//! Core identity and metadata types for the tristim colorimetry engine.
//!
//! - [`ModelId`] / [`HubId`] - type tags for color models and the hub spaces
//!   they reach directly
//! - [`ComponentDescriptor`] - per-channel name, unit and advisory range
//! - [`registry`] - the static component registry, published once and
//!   read-only afterwards
//!
//! Component ranges are metadata for normalization and display. They are
//! never enforced during conversion: out-of-range values (specular
//! highlights, wide-gamut chroma) are valid inputs everywhere.
//!
//! # Usage
//!
//! ```rust
//! use tristim_core::{registry, ModelId};
//!
//! let components = registry::components(ModelId::Lab);
//! assert_eq!(components[0].name, "L");
//! assert_eq!(registry::maximum(ModelId::Lab)[0], 100.0);
//! ```
//!
//! # Used By
//!
//! - `tristim-color` - model implementations declare their [`ModelId`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod model;
pub mod registry;

pub use model::{ComponentDescriptor, HubId, ModelId};
