//! # tristim-math
//!
//! Math kernel for tristimulus colorimetry.
//!
//! Provides the numeric primitives every other `tristim` crate builds on:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms (double precision)
//! - [`Vec3`] - 3-component color values (RGB, XYZ, LMS triplets)
//! - Chromatic adaptation: cone-response matrices and von Kries rescaling
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Determinants and inverses are delegated to [`glam::DMat3`].
//!
//! # Usage
//!
//! ```rust
//! use tristim_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Used By
//!
//! - `tristim-profile` - RGB/XYZ matrix derivation
//! - `tristim-color` - hub conversions, CAM02

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
