//! # tristim-transfer
//!
//! Tone-response (companding) curves: the nonlinear encode/decode step
//! between linear light and a model's stored values.
//!
//! # Terminology
//!
//! - **OETF**: linear -> encoded (for storage/transmission)
//! - **EOTF**: encoded -> linear (for display)
//!
//! # Supported curves
//!
//! | Module | Use case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//! | [`rec709`] | SDTV/HDTV broadcast camera encoding | [0, 1] |
//! | [`gamma`] | Pure power-law (Adobe RGB, DCI, legacy CRT) | [0, 1] |
//! | [`pq`] | HDR (SMPTE ST 2084) | [0, 10000] cd/m2 |
//! | [`hlg`] | HDR broadcast (ITU-R BT.2100) | [0, 1] |
//!
//! Each module exposes a plain function pair; strategy selection lives one
//! layer up, in `tristim-profile`'s tone-response type.
//!
//! # Usage
//!
//! ```rust
//! use tristim_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `tristim-profile` - the pluggable tone-response strategy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod hlg;
pub mod pq;
pub mod rec709;
pub mod srgb;

pub use gamma::{gamma_eotf, gamma_oetf};
pub use hlg::{eotf as hlg_eotf, oetf as hlg_oetf};
pub use pq::{eotf as pq_eotf, oetf as pq_oetf};
pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
