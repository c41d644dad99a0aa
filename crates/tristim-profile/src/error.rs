//! Error type for profile construction.
//!
//! Only misconfiguration is an error. Conversions over constructed profiles
//! are total and never return `Result`.

use thiserror::Error;

/// Working-profile configuration error.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The primaries are collinear, or the white point coincides with a
    /// primary, so the RGB-XYZ matrix cannot be derived.
    #[error("degenerate primaries for {name}: RGB to XYZ matrix is not invertible")]
    DegeneratePrimaries {
        /// Name of the offending primaries set.
        name: &'static str,
    },

    /// A viewing-condition input is outside its physical domain.
    #[error("invalid viewing conditions: {0}")]
    InvalidViewingConditions(&'static str),
}
