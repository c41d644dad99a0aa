//! Color primaries and RGB-XYZ matrix derivation.
//!
//! A set of [`Primaries`] defines an RGB color space by the CIE xy
//! chromaticities of its three primaries and its white point. From those
//! four coordinates the RGB-to-XYZ matrix is derived: build the matrix whose
//! columns are the primaries' XYZ, then scale each column so that RGB
//! (1,1,1) lands exactly on the white point.

use crate::ProfileError;
use tristim_math::{Mat3, Vec3};

/// RGB color space primaries.
///
/// All coordinates are CIE xy chromaticities.
///
/// # Example
///
/// ```rust
/// use tristim_profile::Primaries;
///
/// let custom = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: (0.3127, 0.3290),
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// Standard white chromaticities
// ============================================================================

/// D65 white chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D50 white chromaticity (~5000K).
pub const D50_XY: (f64, f64) = (0.34567, 0.35850);

/// DCI theatrical white chromaticity.
pub const DCI_XY: (f64, f64) = (0.31400, 0.35100);

// ============================================================================
// Standard primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Rec.709 primaries (identical chromaticities to sRGB).
pub const REC709: Primaries = Primaries { name: "Rec.709", ..SRGB };

/// Rec.2020 primaries (D65 white point).
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "Rec.2020",
};

/// DCI-P3 primaries (DCI theatrical white point).
pub const DCI_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: DCI_XY,
    name: "DCI-P3",
};

/// Display P3 primaries (DCI-P3 gamut with a D65 white point).
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Display P3",
};

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Adobe RGB",
};

/// ProPhoto RGB primaries (D50 white point).
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
    w: D50_XY,
    name: "ProPhoto RGB",
};

// ============================================================================
// Matrix derivation
// ============================================================================

/// Converts an xy chromaticity to XYZ with Y=1.
///
/// A vanishing y collapses to the zero vector rather than dividing by zero.
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-12 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Derives the RGB-to-XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert each primary and the white point from xy to XYZ (Y=1)
/// 2. Solve `S * scale = white` for the per-primary scale vector
/// 3. Scale the primaries matrix column-wise
///
/// # Errors
///
/// [`ProfileError::DegeneratePrimaries`] when the primaries matrix is
/// singular (collinear primaries) or the scaled result is not invertible
/// (white point coincident with a primary).
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Result<Mat3, ProfileError> {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    let s = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s_inv = s.inverse().ok_or(ProfileError::DegeneratePrimaries {
        name: primaries.name,
    })?;

    // Per-primary scale so that RGB (1,1,1) maps onto the white point
    let scale = s_inv * w_xyz;
    let m = Mat3::from_col_vecs(r_xyz * scale.x, g_xyz * scale.y, b_xyz * scale.z);

    if m.inverse().is_none() {
        return Err(ProfileError::DegeneratePrimaries {
            name: primaries.name,
        });
    }
    Ok(m)
}

/// Derives the XYZ-to-RGB matrix: the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Result<Mat3, ProfileError> {
    let m = rgb_to_xyz_matrix(primaries)?;
    m.inverse().ok_or(ProfileError::DegeneratePrimaries {
        name: primaries.name,
    })
}
