//! Chromatic adaptation transforms.
//!
//! Adapting a color between two illuminants is done in a cone-response
//! (LMS) space: transform XYZ into cone coordinates, rescale each channel by
//! the ratio of the two white points (von Kries), transform back.
//!
//! # Supported cone-response bases
//!
//! - [`BRADFORD`] - best overall accuracy, the default for hub conversions
//! - [`VON_KRIES`] - Hunt-Pointer-Estevez cone response
//! - [`CAT02`] - the CIECAM02 adaptation basis
//!
//! # Usage
//!
//! ```rust
//! use tristim_math::{adapt_matrix, BRADFORD, D65, D50};
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! let xyz_d50 = d65_to_d50 * D65;
//! assert!((xyz_d50.x - D50.x).abs() < 1e-3);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ white points, Y=1)
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, ~6500K).
///
/// Reference white for sRGB, Rec.709, Rec.2020 and Adobe RGB.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
///
/// Reference white for ICC profiles and print.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D60 (~6000K).
pub const D60: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

/// CIE Standard Illuminant A (tungsten, ~2856K).
pub const A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

/// CIE Standard Illuminant E (equal energy).
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// ============================================================================
// Cone-response matrices
// ============================================================================

/// Bradford cone-response matrix.
///
/// Transforms XYZ to a "sharpened" cone space. Generally the best overall
/// basis for cross-illuminant adaptation.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries cone-response matrix (Hunt-Pointer-Estevez, D65 normalized).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 cone-response matrix, from the CIECAM02 appearance model.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

// ============================================================================
// Adaptation functions
// ============================================================================

/// Rescales a cone-response value between two white points (von Kries).
///
/// All three arguments are in the same cone (LMS) space. Adapting between
/// identical whites short-circuits on exact equality and returns the input
/// bit-for-bit, so identity conversions pick up no floating noise.
///
/// A white with a vanishing cone channel is degenerate; that channel's gain
/// collapses to 1 so the result stays finite.
///
/// # Example
///
/// ```rust
/// use tristim_math::{adapt_cone, Vec3};
///
/// let w = Vec3::new(0.9, 1.0, 1.1);
/// let lms = Vec3::new(0.2, 0.4, 0.6);
/// assert_eq!(adapt_cone(lms, w, w), lms);
/// ```
pub fn adapt_cone(lms: Vec3, src_white: Vec3, dst_white: Vec3) -> Vec3 {
    if src_white == dst_white {
        return lms;
    }
    let gain = |src: f64, dst: f64| if src.abs() < 1e-12 { 1.0 } else { dst / src };
    lms * Vec3::new(
        gain(src_white.x, dst_white.x),
        gain(src_white.y, dst_white.y),
        gain(src_white.z, dst_white.z),
    )
}

/// Computes a full XYZ-to-XYZ adaptation matrix between two white points.
///
/// The white points are XYZ values; `method` is the cone-response basis
/// ([`BRADFORD`], [`CAT02`], ...). The result is the composite
/// `method^-1 * scale * method`.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    method_inv * scale * method
}

/// Adapts an XYZ value between two white points.
///
/// Convenience wrapper: XYZ -> cone space -> von Kries rescale -> XYZ.
/// Equal white points short-circuit to the identity (see [`adapt_cone`]).
pub fn adapt_xyz(xyz: Vec3, method: Mat3, src_white: Vec3, dst_white: Vec3) -> Vec3 {
    if src_white == dst_white {
        return xyz;
    }
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);
    let cone = method * xyz;
    let adapted = adapt_cone(cone, method * src_white, method * dst_white);
    method_inv * adapted
}
