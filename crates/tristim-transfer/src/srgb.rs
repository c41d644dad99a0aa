//! sRGB transfer function.
//!
//! Piecewise curve: a linear segment near black joined to a power segment
//! (roughly gamma 2.2) for the rest of the range.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: decodes an encoded value to linear light.
///
/// ```text
/// if V <= 0.04045: L = V / 12.92
/// else:            L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use tristim_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.2140).abs() < 1e-3);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light.
///
/// ```text
/// if L <= 0.0031308: V = L * 12.92
/// else:              V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
