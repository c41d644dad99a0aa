//! Hybrid Log-Gamma (HLG).
//!
//! HDR broadcast curve: square-root segment for shadows, logarithmic
//! segment for highlights. Scene-referred, relative [0, 1] on both sides.
//!
//! # Reference
//!
//! ITU-R BT.2100-2

// HLG constants
const A: f64 = 0.17883277;
const B: f64 = 0.28466892; // 1 - 4*A
const C: f64 = 0.55991073; // 0.5 - A*ln(4*A)

/// HLG OETF: encodes linear scene light.
///
/// ```text
/// if E <= 1/12: E' = sqrt(3 * E)
/// else:         E' = A * ln(12*E - B) + C
/// ```
#[inline]
pub fn oetf(e: f64) -> f64 {
    if e <= 0.0 {
        0.0
    } else if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// HLG inverse OETF: decodes an HLG signal to linear scene light.
#[inline]
pub fn eotf(ep: f64) -> f64 {
    if ep <= 0.0 {
        0.0
    } else if ep <= 0.5 {
        ep * ep / 3.0
    } else {
        (((ep - C) / A).exp() + B) / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let e = i as f64 / 1000.0;
            let decoded = eotf(oetf(e));
            assert!((e - decoded).abs() < 1e-9, "e={e}, decoded={decoded}");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_join() {
        // 1/12 encodes to 0.5 on both sides of the join
        assert!((oetf(1.0 / 12.0) - 0.5).abs() < 1e-9);
        assert!((eotf(0.5) - 1.0 / 12.0).abs() < 1e-9);
    }
}
