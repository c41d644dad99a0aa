//! Color difference metrics over Lab-family coordinates.
//!
//! [`euclidean`] and [`cie76`] are symmetric. [`cie94`] and [`cmc`] weight
//! by the *reference* color's chroma, so swapping the arguments changes the
//! result; that asymmetry is part of the published formulas, not an
//! implementation artifact.

use crate::Lab;

/// Formula selector for [`color_difference`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaEFormula {
    /// Plain Euclidean distance over (L, a, b).
    Euclidean,
    /// CIE76 (identical to Euclidean over Lab, named for the standard).
    Cie76,
    /// CIE94 with graphic-arts weights; asymmetric.
    Cie94,
    /// CMC l:c with the given lightness and chroma weights; asymmetric.
    Cmc {
        /// Lightness weight l (2.0 for acceptability, 1.0 for perceptibility).
        lightness: f64,
        /// Chroma weight c (typically 1.0).
        chroma: f64,
    },
}

/// Computes the selected color difference between a reference and a sample.
pub fn color_difference(formula: DeltaEFormula, reference: Lab, sample: Lab) -> f64 {
    match formula {
        DeltaEFormula::Euclidean => euclidean(reference, sample),
        DeltaEFormula::Cie76 => cie76(reference, sample),
        DeltaEFormula::Cie94 => cie94(reference, sample),
        DeltaEFormula::Cmc { lightness, chroma } => cmc(reference, sample, lightness, chroma),
    }
}

/// Euclidean distance over (L, a, b). Symmetric.
pub fn euclidean(a: Lab, b: Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE76 color difference. Symmetric.
pub fn cie76(a: Lab, b: Lab) -> f64 {
    euclidean(a, b)
}

/// CIE94 color difference, graphic-arts weights (kL=1, K1=0.045, K2=0.015).
///
/// The chroma-dependent weights SC and SH are computed from the
/// *reference*; `cie94(a, b) != cie94(b, a)` in general.
pub fn cie94(reference: Lab, sample: Lab) -> f64 {
    let c1 = reference.a.hypot(reference.b);
    let c2 = sample.a.hypot(sample.b);

    let dl = reference.l - sample.l;
    let dc = c1 - c2;
    let da = reference.a - sample.a;
    let db = reference.b - sample.b;
    // Numerically, da^2 + db^2 can dip a hair under dc^2
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + 0.045 * c1;
    let sh = 1.0 + 0.015 * c1;

    (dl * dl + (dc / sc) * (dc / sc) + dh2 / (sh * sh)).sqrt()
}

/// CMC l:c color difference.
///
/// `l` and `c` are the lightness and chroma weights: 2:1 for acceptability
/// tolerancing, 1:1 for perceptibility. Weighted by the *reference* color;
/// asymmetric like [`cie94`].
pub fn cmc(reference: Lab, sample: Lab, l: f64, c: f64) -> f64 {
    let c1 = reference.a.hypot(reference.b);
    let c2 = sample.a.hypot(sample.b);

    let dl = reference.l - sample.l;
    let dc = c1 - c2;
    let da = reference.a - sample.a;
    let db = reference.b - sample.b;
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    let sl = if reference.l < 16.0 {
        0.511
    } else {
        0.040975 * reference.l / (1.0 + 0.01765 * reference.l)
    };
    let sc = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;

    let h1 = hue_angle(reference.a, reference.b);
    let t = if (164.0..345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };

    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let sh = sc * (f * t + 1.0 - f);

    let term_l = dl / (l * sl);
    let term_c = dc / (c * sc);
    (term_l * term_l + term_c * term_c + dh2 / (sh * sh)).sqrt()
}

/// CMC 2:1, the acceptability tolerance.
pub fn cmc_acceptability(reference: Lab, sample: Lab) -> f64 {
    cmc(reference, sample, 2.0, 1.0)
}

/// CMC 1:1, the perceptibility tolerance.
pub fn cmc_perceptibility(reference: Lab, sample: Lab) -> f64 {
    cmc(reference, sample, 1.0, 1.0)
}

/// Cylindrical color difference over (Jz, Cz, hz) triples, hue in degrees.
///
/// `ΔH = 2 * sqrt(Cz1 * Cz2) * sin(Δh / 2)`, combined Euclidean with the
/// lightness and chroma deltas. Symmetric.
pub fn jzczhz(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dj = a[0] - b[0];
    let dc = a[1] - b[1];
    let dh_rad = (a[2] - b[2]).to_radians();
    let dh = 2.0 * (a[1] * b[1]).abs().sqrt() * (dh_rad / 2.0).sin();
    (dj * dj + dc * dc + dh * dh).sqrt()
}

/// Hue angle in degrees, [0, 360); 0 on the achromatic axis.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let deg = b.atan2(a).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_zero_for_all_formulas() {
        let lab = Lab::new(50.0, 25.0, -30.0);
        let formulas = [
            DeltaEFormula::Euclidean,
            DeltaEFormula::Cie76,
            DeltaEFormula::Cie94,
            DeltaEFormula::Cmc { lightness: 2.0, chroma: 1.0 },
        ];
        for f in formulas {
            assert_eq!(color_difference(f, lab, lab), 0.0, "{f:?}");
        }
        assert_eq!(jzczhz([0.1, 0.05, 120.0], [0.1, 0.05, 120.0]), 0.0);
    }

    #[test]
    fn test_non_negative() {
        let a = Lab::new(50.0, 25.0, -30.0);
        let b = Lab::new(60.0, -10.0, 15.0);
        assert!(euclidean(a, b) > 0.0);
        assert!(cie94(a, b) > 0.0);
        assert!(cmc_acceptability(a, b) > 0.0);
    }

    #[test]
    fn test_euclidean_and_cie76_symmetric() {
        let a = Lab::new(50.0, 25.0, -30.0);
        let b = Lab::new(60.0, -10.0, 15.0);
        assert_eq!(euclidean(a, b), euclidean(b, a));
        assert_eq!(cie76(a, b), cie76(b, a));
        assert_eq!(cie76(a, b), euclidean(a, b));
    }

    #[test]
    fn test_cie94_asymmetric() {
        // High-chroma reference weights the chroma term down
        let saturated = Lab::new(50.0, 60.0, 30.0);
        let muted = Lab::new(50.0, 10.0, 5.0);
        let forward = cie94(saturated, muted);
        let reverse = cie94(muted, saturated);
        assert!((forward - reverse).abs() > 1e-6);
    }

    #[test]
    fn test_cmc_asymmetric() {
        let saturated = Lab::new(50.0, 60.0, 30.0);
        let muted = Lab::new(50.0, 10.0, 5.0);
        let forward = cmc_acceptability(saturated, muted);
        let reverse = cmc_acceptability(muted, saturated);
        assert!((forward - reverse).abs() > 1e-6);
    }

    #[test]
    fn test_cmc_weights_scale_lightness_term() {
        let a = Lab::new(40.0, 20.0, 20.0);
        let b = Lab::new(60.0, 20.0, 20.0);
        // Doubling l halves the lightness contribution
        let tolerancing = cmc(a, b, 2.0, 1.0);
        let perceptual = cmc(a, b, 1.0, 1.0);
        assert!((perceptual - 2.0 * tolerancing).abs() < 1e-9);
    }

    #[test]
    fn test_cmc_hue_branch() {
        // References on either side of the 164-345 degree branch produce
        // different T weightings for the same chroma/lightness offsets
        let inside = Lab::new(50.0, -30.0, -10.0); // h ~ 198
        let outside = Lab::new(50.0, 30.0, 10.0); // h ~ 18
        let sample_in = Lab::new(52.0, -28.0, -13.0);
        let sample_out = Lab::new(52.0, 28.0, 13.0);
        let de_in = cmc_perceptibility(inside, sample_in);
        let de_out = cmc_perceptibility(outside, sample_out);
        assert!((de_in - de_out).abs() > 1e-3);
    }

    #[test]
    fn test_cie76_known_magnitude() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(53.0, 4.0, 0.0);
        assert!((cie76(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_jzczhz_symmetric() {
        let a = [0.10, 0.04, 250.0];
        let b = [0.12, 0.06, 260.0];
        assert!((jzczhz(a, b) - jzczhz(b, a)).abs() < 1e-15);
        assert!(jzczhz(a, b) > 0.0);
    }

    #[test]
    fn test_jzczhz_hue_wraps_softly() {
        // 1 degree apart across the 0/360 seam is a small difference
        let a = [0.10, 0.05, 359.5];
        let b = [0.10, 0.05, 0.5];
        let near = jzczhz(a, b);
        let far = jzczhz(a, [0.10, 0.05, 180.0]);
        assert!(near < far);
    }
}
