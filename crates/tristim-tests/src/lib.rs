//! Integration tests for the tristim crates.
//!
//! End-to-end scenarios that cross crate boundaries live here; per-module
//! unit tests stay with their modules, and the broad property sweeps are in
//! `tests/properties.rs`.

/// Asserts two triplets agree within an absolute tolerance.
pub fn assert_triplet_near(actual: [f64; 3], expected: [f64; 3], tolerance: f64, label: &str) {
    for (i, (a, e)) in actual.iter().zip(&expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "{label}[{i}]: {a} vs {e} (tolerance {tolerance})"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::assert_triplet_near;
    use tristim_color::{convert, convert_within, Lab, Rgb, Xyz};
    use tristim_math::{adapt_cone, adapt_xyz, Vec3, BRADFORD, D50, D65};
    use tristim_profile::WorkingProfile;

    /// sRGB (255, 0, 0) through the full chain: the published XYZ and Lab
    /// values come out, and the value returns to within one 8-bit step.
    #[test]
    fn test_srgb_red_end_to_end() {
        let srgb = WorkingProfile::srgb();
        let red = Rgb::from_8bit(255, 0, 0);

        let xyz: Xyz = convert_within(&red, &srgb);
        assert_triplet_near(
            [xyz.x, xyz.y, xyz.z],
            [0.4125, 0.2127, 0.0193],
            5e-4,
            "xyz",
        );

        let lab: Lab = convert_within(&xyz, &srgb);
        assert_triplet_near([lab.l, lab.a, lab.b], [53.24, 80.09, 67.20], 0.1, "lab");

        let back: Rgb = convert_within(&lab, &srgb);
        assert_eq!(back.to_8bit(), [255, 0, 0]);
    }

    /// The D65 white adapted to itself is a bit-exact no-op; D65 -> D50 ->
    /// D65 reproduces the original LMS to 1e-9.
    #[test]
    fn test_adaptation_scenario() {
        let lms = Vec3::new(0.7071, 1.0132, 0.9203);
        let d65_lms = BRADFORD * D65;
        let d50_lms = BRADFORD * D50;

        assert_eq!(adapt_cone(lms, d65_lms, d65_lms), lms);

        let there = adapt_cone(lms, d65_lms, d50_lms);
        let back = adapt_cone(there, d50_lms, d65_lms);
        assert_triplet_near(
            [back.x, back.y, back.z],
            [lms.x, lms.y, lms.z],
            1e-9,
            "lms",
        );
    }

    /// Cross-profile conversion with different whites lands sRGB white on
    /// ProPhoto white and survives the return trip.
    #[test]
    fn test_cross_illuminant_roundtrip() {
        let srgb = WorkingProfile::srgb();
        let prophoto = WorkingProfile::prophoto_rgb();

        let original = Rgb::new(0.8, 0.4, 0.2);
        let there: Rgb = convert(&original, &srgb, &prophoto);
        let back: Rgb = convert(&there, &prophoto, &srgb);
        assert_triplet_near(
            [back.r, back.g, back.b],
            [original.r, original.g, original.b],
            1e-9,
            "rgb",
        );
    }

    /// The convenience XYZ adaptation wrapper agrees with routing the same
    /// value through two working profiles.
    #[test]
    fn test_hub_adaptation_matches_direct_adaptation() {
        let srgb = WorkingProfile::srgb();
        let prophoto = WorkingProfile::prophoto_rgb();

        let xyz = Xyz::new(0.35, 0.41, 0.29);
        let via_hub: Xyz = convert(&xyz, &srgb, &prophoto);
        let direct = adapt_xyz(
            xyz.to_vec3(),
            BRADFORD,
            srgb.white_xyz(),
            prophoto.white_xyz(),
        );
        assert_triplet_near(
            [via_hub.x, via_hub.y, via_hub.z],
            [direct.x, direct.y, direct.z],
            1e-9,
            "xyz",
        );
    }

    /// Registry metadata covers every model the conversion layer exposes.
    #[test]
    fn test_registry_is_complete() {
        use tristim_core::{registry, ModelId};

        for id in ModelId::ALL {
            assert_eq!(registry::components(id).len(), id.channels());
            assert_eq!(registry::minimum(id).len(), registry::maximum(id).len());
        }
    }
}
