//! Static component registry.
//!
//! Maps every [`ModelId`] to its channel descriptors. The table is built on
//! first access behind a [`OnceLock`], which gives the one-time publish
//! barrier the rest of the library relies on: registration completes before
//! any lookup is visible, and all later access is read-only.
//!
//! Looking up a model that is not in the table is a programmer error and
//! panics; it cannot be triggered by color data.

use crate::model::{ComponentDescriptor, ModelId};
use std::collections::HashMap;
use std::sync::OnceLock;

type Table = HashMap<ModelId, &'static [ComponentDescriptor]>;

static REGISTRY: OnceLock<Table> = OnceLock::new();

const RGB: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("R", "", 0.0, 1.0),
    ComponentDescriptor::new("G", "", 0.0, 1.0),
    ComponentDescriptor::new("B", "", 0.0, 1.0),
];

const LINEAR_RGB: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("R", "", 0.0, 1.0),
    ComponentDescriptor::new("G", "", 0.0, 1.0),
    ComponentDescriptor::new("B", "", 0.0, 1.0),
];

const XYZ: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("X", "", 0.0, 1.0),
    ComponentDescriptor::new("Y", "", 0.0, 1.0),
    ComponentDescriptor::new("Z", "", 0.0, 1.0),
];

const LAB: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("L", "", 0.0, 100.0),
    ComponentDescriptor::new("a", "", -128.0, 128.0),
    ComponentDescriptor::new("b", "", -128.0, 128.0),
];

// u/v bounds follow the classic sRGB-gamut extrema.
const LUV: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("L", "", 0.0, 100.0),
    ComponentDescriptor::new("u", "", -134.0, 224.0),
    ComponentDescriptor::new("v", "", -140.0, 122.0),
];

const LCH: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("L", "", 0.0, 100.0),
    ComponentDescriptor::new("C", "", 0.0, 180.0),
    ComponentDescriptor::new("h", "°", 0.0, 360.0),
];

const YPBPR: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("Y", "", 0.0, 1.0),
    ComponentDescriptor::new("Pb", "", -0.5, 0.5),
    ComponentDescriptor::new("Pr", "", -0.5, 0.5),
];

const CAM02_JCH: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("J", "", 0.0, 100.0),
    ComponentDescriptor::new("C", "", 0.0, 120.0),
    ComponentDescriptor::new("h", "°", 0.0, 360.0),
];

const CAM02_JMH: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("J", "", 0.0, 100.0),
    ComponentDescriptor::new("M", "", 0.0, 120.0),
    ComponentDescriptor::new("h", "°", 0.0, 360.0),
];

const CAM02_JSH: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("J", "", 0.0, 100.0),
    ComponentDescriptor::new("s", "", 0.0, 120.0),
    ComponentDescriptor::new("h", "°", 0.0, 360.0),
];

const CAM02_QCH: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("Q", "", 0.0, 250.0),
    ComponentDescriptor::new("C", "", 0.0, 120.0),
    ComponentDescriptor::new("h", "°", 0.0, 360.0),
];

const CAM02_QMH: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("Q", "", 0.0, 250.0),
    ComponentDescriptor::new("M", "", 0.0, 120.0),
    ComponentDescriptor::new("h", "°", 0.0, 360.0),
];

const CAM02_QSH: &[ComponentDescriptor] = &[
    ComponentDescriptor::new("Q", "", 0.0, 250.0),
    ComponentDescriptor::new("s", "", 0.0, 120.0),
    ComponentDescriptor::new("h", "°", 0.0, 360.0),
];

fn builtin_table() -> Table {
    let mut table = Table::new();
    table.insert(ModelId::Rgb, RGB);
    table.insert(ModelId::LinearRgb, LINEAR_RGB);
    table.insert(ModelId::Xyz, XYZ);
    table.insert(ModelId::Lab, LAB);
    table.insert(ModelId::Luv, LUV);
    table.insert(ModelId::Lch, LCH);
    table.insert(ModelId::YPbPr, YPBPR);
    table.insert(ModelId::Cam02Jch, CAM02_JCH);
    table.insert(ModelId::Cam02Jmh, CAM02_JMH);
    table.insert(ModelId::Cam02Jsh, CAM02_JSH);
    table.insert(ModelId::Cam02Qch, CAM02_QCH);
    table.insert(ModelId::Cam02Qmh, CAM02_QMH);
    table.insert(ModelId::Cam02Qsh, CAM02_QSH);
    table
}

/// Returns the channel descriptors for a model.
///
/// # Panics
///
/// Panics if the model was never registered.
pub fn components(id: ModelId) -> &'static [ComponentDescriptor] {
    REGISTRY
        .get_or_init(builtin_table)
        .get(&id)
        .unwrap_or_else(|| panic!("color model {} is not registered", id.name()))
}

/// Per-channel nominal minima for a model.
pub fn minimum(id: ModelId) -> Vec<f64> {
    components(id).iter().map(|c| c.min).collect()
}

/// Per-channel nominal maxima for a model.
pub fn maximum(id: ModelId) -> Vec<f64> {
    components(id).iter().map(|c| c.max).collect()
}

/// Maps native channel values into [0, 1] against the model's nominal range.
///
/// Out-of-range inputs map outside [0, 1]; nothing is clamped.
///
/// # Panics
///
/// Panics if `values` does not match the model's channel count.
pub fn normalize(id: ModelId, values: &[f64]) -> Vec<f64> {
    let components = components(id);
    assert_eq!(
        values.len(),
        components.len(),
        "{} expects {} channels, got {}",
        id.name(),
        components.len(),
        values.len()
    );
    values
        .iter()
        .zip(components)
        .map(|(v, c)| if c.span() == 0.0 { 0.0 } else { (v - c.min) / c.span() })
        .collect()
}

/// Maps [0, 1] values back into the model's native channel ranges.
///
/// # Panics
///
/// Panics if `values` does not match the model's channel count.
pub fn denormalize(id: ModelId, values: &[f64]) -> Vec<f64> {
    let components = components(id);
    assert_eq!(
        values.len(),
        components.len(),
        "{} expects {} channels, got {}",
        id.name(),
        components.len(),
        values.len()
    );
    values
        .iter()
        .zip(components)
        .map(|(v, c)| c.min + v * c.span())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_models_registered() {
        for id in ModelId::ALL {
            let c = components(id);
            assert_eq!(c.len(), id.channels(), "{}", id.name());
        }
    }

    #[test]
    fn test_ranges_well_formed() {
        for id in ModelId::ALL {
            for c in components(id) {
                assert!(c.min <= c.max, "{} {}", id.name(), c.name);
            }
        }
    }

    #[test]
    fn test_minimum_maximum() {
        assert_eq!(minimum(ModelId::Lab), vec![0.0, -128.0, -128.0]);
        assert_eq!(maximum(ModelId::Lch), vec![100.0, 180.0, 360.0]);
    }

    #[test]
    fn test_normalize_roundtrip() {
        let lab = [53.24, 80.09, 67.2];
        let n = normalize(ModelId::Lab, &lab);
        let back = denormalize(ModelId::Lab, &n);
        for (orig, restored) in lab.iter().zip(&back) {
            assert!((orig - restored).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_does_not_clamp() {
        // Specular highlight above nominal range stays above 1.0
        let n = normalize(ModelId::LinearRgb, &[1.5, 0.5, -0.25]);
        assert!(n[0] > 1.0);
        assert!(n[2] < 0.0);
    }

    #[test]
    #[should_panic(expected = "expects 3 channels")]
    fn test_normalize_wrong_arity_panics() {
        normalize(ModelId::Lab, &[1.0, 2.0]);
    }
}
