//! Color model identity and channel metadata.

/// The hub space a color model reaches directly.
///
/// Every hub ultimately funnels through linear RGB; the secondary hubs exist
/// so families of related models share one hop instead of re-deriving their
/// path each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HubId {
    /// Linear (non-companded) RGB, the primary hub.
    LinearRgb,
    /// CIE XYZ tristimulus.
    Xyz,
    /// CIE L*a*b*.
    Lab,
    /// CIE L*u*v*.
    Luv,
    /// Cylindrical L*C*h(ab).
    Lch,
    /// Component video luma / chroma-difference.
    YPbPr,
}

/// Type tag identifying a registered color model.
///
/// Carries the static facts about a model: its display name, channel count,
/// and (for hub participants) its home hub. The CAM02 correlate projections
/// are terminal appearance models and do not participate in the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// Companded (display-encoded) RGB.
    Rgb,
    /// Linear RGB.
    LinearRgb,
    /// CIE XYZ.
    Xyz,
    /// CIE L*a*b*.
    Lab,
    /// CIE L*u*v*.
    Luv,
    /// L*C*h(ab).
    Lch,
    /// Y'PbPr.
    YPbPr,
    /// CIECAM02 lightness / chroma / hue.
    Cam02Jch,
    /// CIECAM02 lightness / colorfulness / hue.
    Cam02Jmh,
    /// CIECAM02 lightness / saturation / hue.
    Cam02Jsh,
    /// CIECAM02 brightness / chroma / hue.
    Cam02Qch,
    /// CIECAM02 brightness / colorfulness / hue.
    Cam02Qmh,
    /// CIECAM02 brightness / saturation / hue.
    Cam02Qsh,
}

impl ModelId {
    /// Every registered model, in registration order.
    pub const ALL: [ModelId; 13] = [
        ModelId::Rgb,
        ModelId::LinearRgb,
        ModelId::Xyz,
        ModelId::Lab,
        ModelId::Luv,
        ModelId::Lch,
        ModelId::YPbPr,
        ModelId::Cam02Jch,
        ModelId::Cam02Jmh,
        ModelId::Cam02Jsh,
        ModelId::Cam02Qch,
        ModelId::Cam02Qmh,
        ModelId::Cam02Qsh,
    ];

    /// Human-readable model name.
    pub const fn name(self) -> &'static str {
        match self {
            ModelId::Rgb => "RGB",
            ModelId::LinearRgb => "Linear RGB",
            ModelId::Xyz => "XYZ",
            ModelId::Lab => "Lab",
            ModelId::Luv => "Luv",
            ModelId::Lch => "LCHab",
            ModelId::YPbPr => "YPbPr",
            ModelId::Cam02Jch => "CAM02 JCh",
            ModelId::Cam02Jmh => "CAM02 JMh",
            ModelId::Cam02Jsh => "CAM02 Jsh",
            ModelId::Cam02Qch => "CAM02 QCh",
            ModelId::Cam02Qmh => "CAM02 QMh",
            ModelId::Cam02Qsh => "CAM02 Qsh",
        }
    }

    /// Number of channels in the model's native representation.
    pub const fn channels(self) -> usize {
        // Every currently registered model is a triplet; the descriptor
        // tables support 2- and 4-channel models when they arrive.
        3
    }

    /// The hub space this model converts to directly, or `None` for
    /// terminal appearance models.
    pub const fn home_hub(self) -> Option<HubId> {
        match self {
            ModelId::Rgb | ModelId::LinearRgb => Some(HubId::LinearRgb),
            ModelId::Xyz => Some(HubId::Xyz),
            ModelId::Lab => Some(HubId::Lab),
            ModelId::Luv => Some(HubId::Luv),
            ModelId::Lch => Some(HubId::Lch),
            ModelId::YPbPr => Some(HubId::YPbPr),
            ModelId::Cam02Jch
            | ModelId::Cam02Jmh
            | ModelId::Cam02Jsh
            | ModelId::Cam02Qch
            | ModelId::Cam02Qmh
            | ModelId::Cam02Qsh => None,
        }
    }
}

/// Static metadata for one channel of a color model.
///
/// `min`/`max` delimit the channel's nominal range. The range is advisory:
/// normalization uses it, conversions never clamp to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentDescriptor {
    /// Channel name, e.g. `"L"` or `"Pb"`.
    pub name: &'static str,
    /// Unit symbol, e.g. `"°"` for hue angles; empty for unitless channels.
    pub unit: &'static str,
    /// Nominal minimum. Invariant: `min <= max`.
    pub min: f64,
    /// Nominal maximum.
    pub max: f64,
}

impl ComponentDescriptor {
    /// Creates a descriptor.
    pub const fn new(name: &'static str, unit: &'static str, min: f64, max: f64) -> Self {
        assert!(min <= max);
        Self { name, unit, min, max }
    }

    /// Width of the nominal range.
    #[inline]
    pub const fn span(&self) -> f64 {
        self.max - self.min
    }
}
