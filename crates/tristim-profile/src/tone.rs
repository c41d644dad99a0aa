//! Pluggable tone-response (companding) strategy.
//!
//! A profile owns exactly one [`ToneResponse`]; matrix derivation never
//! interacts with it. The two directions follow the compression contract:
//! `transfer` encodes linear light, `transfer_inverse` decodes back.

use tristim_transfer::{gamma, hlg, pq, rec709, srgb};

/// Tone-response function of a working profile.
///
/// Encoding is sign-symmetric: negative linear values (out-of-gamut, or
/// scene-referred below black) encode as the negated curve of their
/// magnitude, so extended-range data round-trips without NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneResponse {
    /// No companding; encoded and linear domains coincide.
    Linear,
    /// Pure power law with the given gamma.
    Gamma(f64),
    /// Piecewise sRGB curve (IEC 61966-2-1).
    Srgb,
    /// Rec.709 camera OETF (ITU-R BT.709).
    Rec709,
    /// SMPTE ST 2084 PQ, normalized so linear 1.0 is the 10,000 cd/m2 peak.
    Pq,
    /// Hybrid Log-Gamma (ITU-R BT.2100).
    Hlg,
}

impl ToneResponse {
    /// Encodes linear light: `transfer(linear) -> encoded`.
    #[inline]
    pub fn transfer(&self, linear: f64) -> f64 {
        signed(linear, |l| match self {
            ToneResponse::Linear => l,
            ToneResponse::Gamma(g) => gamma::gamma_oetf(l, *g),
            ToneResponse::Srgb => srgb::oetf(l),
            ToneResponse::Rec709 => rec709::oetf(l),
            ToneResponse::Pq => pq::oetf(l * pq::L_MAX),
            ToneResponse::Hlg => hlg::oetf(l),
        })
    }

    /// Decodes an encoded value: `transfer_inverse(encoded) -> linear`.
    #[inline]
    pub fn transfer_inverse(&self, encoded: f64) -> f64 {
        signed(encoded, |v| match self {
            ToneResponse::Linear => v,
            ToneResponse::Gamma(g) => gamma::gamma_eotf(v, *g),
            ToneResponse::Srgb => srgb::eotf(v),
            ToneResponse::Rec709 => rec709::eotf(v),
            ToneResponse::Pq => pq::eotf(v) / pq::L_MAX,
            ToneResponse::Hlg => hlg::eotf(v),
        })
    }
}

/// Mirrors a curve around zero: `f(|v|)` with the sign of `v` restored.
#[inline]
fn signed(v: f64, f: impl Fn(f64) -> f64) -> f64 {
    if v < 0.0 { -f(-v) } else { f(v) }
}
