//! Background-noise correction and noise-induced error.
//!
//! Two independent transforms:
//!
//! - [`noise_correction`] removes background-noise energy from a
//!   contaminated level measurement by subtracting in the energy domain.
//! - [`noise_error`] gives the dB bias introduced by uncontrolled noise as
//!   a closed-form function of the measured ratio alone, under either the
//!   SNR or the SNNR convention.
//!
//! Neither transform averages or propagates uncertainty. Callers build a
//! coverage interval for a corrected level by applying [`noise_correction`]
//! three times: to the central estimates, to signal-upper minus noise-lower,
//! and to signal-lower minus noise-upper.

use core::fmt;
use core::str::FromStr;

use nivel_core::{db_to_energy, energy_to_db};

use crate::error::StatsError;

/// Which ratio convention a measured value follows.
///
/// Both conventions describe the same physical situation; they differ in
/// what was actually measured. The string forms accepted by [`FromStr`] are
/// `"snr"` and `"snnr"`; anything else is the fatal
/// [`StatsError::UnknownRatioKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RatioKind {
    /// Signal-to-noise ratio, dB.
    #[default]
    Snr,
    /// Signal-plus-noise-to-noise ratio, dB.
    Snnr,
}

impl FromStr for RatioKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snr" => Ok(RatioKind::Snr),
            "snnr" => Ok(RatioKind::Snnr),
            other => Err(StatsError::UnknownRatioKind(other.to_string())),
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RatioKind::Snr => "snr",
            RatioKind::Snnr => "snnr",
        })
    }
}

/// Correct a single signal-plus-noise level for its noise contamination.
///
/// Computes `10·log10(10^(xn/10) − 10^(n/10))`. Where `xn < n` the result
/// is forced to `-inf`: there is no detectable signal above the noise
/// floor, and a complex or NaN value must never escape. `xn == n` also
/// yields `-inf` (zero remaining energy), and a noise level of `-inf`
/// leaves the signal untouched.
#[inline]
pub fn noise_correction_scalar(xn: f64, n: f64) -> f64 {
    if xn < n {
        f64::NEG_INFINITY
    } else {
        energy_to_db(db_to_energy(xn) - db_to_energy(n))
    }
}

/// Elementwise noise correction over paired level arrays.
///
/// Inputs must have equal lengths, or either side may be a single value
/// which is broadcast against the other. See [`noise_correction_scalar`]
/// for the per-entry contract.
///
/// # Errors
/// [`StatsError::ShapeMismatch`] when the lengths neither match nor
/// broadcast; [`StatsError::EmptyInput`] when either side is empty.
pub fn noise_correction(xn: &[f64], n: &[f64]) -> Result<Vec<f64>, StatsError> {
    broadcast(xn, n)?;
    let len = xn.len().max(n.len());
    let out = (0..len)
        .map(|i| {
            let a = xn[if xn.len() == 1 { 0 } else { i }];
            let b = n[if n.len() == 1 { 0 } else { i }];
            noise_correction_scalar(a, b)
        })
        .collect();
    Ok(out)
}

/// dB bias induced by background noise, for a single ratio.
///
/// - [`RatioKind::Snr`]: `10·log10(1 + 10^(−r/10))`.
/// - [`RatioKind::Snnr`]: `−10·log10(1 − 10^(−r/10))`. As the SNNR
///   approaches 0 dB the bias grows without bound; the `+inf` limit is the
///   correct answer there, never clipped.
#[inline]
pub fn noise_error_scalar(ratio: f64, kind: RatioKind) -> f64 {
    match kind {
        RatioKind::Snr => energy_to_db(1.0 + db_to_energy(-ratio)),
        RatioKind::Snnr => -energy_to_db(1.0 - db_to_energy(-ratio)),
    }
}

/// Elementwise noise-induced error over a ratio array.
pub fn noise_error(ratio: &[f64], kind: RatioKind) -> Vec<f64> {
    ratio
        .iter()
        .map(|&r| noise_error_scalar(r, kind))
        .collect()
}

/// Shape check for a broadcastable pair: equal lengths, or either side of
/// length 1.
fn broadcast(left: &[f64], right: &[f64]) -> Result<(), StatsError> {
    if left.is_empty() || right.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if left.len() == right.len() || left.len() == 1 || right.len() == 1 {
        Ok(())
    } else {
        Err(StatsError::ShapeMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}
