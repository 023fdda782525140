//! Level-statistics engine.
//!
//! Computes per-row mean and standard deviation of repeated dB observations
//! together with their expanded uncertainties, under one of three estimation
//! methods:
//!
//! - [`Method::Level`] - statistics taken directly in the dB domain. The
//!   statistically simple baseline; physically naive for incoherent sound
//!   energy, retained for comparison and legacy compatibility.
//! - [`Method::Energy1`] - moments taken in the energy domain, spread mapped
//!   back to dB by first-order (GUM linear) propagation. Accurate only while
//!   the relative energy spread is small.
//! - [`Method::Energy2`] (default) - energy-domain moments with the
//!   finite-difference mapping `10·log10(1 + σw/w̄)`, which stays faithful to
//!   the log scale at large spread (Taraldsen et al. 2015).
//!
//! Expanded uncertainties scale the standard error by the coverage factor
//! derived from the requested confidence percentage.

use core::fmt;
use core::str::FromStr;

use nivel_core::{coverage_factor, db_to_energy, energy_to_db, gamma_ratio};

use crate::error::StatsError;
use crate::matrix::LevelMatrix;

/// Default confidence percentage: the two-sided probability within ±1σ.
pub const DEFAULT_CONFIDENCE: f64 = 68.269;

/// Estimation method for level statistics.
///
/// A closed enumeration, dispatched once per [`level_stats`] call. The
/// string forms accepted by [`FromStr`] are the legacy tokens `"level"`,
/// `"energy1"` and `"energy2"`; any other token is the fatal
/// [`StatsError::UnknownMethod`] - there is deliberately no silent fallback
/// to a different estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Mean and sample standard deviation directly in the dB domain.
    Level,
    /// Energy-domain moments, linear (first-order) propagation back to dB.
    Energy1,
    /// Energy-domain moments, finite-difference propagation back to dB.
    #[default]
    Energy2,
}

impl FromStr for Method {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level" => Ok(Method::Level),
            "energy1" => Ok(Method::Energy1),
            "energy2" => Ok(Method::Energy2),
            other => Err(StatsError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Method::Level => "level",
            Method::Energy1 => "energy1",
            Method::Energy2 => "energy2",
        };
        f.write_str(token)
    }
}

/// Per-call configuration for [`level_stats`].
///
/// Plain value type with documented defaults; there is no module-level
/// state. An out-of-range `confidence` is not fatal: the call logs a
/// warning and proceeds with [`DEFAULT_CONFIDENCE`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsConfig {
    /// Confidence percentage in (0, 100]. Default 68.269 (k ≈ 1).
    pub confidence: f64,
    /// Estimation method. Default [`Method::Energy2`].
    pub method: Method,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            method: Method::default(),
        }
    }
}

impl StatsConfig {
    /// Configuration with the given method and the default confidence.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Configuration with the given confidence and the default method.
    pub fn with_confidence(confidence: f64) -> Self {
        Self {
            confidence,
            ..Self::default()
        }
    }
}

/// Result of [`level_stats`]: one entry per matrix row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelStats {
    /// Mean level per row, dB.
    pub mean: Vec<f64>,
    /// Expanded uncertainty of the mean per row, dB.
    pub u_mean: Vec<f64>,
    /// Standard deviation per row, dB.
    pub std: Vec<f64>,
    /// Expanded uncertainty of the standard deviation per row, dB.
    ///
    /// `Some` only for [`Method::Level`]; the energy methods have no closed
    /// form for it and return `None` rather than a sentinel.
    pub u_std: Option<Vec<f64>>,
}

/// Compute level statistics with expanded uncertainties.
///
/// Each row of `x` is treated as C repeated observations of one independent
/// variable; results are vectors indexed by row. See the module docs for
/// the three estimation methods.
///
/// # Errors
/// [`StatsError::TooFewObservations`] when C < 2: every method relies on a
/// sample standard deviation, which is undefined for a single observation.
/// This is an explicit error, never a silent zero or NaN.
pub fn level_stats(x: &LevelMatrix, config: &StatsConfig) -> Result<LevelStats, StatsError> {
    if x.cols() < 2 {
        return Err(StatsError::TooFewObservations { got: x.cols() });
    }

    let confidence = validate_confidence(config.confidence);
    let k = coverage_factor(confidence);
    let c = x.cols() as f64;

    let rows = x.rows();
    let mut mean = Vec::with_capacity(rows);
    let mut u_mean = Vec::with_capacity(rows);
    let mut std = Vec::with_capacity(rows);

    match config.method {
        Method::Level => {
            // Relative uncertainty of a Gaussian sample standard deviation:
            // √(1 − (2/(C−1))·(Γ(C/2)/Γ((C−1)/2))²). The argument can round
            // a hair below zero for large C.
            let ratio = gamma_ratio(c / 2.0, (c - 1.0) / 2.0);
            let rel_u_std = f64::max(1.0 - (2.0 / (c - 1.0)) * ratio * ratio, 0.0).sqrt();
            let mut u_std = Vec::with_capacity(rows);

            for row in x.iter_rows() {
                let m = arithmetic_mean(row);
                let s = sample_std(row, m);
                mean.push(m);
                u_mean.push(k * s / c.sqrt());
                std.push(s);
                u_std.push(k * s * rel_u_std);
            }

            Ok(LevelStats {
                mean,
                u_mean,
                std,
                u_std: Some(u_std),
            })
        }
        Method::Energy1 | Method::Energy2 => {
            let mut energies = vec![0.0_f64; x.cols()];

            for row in x.iter_rows() {
                for (w, &db) in energies.iter_mut().zip(row) {
                    *w = db_to_energy(db);
                }
                let w_mean = arithmetic_mean(&energies);
                let w_std = sample_std(&energies, w_mean);

                let std_db = match config.method {
                    Method::Energy1 => (10.0 / core::f64::consts::LN_10) * (w_std / w_mean),
                    _ => energy_to_db(1.0 + w_std / w_mean),
                };

                mean.push(energy_to_db(w_mean));
                u_mean.push(k * std_db / c.sqrt());
                std.push(std_db);
            }

            Ok(LevelStats {
                mean,
                u_mean,
                std,
                u_std: None,
            })
        }
    }
}

/// Range-check the confidence percentage, substituting the default on
/// failure. The substitution is a recoverable warning, not an error: the
/// call proceeds exactly as if [`DEFAULT_CONFIDENCE`] had been passed.
fn validate_confidence(confidence: f64) -> f64 {
    if confidence.is_finite() && confidence > 0.0 && confidence <= 100.0 {
        confidence
    } else {
        tracing::warn!(
            rejected = confidence,
            default = DEFAULT_CONFIDENCE,
            "confidence percentage outside (0, 100]; using default"
        );
        DEFAULT_CONFIDENCE
    }
}

fn arithmetic_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample standard deviation (divisor n−1). Caller guarantees
/// n ≥ 2.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() as f64 - 1.0)).sqrt()
}
