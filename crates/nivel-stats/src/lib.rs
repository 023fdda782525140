//! Nivel Stats - level statistics and noise correction for acoustics
//!
//! Statistically rigorous estimates and expanded uncertainties for
//! sound/vibration levels in decibels, following metrology practice (GUM)
//! adapted to the logarithmic scale and to energy-domain averaging
//! (Taraldsen et al. 2015), plus energy-domain background-noise correction.
//!
//! Three pure transforms, none depending on the others at call time:
//!
//! - [`level_stats`] - per-row mean and standard deviation of repeated dB
//!   observations with expanded uncertainties, under a selectable
//!   [`Method`] (dB-domain baseline, or energy-domain averaging with linear
//!   or finite-difference propagation back to dB)
//! - [`noise_correction`] - energy-domain subtraction of a background-noise
//!   level from a signal-plus-noise level
//! - [`noise_error`] - closed-form dB bias as a function of SNR or SNNR
//!
//! # Example
//!
//! Correct a measured level for background noise and attach a coverage
//! interval, composing the statistics engine with the correction transform:
//!
//! ```rust
//! use nivel_stats::{
//!     level_stats, noise_correction_scalar, LevelMatrix, StatsConfig,
//! };
//!
//! let signal = LevelMatrix::from_vector(&[62.1, 61.8, 62.4, 62.0, 61.9])?;
//! let noise = LevelMatrix::from_vector(&[50.3, 50.9, 50.1, 50.6, 50.4])?;
//!
//! let config = StatsConfig::with_confidence(95.0);
//! let s = level_stats(&signal, &config)?;
//! let n = level_stats(&noise, &config)?;
//!
//! // Central estimate and coverage bounds for the corrected level
//! let center = noise_correction_scalar(s.mean[0], n.mean[0]);
//! let upper = noise_correction_scalar(s.mean[0] + s.u_mean[0], n.mean[0] - n.u_mean[0]);
//! let lower = noise_correction_scalar(s.mean[0] - s.u_mean[0], n.mean[0] + n.u_mean[0]);
//! assert!(lower < center && center < upper);
//! # Ok::<(), nivel_stats::StatsError>(())
//! ```
//!
//! # Degenerate values
//!
//! Domain degeneracies are encoded in the output, not raised as errors: a
//! corrected level is `-inf` wherever the noise meets or exceeds the
//! signal-plus-noise level, the SNNR-based bias diverges to `+inf` as the
//! ratio approaches 0 dB, and NaN observations propagate. Validation
//! failures (ragged or empty input, too few observations, unknown method
//! tokens, non-broadcastable shapes) are fatal [`StatsError`]s produced
//! before any computation.

pub mod error;
pub mod matrix;
pub mod noise;
pub mod stats;

// Re-export main types at crate root
pub use error::StatsError;
pub use matrix::LevelMatrix;
pub use noise::{RatioKind, noise_correction, noise_correction_scalar, noise_error, noise_error_scalar};
pub use stats::{DEFAULT_CONFIDENCE, LevelStats, Method, StatsConfig, level_stats};
