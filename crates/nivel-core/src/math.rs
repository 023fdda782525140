//! Level conversions and coverage factors.
//!
//! All functions use `libm` so they work identically with and without `std`.
//!
//! Levels follow the power-quantity convention throughout: a level L in dB
//! corresponds to the energy 10^(L/10). Minus infinity is a legal level and
//! maps to exactly zero energy, which is what makes energy-domain subtraction
//! and averaging well defined at the "no signal" limit.

use crate::special::erf_inv;

/// Convert a decibel level to the linear energy scale.
///
/// # Arguments
/// * `db` - Level in decibels (may be `-inf`, which maps to 0.0)
///
/// # Returns
/// Energy value 10^(db/10) (e.g., 0 dB → 1.0, 10 dB → 10.0, -10 dB → 0.1)
///
/// # Example
/// ```rust
/// use nivel_core::db_to_energy;
///
/// assert!((db_to_energy(10.0) - 10.0).abs() < 1e-12);
/// assert_eq!(db_to_energy(f64::NEG_INFINITY), 0.0);
/// ```
#[inline]
pub fn db_to_energy(db: f64) -> f64 {
    // 10^(dB/10) = e^(dB * ln(10)/10)
    const FACTOR: f64 = core::f64::consts::LN_10 / 10.0;
    libm::exp(db * FACTOR)
}

/// Convert a linear energy value to a decibel level.
///
/// Zero energy maps to `-inf` rather than being clamped: the statistics and
/// noise-correction code relies on the exact limiting value.
///
/// # Arguments
/// * `energy` - Energy value (non-negative; negative input yields NaN)
///
/// # Returns
/// Level 10·log10(energy) in decibels
///
/// # Example
/// ```rust
/// use nivel_core::energy_to_db;
///
/// assert!((energy_to_db(10.0) - 10.0).abs() < 1e-12);
/// assert_eq!(energy_to_db(0.0), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn energy_to_db(energy: f64) -> f64 {
    10.0 * libm::log10(energy)
}

/// Two-sided Gaussian coverage factor for a confidence percentage.
///
/// Computes k = √2 · erf⁻¹(p/100), the multiplier that turns a standard
/// uncertainty into an expanded uncertainty at the stated confidence level
/// (GUM terminology). Well-known values:
///
/// | confidence (%) | k        |
/// |----------------|----------|
/// | 68.269         | ≈ 1.0    |
/// | 95.0           | ≈ 1.95996|
/// | 99.7           | ≈ 2.96774|
///
/// # Arguments
/// * `confidence_percent` - Confidence level in percent, in (0, 100].
///   100 yields `+inf` (the full-coverage limit). Callers validate range;
///   this function only evaluates the formula.
#[inline]
pub fn coverage_factor(confidence_percent: f64) -> f64 {
    core::f64::consts::SQRT_2 * erf_inv(confidence_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_to_energy_known_values() {
        assert!((db_to_energy(0.0) - 1.0).abs() < 1e-15);
        assert!((db_to_energy(10.0) - 10.0).abs() < 1e-12);
        assert!((db_to_energy(20.0) - 100.0).abs() < 1e-11);
        assert!((db_to_energy(-10.0) - 0.1).abs() < 1e-14);
    }

    #[test]
    fn db_to_energy_neg_infinity_is_zero() {
        assert_eq!(db_to_energy(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn energy_to_db_known_values() {
        assert!((energy_to_db(1.0) - 0.0).abs() < 1e-15);
        assert!((energy_to_db(100.0) - 20.0).abs() < 1e-12);
        assert!((energy_to_db(0.5) - (-3.0103)).abs() < 1e-4);
    }

    #[test]
    fn energy_to_db_zero_is_neg_infinity() {
        assert_eq!(energy_to_db(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn conversions_round_trip() {
        for &db in &[-87.3, -10.0, 0.0, 3.5, 60.0, 121.9] {
            let back = energy_to_db(db_to_energy(db));
            assert!(
                (back - db).abs() < 1e-10,
                "round trip of {db} dB gave {back}"
            );
        }
    }

    #[test]
    fn coverage_factor_one_sigma() {
        // 68.269% is the two-sided probability within ±1σ
        assert!(
            (coverage_factor(68.269) - 1.0).abs() < 1e-5,
            "k(68.269) = {}",
            coverage_factor(68.269)
        );
    }

    #[test]
    fn coverage_factor_95_percent() {
        assert!(
            (coverage_factor(95.0) - 1.959964).abs() < 1e-5,
            "k(95) = {}",
            coverage_factor(95.0)
        );
    }

    #[test]
    fn coverage_factor_99_7_percent() {
        assert!(
            (coverage_factor(99.7) - 2.967738).abs() < 1e-5,
            "k(99.7) = {}",
            coverage_factor(99.7)
        );
    }

    #[test]
    fn coverage_factor_full_confidence_is_infinite() {
        assert_eq!(coverage_factor(100.0), f64::INFINITY);
    }

    #[test]
    fn coverage_factor_is_monotonic() {
        let mut prev = 0.0;
        for p in [10.0, 30.0, 50.0, 68.269, 90.0, 95.0, 99.0, 99.9] {
            let k = coverage_factor(p);
            assert!(k > prev, "k({p}) = {k} should exceed k at lower confidence");
            prev = k;
        }
    }
}
