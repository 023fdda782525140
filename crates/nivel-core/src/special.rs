//! Special functions: inverse error function and log-gamma.
//!
//! Both are leaf primitives with no state. `erf_inv` starts from Acklam's
//! rational approximation of the normal quantile (absolute error ~1.15e-9)
//! and polishes the result with Newton steps against `libm::erf`, which
//! brings it to full double precision. `ln_gamma` is the standard Lanczos
//! approximation (g = 7, n = 9) with the reflection formula for x < 0.5.

/// Inverse error function.
///
/// Returns x such that erf(x) = y, accurate to better than 1e-14 relative
/// over the open interval. Edge cases follow the limiting values:
/// `erf_inv(1.0) = +inf`, `erf_inv(-1.0) = -inf`, and |y| > 1 or NaN yields
/// NaN.
pub fn erf_inv(y: f64) -> f64 {
    if y.is_nan() || y > 1.0 || y < -1.0 {
        return f64::NAN;
    }
    if y == 1.0 {
        return f64::INFINITY;
    }
    if y == -1.0 {
        return f64::NEG_INFINITY;
    }

    const HALF_SQRT_PI: f64 = 0.8862269254527580;

    // Odd by construction: evaluate on |y|, restore the sign at the end.
    let sign = if y < 0.0 { -1.0 } else { 1.0 };
    let a = y.abs();

    // erf_inv(a) = Φ⁻¹((1+a)/2) / √2
    let mut x = inv_normal_cdf((1.0 + a) * 0.5) * core::f64::consts::FRAC_1_SQRT_2;

    // Newton refinement, f'(x) = (2/√π)·e^(-x²). Near a = 1 the residual
    // must be formed against erfc, where it stays well conditioned; erf
    // itself saturates at 1 and the cancellation would wreck the step.
    if a <= 0.5 {
        for _ in 0..2 {
            let err = libm::erf(x) - a;
            x -= err * HALF_SQRT_PI * libm::exp(x * x);
        }
    } else {
        // Exact by Sterbenz for a >= 0.5
        let q = 1.0 - a;
        // Past x ≈ 26, e^(x²) overflows; q is then below ~1e-300 and the
        // Acklam seed is the best double-precision answer available.
        if x < 26.0 {
            for _ in 0..2 {
                let err = libm::erfc(x) - q;
                x += err * HALF_SQRT_PI * libm::exp(x * x);
            }
        }
    }
    sign * x
}

/// Inverse of the standard normal CDF using the rational approximation
/// from Peter Acklam. Accurate to ~1.15e-9 before refinement.
fn inv_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = libm::sqrt(-2.0 * libm::log(p));
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = libm::sqrt(-2.0 * libm::log(1.0 - p));
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

/// Natural logarithm of the gamma function for x > 0.
///
/// Lanczos approximation (g = 7, n = 9); x < 0.5 goes through the
/// reflection formula Γ(x)·Γ(1-x) = π / sin(πx).
pub fn ln_gamma(x: f64) -> f64 {
    use core::f64::consts::PI;

    if x < 0.5 {
        let reflected = ln_gamma(1.0 - x);
        libm::log(PI / libm::sin(PI * x)) - reflected
    } else {
        const COEFFICIENTS: [f64; 9] = [
            0.99999999999980993,
            676.5203681218851,
            -1259.1392167224028,
            771.32342877765313,
            -176.61502916214059,
            12.507343278686905,
            -0.13857109526572012,
            9.9843695780195716e-6,
            1.5056327351493116e-7,
        ];
        const G: f64 = 7.0;
        let z = x - 1.0;
        let mut ag = COEFFICIENTS[0];
        for (i, &c) in COEFFICIENTS.iter().enumerate().skip(1) {
            ag += c / (z + i as f64);
        }
        let t = z + G + 0.5;
        0.5 * libm::log(2.0 * PI) + (z + 0.5) * libm::log(t) - t + libm::log(ag)
    }
}

/// Γ(a)/Γ(b), evaluated as exp(lnΓ(a) − lnΓ(b)) to avoid overflow of the
/// individual gamma values.
#[inline]
pub fn gamma_ratio(a: f64, b: f64) -> f64 {
    libm::exp(ln_gamma(a) - ln_gamma(b))
}
