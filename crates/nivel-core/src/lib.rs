//! Nivel Core - numeric primitives for decibel-level statistics
//!
//! This crate provides the leaf-level numerics that the `nivel-stats`
//! transforms are built on. It owns every special-function evaluation so the
//! statistics logic never touches a math backend directly.
//!
//! # Level Conversions
//!
//! - [`db_to_energy`] / [`energy_to_db`] - Convert between dB levels and the
//!   linear energy scale (the `10 log10` convention for power quantities)
//!
//! # Special Functions
//!
//! - [`erf_inv`] - Inverse error function, double-precision accurate
//! - [`ln_gamma`] - Natural log of the gamma function (Lanczos)
//! - [`gamma_ratio`] - Γ(a)/Γ(b) evaluated in the log domain
//!
//! # Coverage Factors
//!
//! - [`coverage_factor`] - Two-sided Gaussian coverage factor k for a
//!   confidence percentage, k = √2 · erf⁻¹(p/100) (GUM expanded-uncertainty
//!   convention)
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! nivel-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod math;
pub mod special;

// Re-export main functions at crate root
pub use math::{coverage_factor, db_to_energy, energy_to_db};
pub use special::{erf_inv, gamma_ratio, ln_gamma};
