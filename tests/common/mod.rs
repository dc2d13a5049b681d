//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use district_heat::balance::SiteConfig;
use district_heat::config::SiteFile;
use district_heat::plant::{ChpSpec, HeatPumpSpec};

/// Absolute tolerance for kWh comparisons.
pub const EPS: f64 = 1e-6;

/// Barnwell as published: CHP output scaled by 0.95.
pub fn barnwell() -> SiteConfig {
    SiteFile::barnwell()
        .build()
        .expect("barnwell preset should be valid")
}

/// Barnwell with the full nameplate CHP output.
pub fn barnwell_unadjusted() -> SiteConfig {
    SiteConfig::new(22_102.0, 0.15, 20.0, 5.0)
        .with_chp(ChpSpec::new(44.7, 15.0, 19.965, 67.9))
        .with_heat_pump(HeatPumpSpec::new(60.0, 9.0, 4.0))
}

/// Small boiler-only site.
pub fn boiler_only() -> SiteConfig {
    SiteConfig::new(1_000.0, 0.5, 20.0, 10.0)
}

/// Asserts two values agree within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
