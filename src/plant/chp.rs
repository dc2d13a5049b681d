use serde::{Deserialize, Serialize};

use crate::config::FieldError;
use crate::plant::types::{HeatSource, check_hours, check_non_negative};

/// A combined heat and power unit.
///
/// The unit burns gas at `gas_input_kw` while running and delivers both
/// heat and electricity. Thermal output may be derated with
/// `adjustment_fraction`, which defaults to the neutral 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChpSpec {
    /// Rated thermal output (kW).
    pub thermal_kw: f64,
    /// Daily run time (hours, 0 to 24).
    pub hours_per_day: f64,
    /// Thermal derating factor (0.0 to 1.0).
    pub adjustment_fraction: f64,
    /// Electrical output while running (kW).
    pub electrical_kw: f64,
    /// Gas (fuel) input while running (kW).
    pub gas_input_kw: f64,
}

impl Default for ChpSpec {
    fn default() -> Self {
        Self {
            thermal_kw: 0.0,
            hours_per_day: 0.0,
            adjustment_fraction: 1.0,
            electrical_kw: 0.0,
            gas_input_kw: 0.0,
        }
    }
}

impl ChpSpec {
    /// Creates a CHP unit with no thermal derating.
    pub fn new(thermal_kw: f64, hours_per_day: f64, electrical_kw: f64, gas_input_kw: f64) -> Self {
        Self {
            thermal_kw,
            hours_per_day,
            adjustment_fraction: 1.0,
            electrical_kw,
            gas_input_kw,
        }
    }

    /// Returns a copy with the given thermal derating factor.
    pub fn with_adjustment(self, adjustment_fraction: f64) -> Self {
        Self {
            adjustment_fraction,
            ..self
        }
    }

    /// Electricity generated over `period_days` days (kWh).
    pub fn electrical_kwh(&self, period_days: u32) -> f64 {
        self.electrical_kw * self.hours_per_day * f64::from(period_days)
    }

    /// Gas burned over `period_days` days (kWh).
    pub fn gas_input_kwh(&self, period_days: u32) -> f64 {
        self.gas_input_kw * self.hours_per_day * f64::from(period_days)
    }

    pub(crate) fn validate(&self, errors: &mut Vec<FieldError>) {
        check_non_negative("chp.thermal_kw".into(), self.thermal_kw, errors);
        check_hours("chp", self.hours_per_day, errors);
        if !(0.0..=1.0).contains(&self.adjustment_fraction) {
            errors.push(FieldError::new(
                "chp.adjustment_fraction",
                format!("must be in [0.0, 1.0], got {}", self.adjustment_fraction),
            ));
        }
        check_non_negative("chp.electrical_kw".into(), self.electrical_kw, errors);
        check_non_negative("chp.gas_input_kw".into(), self.gas_input_kw, errors);
    }
}

impl HeatSource for ChpSpec {
    fn thermal_kw(&self) -> f64 {
        self.thermal_kw
    }

    fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    fn thermal_kwh(&self, period_days: u32) -> f64 {
        self.thermal_kw * self.hours_per_day * f64::from(period_days) * self.adjustment_fraction
    }
}
