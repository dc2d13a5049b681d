use serde::{Deserialize, Serialize};

use crate::config::FieldError;
use crate::plant::types::{HeatSource, check_hours, check_non_negative};

/// An electrically driven heat pump.
///
/// The coefficient of performance does not change the heat delivered; it
/// only determines how much electricity the pump draws for that heat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatPumpSpec {
    /// Rated thermal output (kW).
    pub thermal_kw: f64,
    /// Daily run time (hours, 0 to 24).
    pub hours_per_day: f64,
    /// Heat out per unit of electricity in (must be >= 1).
    pub coefficient_of_performance: f64,
}

impl Default for HeatPumpSpec {
    fn default() -> Self {
        Self {
            thermal_kw: 0.0,
            hours_per_day: 0.0,
            coefficient_of_performance: 1.0,
        }
    }
}

impl HeatPumpSpec {
    /// Creates a heat pump.
    pub fn new(thermal_kw: f64, hours_per_day: f64, coefficient_of_performance: f64) -> Self {
        Self {
            thermal_kw,
            hours_per_day,
            coefficient_of_performance,
        }
    }

    /// Electricity drawn over `period_days` days (kWh).
    ///
    /// Returns 0 for a non-positive COP so that unvalidated input cannot
    /// divide by zero.
    pub fn electrical_input_kwh(&self, period_days: u32) -> f64 {
        if self.coefficient_of_performance > 0.0 {
            self.thermal_kwh(period_days) / self.coefficient_of_performance
        } else {
            0.0
        }
    }

    pub(crate) fn validate(&self, errors: &mut Vec<FieldError>) {
        check_non_negative("heat_pump.thermal_kw".into(), self.thermal_kw, errors);
        check_hours("heat_pump", self.hours_per_day, errors);
        if self.coefficient_of_performance.is_nan() || self.coefficient_of_performance < 1.0 {
            errors.push(FieldError::new(
                "heat_pump.coefficient_of_performance",
                format!("must be >= 1, got {}", self.coefficient_of_performance),
            ));
        }
    }
}

impl HeatSource for HeatPumpSpec {
    fn thermal_kw(&self) -> f64 {
        self.thermal_kw
    }

    fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cop_does_not_reduce_heat_output() {
        let low = HeatPumpSpec::new(60.0, 9.0, 1.0);
        let high = HeatPumpSpec::new(60.0, 9.0, 4.0);
        assert_eq!(low.thermal_kwh(1), 540.0);
        assert_eq!(high.thermal_kwh(1), 540.0);
    }

    #[test]
    fn electrical_input_is_heat_over_cop() {
        let hp = HeatPumpSpec::new(60.0, 9.0, 4.0);
        assert_eq!(hp.electrical_input_kwh(1), 135.0);
        assert_eq!(hp.electrical_input_kwh(30), 4050.0);
    }

    #[test]
    fn zero_cop_draws_nothing() {
        let hp = HeatPumpSpec::new(60.0, 9.0, 0.0);
        assert_eq!(hp.electrical_input_kwh(1), 0.0);
    }

    #[test]
    fn cop_below_one_is_rejected() {
        let mut errors = Vec::new();
        HeatPumpSpec::new(60.0, 9.0, 0.8).validate(&mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "heat_pump.coefficient_of_performance");

        errors.clear();
        HeatPumpSpec::new(60.0, 9.0, 1.0).validate(&mut errors);
        assert!(errors.is_empty());
    }
}
