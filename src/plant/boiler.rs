use crate::config::FieldError;

/// Gas boiler covering whatever demand the scheduled sources leave over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boiler {
    /// Fraction of fuel energy converted to heat, in (0, 1].
    pub efficiency: f64,
}

impl Boiler {
    /// Creates a boiler with the given efficiency.
    pub fn new(efficiency: f64) -> Self {
        Self { efficiency }
    }

    /// Heat the boiler must supply after CHP and heat pump output (kWh).
    ///
    /// Surplus from the other sources is not carried anywhere, so the
    /// result is clamped at zero.
    pub fn residual_kwh(demand_kwh: f64, chp_kwh: f64, heat_pump_kwh: f64) -> f64 {
        (demand_kwh - chp_kwh - heat_pump_kwh).max(0.0)
    }

    /// Gas burned to deliver `thermal_kwh` of heat (kWh).
    ///
    /// A non-positive efficiency yields 0 instead of dividing by zero.
    pub fn gas_input_kwh(&self, thermal_kwh: f64) -> f64 {
        if self.efficiency > 0.0 {
            thermal_kwh / self.efficiency
        } else {
            0.0
        }
    }

    pub(crate) fn validate(&self, errors: &mut Vec<FieldError>) {
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            errors.push(FieldError::new(
                "system.boiler_efficiency",
                format!("must be in (0.0, 1.0], got {}", self.efficiency),
            ));
        }
    }
}
