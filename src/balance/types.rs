//! Core balance types: site parameters in, period energy balance out.

use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

use serde::Serialize;

use crate::config::{ConfigError, FieldError};
use crate::plant::types::check_non_negative;
use crate::plant::{Boiler, ChpSpec, HeatPumpSpec};

/// Building, plant and tariff parameters for one site.
///
/// Built once per request (from a TOML file, a preset or an API caller) and
/// never mutated by the calculator. Run [`SiteConfig::validate`] at the
/// boundary; the calculation functions assume a valid value.
///
/// # Examples
///
/// ```
/// use district_heat::balance::types::SiteConfig;
///
/// let site = SiteConfig::new(1000.0, 0.2, 20.0, 0.0);
/// assert!(site.validate().is_ok());
/// assert!(site.chp.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Heated floor area (m², > 0).
    pub floor_area_m2: f64,
    /// Envelope heat-transfer coefficient (W/m²K, > 0).
    pub u_value_w_per_m2k: f64,
    /// Indoor design temperature (°C).
    pub indoor_temp_c: f64,
    /// Outdoor design temperature (°C); replaced per month when forecasting.
    pub outdoor_temp_c: f64,
    /// Distribution-loss markup applied to demand (0.0 to 1.0).
    pub system_loss_fraction: f64,
    /// Boiler efficiency (0.0 exclusive to 1.0).
    pub boiler_efficiency: f64,
    /// Emissions per kWh of boiler gas (kg CO₂/kWh).
    pub co2_factor_kg_per_kwh: f64,
    /// Electricity price per kWh.
    pub elec_price_per_kwh: f64,
    /// Gas price per kWh.
    pub gas_price_per_kwh: f64,
    /// CHP unit, if installed.
    pub chp: Option<ChpSpec>,
    /// Heat pump, if installed.
    pub heat_pump: Option<HeatPumpSpec>,
}

impl SiteConfig {
    /// Default boiler efficiency.
    pub const DEFAULT_BOILER_EFFICIENCY: f64 = 0.85;
    /// Default distribution loss.
    pub const DEFAULT_SYSTEM_LOSS: f64 = 0.5;
    /// Default emissions factor (kg CO₂/kWh gas).
    pub const DEFAULT_CO2_FACTOR: f64 = 0.23;
    /// Default electricity price per kWh.
    pub const DEFAULT_ELEC_PRICE: f64 = 0.25;
    /// Default gas price per kWh.
    pub const DEFAULT_GAS_PRICE: f64 = 0.08;

    /// Creates a boiler-only site with default system and tariff parameters.
    ///
    /// # Arguments
    ///
    /// * `floor_area_m2` - Heated floor area (m²)
    /// * `u_value_w_per_m2k` - Envelope U-value (W/m²K)
    /// * `indoor_temp_c` - Indoor design temperature (°C)
    /// * `outdoor_temp_c` - Outdoor design temperature (°C)
    pub fn new(
        floor_area_m2: f64,
        u_value_w_per_m2k: f64,
        indoor_temp_c: f64,
        outdoor_temp_c: f64,
    ) -> Self {
        Self {
            floor_area_m2,
            u_value_w_per_m2k,
            indoor_temp_c,
            outdoor_temp_c,
            system_loss_fraction: Self::DEFAULT_SYSTEM_LOSS,
            boiler_efficiency: Self::DEFAULT_BOILER_EFFICIENCY,
            co2_factor_kg_per_kwh: Self::DEFAULT_CO2_FACTOR,
            elec_price_per_kwh: Self::DEFAULT_ELEC_PRICE,
            gas_price_per_kwh: Self::DEFAULT_GAS_PRICE,
            chp: None,
            heat_pump: None,
        }
    }

    /// Returns a copy with the given CHP unit installed.
    pub fn with_chp(self, chp: ChpSpec) -> Self {
        Self {
            chp: Some(chp),
            ..self
        }
    }

    /// Returns a copy with the given heat pump installed.
    pub fn with_heat_pump(self, heat_pump: HeatPumpSpec) -> Self {
        Self {
            heat_pump: Some(heat_pump),
            ..self
        }
    }

    /// The site's boiler.
    pub fn boiler(&self) -> Boiler {
        Boiler::new(self.boiler_efficiency)
    }

    /// Collects every constraint violation, keyed by dotted field path.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.floor_area_m2.is_nan() || self.floor_area_m2 <= 0.0 {
            errors.push(FieldError::new("building.floor_area_m2", "must be > 0"));
        }
        if self.u_value_w_per_m2k.is_nan() || self.u_value_w_per_m2k <= 0.0 {
            errors.push(FieldError::new("building.u_value_w_per_m2k", "must be > 0"));
        }
        for (field, value) in [
            ("building.indoor_temp_c", self.indoor_temp_c),
            ("building.outdoor_temp_c", self.outdoor_temp_c),
        ] {
            if !value.is_finite() {
                let message = format!("must be finite, got {value}");
                errors.push(FieldError::new(field, message));
            }
        }
        if !(0.0..=1.0).contains(&self.system_loss_fraction) {
            errors.push(FieldError::new(
                "system.system_loss_fraction",
                format!("must be in [0.0, 1.0], got {}", self.system_loss_fraction),
            ));
        }
        self.boiler().validate(&mut errors);

        check_non_negative(
            "tariffs.co2_factor_kg_per_kwh".into(),
            self.co2_factor_kg_per_kwh,
            &mut errors,
        );
        check_non_negative(
            "tariffs.elec_price_per_kwh".into(),
            self.elec_price_per_kwh,
            &mut errors,
        );
        check_non_negative(
            "tariffs.gas_price_per_kwh".into(),
            self.gas_price_per_kwh,
            &mut errors,
        );

        if let Some(chp) = &self.chp {
            chp.validate(&mut errors);
        }
        if let Some(hp) = &self.heat_pump {
            hp.validate(&mut errors);
        }

        errors
    }

    /// Checks all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] listing every violated
    /// constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InvalidConfiguration(errors))
        }
    }
}

/// Heat demand and its allocation across sources for one period.
///
/// Produced by [`compute_balance`](super::calculator::compute_balance).
/// Costs, revenue and emissions are not stored; derive them with
/// [`EnergyBalance::economics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EnergyBalance {
    /// Length of the evaluated period (days).
    pub period_days: u32,
    /// Gross heat demand including distribution losses (kWh).
    ///
    /// Negative when the outdoor temperature exceeds the indoor one.
    pub heat_demand_kwh: f64,
    /// Heat delivered by the CHP unit (kWh, 0 if not installed).
    pub chp_thermal_kwh: f64,
    /// Heat delivered by the heat pump (kWh, 0 if not installed).
    pub heat_pump_thermal_kwh: f64,
    /// Residual heat supplied by the boiler (kWh, never negative).
    pub boiler_thermal_kwh: f64,
    /// Gas burned by the boiler (kWh).
    pub boiler_gas_input_kwh: f64,
}

impl EnergyBalance {
    /// Heat from CHP and heat pump beyond the demand (kWh).
    ///
    /// This energy is produced but has no sink inside the balance.
    pub fn surplus_kwh(&self) -> f64 {
        (self.chp_thermal_kwh + self.heat_pump_thermal_kwh - self.heat_demand_kwh).max(0.0)
    }
}

impl AddAssign<&EnergyBalance> for EnergyBalance {
    fn add_assign(&mut self, rhs: &EnergyBalance) {
        self.period_days += rhs.period_days;
        self.heat_demand_kwh += rhs.heat_demand_kwh;
        self.chp_thermal_kwh += rhs.chp_thermal_kwh;
        self.heat_pump_thermal_kwh += rhs.heat_pump_thermal_kwh;
        self.boiler_thermal_kwh += rhs.boiler_thermal_kwh;
        self.boiler_gas_input_kwh += rhs.boiler_gas_input_kwh;
    }
}

impl<'a> Sum<&'a EnergyBalance> for EnergyBalance {
    fn sum<I: Iterator<Item = &'a EnergyBalance>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, b| {
            acc += b;
            acc
        })
    }
}

impl fmt::Display for EnergyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} d | demand={:>11.2} kWh | chp={:>10.2}  hp={:>10.2}  \
             boiler={:>10.2} kWh | gas={:>10.2} kWh",
            self.period_days,
            self.heat_demand_kwh,
            self.chp_thermal_kwh,
            self.heat_pump_thermal_kwh,
            self.boiler_thermal_kwh,
            self.boiler_gas_input_kwh,
        )
    }
}
