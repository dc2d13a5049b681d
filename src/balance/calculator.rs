//! Per-period heat demand and source allocation.

use crate::plant::Boiler;
use crate::plant::types::{HOURS_PER_DAY, installed_thermal_kwh};

use super::types::{EnergyBalance, SiteConfig};

/// Watt-hours per kilowatt-hour.
const WH_PER_KWH: f64 = 1000.0;

/// Gross heat demand of the site over `period_days` days (kWh).
///
/// Envelope losses at the given outdoor temperature, marked up by the
/// distribution loss. Not clamped: an outdoor temperature above the indoor
/// one yields a negative demand.
pub fn heat_demand_kwh(config: &SiteConfig, outdoor_temp_c: f64, period_days: u32) -> f64 {
    config.u_value_w_per_m2k
        * config.floor_area_m2
        * (config.indoor_temp_c - outdoor_temp_c)
        * HOURS_PER_DAY
        / WH_PER_KWH
        * (1.0 + config.system_loss_fraction)
        * f64::from(period_days)
}

/// Computes the energy balance of a site for one period.
///
/// Demand is allocated in fixed priority order: CHP output first, then the
/// heat pump, and the boiler covers the residual. CHP and heat pump run
/// their scheduled hours regardless of demand.
///
/// # Arguments
///
/// * `config` - Validated site configuration
/// * `outdoor_temp_c` - Mean outdoor temperature for the period (°C)
/// * `period_days` - Length of the period in days (expected >= 1)
///
/// # Returns
///
/// The `EnergyBalance` for the period. Never fails for any numeric input.
///
/// # Examples
///
/// ```
/// use district_heat::balance::compute_balance;
/// use district_heat::balance::types::SiteConfig;
///
/// let site = SiteConfig::new(1000.0, 0.5, 20.0, 10.0);
/// let b = compute_balance(&site, 10.0, 1);
/// assert!((b.heat_demand_kwh - 180.0).abs() < 1e-9);
/// assert_eq!(b.boiler_thermal_kwh, b.heat_demand_kwh);
/// ```
pub fn compute_balance(
    config: &SiteConfig,
    outdoor_temp_c: f64,
    period_days: u32,
) -> EnergyBalance {
    let heat_demand_kwh = heat_demand_kwh(config, outdoor_temp_c, period_days);
    let chp_thermal_kwh = installed_thermal_kwh(config.chp.as_ref(), period_days);
    let heat_pump_thermal_kwh = installed_thermal_kwh(config.heat_pump.as_ref(), period_days);
    let boiler_thermal_kwh =
        Boiler::residual_kwh(heat_demand_kwh, chp_thermal_kwh, heat_pump_thermal_kwh);
    let boiler_gas_input_kwh = config.boiler().gas_input_kwh(boiler_thermal_kwh);

    EnergyBalance {
        period_days,
        heat_demand_kwh,
        chp_thermal_kwh,
        heat_pump_thermal_kwh,
        boiler_thermal_kwh,
        boiler_gas_input_kwh,
    }
}

/// Energy balance at the site's own design outdoor temperature.
pub fn compute_design_balance(config: &SiteConfig, period_days: u32) -> EnergyBalance {
    compute_balance(config, config.outdoor_temp_c, period_days)
}
