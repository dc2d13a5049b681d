//! Monthly heat forecast over a fixed annual climate profile.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::balance::{EnergyBalance, SiteConfig, compute_balance};

/// One month of the climate profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthProfile {
    /// Short month name.
    pub name: &'static str,
    /// Mean outdoor temperature (°C).
    pub mean_outdoor_temp_c: f64,
    /// Number of days in the month.
    pub days_in_month: u32,
}

impl MonthProfile {
    /// Creates a month profile entry.
    pub const fn new(name: &'static str, mean_outdoor_temp_c: f64, days_in_month: u32) -> Self {
        Self {
            name,
            mean_outdoor_temp_c,
            days_in_month,
        }
    }
}

/// Temperate-climate annual cycle, January to December, non-leap year.
pub const DEFAULT_MONTHS: [MonthProfile; 12] = [
    MonthProfile::new("Jan", 5.0, 31),
    MonthProfile::new("Feb", 5.5, 28),
    MonthProfile::new("Mar", 7.0, 31),
    MonthProfile::new("Apr", 9.0, 30),
    MonthProfile::new("May", 11.0, 31),
    MonthProfile::new("Jun", 13.5, 30),
    MonthProfile::new("Jul", 15.0, 31),
    MonthProfile::new("Aug", 15.0, 31),
    MonthProfile::new("Sep", 13.0, 30),
    MonthProfile::new("Oct", 10.0, 31),
    MonthProfile::new("Nov", 7.0, 30),
    MonthProfile::new("Dec", 5.5, 31),
];

/// Balance for one month of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyBalance {
    /// The month this balance was computed for.
    pub month: MonthProfile,
    /// Energy balance over the whole month.
    pub balance: EnergyBalance,
}

/// Monthly balances in profile order plus their element-wise total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// One entry per month, in the order of the input profile.
    pub months: Vec<MonthlyBalance>,
    /// Sum of all monthly balances.
    pub total: EnergyBalance,
}

impl ForecastResult {
    /// Number of months in the forecast.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns `true` if the forecast has no months.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Iterates `(month name, balance)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &EnergyBalance)> {
        self.months.iter().map(|m| (m.month.name, &m.balance))
    }

    /// Looks up a month by name.
    pub fn month(&self, name: &str) -> Option<&MonthlyBalance> {
        self.months.iter().find(|m| m.month.name == name)
    }

    /// Month with the highest heat demand, first one wins on ties.
    pub fn peak_demand_month(&self) -> Option<&MonthlyBalance> {
        self.months.iter().reduce(|best, m| {
            if m.balance.heat_demand_kwh > best.balance.heat_demand_kwh {
                m
            } else {
                best
            }
        })
    }
}

impl fmt::Display for ForecastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<5} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "Month", "Temp", "Heating", "CHP", "HP", "Boiler", "Gas"
        )?;
        for m in &self.months {
            writeln!(
                f,
                "{:<5} {:>6.1} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0}",
                m.month.name,
                m.month.mean_outdoor_temp_c,
                m.balance.heat_demand_kwh,
                m.balance.chp_thermal_kwh,
                m.balance.heat_pump_thermal_kwh,
                m.balance.boiler_thermal_kwh,
                m.balance.boiler_gas_input_kwh,
            )?;
        }
        write!(
            f,
            "{:<5} {:>6} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0}",
            "Total",
            "",
            self.total.heat_demand_kwh,
            self.total.chp_thermal_kwh,
            self.total.heat_pump_thermal_kwh,
            self.total.boiler_thermal_kwh,
            self.total.boiler_gas_input_kwh,
        )
    }
}

/// Projects the site's balance over the given month profile.
///
/// Calls [`compute_balance`] once per month with that month's mean
/// temperature and day count. Output order matches `months`; no sorting or
/// deduplication. Identical input always yields identical output.
///
/// # Arguments
///
/// * `config` - Validated site configuration
/// * `months` - Climate profile, usually [`DEFAULT_MONTHS`]
///
/// # Returns
///
/// A `ForecastResult` with one entry per month and the period total.
pub fn generate_forecast(config: &SiteConfig, months: &[MonthProfile]) -> ForecastResult {
    let months: Vec<MonthlyBalance> = months
        .iter()
        .map(|month| {
            let balance = compute_balance(config, month.mean_outdoor_temp_c, month.days_in_month);
            debug!(
                month = month.name,
                demand_kwh = balance.heat_demand_kwh,
                boiler_kwh = balance.boiler_thermal_kwh,
                "month computed"
            );
            MonthlyBalance {
                month: *month,
                balance,
            }
        })
        .collect();
    let total: EnergyBalance = months.iter().map(|m| &m.balance).sum();

    ForecastResult { months, total }
}

/// Projects the site's balance over [`DEFAULT_MONTHS`].
pub fn generate_default_forecast(config: &SiteConfig) -> ForecastResult {
    generate_forecast(config, &DEFAULT_MONTHS)
}
