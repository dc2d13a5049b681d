//! Common traits and helpers for heat generation components.

use crate::config::FieldError;

/// Hours in a day, the upper bound for any generator's run time.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Trait implemented by every scheduled heat source (CHP, heat pump).
///
/// A source runs at its rated thermal output for a fixed number of hours
/// per day. Output is never curtailed to match demand: whatever a source
/// produces is attributed to it, and the boiler covers the rest.
pub trait HeatSource {
    /// Rated thermal output (kW).
    fn thermal_kw(&self) -> f64;

    /// Daily run time (hours, 0 to 24).
    fn hours_per_day(&self) -> f64;

    /// Thermal energy delivered over `period_days` days (kWh).
    ///
    /// # Arguments
    ///
    /// * `period_days` - Length of the evaluated period in days
    ///
    /// # Returns
    ///
    /// Thermal energy in kilowatt-hours
    fn thermal_kwh(&self, period_days: u32) -> f64 {
        self.thermal_kw() * self.hours_per_day() * f64::from(period_days)
    }
}

/// Thermal energy of an optional source, zero when it is not installed.
pub fn installed_thermal_kwh<S: HeatSource>(source: Option<&S>, period_days: u32) -> f64 {
    source.map_or(0.0, |s| s.thermal_kwh(period_days))
}

/// Pushes an error unless `hours` lies in `[0, 24]`.
pub(crate) fn check_hours(section: &str, hours: f64, errors: &mut Vec<FieldError>) {
    if !(0.0..=HOURS_PER_DAY).contains(&hours) {
        errors.push(FieldError::new(
            format!("{section}.hours_per_day"),
            format!("must be in [0, 24], got {hours}"),
        ));
    }
}

/// Pushes an error when `value` is negative (or NaN).
pub(crate) fn check_non_negative(field: String, value: f64, errors: &mut Vec<FieldError>) {
    if value.is_nan() || value < 0.0 {
        errors.push(FieldError::new(field, format!("must be >= 0, got {value}")));
    }
}
