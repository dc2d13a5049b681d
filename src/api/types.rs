//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::balance::{EconomicSummary, EnergyBalance, SiteConfig};
use crate::forecast::{ForecastResult, MonthlyBalance};

/// Site name and configuration.
#[derive(Debug, Serialize)]
pub struct SiteResponse {
    /// Display name of the site.
    pub name: String,
    /// Site configuration.
    pub site: SiteConfig,
}

/// Balance for a single period together with its derived economics.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Outdoor temperature the balance was computed at (°C).
    pub outdoor_temp_c: f64,
    /// Energy balance.
    pub balance: EnergyBalance,
    /// Costs, revenue, emissions and efficiency.
    pub economics: EconomicSummary,
}

impl BalanceResponse {
    /// Pairs a balance with economics derived from `site`.
    pub fn new(outdoor_temp_c: f64, balance: EnergyBalance, site: &SiteConfig) -> Self {
        Self {
            outdoor_temp_c,
            balance,
            economics: balance.economics(site),
        }
    }
}

/// Monthly forecast with totals and total economics.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    /// One record per month, in calendar order.
    pub months: Vec<MonthlyBalance>,
    /// Element-wise total of all months.
    pub total: EnergyBalance,
    /// Economics of the total.
    pub total_economics: EconomicSummary,
}

impl ForecastResponse {
    /// Builds the response from a forecast computed for `site`.
    pub fn new(forecast: ForecastResult, site: &SiteConfig) -> Self {
        let total_economics = forecast.total.economics(site);
        Self {
            months: forecast.months,
            total: forecast.total,
            total_economics,
        }
    }
}

/// Optional query parameters for the balance endpoint.
#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    /// Outdoor temperature (°C); defaults to the site's design temperature.
    pub outdoor_temp_c: Option<f64>,
    /// Period length in days; defaults to 1.
    pub period_days: Option<u32>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
