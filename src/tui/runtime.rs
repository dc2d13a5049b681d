//! Dashboard application state.

use tracing::warn;

use crate::balance::{EconomicSummary, EnergyBalance, SiteConfig, compute_design_balance};
use crate::config::{ConfigError, SiteFile};
use crate::forecast::{ForecastResult, MonthlyBalance, generate_default_forecast};

/// TUI application state.
///
/// Everything shown is recomputed from a fresh `SiteConfig` whenever the
/// site changes; nothing is updated incrementally.
pub struct App {
    /// Name of the active preset, or `"file"` for a loaded site file.
    pub preset_name: String,
    /// Display name of the site.
    pub site_name: String,
    /// Validated site configuration.
    pub site: SiteConfig,
    /// One-day balance at the design outdoor temperature.
    pub daily: EnergyBalance,
    /// Economics of the daily balance.
    pub economics: EconomicSummary,
    /// Monthly forecast over the default climate profile.
    pub forecast: ForecastResult,
    /// Index of the highlighted month.
    pub selected_month: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates a new app from a preset name.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset is unknown or invalid.
    pub fn new(preset: &str) -> Result<Self, ConfigError> {
        Self::from_site_file(&SiteFile::from_preset(preset)?, preset)
    }

    /// Creates a new app from an already parsed site file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the site is invalid.
    pub fn from_site_file(file: &SiteFile, preset_name: &str) -> Result<Self, ConfigError> {
        let site = file.build()?;
        let daily = compute_design_balance(&site, 1);
        Ok(Self {
            preset_name: preset_name.to_string(),
            site_name: file.name.clone(),
            economics: daily.economics(&site),
            forecast: generate_default_forecast(&site),
            daily,
            site,
            selected_month: 0,
            quit: false,
        })
    }

    /// Switches to a different preset, keeping the current one on failure.
    pub fn switch_preset(&mut self, name: &str) {
        match Self::new(name) {
            Ok(app) => *self = app,
            Err(e) => warn!(preset = name, error = %e, "preset switch skipped"),
        }
    }

    /// Highlights the next month, wrapping after the last one.
    pub fn next_month(&mut self) {
        if !self.forecast.is_empty() {
            self.selected_month = (self.selected_month + 1) % self.forecast.len();
        }
    }

    /// Highlights the previous month, wrapping before the first one.
    pub fn prev_month(&mut self) {
        if !self.forecast.is_empty() {
            let len = self.forecast.len();
            self.selected_month = (self.selected_month + len - 1) % len;
        }
    }

    /// The highlighted month, if the forecast is not empty.
    pub fn selected(&self) -> Option<&MonthlyBalance> {
        self.forecast.months.get(self.selected_month)
    }
}
