//! TOML-based site configuration, presets and validation errors.

use std::path::{Path, PathBuf};
use std::{fmt, fs};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::balance::SiteConfig;
use crate::plant::{ChpSpec, HeatPumpSpec};

/// Top-level site file parsed from TOML.
///
/// Every section has defaults matching the "Custom" site. Load from TOML
/// with [`SiteFile::from_toml_file`] or use a preset, then turn it into a
/// validated [`SiteConfig`] with [`SiteFile::build`]. A `[chp]` or
/// `[heat_pump]` table marks that source as installed.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteFile {
    /// Display name of the site.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Building envelope parameters.
    #[serde(default)]
    pub building: BuildingConfig,
    /// Distribution and boiler parameters.
    #[serde(default)]
    pub system: SystemConfig,
    /// Prices and emissions factors.
    #[serde(default)]
    pub tariffs: TariffConfig,
    /// CHP unit, present only if installed.
    #[serde(default)]
    pub chp: Option<ChpSpec>,
    /// Heat pump, present only if installed.
    #[serde(default)]
    pub heat_pump: Option<HeatPumpSpec>,
}

fn default_site_name() -> String {
    "Custom".to_string()
}

/// Building envelope parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingConfig {
    /// Heated floor area (m², must be > 0).
    pub floor_area_m2: f64,
    /// Envelope U-value (W/m²K, must be > 0).
    pub u_value_w_per_m2k: f64,
    /// Indoor design temperature (°C).
    pub indoor_temp_c: f64,
    /// Outdoor design temperature (°C).
    pub outdoor_temp_c: f64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floor_area_m2: 10_000.0,
            u_value_w_per_m2k: 0.15,
            indoor_temp_c: 20.0,
            outdoor_temp_c: 5.0,
        }
    }
}

/// Distribution and boiler parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Distribution loss markup (0.0–1.0).
    pub system_loss_fraction: f64,
    /// Boiler efficiency (0.0 exclusive – 1.0).
    pub boiler_efficiency: f64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            system_loss_fraction: SiteConfig::DEFAULT_SYSTEM_LOSS,
            boiler_efficiency: SiteConfig::DEFAULT_BOILER_EFFICIENCY,
        }
    }
}

/// Prices and emissions factors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// kg CO₂ per kWh of boiler gas.
    pub co2_factor_kg_per_kwh: f64,
    /// Electricity price per kWh.
    pub elec_price_per_kwh: f64,
    /// Gas price per kWh.
    pub gas_price_per_kwh: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            co2_factor_kg_per_kwh: SiteConfig::DEFAULT_CO2_FACTOR,
            elec_price_per_kwh: SiteConfig::DEFAULT_ELEC_PRICE,
            gas_price_per_kwh: SiteConfig::DEFAULT_GAS_PRICE,
        }
    }
}

/// A single violated constraint, keyed by dotted field path.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Dotted field path (e.g., `"building.floor_area_m2"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while loading or validating a site.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The site file could not be read.
    #[error("cannot read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The site file is not valid TOML or has unknown fields.
    #[error("invalid site TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// No preset with this name exists.
    #[error("unknown preset \"{name}\", available: {}", SiteFile::PRESETS.join(", "))]
    UnknownPreset { name: String },
    /// One or more parameters are out of range.
    #[error("invalid configuration: {}", FieldErrors(.0))]
    InvalidConfiguration(Vec<FieldError>),
}

/// Joins field errors with `"; "` for display.
struct FieldErrors<'a>(&'a [FieldError]);

impl fmt::Display for FieldErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl ConfigError {
    /// Field-level errors, empty unless this is a validation failure.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidConfiguration(errors) => errors,
            _ => &[],
        }
    }
}

impl Default for SiteFile {
    fn default() -> Self {
        Self::custom()
    }
}

impl SiteFile {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["barnwell", "custom"];

    /// Returns the generic boiler-only site.
    pub fn custom() -> Self {
        Self {
            name: default_site_name(),
            building: BuildingConfig::default(),
            system: SystemConfig::default(),
            tariffs: TariffConfig::default(),
            chp: None,
            heat_pump: None,
        }
    }

    /// Returns the Barnwell site: large, well-insulated, CHP plus heat pump.
    ///
    /// The CHP is derated to 95% of its nameplate heat, so a design day
    /// yields 636.975 kWh of CHP heat rather than the nameplate 670.5 kWh
    /// (44.7 kW × 15 h). Use [`ChpSpec::with_adjustment`] with `1.0` for
    /// the undiminished figures.
    pub fn barnwell() -> Self {
        Self {
            name: "Barnwell".to_string(),
            building: BuildingConfig {
                floor_area_m2: 22_102.0,
                ..BuildingConfig::default()
            },
            system: SystemConfig::default(),
            tariffs: TariffConfig::default(),
            chp: Some(ChpSpec::new(44.7, 15.0, 19.965, 67.9).with_adjustment(0.95)),
            heat_pump: Some(HeatPumpSpec::new(60.0, 9.0, 4.0)),
        }
    }

    /// Loads a site from a named preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "barnwell" => Ok(Self::barnwell()),
            "custom" => Ok(Self::custom()),
            _ => Err(ConfigError::UnknownPreset {
                name: name.to_string(),
            }),
        }
    }

    /// Parses a site from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let site = Self::from_toml_str(&content)?;
        info!(site = %site.name, path = %path.display(), "site file loaded");
        Ok(site)
    }

    /// Parses a site from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Flattens the sections into an engine-level [`SiteConfig`] without
    /// checking any constraint.
    pub fn to_site_config(&self) -> SiteConfig {
        let b = &self.building;
        SiteConfig {
            floor_area_m2: b.floor_area_m2,
            u_value_w_per_m2k: b.u_value_w_per_m2k,
            indoor_temp_c: b.indoor_temp_c,
            outdoor_temp_c: b.outdoor_temp_c,
            system_loss_fraction: self.system.system_loss_fraction,
            boiler_efficiency: self.system.boiler_efficiency,
            co2_factor_kg_per_kwh: self.tariffs.co2_factor_kg_per_kwh,
            elec_price_per_kwh: self.tariffs.elec_price_per_kwh,
            gas_price_per_kwh: self.tariffs.gas_price_per_kwh,
            chp: self.chp,
            heat_pump: self.heat_pump,
        }
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        self.to_site_config().field_errors()
    }

    /// Builds a validated [`SiteConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] listing every violated
    /// constraint.
    pub fn build(&self) -> Result<SiteConfig, ConfigError> {
        let site = self.to_site_config();
        site.validate()?;
        Ok(site)
    }
}
