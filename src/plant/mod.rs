//! Heat generation components: CHP, heat pump and boiler.

/// Fallback gas boiler.
pub mod boiler;
/// Combined heat and power unit.
pub mod chp;
/// Electric heat pump.
pub mod heat_pump;
pub mod types;

// Re-export the main types for convenience
pub use boiler::Boiler;
pub use chp::ChpSpec;
pub use heat_pump::HeatPumpSpec;
pub use types::HeatSource;
