/// Heat demand calculation and source allocation.
pub mod calculator;
/// Costs, revenue and emissions derived from a balance.
pub mod economics;
pub mod types;

pub use calculator::{compute_balance, compute_design_balance};
pub use economics::EconomicSummary;
pub use types::{EnergyBalance, SiteConfig};
