/// Forecast CSV export.
pub mod export;
