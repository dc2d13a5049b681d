//! District heating energy balance and monthly forecast engine.

#[cfg(feature = "api")]
pub mod api;
pub mod balance;
pub mod config;
pub mod forecast;
pub mod io;
pub mod plant;
#[cfg(feature = "tui")]
pub mod tui;
