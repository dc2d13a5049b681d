//! Color constants and scaling helpers for the TUI.

use ratatui::style::Color;

/// Monthly heat demand bar color.
pub const DEMAND_COLOR: Color = Color::Magenta;
/// Highlighted month bar color.
pub const SELECTED_COLOR: Color = Color::Cyan;
/// CHP figures.
pub const CHP_COLOR: Color = Color::Blue;
/// Heat pump figures.
pub const HEAT_PUMP_COLOR: Color = Color::Green;
/// Boiler figures.
pub const BOILER_COLOR: Color = Color::Yellow;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns a color for an overall efficiency percentage.
pub fn efficiency_color(pct: f64) -> Color {
    if pct >= 90.0 {
        Color::Green
    } else if pct >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Converts an energy value to a bar height, negative demand drawn as 0.
pub fn bar_value(kwh: f64) -> u64 {
    if kwh.is_finite() && kwh > 0.0 {
        kwh.round() as u64
    } else {
        0
    }
}
