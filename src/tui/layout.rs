//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Length(10), // summary panels
            Constraint::Min(10),    // monthly chart
            Constraint::Length(1),  // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_daily_summary(frame, app, panels[0]);
    render_selected_month(frame, app, panels[1]);

    render_chart(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: site name and preset.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " DISTRICT HEATING ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.site_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ preset={} │ design outdoor {:.1} °C ",
            app.preset_name, app.site.outdoor_temp_c
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Daily output summary at the design temperature.
fn render_daily_summary(frame: &mut Frame, app: &App, area: Rect) {
    let d = &app.daily;
    let e = &app.economics;
    let lines = vec![
        Line::from(format!(
            "  Total heat demand  {:>10.2} kWh/day",
            d.heat_demand_kwh
        )),
        Line::from(Span::styled(
            format!("  CHP thermal        {:>10.2} kWh", d.chp_thermal_kwh),
            Style::default().fg(style::CHP_COLOR),
        )),
        Line::from(Span::styled(
            format!("  HP thermal         {:>10.2} kWh", d.heat_pump_thermal_kwh),
            Style::default().fg(style::HEAT_PUMP_COLOR),
        )),
        Line::from(Span::styled(
            format!("  Boiler thermal     {:>10.2} kWh", d.boiler_thermal_kwh),
            Style::default().fg(style::BOILER_COLOR),
        )),
        Line::from(format!(
            "  Boiler gas input   {:>10.2} kWh",
            d.boiler_gas_input_kwh
        )),
        Line::from(format!(
            "  CO2 emissions      {:>10.2} kg",
            e.co2_emissions_kg
        )),
        Line::from(format!("  Net cost           {:>10.2}", e.net_cost())),
        Line::from(Span::styled(
            format!("  Overall efficiency {:>10.1} %", e.overall_efficiency_pct),
            Style::default()
                .fg(style::efficiency_color(e.overall_efficiency_pct)),
        )),
    ];

    let block = Block::default()
        .title(" Output Summary (1 day) ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Figures for the highlighted month.
fn render_selected_month(frame: &mut Frame, app: &App, area: Rect) {
    let lines = if let Some(m) = app.selected() {
        let b = &m.balance;
        vec![
            Line::from(format!(
                "  {} │ {:.1} °C │ {} days",
                m.month.name, m.month.mean_outdoor_temp_c, m.month.days_in_month
            )),
            Line::from(format!("  Heating  {:>12.0} kWh", b.heat_demand_kwh)),
            Line::from(format!("  CHP      {:>12.0} kWh", b.chp_thermal_kwh)),
            Line::from(format!("  HP       {:>12.0} kWh", b.heat_pump_thermal_kwh)),
            Line::from(format!("  Boiler   {:>12.0} kWh", b.boiler_thermal_kwh)),
            Line::from(format!("  Gas      {:>12.0} kWh", b.boiler_gas_input_kwh)),
            Line::from(format!(
                "  Year     {:>12.0} kWh heating",
                app.forecast.total.heat_demand_kwh
            )),
        ]
    } else {
        vec![Line::from("  No months in forecast")]
    };

    let block = Block::default()
        .title(" Selected Month ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Monthly heat demand bar chart with the selected month highlighted.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let bars: Vec<Bar> = app
        .forecast
        .months
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let color = if i == app.selected_month {
                style::SELECTED_COLOR
            } else {
                style::DEMAND_COLOR
            };
            Bar::default()
                .value(style::bar_value(m.balance.heat_demand_kwh))
                .label(Line::from(m.month.name))
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Monthly Heating Forecast (kWh) ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ←/→:Month  1:Barnwell  2:Custom",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
