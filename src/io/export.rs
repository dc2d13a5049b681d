//! CSV export for monthly forecasts.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::balance::{EnergyBalance, SiteConfig};
use crate::forecast::ForecastResult;

/// Column header for forecast CSV export.
const HEADER: &str = "month,days,outdoor_temp_c,heat_demand_kwh,chp_thermal_kwh,\
                      heat_pump_thermal_kwh,boiler_thermal_kwh,boiler_gas_input_kwh,\
                      co2_emissions_kg";

/// Exports a forecast to a CSV file at the given path.
///
/// Writes a header row, one row per month in calendar order and a final
/// `Total` row. Produces deterministic output for identical inputs.
///
/// # Arguments
///
/// * `forecast` - Forecast to export
/// * `config` - Site the forecast was computed for (emissions factor)
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_forecast_csv(
    forecast: &ForecastResult,
    config: &SiteConfig,
    path: &Path,
) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_forecast_csv(forecast, config, buf)
}

/// Writes a forecast as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_forecast_csv(
    forecast: &ForecastResult,
    config: &SiteConfig,
    writer: impl Write,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for m in &forecast.months {
        wtr.write_record(row(
            m.month.name,
            format!("{:.1}", m.month.mean_outdoor_temp_c),
            &m.balance,
            config,
        ))?;
    }
    wtr.write_record(row("Total", String::new(), &forecast.total, config))?;

    wtr.flush()?;
    Ok(())
}

fn row(label: &str, temp: String, b: &EnergyBalance, config: &SiteConfig) -> [String; 9] {
    [
        label.to_string(),
        b.period_days.to_string(),
        temp,
        format!("{:.3}", b.heat_demand_kwh),
        format!("{:.3}", b.chp_thermal_kwh),
        format!("{:.3}", b.heat_pump_thermal_kwh),
        format!("{:.3}", b.boiler_thermal_kwh),
        format!("{:.3}", b.boiler_gas_input_kwh),
        format!("{:.3}", b.economics(config).co2_emissions_kg),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::generate_default_forecast;

    fn render() -> String {
        let site = SiteConfig::new(1500.0, 0.2, 20.0, 5.0);
        let forecast = generate_default_forecast(&site);
        let mut buf = Vec::new();
        write_forecast_csv(&forecast, &site, &mut buf).ok();
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn header_lists_all_columns() {
        let output = render();
        let first_line = output.lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "month,days,outdoor_temp_c,heat_demand_kwh,chp_thermal_kwh,\
             heat_pump_thermal_kwh,boiler_thermal_kwh,boiler_gas_input_kwh,\
             co2_emissions_kg"
        );
    }

    #[test]
    fn one_row_per_month_plus_total() {
        let output = render();
        let lines: Vec<&str> = output.lines().collect();
        // 1 header + 12 months + 1 total
        assert_eq!(lines.len(), 14);
        assert!(lines[1].starts_with("Jan,31,5.0,"));
        assert!(lines[13].starts_with("Total,365,,"));
    }

    #[test]
    fn deterministic_output() {
        assert_eq!(render(), render());
    }

    #[test]
    fn numeric_columns_parse() {
        let output = render();
        let mut rdr = csv::ReaderBuilder::new().from_reader(output.as_bytes());
        let mut rows = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.unwrap_or_default();
            for i in 3..9 {
                assert!(
                    rec[i].parse::<f64>().is_ok(),
                    "column {i} should parse as f64"
                );
            }
            rows += 1;
        }
        assert_eq!(rows, 13);
    }
}
