//! Integration tests for the single-period energy balance.

mod common;

use common::{EPS, assert_close, barnwell, barnwell_unadjusted, boiler_only};
use district_heat::balance::{SiteConfig, compute_balance, compute_design_balance};
use district_heat::plant::{ChpSpec, HeatPumpSpec};

#[test]
fn barnwell_design_day_with_nameplate_chp() {
    let site = barnwell_unadjusted();
    let b = compute_design_balance(&site, 1);

    assert_close(b.heat_demand_kwh, 1790.262, 1e-3);
    assert_close(b.chp_thermal_kwh, 670.5, EPS);
    assert_close(b.heat_pump_thermal_kwh, 540.0, EPS);
    assert_close(b.boiler_thermal_kwh, 579.762, 1e-3);
    assert_close(b.boiler_gas_input_kwh, 682.073, 1e-3);
}

#[test]
fn barnwell_preset_applies_chp_adjustment() {
    let site = barnwell();
    let b = compute_design_balance(&site, 1);

    assert_close(b.chp_thermal_kwh, 636.975, 1e-6);
    assert_close(b.boiler_thermal_kwh, 613.287, 1e-3);
    assert_close(b.boiler_gas_input_kwh, 721.514, 1e-3);
}

#[test]
fn balance_closes_when_boiler_is_running() {
    let site = barnwell();
    for temp in [-10.0, 0.0, 5.0] {
        let b = compute_balance(&site, temp, 7);
        assert!(b.boiler_thermal_kwh > 0.0);
        let supplied = b.chp_thermal_kwh + b.heat_pump_thermal_kwh + b.boiler_thermal_kwh;
        assert_close(supplied, b.heat_demand_kwh, 1e-6);
    }
}

#[test]
fn boiler_only_site_covers_full_demand() {
    let site = boiler_only();
    let b = compute_design_balance(&site, 1);

    // 0.5 * 1000 * 10 * 24 / 1000 * 1.5
    assert_close(b.heat_demand_kwh, 180.0, EPS);
    assert_eq!(b.chp_thermal_kwh, 0.0);
    assert_eq!(b.heat_pump_thermal_kwh, 0.0);
    assert_close(b.boiler_thermal_kwh, 180.0, EPS);
    assert_close(b.boiler_gas_input_kwh, 180.0 / 0.85, EPS);
}

#[test]
fn boiler_clamps_at_zero_when_sources_exceed_demand() {
    let site = SiteConfig::new(1_000.0, 0.5, 20.0, 10.0)
        .with_chp(ChpSpec::new(50.0, 24.0, 20.0, 80.0));
    let b = compute_design_balance(&site, 1);

    assert_close(b.chp_thermal_kwh, 1200.0, EPS);
    assert_eq!(b.boiler_thermal_kwh, 0.0);
    assert_eq!(b.boiler_gas_input_kwh, 0.0);
    assert_close(b.surplus_kwh(), 1020.0, EPS);
}

#[test]
fn outdoor_above_indoor_gives_negative_demand_and_idle_boiler() {
    let site = boiler_only();
    let b = compute_balance(&site, 25.0, 1);

    assert!(b.heat_demand_kwh < 0.0);
    assert_eq!(b.boiler_thermal_kwh, 0.0);
    assert_eq!(b.boiler_gas_input_kwh, 0.0);
}

#[test]
fn demand_is_monotonic_in_outdoor_temperature() {
    let site = barnwell();
    let mut previous = f64::INFINITY;
    for temp in [-15.0, -5.0, 0.0, 4.5, 10.0, 16.0, 20.0] {
        let b = compute_balance(&site, temp, 1);
        assert!(b.heat_demand_kwh < previous);
        previous = b.heat_demand_kwh;
    }
}

#[test]
fn balance_and_economics_scale_linearly_with_days() {
    let site = barnwell();
    let one = compute_balance(&site, 2.0, 1);
    let thirty = compute_balance(&site, 2.0, 30);

    assert_eq!(thirty.period_days, 30);
    assert_close(thirty.heat_demand_kwh, one.heat_demand_kwh * 30.0, 1e-6);
    assert_close(thirty.chp_thermal_kwh, one.chp_thermal_kwh * 30.0, 1e-6);
    assert_close(
        thirty.heat_pump_thermal_kwh,
        one.heat_pump_thermal_kwh * 30.0,
        1e-6,
    );
    assert_close(
        thirty.boiler_thermal_kwh,
        one.boiler_thermal_kwh * 30.0,
        1e-6,
    );
    assert_close(
        thirty.boiler_gas_input_kwh,
        one.boiler_gas_input_kwh * 30.0,
        1e-6,
    );

    let e1 = one.economics(&site);
    let e30 = thirty.economics(&site);
    assert_close(e30.co2_emissions_kg, e1.co2_emissions_kg * 30.0, 1e-6);
    assert_close(e30.net_cost(), e1.net_cost() * 30.0, 1e-6);
    assert_close(e30.overall_efficiency_pct, e1.overall_efficiency_pct, 1e-9);
}

#[test]
fn zero_boiler_efficiency_reports_zero_gas() {
    let mut site = boiler_only();
    site.boiler_efficiency = 0.0;
    assert!(site.validate().is_err());

    let b = compute_design_balance(&site, 1);
    assert!(b.boiler_thermal_kwh > 0.0);
    assert_eq!(b.boiler_gas_input_kwh, 0.0);
}

#[test]
fn heat_pump_only_site_economics() {
    let site = SiteConfig::new(1_000.0, 0.5, 20.0, 10.0)
        .with_heat_pump(HeatPumpSpec::new(5.0, 12.0, 4.0));
    let b = compute_design_balance(&site, 1);
    let e = b.economics(&site);

    assert_close(b.heat_pump_thermal_kwh, 60.0, EPS);
    assert_close(b.boiler_thermal_kwh, 120.0, EPS);
    // electricity drawn: 60 / 4 = 15 kWh
    assert_close(e.heat_pump_electricity_cost, 15.0 * 0.25, EPS);
    assert_close(e.co2_emissions_kg, 120.0 / 0.85 * 0.23, EPS);
    assert_close(
        e.overall_efficiency_pct,
        180.0 / (120.0 / 0.85 + 15.0) * 100.0,
        1e-9,
    );
    assert_eq!(e.chp_electrical_revenue, 0.0);
}
