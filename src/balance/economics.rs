//! Costs, revenue, emissions and efficiency derived from a balance.

use std::fmt;

use serde::Serialize;

use super::types::{EnergyBalance, SiteConfig};

/// Monetary and emissions figures for one balance period.
///
/// Derived on demand from an [`EnergyBalance`] and the [`SiteConfig`] that
/// produced it, so the balance itself stays a plain energy record. Every
/// figure scales with `period_days`, which makes the economics of a summed
/// forecast equal to the sum of the monthly economics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EconomicSummary {
    /// CO₂ emitted by the boiler (kg).
    pub co2_emissions_kg: f64,
    /// Value of the electricity generated by the CHP unit.
    pub chp_electrical_revenue: f64,
    /// Cost of the gas burned by the CHP unit.
    pub chp_gas_cost: f64,
    /// Cost of the electricity drawn by the heat pump.
    pub heat_pump_electricity_cost: f64,
    /// Cost of the gas burned by the boiler.
    pub boiler_gas_cost: f64,
    /// Heat demand over total fuel and electricity input (%).
    pub overall_efficiency_pct: f64,
}

impl EconomicSummary {
    /// Computes all derived figures for `balance`.
    ///
    /// # Arguments
    ///
    /// * `balance` - Balance produced from `config`
    /// * `config` - Site configuration holding tariffs and generator specs
    ///
    /// # Returns
    ///
    /// An `EconomicSummary` with all fields populated. Efficiency is 0 when
    /// no energy enters the system at all.
    pub fn from_balance(balance: &EnergyBalance, config: &SiteConfig) -> Self {
        let days = balance.period_days;

        let chp_gas_input_kwh = config.chp.map_or(0.0, |c| c.gas_input_kwh(days));
        let chp_electrical_kwh = config.chp.map_or(0.0, |c| c.electrical_kwh(days));
        let heat_pump_input_kwh = config
            .heat_pump
            .map_or(0.0, |hp| hp.electrical_input_kwh(days));

        let total_input_kwh =
            balance.boiler_gas_input_kwh + chp_gas_input_kwh + heat_pump_input_kwh;
        let overall_efficiency_pct = if total_input_kwh > 0.0 {
            balance.heat_demand_kwh / total_input_kwh * 100.0
        } else {
            0.0
        };

        Self {
            co2_emissions_kg: balance.boiler_gas_input_kwh * config.co2_factor_kg_per_kwh,
            chp_electrical_revenue: chp_electrical_kwh * config.elec_price_per_kwh,
            chp_gas_cost: chp_gas_input_kwh * config.gas_price_per_kwh,
            heat_pump_electricity_cost: heat_pump_input_kwh * config.elec_price_per_kwh,
            boiler_gas_cost: balance.boiler_gas_input_kwh * config.gas_price_per_kwh,
            overall_efficiency_pct,
        }
    }

    /// Sum of all costs.
    pub fn total_cost(&self) -> f64 {
        self.chp_gas_cost + self.heat_pump_electricity_cost + self.boiler_gas_cost
    }

    /// Costs minus CHP electricity revenue.
    pub fn net_cost(&self) -> f64 {
        self.total_cost() - self.chp_electrical_revenue
    }
}

impl EnergyBalance {
    /// Derives costs, revenue, emissions and efficiency for this balance.
    pub fn economics(&self, config: &SiteConfig) -> EconomicSummary {
        EconomicSummary::from_balance(self, config)
    }
}

impl fmt::Display for EconomicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CO2 emissions:         {:.2} kg", self.co2_emissions_kg)?;
        writeln!(
            f,
            "CHP electricity value: {:.2}",
            self.chp_electrical_revenue
        )?;
        writeln!(f, "CHP gas cost:          {:.2}", self.chp_gas_cost)?;
        writeln!(
            f,
            "Heat pump power cost:  {:.2}",
            self.heat_pump_electricity_cost
        )?;
        writeln!(f, "Boiler gas cost:       {:.2}", self.boiler_gas_cost)?;
        writeln!(f, "Net cost:              {:.2}", self.net_cost())?;
        write!(
            f,
            "Overall efficiency:    {:.1}%",
            self.overall_efficiency_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::calculator::compute_balance;
    use crate::plant::{ChpSpec, HeatPumpSpec};

    const EPS: f64 = 1e-6;

    fn site() -> SiteConfig {
        let mut site = SiteConfig::new(22102.0, 0.15, 20.0, 5.0)
            .with_chp(ChpSpec::new(44.7, 15.0, 19.965, 67.9))
            .with_heat_pump(HeatPumpSpec::new(60.0, 9.0, 4.0));
        site.co2_factor_kg_per_kwh = 0.23;
        site.elec_price_per_kwh = 0.25;
        site.gas_price_per_kwh = 0.08;
        site
    }

    #[test]
    fn daily_figures() {
        let site = site();
        let b = compute_balance(&site, 5.0, 1);
        let e = b.economics(&site);

        assert!((e.co2_emissions_kg - b.boiler_gas_input_kwh * 0.23).abs() < EPS);
        // 19.965 kW * 15 h * 0.25
        assert!((e.chp_electrical_revenue - 74.86875).abs() < EPS);
        // 67.9 kW * 15 h * 0.08
        assert!((e.chp_gas_cost - 81.48).abs() < EPS);
        // 60 kW * 9 h / 4 * 0.25
        assert!((e.heat_pump_electricity_cost - 33.75).abs() < EPS);
        assert!((e.boiler_gas_cost - b.boiler_gas_input_kwh * 0.08).abs() < EPS);

        let input = b.boiler_gas_input_kwh + 1018.5 + 135.0;
        assert!((e.overall_efficiency_pct - b.heat_demand_kwh / input * 100.0).abs() < EPS);
    }

    #[test]
    fn no_input_means_zero_efficiency() {
        let mut site = SiteConfig::new(1000.0, 0.2, 20.0, 5.0);
        site.boiler_efficiency = 0.0;
        let b = compute_balance(&site, 5.0, 1);
        assert_eq!(b.economics(&site).overall_efficiency_pct, 0.0);
    }

    #[test]
    fn economics_scale_with_period() {
        let site = site();
        let one = compute_balance(&site, 5.0, 1).economics(&site);
        let ten = compute_balance(&site, 5.0, 10).economics(&site);
        assert!((ten.chp_gas_cost - 10.0 * one.chp_gas_cost).abs() < EPS);
        assert!((ten.chp_electrical_revenue - 10.0 * one.chp_electrical_revenue).abs() < EPS);
        assert!((ten.boiler_gas_cost - 10.0 * one.boiler_gas_cost).abs() < EPS);
        // a ratio, so unchanged
        assert!((ten.overall_efficiency_pct - one.overall_efficiency_pct).abs() < EPS);
    }

    #[test]
    fn net_cost_subtracts_revenue() {
        let e = EconomicSummary {
            chp_electrical_revenue: 10.0,
            chp_gas_cost: 5.0,
            heat_pump_electricity_cost: 3.0,
            boiler_gas_cost: 4.0,
            ..EconomicSummary::default()
        };
        assert_eq!(e.total_cost(), 12.0);
        assert_eq!(e.net_cost(), 2.0);
    }
}
