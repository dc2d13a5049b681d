//! District heating entry point: CLI wiring and site-driven balance output.

mod cli;

use std::path::Path;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use district_heat::balance::compute_balance;
use district_heat::config::{ConfigError, SiteFile};
use district_heat::forecast::generate_default_forecast;
use district_heat::io::export::export_forecast_csv;

/// Installs the stderr log subscriber, `RUST_LOG` overriding the default.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("district_heat=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Prints every error and exits with status 1.
fn fail(err: &ConfigError) -> ! {
    let fields = err.field_errors();
    if fields.is_empty() {
        eprintln!("error: {err}");
    } else {
        for e in fields {
            eprintln!("config error: {e}");
        }
    }
    process::exit(1);
}

fn main() {
    let cli = match cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    // The dashboard owns the terminal, so it gets no log output.
    if !cli.tui {
        init_tracing();
    }

    // Load site: --site takes priority, then --preset
    let (mut site_file, source) = if let Some(ref path) = cli.site {
        match SiteFile::from_toml_file(Path::new(path)) {
            Ok(site) => (site, "file".to_string()),
            Err(e) => fail(&e),
        }
    } else {
        let name = cli.preset.as_deref().unwrap_or("barnwell");
        match SiteFile::from_preset(name) {
            Ok(site) => (site, name.to_string()),
            Err(e) => fail(&e),
        }
    };

    if let Some(temp) = cli.outdoor_temp_c {
        site_file.building.outdoor_temp_c = temp;
    }

    let site = match site_file.build() {
        Ok(site) => site,
        Err(e) => fail(&e),
    };
    info!(site = %site_file.name, source = %source, "site ready");

    if cli.tui {
        run_tui(&site_file, &source);
        return;
    }

    let balance = compute_balance(&site, site.outdoor_temp_c, cli.days);
    let forecast = generate_default_forecast(&site);

    println!(
        "--- {} at {:.1} °C over {} day(s) ---",
        site_file.name, site.outdoor_temp_c, cli.days
    );
    println!("{balance}");
    println!("{}", balance.economics(&site));
    if balance.surplus_kwh() > 0.0 {
        println!("Unused CHP/HP heat:    {:.2} kWh", balance.surplus_kwh());
    }

    println!("\n--- Monthly forecast (kWh) ---");
    println!("{forecast}");
    println!("\n--- Annual economics ---");
    println!("{}", forecast.total.economics(&site));

    if let Some(ref path) = cli.csv_out {
        if let Err(e) = export_forecast_csv(&forecast, &site, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        info!(path = %path.display(), "forecast written");
    }

    if cli.serve {
        serve(site_file.name, site, cli.port);
    }
}

#[cfg(feature = "api")]
fn serve(name: String, site: district_heat::balance::SiteConfig, port: u16) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(district_heat::api::AppState::new(name, site));
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(district_heat::api::serve(state, addr)) {
        eprintln!("error: API server failed: {e}");
        process::exit(1);
    }
}

#[cfg(not(feature = "api"))]
fn serve(_name: String, _site: district_heat::balance::SiteConfig, _port: u16) {
    tracing::warn!("--serve ignored: built without the `api` feature");
}

#[cfg(feature = "tui")]
fn run_tui(site_file: &SiteFile, source: &str) {
    let app = match district_heat::tui::App::from_site_file(site_file, source) {
        Ok(app) => app,
        Err(e) => fail(&e),
    };
    if let Err(e) = district_heat::tui::run(app) {
        eprintln!("error: TUI crashed: {e}");
        process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn run_tui(_site_file: &SiteFile, _source: &str) {
    eprintln!("error: --tui requires building with the `tui` feature");
    process::exit(1);
}
