use std::env;
use std::path::PathBuf;

/// Parsed command-line options.
#[derive(Debug)]
pub struct CliOptions {
    pub site: Option<PathBuf>,
    pub preset: Option<String>,
    pub outdoor_temp_c: Option<f64>,
    pub days: u32,
    pub csv_out: Option<PathBuf>,
    pub serve: bool,
    pub port: u16,
    pub tui: bool,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    if args.len() == 1 && (args[0] == "--help" || args[0] == "-h") {
        print_usage();
        std::process::exit(0);
    }
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut site = None;
    let mut preset = None;
    let mut outdoor_temp_c = None;
    let mut days = None;
    let mut csv_out = None;
    let mut serve = false;
    let mut port = None;
    let mut tui = false;

    while i < args.len() {
        match args[i].as_str() {
            "--site" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --site (expected a TOML file path)",
                )?;
                if site.replace(PathBuf::from(path)).is_some() {
                    return Err("--site provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(
                    i,
                    "missing value for --preset (expected a preset name)",
                )?;
                if preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--outdoor-temp" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --outdoor-temp (expected °C)")?;
                let temp = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|t| t.is_finite())
                    .ok_or_else(|| format!("--outdoor-temp value \"{raw}\" is not a number"))?;
                outdoor_temp_c = Some(temp);
            }
            "--days" => {
                i += 1;
                let raw = args.next_or_err(
                    i,
                    "missing value for --days (expected an integer >= 1)",
                )?;
                match raw.parse::<u32>() {
                    Ok(d) if d >= 1 => days = Some(d),
                    _ => return Err(format!("--days value \"{raw}\" must be an integer >= 1")),
                }
            }
            "--csv-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --csv-out (expected a file path)",
                )?;
                if csv_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--csv-out provided more than once".to_string());
                }
            }
            "--serve" => serve = true,
            "--port" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                let p = raw
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{raw}\" is not a valid u16"))?;
                port = Some(p);
            }
            "--tui" => tui = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if site.is_some() && preset.is_some() {
        return Err(
            "arguments `--site` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    if site.is_none() && preset.is_none() {
        preset = Some("barnwell".to_string());
    }

    if serve && tui {
        return Err("arguments `--serve` and `--tui` are mutually exclusive".to_string());
    }

    Ok(CliOptions {
        site,
        preset,
        outdoor_temp_c,
        days: days.unwrap_or(1),
        csv_out,
        serve,
        port: port.unwrap_or(3000),
        tui,
    })
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("district-heat: district heating balance and monthly forecast");
    eprintln!();
    eprintln!("Usage:");
    eprintln!(
        "  district-heat [--site <path> | --preset <name>] [--outdoor-temp <c>] [--days <n>]"
    );
    eprintln!("                [--csv-out <path>] [--serve [--port <u16>] | --tui]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --site <path>          Load site from TOML file");
    eprintln!("  --preset <name>        Use a built-in site (barnwell, custom)");
    eprintln!("  --outdoor-temp <c>     Override the design outdoor temperature");
    eprintln!("  --days <n>             Balance period length in days (default: 1)");
    eprintln!("  --csv-out <path>       Export the monthly forecast to CSV");
    eprintln!("  --serve                Start REST API server (feature `api`)");
    eprintln!("  --port <u16>           API server port (default: 3000)");
    eprintln!("  --tui                  Open the terminal dashboard (feature `tui`)");
    eprintln!();
    eprintln!("If no --site or --preset is given, the barnwell preset is used.");
}

#[cfg(test)]
mod tests {
    use super::parse_args_from;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn supports_site_cli() {
        let opts = parse_args_from(args(&["--site", "site.toml"])).expect("parse should succeed");
        assert_eq!(
            opts.site.as_deref().and_then(|p| p.to_str()),
            Some("site.toml")
        );
        assert!(opts.preset.is_none());
    }

    #[test]
    fn supports_preset_cli() {
        let opts = parse_args_from(args(&["--preset", "custom"])).expect("parse should succeed");
        assert_eq!(opts.preset.as_deref(), Some("custom"));
        assert!(opts.site.is_none());
    }

    #[test]
    fn defaults_to_barnwell_one_day() {
        let opts = parse_args_from(Vec::new()).expect("parse should succeed");
        assert_eq!(opts.preset.as_deref(), Some("barnwell"));
        assert_eq!(opts.days, 1);
        assert_eq!(opts.port, 3000);
        assert!(opts.outdoor_temp_c.is_none());
    }

    #[test]
    fn site_and_preset_conflict() {
        let err = parse_args_from(args(&["--site", "a.toml", "--preset", "custom"]));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_zero_days() {
        assert!(parse_args_from(args(&["--days", "0"])).is_err());
        assert!(parse_args_from(args(&["--days", "x"])).is_err());
    }

    #[test]
    fn parses_temperature_and_days() {
        let opts = parse_args_from(args(&["--outdoor-temp", "-3.5", "--days", "7"]))
            .expect("parse should succeed");
        assert_eq!(opts.outdoor_temp_c, Some(-3.5));
        assert_eq!(opts.days, 7);
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = parse_args_from(args(&["--bogus"]));
        assert_eq!(err.err().as_deref(), Some("unknown argument: --bogus"));
    }
}
