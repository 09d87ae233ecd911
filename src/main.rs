use clap::{Parser, Subcommand};
use plotcalc::calc;
use plotcalc::config::{Config, OutputFormat, DEFAULT_CONFIG_FILE};
use plotcalc::convert::{self, Unit};

#[derive(Parser)]
#[command(name = "plotcalc")]
#[command(about = "Land area converter and four-function calculator", long_about = None)]
struct Cli {
    /// Config file (default: ./plotcalc.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log conversion and calculator steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value into every unit
    Convert {
        /// Value to convert, optionally with its unit (e.g., "12 yard")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (default: from config)
        unit: Option<String>,

        /// Print slots that the display policy hides
        #[arg(short, long)]
        all: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported units
    Units,

    /// Replay calculator keys (e.g., "2+3*4=")
    Calc {
        /// Key sequence: digits, ".", "+ - * /", "=", "c" to clear, "<" to delete
        #[arg(allow_hyphen_values = true)]
        keys: String,

        /// Print the calculator state as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Convert {
            value,
            unit,
            all,
            json,
        } => convert_command(&config, &value, unit.as_deref(), all, json),
        Commands::Units => list_units(),
        Commands::Calc { keys, json } => calc_command(&config, &keys, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        log::debug!("loading config from {}", path);
        return Config::load_from_file(path);
    }

    let default_path = std::path::Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        log::debug!("loading config from {}", default_path.display());
        Config::load_from_file(default_path)
    } else {
        Ok(Config::empty())
    }
}

fn convert_command(
    config: &Config,
    value: &str,
    unit: Option<&str>,
    all: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // An explicit unit argument wins over one embedded in the value
    let (raw, source) = match unit {
        Some(name) => (value.to_string(), name.parse::<Unit>()?),
        None if convert::looks_like_quantity(value) => {
            let (parsed, unit) = convert::parse_quantity(value)?;
            (parsed.to_string(), unit)
        }
        None => (value.to_string(), config.converter.default_unit),
    };

    let report = convert::convert_all(&raw, source);

    if json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let show_all = all || config.converter.show_hidden;

    match report.input {
        Some(input) => println!("{} {}", convert::format_number(input), source.label()),
        None => eprintln!("Warning: '{}' is not a number", value),
    }
    println!();

    for slot in &report.slots {
        if slot.visible || show_all {
            println!("  {:<12} {}", slot.label, slot.value);
        }
    }

    Ok(())
}

fn list_units() -> Result<(), Box<dyn std::error::Error>> {
    println!("Units ({}):", Unit::ALL.len());
    for unit in Unit::ALL {
        let kind = if unit.is_linear() { "linear" } else { "area" };
        let base = if unit.is_linear() { "ft" } else { "sq ft" };
        println!(
            "  - {:<8} {:<12} {:<6} 1 = {} {}",
            unit.key(),
            unit.label(),
            kind,
            convert::format_number(unit.factor()),
            base
        );
    }
    Ok(())
}

fn calc_command(
    config: &Config,
    keys: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = calc::run_keys(keys)?;

    if json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    if !state.expression.is_empty() {
        println!("{}", state.expression);
    }
    println!("{}", state.display);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_accepts_negative_value() {
        let cli = Cli::try_parse_from(["plotcalc", "convert", "-2", "feet"]).unwrap();
        match cli.command {
            Commands::Convert { value, unit, .. } => {
                assert_eq!(value, "-2");
                assert_eq!(unit.as_deref(), Some("feet"));
            }
            _ => panic!("Expected Convert"),
        }
    }

    #[test]
    fn test_convert_accepts_negative_quantity() {
        let cli = Cli::try_parse_from(["plotcalc", "convert", "-4ft"]).unwrap();
        match cli.command {
            Commands::Convert { value, unit, .. } => {
                assert_eq!(value, "-4ft");
                assert_eq!(unit, None);
            }
            _ => panic!("Expected Convert"),
        }
    }

    #[test]
    fn test_calc_accepts_leading_minus() {
        let cli = Cli::try_parse_from(["plotcalc", "calc", "-5="]).unwrap();
        match cli.command {
            Commands::Calc { keys, json } => {
                assert_eq!(keys, "-5=");
                assert!(!json);
                assert_eq!(calc::run_keys(&keys).unwrap().display, "-5");
            }
            _ => panic!("Expected Calc"),
        }
    }

    #[test]
    fn test_flags_still_parse() {
        let cli = Cli::try_parse_from(["plotcalc", "convert", "2", "yard", "--all"]).unwrap();
        match cli.command {
            Commands::Convert { value, all, .. } => {
                assert_eq!(value, "2");
                assert!(all);
            }
            _ => panic!("Expected Convert"),
        }
    }
}
