use clap::{Args as ClapArgs, Parser};
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carbon_footprint::calc::EmissionModel;
use carbon_footprint::error::InputError;
use carbon_footprint::export::{export_csv, export_json};
use carbon_footprint::model::{load_inputs, FuelType, RawInputs, BENCHMARKS, DONATION_URL};
use carbon_footprint::session::{HistoryLog, Session};
use carbon_footprint::ui::{check_limits, App};

#[derive(Parser, Debug)]
#[command(name = "carbon-footprint")]
#[command(about = "Carbon Footprint - estimate your annual CO2 emissions and tree offset")]
#[command(version)]
struct Args {
    /// Country whose emission factors apply
    #[arg(long, default_value = "India")]
    country: String,

    #[command(flatten)]
    inputs: InputArgs,

    /// Load inputs from a JSON file instead of the flags above
    #[arg(long, value_name = "FILE")]
    inputs_file: Option<PathBuf>,

    /// Calculate once and print the result instead of opening the calculator
    #[arg(long)]
    headless: bool,

    /// Export session history to CSV when the session ends
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export session history to JSON when the session ends
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Write logs to this file (interactive mode only logs when set)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct InputArgs {
    /// Daily commute distance (km)
    #[arg(long, default_value_t = 0.0)]
    distance: f64,

    /// Monthly electricity use (kWh)
    #[arg(long, default_value_t = 0.0)]
    electricity: f64,

    /// Waste generated per week (kg)
    #[arg(long, default_value_t = 0.0)]
    waste: f64,

    /// Monthly spending on goods (₹)
    #[arg(long, default_value_t = 0.0)]
    shopping: f64,

    /// Short-haul flights per year (0-1500km)
    #[arg(long, default_value_t = 0)]
    short_flights: u32,

    /// Medium-haul flights per year (1500-4000km)
    #[arg(long, default_value_t = 0)]
    medium_flights: u32,

    /// Long-haul flights per year (4000km+)
    #[arg(long, default_value_t = 0)]
    long_flights: u32,

    /// Primary heating fuel: Electricity, LPG or Wood
    #[arg(long, default_value = "Electricity")]
    heating_fuel: FuelType,

    /// Estimated monthly heating usage
    #[arg(long, default_value_t = 0.0)]
    heating_usage: f64,
}

impl From<&InputArgs> for RawInputs {
    fn from(args: &InputArgs) -> Self {
        Self {
            distance_km: args.distance,
            electricity_kwh: args.electricity,
            waste_kg: args.waste,
            shopping_spend: args.shopping,
            short_flights: args.short_flights,
            medium_flights: args.medium_flights,
            long_flights: args.long_flights,
            heating_fuel: args.heating_fuel,
            heating_usage: args.heating_usage,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let headless = args.headless || args.csv.is_some() || args.json.is_some();

    init_logging(headless, args.log_file.as_deref())?;

    let inputs = read_inputs(&args)?;

    let model = EmissionModel::builtin();
    let mut session = Session::start(&model);

    if headless {
        // No slider stands between these values and the calculation.
        check_limits(&inputs)?;
        let result = session.calculate(&args.country, &inputs)?;

        for (category, tonnes) in result.breakdown().iter() {
            println!("{category}: {tonnes} tonnes CO2/year");
        }
        println!("Total Emissions: {} tonnes CO2/year", result.total_emission_tonnes());
        println!(
            "You need to plant {} trees to offset your carbon footprint.",
            result.trees_needed()
        );
        let averages: Vec<String> = BENCHMARKS
            .iter()
            .map(|b| format!("{}: {} t/year", b.label, b.tonnes))
            .collect();
        println!("{}", averages.join(" | "));
        println!("Donate to plant trees: {DONATION_URL}");

        return export_history(&session.end(), &args);
    }

    let terminal = ratatui::init();
    let result = App::new(session, args.country.clone(), inputs).run(terminal);
    ratatui::restore();
    export_history(&result?, &args)
}

fn read_inputs(args: &Args) -> Result<RawInputs, InputError> {
    match &args.inputs_file {
        Some(path) => load_inputs(path),
        None => Ok(RawInputs::from(&args.inputs)),
    }
}

fn export_history(history: &HistoryLog, args: &Args) -> Result<()> {
    if let Some(csv_path) = &args.csv {
        export_csv(history, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(history, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    Ok(())
}

/// Logs go to stderr in headless mode; the calculator owns the terminal, so
/// interactive sessions only log to an explicit file.
fn init_logging(headless: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        return Ok(());
    }

    info!(headless, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headless_inputs(argv: &[&str]) -> Result<RawInputs, InputError> {
        let args = Args::try_parse_from(argv).unwrap();
        let inputs = read_inputs(&args)?;
        check_limits(&inputs)?;
        Ok(inputs)
    }

    #[test]
    fn flags_within_slider_ranges_are_accepted() {
        let inputs = headless_inputs(&[
            "carbon-footprint",
            "--headless",
            "--distance",
            "10",
            "--shopping",
            "2000",
            "--heating-fuel",
            "wood",
        ])
        .unwrap();
        assert_eq!(inputs.distance_km, 10.0);
        assert_eq!(inputs.shopping_spend, 2000.0);
        assert_eq!(inputs.heating_fuel, FuelType::Wood);
    }

    #[test]
    fn distance_flag_beyond_slider_is_rejected() {
        let err = headless_inputs(&["carbon-footprint", "--headless", "--distance", "5000"])
            .unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { value, .. } if value == 5000.0));
    }

    #[test]
    fn shopping_flag_between_steps_is_rejected() {
        let err = headless_inputs(&["carbon-footprint", "--headless", "--shopping", "1234"])
            .unwrap_err();
        assert!(matches!(err, InputError::OffStep { value, .. } if value == 1234.0));
    }

    #[test]
    fn inputs_file_beyond_slider_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "carbon-footprint-{}-inputs.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"electricity_kwh": 2500, "shopping_spend": 1000}"#).unwrap();

        let result = headless_inputs(&[
            "carbon-footprint",
            "--headless",
            "--inputs-file",
            path.to_str().unwrap(),
        ]);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(InputError::OutOfRange { value, max, .. }) if value == 2500.0 && max == 1000.0
        ));
    }
}
