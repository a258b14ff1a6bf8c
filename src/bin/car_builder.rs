use std::path::PathBuf;
use std::process::ExitCode;

use car_builder::logging::init_tracing;
use car_builder::{
    AttributePolicy, CarBuilder, CarManualBuilder, Director, DirectorConfig, Extract, Validated,
};
use clap::Parser;
use colored::Colorize;

/// Build a car and its manual from a director sequence.
#[derive(Parser)]
#[command(name = "car_builder", version, about, long_about = None)]
struct Cli {
    /// TOML file with extra sequences and an attribute policy.
    #[arg(short, long, env = "CAR_BUILDER_CONFIG")]
    config: Option<PathBuf>,

    /// Sequence to replay for both products. Defaults to `car` and `manual`.
    #[arg(short, long)]
    sequence: Option<String>,

    /// Check attribute values against the configured policy.
    #[arg(long)]
    validate: bool,

    /// -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    init_tracing(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> car_builder::Result<()> {
    let config = match &cli.config {
        Some(path) => DirectorConfig::load(path)?,
        None => DirectorConfig::default(),
    };
    let policy = config.policy().clone();
    let director = config.into_director();

    println!("{}", "=== Sequences ===".bold());
    for name in director.sequence_names() {
        println!("  {}", name.cyan());
    }

    let car_sequence = cli.sequence.as_deref().unwrap_or(car_builder::director::CAR);
    let manual_sequence = cli.sequence.as_deref().unwrap_or(car_builder::director::MANUAL);

    let (car, manual) = if cli.validate {
        build_validated(&director, policy, car_sequence, manual_sequence)?
    } else {
        let mut car_builder = CarBuilder::new();
        director.build(car_sequence, &mut car_builder)?;
        let mut manual_builder = CarManualBuilder::new();
        director.build(manual_sequence, &mut manual_builder)?;
        (car_builder.get_product(), manual_builder.get_product())
    };

    println!("\n{}", "=== Products ===".bold());
    println!("  {}", car.to_string().green());
    println!("  {}", manual.to_string().green());
    Ok(())
}

fn build_validated(
    director: &Director,
    policy: AttributePolicy,
    car_sequence: &str,
    manual_sequence: &str,
) -> car_builder::Result<(car_builder::Car, car_builder::Manual)> {
    let mut car_builder = Validated::new(CarBuilder::new(), policy.clone());
    director.try_build(car_sequence, &mut car_builder)?;
    let mut manual_builder = Validated::new(CarManualBuilder::new(), policy);
    director.try_build(manual_sequence, &mut manual_builder)?;
    Ok((car_builder.get_product(), manual_builder.get_product()))
}
