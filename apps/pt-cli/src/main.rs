use clap::{Parser, Subcommand};
use pt_calc::{CalcResult, CalculationInput, CalculationResult, RawInput};
use pt_core::{PressureUnit, TemperatureUnit, VolumeUnit};

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "Presstest CLI - pressure leak-test compliance calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a leak-test reading against the FNiP tolerance
    Check {
        /// Initial (test) pressure reading
        #[arg(long)]
        p1: String,
        /// Final pressure reading, same unit as --p1
        #[arg(long)]
        p2: String,
        /// Temperature reading
        #[arg(long, short = 't')]
        temperature: String,
        /// System volume reading
        #[arg(long, short = 'v')]
        volume: String,
        /// Pressure unit: mpa, bar, atm, psi
        #[arg(long, default_value = "mpa")]
        pressure_unit: PressureUnit,
        /// Temperature unit: c, f, k
        #[arg(long, default_value = "c")]
        temperature_unit: TemperatureUnit,
        /// Volume unit: m3, l, ft3
        #[arg(long, default_value = "m3")]
        volume_unit: VolumeUnit,
        /// Emit the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// List supported unit symbols and conversion factors
    Units,
}

fn main() -> CalcResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            p1,
            p2,
            temperature,
            volume,
            pressure_unit,
            temperature_unit,
            volume_unit,
            json,
        } => {
            let raw = RawInput {
                initial_pressure: p1,
                final_pressure: p2,
                temperature,
                volume,
                pressure_unit,
                temperature_unit,
                volume_unit,
            };
            cmd_check(&raw, json)
        }
        Commands::Units => {
            cmd_units();
            Ok(())
        }
    }
}

fn cmd_check(raw: &RawInput, json: bool) -> CalcResult<()> {
    let input = raw.parse()?;
    let result = pt_calc::compute(&input)?;

    if json {
        let doc = serde_json::json!({
            "input": input,
            "result": result,
        });
        // `{:#}` pretty-prints a serde_json::Value.
        println!("{doc:#}");
    } else {
        print_report(&input, &result);
    }
    Ok(())
}

fn print_report(input: &CalculationInput, result: &CalculationResult) {
    let p1_mpa = input.pressure_unit.to_mpa(input.initial_pressure);

    println!("Leak-test result:");
    println!(
        "  Test pressure: {} {} = {:.4} MPa",
        input.initial_pressure,
        input.pressure_unit.symbol(),
        p1_mpa
    );
    println!("  Band:          {}", result.band);
    println!("  Pressure drop: {:.4} %", result.delta_percent.abs());
    println!("  Allowed drop:  {:.4} %", result.max_drop_percent);
    println!();

    if result.compliant {
        println!("✓ COMPLIANT with the FNiP requirements");
        println!("  The equipment passed the tightness test");
    } else {
        println!("✗ NON-COMPLIANT with the FNiP requirements");
        println!("  Leak detected; the test must be repeated");
    }

    println!();
    println!("References:");
    println!("  GOST 32569-2013: strength and tightness testing");
    println!("  FNiP: Order No. 444 of 2021-12-21");
}

fn cmd_units() {
    println!("Pressure (base: MPa)");
    for unit in PressureUnit::ALL {
        println!("  {:<4} 1 {} = {} MPa", unit.symbol(), unit.symbol(), unit.to_mpa(1.0));
    }

    println!("Temperature (base: K)");
    for unit in TemperatureUnit::ALL {
        match unit {
            TemperatureUnit::Celsius => println!("  {:<4} K = value + 273.15", unit.symbol()),
            TemperatureUnit::Fahrenheit => {
                println!("  {:<4} K = (value - 32) x 5/9 + 273.15", unit.symbol())
            }
            TemperatureUnit::Kelvin => println!("  {:<4} identity", unit.symbol()),
        }
    }

    println!("Volume (base: m³)");
    for unit in VolumeUnit::ALL {
        println!(
            "  {:<4} 1 {} = {} m³",
            unit.symbol(),
            unit.symbol(),
            unit.to_cubic_meters(1.0)
        );
    }
}
