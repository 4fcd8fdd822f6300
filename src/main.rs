//! GPIO Calculator
//!
//! Converts SoC pin names to Linux sysfs GPIO numbers and back, and prints the
//! shell commands that export the pin.
//!
//! # Usage
//!
//! ```bash
//! # Rockchip GPIO1_B3 -> 43, exported as an output driven high
//! gpio-calc --soc rk --export high forward --group GPIO1 --port B --index 3
//!
//! # i.MX number 138 -> GPIO5_IO10
//! gpio-calc --soc imx backward 138
//!
//! # Accepted field values for Allwinner
//! gpio-calc --soc sunxi list
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use gpio_calc::{Calculator, Direction, ExportMode, Field, SocFamily};

/// GPIO Calculator
///
/// Converts between SoC GPIO pin names and sysfs GPIO numbers
#[derive(Parser)]
#[command(name = "gpio-calc")]
#[command(version)]
#[command(about = "Convert between SoC GPIO pin names and sysfs GPIO numbers")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SoC family (rk, imx, sunxi)
    #[arg(
        short,
        long,
        global = true,
        env = "GPIO_CALC_SOC",
        default_value = "imx"
    )]
    soc: SocFamily,

    /// Export command to print (export, low, high, input)
    #[arg(
        short,
        long,
        global = true,
        env = "GPIO_CALC_EXPORT",
        default_value = "export"
    )]
    export: ExportMode,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pin name fields to GPIO number
    ///
    /// Omitted fields take the first accepted value of the family.
    Forward {
        /// Group, with or without the GPIO prefix (rk, imx)
        #[arg(short, long)]
        group: Option<String>,

        /// Port letter (rk, sunxi)
        #[arg(short, long)]
        port: Option<String>,

        /// Index within the group or port
        #[arg(short, long)]
        index: Option<String>,
    },

    /// GPIO number to pin name
    Backward {
        /// sysfs GPIO number
        #[arg(allow_hyphen_values = true)]
        number: String,
    },

    /// List the accepted field values of the family
    List,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,gpio_calc=debug"
    } else {
        "warn"
    };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    env_logger::Builder::from_env(env).init();
}

fn print_result(calc: &Calculator) {
    println!("{}", calc.label());
    if let Some(command) = calc.command() {
        println!("{}", command);
    }
}

fn forward(calc: &mut Calculator, fields: [(Field, Option<String>); 3]) -> Result<()> {
    let family = calc.family();
    for (field, value) in fields {
        let Some(value) = value else { continue };
        if !family.fields().contains(&field) {
            let name = field.to_str();
            debug!("{} does not use {}, ignoring {:?}", family, name, value);
            continue;
        }
        calc.set_field(field, &value)
            .with_context(|| format!("Failed to convert {} pin", family))?;
    }

    print_result(calc);
    Ok(())
}

fn backward(calc: &mut Calculator, number: &str) -> Result<()> {
    let family = calc.family();
    calc.set_gpio_number(number)
        .with_context(|| format!("Failed to convert {} GPIO number", family))?;

    print_result(calc);
    Ok(())
}

fn list(family: SocFamily) {
    println!("{} ({})", family, family.to_str());
    for field in family.fields() {
        let options = family.options(*field).join(" ");
        println!("  {:<6} {}", field.to_str(), options);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut calc = Calculator::new();
    calc.set_family(cli.soc);

    match cli.command {
        Commands::Forward { group, port, index } => {
            calc.set_export_mode(cli.export);
            let fields = [
                (Field::Group, group),
                (Field::Port, port),
                (Field::Index, index),
            ];
            forward(&mut calc, fields)
        }
        Commands::Backward { number } => {
            // switching direction resets the export mode
            calc.set_direction(Direction::Backward);
            calc.set_export_mode(cli.export);
            backward(&mut calc, &number)
        }
        Commands::List => {
            list(cli.soc);
            Ok(())
        }
    }
}
