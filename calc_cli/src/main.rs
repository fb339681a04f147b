//! # calc_cli
//!
//! Command-line front end for `calc_core`. Calculations come from a JSON
//! file (`run`) or from flags (one subcommand per calculator). Results are
//! printed as a text report, or as the flat field map with `--json`.
//!
//! Logging goes to stderr through `env_logger`: warnings by default,
//! `-v` for debug, `-vv` for trace, or any `RUST_LOG` filter.

mod args;
mod report;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};
use serde_json::Value;

use calc_core::calculations::{CalculationItem, CalculationOutput, CircleInput, SettingsDemoInput};
use calc_core::equations::generate_equations_markdown;
use calc_core::materials::MaterialGrade;

use args::{AcousticsArgs, BeamArgs, FastenerArgs, TrapdoorArgs, WireArgs};

#[derive(Parser)]
#[command(author, version, about = "Engineering calculators with substituted equations")]
struct Cli {
    /// Print results as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a JSON file holding one calculation or an array of them
    Run {
        file: PathBuf,
    },
    Beam(BeamArgs),
    /// Circle radius, area and circumference
    Circle {
        /// Diameter (mm)
        diameter: f64,
    },
    /// Scale a value and compare it to a reference
    SettingsDemo {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        scale: f64,
        #[arg(allow_negative_numbers = true)]
        reference: f64,
    },
    Fastener(FastenerArgs),
    Wire(WireArgs),
    Trapdoor(TrapdoorArgs),
    Acoustics(AcousticsArgs),
    /// List the material library
    Materials,
    /// Print the equation registry as markdown
    Equations,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let items = match cli.command {
        Command::Run { file } => load_items(&file)?,
        Command::Beam(a) => vec![a.into_item()?],
        Command::Circle { diameter } => vec![CalculationItem::Circle(CircleInput {
            label: String::new(),
            diameter_mm: diameter,
        })],
        Command::SettingsDemo { base, scale, reference } => vec![CalculationItem::SettingsDemo(SettingsDemoInput {
            label: String::new(),
            base_value: base,
            scale_factor: scale,
            reference_value: reference,
        })],
        Command::Fastener(a) => vec![a.into_item()],
        Command::Wire(a) => vec![a.into_item()],
        Command::Trapdoor(a) => vec![a.into_item()],
        Command::Acoustics(a) => vec![a.into_item()],
        Command::Materials => return print_materials(cli.json),
        Command::Equations => {
            print!("{}", generate_equations_markdown());
            return Ok(());
        }
    };

    run_items(&items, cli.json)
}

fn load_items(path: &Path) -> Result<Vec<CalculationItem>> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))?;
    let items: Vec<CalculationItem> = match value {
        Value::Array(_) => serde_json::from_value(value),
        _ => serde_json::from_value(value).map(|item| vec![item]),
    }
    .with_context(|| format!("{} does not describe a calculation", path.display()))?;
    info!("Loaded {} calculation(s) from {}", items.len(), path.display());
    Ok(items)
}

/// One evaluated item with its flat field map.
#[derive(Debug)]
struct Evaluated<'a> {
    item: &'a CalculationItem,
    output: CalculationOutput,
    fields: BTreeMap<String, Value>,
}

/// Evaluate every item in order, stopping at the first failure with the
/// failing item named in the error context.
fn evaluate_items(items: &[CalculationItem]) -> Result<Vec<Evaluated<'_>>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let output = item.evaluate().with_context(|| {
                if item.label().is_empty() {
                    format!("{} calculation #{} failed", item.calc_type(), index + 1)
                } else {
                    format!("{} '{}' failed", item.calc_type(), item.label())
                }
            })?;
            let fields = output.to_field_map()?;
            Ok(Evaluated { item, output, fields })
        })
        .collect()
}

/// `--json` output: a single object for one item, an array otherwise.
fn json_document(evaluated: &[Evaluated<'_>]) -> Value {
    let mut results: Vec<Value> = evaluated
        .iter()
        .map(|e| {
            serde_json::json!({
                "type": e.item.calc_type(),
                "label": e.item.label(),
                "results": e.fields,
            })
        })
        .collect();
    match results.len() {
        1 => results.remove(0),
        _ => Value::Array(results),
    }
}

fn run_items(items: &[CalculationItem], json: bool) -> Result<()> {
    let evaluated = evaluate_items(items)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&json_document(&evaluated))?);
        return Ok(());
    }
    for (index, e) in evaluated.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", report::render(e.item.calc_type(), e.item.label(), &e.output, &e.fields));
    }
    Ok(())
}

fn print_materials(json: bool) -> Result<()> {
    if json {
        let list: Vec<Value> = MaterialGrade::ALL
            .iter()
            .map(|g| {
                serde_json::json!({
                    "code": g.code(),
                    "name": g.display_name(),
                    "properties": g.properties(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        print!("{}", report::render_materials());
    }
    Ok(())
}
