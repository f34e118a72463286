//! # Formula CLI
//!
//! Command-line front end for the formula catalog.
//!
//! ```bash
//! formula_cli list
//! formula_cli show en1992-1-1:8.3
//! formula_cli eval en1992-1-1:8.3 phi=20 sigma_sd=400 f_bd=3
//! formula_cli eval en1993-1-9:A.1 n_e=5,4,3 n_r=10,20,30
//! formula_cli --format json eval-json '{"formula": "nen9997-1:2.1a", "gamma_f": 1.35, "f_rep": 100}'
//! ```
//!
//! Sequence inputs are comma separated. A single value given for a sequence
//! input counts as one band (`n_e=5 n_r=10`). Logs go to stderr, filtered by
//! `RUST_LOG` or the `-v` flag.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formula_core::{
    generate_catalog_markdown, CatalogEntry, EvaluatedFormula, FormulaError, FormulaId, FormulaResult, InputValue,
    SourceDocument,
};

/// Evaluate and render normative formulas
#[derive(Parser)]
#[command(name = "formula_cli")]
#[command(about = "Evaluate design code formulas and render them as LaTeX", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List every formula in the catalog
    List {
        /// Only formulas from this document (e.g. "en1992-1-1")
        #[arg(short, long)]
        document: Option<String>,
    },

    /// Show the variables and reference of a formula
    Show {
        /// Catalog id (e.g. "en1992-1-1:8.3")
        id: String,
    },

    /// Evaluate a formula from name=value inputs
    Eval {
        /// Catalog id (e.g. "en1992-1-1:8.3")
        id: String,
        /// Inputs as name=value; sequences as name=1,2,3
        inputs: Vec<String>,
    },

    /// Evaluate a formula from a JSON object with a "formula" field
    EvalJson {
        json: String,
    },

    /// Print the markdown formula reference
    Docs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();

    match run(cli.command, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), "command failed");
            match cli.format {
                OutputFormat::Json => match serde_json::to_string_pretty(&e) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("Error: {}", e),
                },
                OutputFormat::Text => eprintln!("Error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, format: OutputFormat) -> FormulaResult<()> {
    match command {
        Commands::List { document } => list(document.as_deref(), format),
        Commands::Show { id } => show(id.parse()?, format),
        Commands::Eval { id, inputs } => {
            let id: FormulaId = id.parse()?;
            let inputs = inputs
                .iter()
                .map(String::as_str)
                .map(parse_assignment)
                .collect::<FormulaResult<Vec<_>>>()?;
            tracing::info!(formula = %id, inputs = inputs.len(), "evaluating from arguments");
            let evaluated = CatalogEntry::from_inputs(id, inputs)?.evaluate()?;
            print_evaluated(&evaluated, format)
        }
        Commands::EvalJson { json } => {
            let entry = CatalogEntry::from_json(&json)?;
            tracing::info!(formula = %entry.id(), "evaluating from json");
            print_evaluated(&entry.evaluate()?, format)
        }
        Commands::Docs => {
            print!("{}", generate_catalog_markdown());
            Ok(())
        }
    }
}

// ============================================================================
// Input parsing
// ============================================================================

/// Parse `name=value` or `name=v1,v2,...`
fn parse_assignment(arg: &str) -> FormulaResult<(String, InputValue)> {
    let (name, raw) = arg
        .split_once('=')
        .ok_or_else(|| FormulaError::invalid_input(arg, "", "expected name=value"))?;
    let name = name.trim();
    let raw = raw.trim();

    let parse = |text: &str| -> FormulaResult<f64> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| FormulaError::invalid_input(name, raw, "not a number"))
    };

    let value = if raw.contains(',') {
        let values = raw
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(parse)
            .collect::<FormulaResult<Vec<f64>>>()?;
        InputValue::List(values)
    } else {
        InputValue::Scalar(parse(raw)?)
    };

    Ok((name.to_string(), value))
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: serde::Serialize>(value: &T) -> FormulaResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| FormulaError::invalid_input("output", "", e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn list(document: Option<&str>, format: OutputFormat) -> FormulaResult<()> {
    let ids = match document {
        Some(key) => {
            let document = SourceDocument::from_key(key).ok_or_else(|| FormulaError::unknown_formula(key, "*"))?;
            FormulaId::in_document(document)
        }
        None => FormulaId::all().to_vec(),
    };

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = ids
                .iter()
                .map(|id| {
                    serde_json::json!({
                        "id": id,
                        "document": id.document(),
                        "label": id.label(),
                        "name": id.metadata().name,
                    })
                })
                .collect();
            print_json(&rows)
        }
        OutputFormat::Text => {
            for id in ids {
                println!("{:<26} {:<10} {}", id.id(), id.label(), id.metadata().name);
            }
            Ok(())
        }
    }
}

fn show(id: FormulaId, format: OutputFormat) -> FormulaResult<()> {
    let meta = id.metadata();

    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "id": id,
            "document": id.document(),
            "label": id.label(),
            "return_symbol": id.return_symbol(),
            "metadata": meta,
        }));
    }

    println!("Formula ({}) - {}", id.label(), meta.name);
    println!("{}", id.document().citation(id.label()));
    println!("Article {}", meta.article);
    println!();
    println!("Result: {} [{}]", id.return_symbol(), meta.unit);
    println!();
    println!("Inputs:");
    for var in &meta.variables {
        println!("  {:<12} {:<24} [{}] {}", var.name, var.symbol, var.unit, var.description);
    }
    Ok(())
}

fn print_evaluated(evaluated: &EvaluatedFormula, format: OutputFormat) -> FormulaResult<()> {
    let report = evaluated.report();

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    println!("Formula ({}) - {}", report.label, report.name);
    println!("{}", report.citation);
    println!();
    for input in &report.inputs {
        println!("  {:<12} = {}", input.name, input.value);
    }
    println!("  {:<12} = {} [{}]", "result", report.result, report.unit);
    println!();
    println!("complete: {}", report.complete);
    println!("short:    {}", report.short);
    Ok(())
}
