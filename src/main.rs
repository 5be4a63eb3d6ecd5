//! Command-line interface for schema-bench
//!
//! # Usage Examples
//!
//! ## Benchmarks
//! ```bash
//! # Default run: 1000 records per shape, 100 timed passes, all libraries
//! schema-bench run
//!
//! # Stop at the first rejected record
//! schema-bench run --error-policy abort
//!
//! # Settings from a file, with a flag on top
//! schema-bench run --config bench.yaml --iterations 20
//! ```
//!
//! ## Sample Data
//! ```bash
//! schema-bench generate --shape simple --count 5 --sequential-names
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`; the report goes to
//! stdout.

use anyhow::Context;
use bench_core::Shape;
use bench_generator::{DataGenerator, NameStyle};
use clap::{Parser, Subcommand};
use schema_bench::{harness, BenchArgs, BenchConfig};

#[derive(Parser)]
#[command(name = "schema-bench")]
#[command(about = "Compare the performance of Rust data-validation libraries")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate datasets, run every benchmark and print the comparison
    Run(BenchArgs),

    /// Print generated records as JSON lines
    Generate {
        /// Record shape: simple or event
        #[arg(long, default_value = "event")]
        shape: Shape,

        /// Number of records
        #[arg(long, default_value_t = 3)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Use user_{index} names for simple records
        #[arg(long)]
        sequential_names: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Logs on stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = BenchConfig::resolve(&args).context("Failed to load configuration")?;
            let report = harness::run(&config)?;
            println!("{}", harness::render(&report, config.format)?);
        }
        Commands::Generate {
            shape,
            count,
            seed,
            sequential_names,
        } => {
            let name_style = if sequential_names {
                NameStyle::Sequential
            } else {
                NameStyle::Random
            };
            let dataset = DataGenerator::new(seed)
                .with_name_style(name_style)
                .dataset(shape, count)
                .context("Failed to generate records")?;
            for record in dataset.values() {
                println!("{}", serde_json::to_string(record)?);
            }
        }
    }

    Ok(())
}
