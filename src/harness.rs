//! End-to-end benchmark flow: generate datasets, register one benchmark per
//! (library, mode, shape), run them and render the report.

use crate::config::{BenchConfig, OutputFormat};
use anyhow::Context;
use bench_core::Dataset;
use bench_generator::DataGenerator;
use bench_runner::{format_markdown, format_table, runner_for, BenchmarkRegistry, RunReport};
use bench_schemas::build_all;
use tracing::info;

/// Generate one dataset per configured shape, in order.
pub fn generate_datasets(config: &BenchConfig) -> anyhow::Result<Vec<Dataset>> {
    let mut generator = DataGenerator::new(config.seed).with_name_style(config.name_style);
    match generator.seed() {
        Some(seed) => info!(seed, "Generating datasets"),
        None => info!("Generating datasets from OS entropy"),
    }

    config
        .shapes
        .iter()
        .map(|&shape| {
            generator
                .dataset(shape, config.data_points)
                .with_context(|| format!("Failed to generate {shape} dataset"))
        })
        .collect()
}

/// Register every configured library against every dataset.
pub fn build_registry(
    config: &BenchConfig,
    datasets: &[Dataset],
) -> anyhow::Result<BenchmarkRegistry> {
    let mut registry = BenchmarkRegistry::new();
    for dataset in datasets {
        let validators = build_all(&config.libraries, dataset.shape())
            .with_context(|| format!("Failed to prepare {} schemas", dataset.shape()))?;
        registry.register_all(dataset, validators)?;
    }
    info!(benchmarks = registry.len(), "Registered benchmarks");
    Ok(registry)
}

/// Run the full benchmark flow described by `config`.
pub fn run(config: &BenchConfig) -> anyhow::Result<RunReport> {
    info!(
        data_points = config.data_points,
        runner = %config.runner.kind,
        error_policy = %config.runner.error_policy,
        "Starting benchmark run"
    );

    let datasets = generate_datasets(config)?;
    let registry = build_registry(config, &datasets)?;

    let mut runner = runner_for(&config.runner)?;
    let report = runner
        .run(&registry)
        .context("Benchmark run aborted")?
        .with_baseline(config.baseline);

    info!(
        results = report.results.len(),
        failures = report.results.iter().filter(|r| r.is_failed()).count(),
        "Benchmark run finished"
    );
    Ok(report)
}

/// Render `report` in `format`.
pub fn render(report: &RunReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(report)),
        OutputFormat::Markdown => Ok(format_markdown(report)),
        OutputFormat::Json => report.to_json().context("Failed to serialize report"),
    }
}
