//! Run reports and their table, markdown and JSON renderings.

use crate::metrics::{BenchmarkResult, Outcome};
use crate::settings::{ErrorPolicy, RunnerKind};
use bench_core::Shape;
use bench_schemas::{Library, Mode};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;

/// Averages below this are reported as fast.
pub const FAST_THRESHOLD_MS: f64 = 10.0;
/// Averages below this (and not fast) are reported as medium.
pub const MEDIUM_THRESHOLD_MS: f64 = 50.0;

/// Severity band of an average pass time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fast,
    Medium,
    Slow,
}

impl Severity {
    pub fn from_ms(ms: f64) -> Self {
        if ms < FAST_THRESHOLD_MS {
            Severity::Fast
        } else if ms < MEDIUM_THRESHOLD_MS {
            Severity::Medium
        } else {
            Severity::Slow
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Severity::Fast => Color::Green,
            Severity::Medium => Color::Yellow,
            Severity::Slow => Color::Red,
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub runner: RunnerKind,
    pub error_policy: ErrorPolicy,
    /// Library that speedups are measured against.
    pub baseline: Library,
    /// Timed passes per benchmark; manual runner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    pub results: Vec<BenchmarkResult>,
}

impl RunReport {
    pub fn new(runner: RunnerKind, error_policy: ErrorPolicy, results: Vec<BenchmarkResult>) -> Self {
        Self {
            runner,
            error_policy,
            baseline: Library::Serde,
            iterations: None,
            results,
        }
    }

    pub fn with_baseline(mut self, baseline: Library) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Shapes present, in result order.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes = Vec::new();
        for result in &self.results {
            if !shapes.contains(&result.shape) {
                shapes.push(result.shape);
            }
        }
        shapes
    }

    pub fn results_for(&self, shape: Shape) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(move |r| r.shape == shape)
    }

    /// Measured results for `shape`, fastest first. Failed and delegated
    /// entries are excluded. Ties keep registration order.
    pub fn ranking(&self, shape: Shape) -> Vec<&BenchmarkResult> {
        let mut ranked: Vec<&BenchmarkResult> = self
            .results_for(shape)
            .filter(|r| r.timing().is_some())
            .collect();
        ranked.sort_by(|a, b| a.average_ms().total_cmp(&b.average_ms()));
        ranked
    }

    pub fn failures(&self, shape: Shape) -> impl Iterator<Item = &BenchmarkResult> {
        self.results_for(shape).filter(|r| r.is_failed())
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failed())
    }

    /// The baseline library's default-mode measurement for `shape`.
    pub fn baseline_for(&self, shape: Shape) -> Option<&BenchmarkResult> {
        self.results_for(shape).find(|r| {
            r.library == self.baseline && r.mode == Mode::Default && r.timing().is_some()
        })
    }

    /// Baseline average divided by `result`'s average.
    pub fn speedup(&self, result: &BenchmarkResult) -> Option<f64> {
        let candidate = result.timing()?.average_ms;
        let baseline = self.baseline_for(result.shape)?.timing()?.average_ms;
        if candidate > 0.0 {
            Some(baseline / candidate)
        } else {
            None
        }
    }

    /// Ranked summary lines for `shape`.
    pub fn ranking_lines(&self, shape: Shape) -> Vec<String> {
        let ranked = self.ranking(shape);
        let Some(fastest) = ranked.first() else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(ranked.len());
        for (position, result) in ranked.iter().enumerate() {
            let line = if position == 0 {
                format!("1. {} (fastest)", result.name)
            } else {
                let ratio = if fastest.average_ms() > 0.0 {
                    format_ratio(result.average_ms() / fastest.average_ms())
                } else {
                    "-".to_string()
                };
                format!(
                    "{}. {} ({} slower than {})",
                    position + 1,
                    result.name,
                    ratio,
                    fastest.name
                )
            };
            lines.push(line);
        }
        lines
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn section_title(report: &RunReport, shape: Shape) -> String {
    let records = report
        .results_for(shape)
        .map(|r| r.records)
        .next()
        .unwrap_or(0);
    match report.iterations {
        Some(iterations) => format!(
            "{shape} ({} records x {} iterations)",
            format_number(records as u64),
            format_number(iterations as u64)
        ),
        None => format!("{shape} ({} records)", format_number(records as u64)),
    }
}

/// Format a report as terminal tables, one per shape.
pub fn format_table(report: &RunReport) -> String {
    let mut output = String::new();

    for shape in report.shapes() {
        output.push_str(&format!("\n{}\n", section_title(report, shape)));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            "Benchmark".to_string(),
            "Avg".to_string(),
            "Min".to_string(),
            "Max".to_string(),
            "Records/sec".to_string(),
            format!("vs {}", report.baseline),
        ]);

        for result in report.results_for(shape) {
            let row = match (result.timing(), result.is_failed()) {
                (Some(timing), _) => vec![
                    Cell::new(&result.name),
                    Cell::new(format_ms(timing.average_ms))
                        .fg(Severity::from_ms(timing.average_ms).color()),
                    Cell::new(format_ms(timing.min_ms)),
                    Cell::new(format_ms(timing.max_ms)),
                    Cell::new(
                        result
                            .records_per_second()
                            .map(format_throughput)
                            .unwrap_or_else(|| "-".to_string()),
                    ),
                    Cell::new(
                        report
                            .speedup(result)
                            .map(format_ratio)
                            .unwrap_or_else(|| "-".to_string()),
                    ),
                ],
                (None, true) => vec![
                    Cell::new(&result.name),
                    Cell::new("FAILED").fg(Color::Red),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                ],
                (None, false) => vec![
                    Cell::new(&result.name),
                    Cell::new("see criterion").fg(Color::Cyan),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                ],
            };
            table.add_row(row);
        }

        output.push_str(&table.to_string());
        output.push('\n');

        let ranking = report.ranking_lines(shape);
        if !ranking.is_empty() {
            output.push_str("\nRanking:\n");
            for line in ranking {
                output.push_str(&format!("  {line}\n"));
            }
        }

        let failures: Vec<&BenchmarkResult> = report.failures(shape).collect();
        if !failures.is_empty() {
            output.push_str("\nFailed:\n");
            for result in failures {
                output.push_str(&format!("  {}: {}\n", result.name, failure_reason(result)));
            }
        }
    }

    output
}

/// Format a report as GitHub markdown.
pub fn format_markdown(report: &RunReport) -> String {
    let mut output = String::new();

    output.push_str("# Validation Benchmark Results\n\n");
    output.push_str(&format!("- **Runner:** {}\n", report.runner));
    output.push_str(&format!("- **Error policy:** {}\n", report.error_policy));
    output.push_str(&format!("- **Baseline:** {}\n", report.baseline));

    for shape in report.shapes() {
        output.push_str(&format!("\n## {}\n\n", section_title(report, shape)));
        output.push_str(&format!(
            "| Benchmark | Avg | Min | Max | Records/sec | vs {} |\n",
            report.baseline
        ));
        output.push_str("|-----------|-----|-----|-----|-------------|------|\n");

        for result in report.results_for(shape) {
            match result.timing() {
                Some(timing) => output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    result.name,
                    format_ms(timing.average_ms),
                    format_ms(timing.min_ms),
                    format_ms(timing.max_ms),
                    result
                        .records_per_second()
                        .map(format_throughput)
                        .unwrap_or_else(|| "-".to_string()),
                    report
                        .speedup(result)
                        .map(format_ratio)
                        .unwrap_or_else(|| "-".to_string()),
                )),
                None => {
                    let status = if result.is_failed() {
                        "failed"
                    } else {
                        "see criterion"
                    };
                    output.push_str(&format!("| {} | {status} | - | - | - | - |\n", result.name));
                }
            }
        }

        let ranking = report.ranking_lines(shape);
        if !ranking.is_empty() {
            output.push_str("\n**Ranking**\n\n");
            for line in ranking {
                output.push_str(&format!("{line}\n"));
            }
        }

        for result in report.failures(shape) {
            output.push_str(&format!(
                "\n- `{}` failed: {}\n",
                result.name,
                failure_reason(result)
            ));
        }
    }

    output
}

fn failure_reason(result: &BenchmarkResult) -> &str {
    match &result.outcome {
        Outcome::Failed { reason } => reason,
        _ => "",
    }
}

/// Milliseconds with three decimals.
pub fn format_ms(ms: f64) -> String {
    format!("{ms:.3} ms")
}

/// Records per second with `K`/`M` suffixes.
pub fn format_throughput(per_second: f64) -> String {
    if per_second >= 1_000_000.0 {
        format!("{:.2}M/s", per_second / 1_000_000.0)
    } else if per_second >= 1_000.0 {
        format!("{:.1}K/s", per_second / 1_000.0)
    } else {
        format!("{per_second:.0}/s")
    }
}

/// A ratio such as `2.50x`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}x")
}

/// Format number with thousands separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
