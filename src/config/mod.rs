//! Benchmark configuration.
//!
//! Settings are layered, lowest precedence first: built-in defaults, the
//! YAML file named by `--config`, the `--preset` sizes, then explicit flags
//! and their environment variables.

pub mod duration;

use bench_core::Shape;
use bench_generator::NameStyle;
use bench_runner::{CriterionSettings, ErrorPolicy, RunnerConfig, RunnerKind};
use bench_schemas::Library;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATA_POINTS: usize = 1000;
pub const DEFAULT_ITERATIONS: usize = 100;

/// Errors raised while assembling a [`BenchConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid {field} in config file: {message}")]
    InvalidValue { field: &'static str, message: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal tables
    #[default]
    Table,
    /// GitHub markdown
    Markdown,
    /// Machine-readable JSON
    Json,
}

/// Named benchmark sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetSize {
    Quick,
    Standard,
    Thorough,
}

impl std::fmt::Display for PresetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetSize::Quick => write!(f, "quick"),
            PresetSize::Standard => write!(f, "standard"),
            PresetSize::Thorough => write!(f, "thorough"),
        }
    }
}

impl std::str::FromStr for PresetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" | "q" => Ok(PresetSize::Quick),
            "standard" | "s" => Ok(PresetSize::Standard),
            "thorough" | "t" => Ok(PresetSize::Thorough),
            _ => Err(format!("Unknown preset: {s}")),
        }
    }
}

/// Dataset and iteration sizes of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub size: PresetSize,
    pub data_points: usize,
    pub iterations: usize,
}

impl Preset {
    pub fn by_size(size: PresetSize) -> Self {
        let (data_points, iterations) = match size {
            PresetSize::Quick => (100, 10),
            PresetSize::Standard => (DEFAULT_DATA_POINTS, DEFAULT_ITERATIONS),
            PresetSize::Thorough => (10_000, 200),
        };
        Self {
            size,
            data_points,
            iterations,
        }
    }
}

/// Command-line settings for a benchmark run. Every field is optional so
/// that unset flags fall through to the file, preset and defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct BenchArgs {
    /// YAML file with benchmark settings
    #[arg(long, env = "BENCH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Size preset: quick, standard or thorough
    #[arg(long, env = "BENCH_PRESET")]
    pub preset: Option<PresetSize>,

    /// Records generated per shape
    #[arg(long, env = "BENCH_DATA_POINTS")]
    pub data_points: Option<usize>,

    /// Timed passes per benchmark (manual runner)
    #[arg(long, env = "BENCH_ITERATIONS")]
    pub iterations: Option<usize>,

    /// Runner: manual or criterion
    #[arg(long, env = "BENCH_RUNNER")]
    pub runner: Option<RunnerKind>,

    /// What to do when a record is rejected: abort or continue
    #[arg(long, env = "BENCH_ERROR_POLICY")]
    pub error_policy: Option<ErrorPolicy>,

    /// Seed for reproducible datasets (OS entropy when unset)
    #[arg(long, env = "BENCH_SEED")]
    pub seed: Option<u64>,

    /// Record shapes to benchmark
    #[arg(long, value_delimiter = ',')]
    pub shapes: Option<Vec<Shape>>,

    /// Libraries to benchmark
    #[arg(long, value_delimiter = ',')]
    pub libraries: Option<Vec<Library>>,

    /// Library that speedups are measured against
    #[arg(long, env = "BENCH_BASELINE")]
    pub baseline: Option<Library>,

    /// Report format
    #[arg(long, value_enum, env = "BENCH_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Use user_{index} names instead of random ones
    #[arg(long)]
    pub sequential_names: bool,

    /// Criterion measurement time per benchmark, e.g. 3s
    #[arg(long, value_parser = duration::parse_duration)]
    pub measurement_time: Option<Duration>,

    /// Criterion warm-up time per benchmark, e.g. 1s
    #[arg(long, value_parser = duration::parse_duration)]
    pub warm_up_time: Option<Duration>,

    /// Criterion sample size
    #[arg(long)]
    pub sample_size: Option<usize>,
}

/// Settings read from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub preset: Option<PresetSize>,
    pub data_points: Option<usize>,
    pub iterations: Option<usize>,
    pub runner: Option<RunnerKind>,
    pub error_policy: Option<ErrorPolicy>,
    pub seed: Option<u64>,
    pub shapes: Option<Vec<Shape>>,
    pub libraries: Option<Vec<Library>>,
    pub baseline: Option<Library>,
    pub format: Option<OutputFormat>,
    pub sequential_names: Option<bool>,
    pub measurement_time: Option<String>,
    pub warm_up_time: Option<String>,
    pub sample_size: Option<usize>,
}

impl FileConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub data_points: usize,
    pub seed: Option<u64>,
    pub name_style: NameStyle,
    pub shapes: Vec<Shape>,
    pub libraries: Vec<Library>,
    pub baseline: Library,
    pub format: OutputFormat,
    pub runner: RunnerConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_points: DEFAULT_DATA_POINTS,
            seed: None,
            name_style: NameStyle::default(),
            shapes: Shape::ALL.to_vec(),
            libraries: Library::ALL.to_vec(),
            baseline: Library::Serde,
            format: OutputFormat::default(),
            runner: RunnerConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Resolve `args`, reading the config file it names, and validate.
    pub fn resolve(args: &BenchArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::from_layers(&file, args)
    }

    /// Layer `file` and `args` over the defaults, then validate.
    pub fn from_layers(file: &FileConfig, args: &BenchArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_file(file)?;

        if let Some(size) = args.preset.or(file.preset) {
            let preset = Preset::by_size(size);
            config.data_points = preset.data_points;
            config.runner.iterations = preset.iterations;
        }

        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: &FileConfig) -> Result<(), ConfigError> {
        if let Some(v) = file.data_points {
            self.data_points = v;
        }
        if let Some(v) = file.iterations {
            self.runner.iterations = v;
        }
        if let Some(v) = file.runner {
            self.runner.kind = v;
        }
        if let Some(v) = file.error_policy {
            self.runner.error_policy = v;
        }
        if file.seed.is_some() {
            self.seed = file.seed;
        }
        if let Some(v) = &file.shapes {
            self.shapes = v.clone();
        }
        if let Some(v) = &file.libraries {
            self.libraries = v.clone();
        }
        if let Some(v) = file.baseline {
            self.baseline = v;
        }
        if let Some(v) = file.format {
            self.format = v;
        }
        if file.sequential_names == Some(true) {
            self.name_style = NameStyle::Sequential;
        }
        if let Some(v) = &file.measurement_time {
            self.runner.criterion.measurement_time = file_duration("measurement_time", v)?;
        }
        if let Some(v) = &file.warm_up_time {
            self.runner.criterion.warm_up_time = file_duration("warm_up_time", v)?;
        }
        if let Some(v) = file.sample_size {
            self.runner.criterion.sample_size = v;
        }
        Ok(())
    }

    fn apply_args(&mut self, args: &BenchArgs) {
        if let Some(v) = args.data_points {
            self.data_points = v;
        }
        if let Some(v) = args.iterations {
            self.runner.iterations = v;
        }
        if let Some(v) = args.runner {
            self.runner.kind = v;
        }
        if let Some(v) = args.error_policy {
            self.runner.error_policy = v;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(v) = &args.shapes {
            self.shapes = v.clone();
        }
        if let Some(v) = &args.libraries {
            self.libraries = v.clone();
        }
        if let Some(v) = args.baseline {
            self.baseline = v;
        }
        if let Some(v) = args.format {
            self.format = v;
        }
        if args.sequential_names {
            self.name_style = NameStyle::Sequential;
        }
        if let Some(v) = args.measurement_time {
            self.runner.criterion.measurement_time = v;
        }
        if let Some(v) = args.warm_up_time {
            self.runner.criterion.warm_up_time = v;
        }
        if let Some(v) = args.sample_size {
            self.runner.criterion.sample_size = v;
        }
    }

    /// Check invariants and drop duplicate shapes and libraries.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.data_points == 0 {
            return Err(ConfigError::Invalid(
                "data_points must be at least 1".to_string(),
            ));
        }
        self.runner.validate().map_err(ConfigError::Invalid)?;

        dedup_in_order(&mut self.shapes);
        dedup_in_order(&mut self.libraries);

        if self.shapes.is_empty() {
            return Err(ConfigError::Invalid("no shapes selected".to_string()));
        }
        if self.libraries.is_empty() {
            return Err(ConfigError::Invalid("no libraries selected".to_string()));
        }
        if !self.libraries.contains(&self.baseline) {
            return Err(ConfigError::Invalid(format!(
                "baseline {} is not among the benchmarked libraries",
                self.baseline
            )));
        }
        Ok(())
    }

    pub fn criterion(&self) -> &CriterionSettings {
        &self.runner.criterion
    }
}

fn file_duration(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    duration::parse_duration(value).map_err(|e| ConfigError::InvalidValue {
        field,
        message: format!("{e:#}"),
    })
}

fn dedup_in_order<T: PartialEq + Copy>(items: &mut Vec<T>) {
    let mut seen = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(*item);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::from_layers(&FileConfig::default(), &BenchArgs::default()).unwrap();
        assert_eq!(config.data_points, 1000);
        assert_eq!(config.runner.iterations, 100);
        assert_eq!(config.runner.kind, RunnerKind::Manual);
        assert_eq!(config.runner.error_policy, ErrorPolicy::Continue);
        assert_eq!(config.baseline, Library::Serde);
        assert_eq!(config.shapes, vec![Shape::Simple, Shape::Event]);
        assert_eq!(config.libraries.len(), 4);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_layer_precedence() {
        let file = FileConfig {
            data_points: Some(500),
            iterations: Some(50),
            seed: Some(9),
            preset: Some(PresetSize::Quick),
            ..Default::default()
        };

        // Preset overrides the file's sizes; the file still supplies the seed.
        let config = BenchConfig::from_layers(&file, &BenchArgs::default()).unwrap();
        assert_eq!(config.data_points, 100);
        assert_eq!(config.runner.iterations, 10);
        assert_eq!(config.seed, Some(9));

        // Flags override both.
        let args = BenchArgs {
            data_points: Some(7),
            preset: Some(PresetSize::Thorough),
            ..Default::default()
        };
        let config = BenchConfig::from_layers(&file, &args).unwrap();
        assert_eq!(config.data_points, 7);
        assert_eq!(config.runner.iterations, 200);
    }

    #[test]
    fn test_yaml() {
        let yaml = r#"
runner: criterion
error_policy: abort
shapes: [event]
libraries: [serde, jsonschema]
format: markdown
sequential_names: true
measurement_time: 500ms
sample_size: 20
"#;
        let file = FileConfig::from_yaml(yaml).unwrap();
        let config = BenchConfig::from_layers(&file, &BenchArgs::default()).unwrap();

        assert_eq!(config.runner.kind, RunnerKind::Criterion);
        assert_eq!(config.runner.error_policy, ErrorPolicy::Abort);
        assert_eq!(config.shapes, vec![Shape::Event]);
        assert_eq!(config.libraries, vec![Library::Serde, Library::JsonSchema]);
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.name_style, NameStyle::Sequential);
        assert_eq!(config.criterion().measurement_time, Duration::from_millis(500));
        assert_eq!(config.criterion().sample_size, 20);
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        assert!(FileConfig::from_yaml("data_point: 3").is_err());
    }

    #[test]
    fn test_yaml_bad_duration() {
        let file = FileConfig {
            warm_up_time: Some("soon".to_string()),
            ..Default::default()
        };
        let err = BenchConfig::from_layers(&file, &BenchArgs::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "warm_up_time",
                ..
            }
        ));
    }

    #[test]
    fn test_validation() {
        let zero_points = BenchArgs {
            data_points: Some(0),
            ..Default::default()
        };
        assert!(BenchConfig::from_layers(&FileConfig::default(), &zero_points).is_err());

        let zero_iterations = BenchArgs {
            iterations: Some(0),
            ..Default::default()
        };
        assert!(BenchConfig::from_layers(&FileConfig::default(), &zero_iterations).is_err());

        let missing_baseline = BenchArgs {
            libraries: Some(vec![Library::Garde]),
            ..Default::default()
        };
        assert!(BenchConfig::from_layers(&FileConfig::default(), &missing_baseline).is_err());
    }

    #[test]
    fn test_duplicates_removed() {
        let args = BenchArgs {
            shapes: Some(vec![Shape::Event, Shape::Simple, Shape::Event]),
            libraries: Some(vec![Library::Serde, Library::Serde]),
            ..Default::default()
        };
        let config = BenchConfig::from_layers(&FileConfig::default(), &args).unwrap();
        assert_eq!(config.shapes, vec![Shape::Event, Shape::Simple]);
        assert_eq!(config.libraries, vec![Library::Serde]);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("quick".parse::<PresetSize>().unwrap(), PresetSize::Quick);
        assert_eq!("T".parse::<PresetSize>().unwrap(), PresetSize::Thorough);
        assert!("huge".parse::<PresetSize>().is_err());
    }
}
