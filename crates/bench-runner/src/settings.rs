//! Runner selection and runner-level settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens when a validator rejects a record mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run on the first rejected record.
    Abort,
    /// Record the benchmark as failed and move on.
    #[default]
    Continue,
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPolicy::Abort => write!(f, "abort"),
            ErrorPolicy::Continue => write!(f, "continue"),
        }
    }
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "continue" => Ok(ErrorPolicy::Continue),
            _ => Err(format!("Unknown error policy: {s}. Valid: abort, continue")),
        }
    }
}

/// Which runner executes the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerKind {
    /// Hand-rolled timing loop with min/avg/max aggregation.
    #[default]
    Manual,
    /// Hand each benchmark to criterion.
    Criterion,
}

impl std::fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerKind::Manual => write!(f, "manual"),
            RunnerKind::Criterion => write!(f, "criterion"),
        }
    }
}

impl std::str::FromStr for RunnerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(RunnerKind::Manual),
            "criterion" => Ok(RunnerKind::Criterion),
            _ => Err(format!("Unknown runner: {s}. Valid: manual, criterion")),
        }
    }
}

/// Settings forwarded to criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionSettings {
    pub warm_up_time: Duration,
    pub measurement_time: Duration,
    pub sample_size: usize,
}

impl CriterionSettings {
    /// Criterion refuses fewer samples than this.
    pub const MIN_SAMPLE_SIZE: usize = 10;

    pub fn validate(&self) -> Result<(), String> {
        if self.warm_up_time.is_zero() {
            return Err("criterion warm-up time must be greater than zero".to_string());
        }
        if self.measurement_time.is_zero() {
            return Err("criterion measurement time must be greater than zero".to_string());
        }
        if self.sample_size < Self::MIN_SAMPLE_SIZE {
            return Err(format!(
                "criterion sample size must be at least {}, got {}",
                Self::MIN_SAMPLE_SIZE,
                self.sample_size
            ));
        }
        Ok(())
    }
}

impl Default for CriterionSettings {
    fn default() -> Self {
        Self {
            warm_up_time: Duration::from_secs(1),
            measurement_time: Duration::from_secs(3),
            sample_size: 50,
        }
    }
}

/// Everything a runner needs besides the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub kind: RunnerKind,
    /// Timed passes per benchmark (manual runner).
    pub iterations: usize,
    pub error_policy: ErrorPolicy,
    pub criterion: CriterionSettings,
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.kind {
            RunnerKind::Manual if self.iterations == 0 => {
                Err("iterations must be at least 1 for the manual runner".to_string())
            }
            RunnerKind::Manual => Ok(()),
            RunnerKind::Criterion => self.criterion.validate(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            kind: RunnerKind::default(),
            iterations: 100,
            error_policy: ErrorPolicy::default(),
            criterion: CriterionSettings::default(),
        }
    }
}
