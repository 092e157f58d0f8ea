use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub curl: CurlConfig,
}

/// Defaults for a minimization run. CLI flags override these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Status the baseline response must have (default: 200).
    #[serde(default = "default_expected_status")]
    pub expected_status: u16,
    /// Concurrent leave-one-out trials (default: 1).
    #[serde(default = "default_jobs")]
    pub jobs: usize,
    /// Suppress progress output (default: false).
    #[serde(default)]
    pub quiet: bool,
}

/// How replays are executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurlConfig {
    /// curl binary, looked up on `PATH` when not absolute (default: "curl").
    #[serde(default = "default_program")]
    pub program: String,
    /// Passed as `--max-time` on every replay when set.
    #[serde(default)]
    pub max_time_seconds: Option<u64>,
}

fn default_expected_status() -> u16 {
    200
}

fn default_jobs() -> usize {
    1
}

fn default_program() -> String {
    "curl".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            expected_status: default_expected_status(),
            jobs: default_jobs(),
            quiet: false,
        }
    }
}

impl Default for CurlConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            max_time_seconds: None,
        }
    }
}
