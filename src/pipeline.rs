//! Pipeline: ties classification, replay and minimization together.

use crate::args::classify;
use crate::config::Config;
use crate::exec::{CountingExecutor, CurlExecutor, Executor};
use crate::minimize::{minimize, MinimizeError, MinimizeOptions};
use crate::output::Report;

/// Executor described by `config`.
pub fn curl_executor(config: &Config) -> CurlExecutor {
    CurlExecutor::new(&config.curl.program).with_max_time(config.curl.max_time_seconds)
}

/// Minimization options described by `config`.
pub fn minimize_options(config: &Config) -> MinimizeOptions {
    MinimizeOptions {
        expected_status: config.defaults.expected_status,
        jobs: config.defaults.jobs,
    }
}

/// Minimize the curl command `curl_args` (without the leading `curl`).
///
/// This is the main entry point: classify → minimize → report.
pub fn minimize_command<E: Executor>(
    executor: E,
    curl_args: &[String],
    options: &MinimizeOptions,
) -> Result<Report, MinimizeError> {
    let classified = classify(curl_args);
    for warning in &classified.warnings {
        tracing::warn!("{}", warning);
    }

    let executor = CountingExecutor::new(executor);
    let minimized = minimize(&executor, &classified.units, options)?;

    tracing::info!(requests = executor.calls(), "Success!");
    Ok(Report::new(&minimized, executor.calls()))
}
