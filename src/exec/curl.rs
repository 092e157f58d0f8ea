//! Executor backed by the `curl` binary.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::args::{ArgAssembler, ArgUnit};
use crate::exec::{ExecError, Executor, Fingerprint, Replay};

static STATUS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^< HTTP/[0-9.]+ ([0-9]+)").expect("status line pattern is valid")
});

/// Status code of the first response status line in curl's verbose output.
pub fn parse_status_line(diagnostics: &str) -> Option<u16> {
    STATUS_LINE
        .captures(diagnostics)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Replays a request by spawning curl with `-v -s` and the units under test.
#[derive(Debug, Clone)]
pub struct CurlExecutor {
    program: PathBuf,
    max_time: Option<u64>,
}

impl CurlExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            max_time: None,
        }
    }

    /// Pass `--max-time` on every replay.
    pub fn with_max_time(mut self, seconds: Option<u64>) -> Self {
        self.max_time = seconds;
        self
    }
}

impl Executor for CurlExecutor {
    fn run(&self, units: &[ArgUnit]) -> Result<Replay, ExecError> {
        let args = ArgAssembler::new()
            .with_diagnostics()
            .with_max_time(self.max_time)
            .with_units(units)
            .build();
        let program = self.program.display().to_string();
        tracing::debug!(program = %program, ?args, "replaying request");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExecError::Spawn {
                program: program.clone(),
                source,
            })?;

        let diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::debug!(exit = ?output.status.code(), "{}", diagnostics);

        let Some(status) = parse_status_line(&diagnostics) else {
            return Err(ExecError::MissingStatus {
                command: format!("{} {}", program, args.join(" ")),
            });
        };

        Ok(Replay {
            fingerprint: Fingerprint::of(status, &output.stdout),
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_status_line() {
        let diag = "* Connected\n> GET / HTTP/1.1\n< HTTP/1.1 301 Moved\n< HTTP/1.1 200 OK\n";
        assert_eq!(parse_status_line(diag), Some(301));
    }

    #[test]
    fn parses_http2_status_line() {
        assert_eq!(parse_status_line("< HTTP/2 204 \r\n"), Some(204));
    }

    #[test]
    fn request_lines_are_not_status_lines() {
        assert_eq!(parse_status_line("> GET / HTTP/1.1\n* closing\n"), None);
        assert_eq!(parse_status_line("text < HTTP/1.1 200\n"), None);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let exec = CurlExecutor::new("/nonexistent/curl2min-test-curl");
        let err = exec.run(&[]).unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }
}
