//! Argument assembler: the argv of a single replay, in one place.

use crate::args::unit::{flatten, ArgUnit};

/// Builder for the arguments passed to the spawned curl process.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    args: Vec<String>,
}

impl ArgAssembler {
    /// Start with an empty arg list.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Verbose diagnostics on stderr, no progress meter.
    ///
    /// The executor reads the status line from the verbose stream, which is
    /// why user-supplied `-v`/`-s` are dropped by the classifier.
    pub fn with_diagnostics(mut self) -> Self {
        self.args.push("-v".into());
        self.args.push("-s".into());
        self
    }

    /// Cap the duration of each replay.
    pub fn with_max_time(mut self, seconds: Option<u64>) -> Self {
        if let Some(seconds) = seconds {
            self.args.push("--max-time".into());
            self.args.push(seconds.to_string());
        }
        self
    }

    /// Append the units under test.
    pub fn with_units(mut self, units: &[ArgUnit]) -> Self {
        self.args.extend(flatten(units));
        self
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}

impl Default for ArgAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_come_first() {
        let args = ArgAssembler::new()
            .with_diagnostics()
            .with_max_time(Some(10))
            .with_units(&[ArgUnit::paired("--url", "https://x/")])
            .build();
        assert_eq!(args, vec!["-v", "-s", "--max-time", "10", "--url", "https://x/"]);
    }

    #[test]
    fn max_time_is_optional() {
        let args = ArgAssembler::new().with_max_time(None).build();
        assert!(args.is_empty());
    }
}
