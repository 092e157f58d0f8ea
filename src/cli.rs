//! Command-line surface: `curl2min [OPTIONS] curl [CURL_ARGUMENTS]...`

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::config::Config;

/// Options that take a separate value; a `curl` right after one of these is
/// that value, not the start of the curl command.
const VALUE_OPTIONS: &[&str] = &[
    "-s",
    "--expected-status",
    "-j",
    "--jobs",
    "--config",
    "--curl-program",
    "--max-time",
];

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "curl2min",
    version,
    about = "Strip a curl statement down to its essential arguments.",
    override_usage = "curl2min [OPTIONS] curl [CURL_ARGUMENTS]..."
)]
pub struct Cli {
    /// Don't print status messages to stderr.
    #[arg(short, long)]
    pub quiet: bool,

    /// Require the resulting status code to be STATUS [default: 200].
    #[arg(short = 's', long, value_name = "STATUS")]
    pub expected_status: Option<u16>,

    /// Run up to N leave-one-out trials concurrently [default: 1].
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Config file [default: <config dir>/curl2min/config.toml].
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// curl binary used for replays [default: curl].
    #[arg(long, value_name = "PATH")]
    pub curl_program: Option<String>,

    /// Abort each replay after SECS seconds.
    #[arg(long, value_name = "SECS")]
    pub max_time: Option<u64>,

    /// Print a JSON report instead of the bare command.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Overlay command-line values onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if self.quiet {
            config.defaults.quiet = true;
        }
        if let Some(status) = self.expected_status {
            config.defaults.expected_status = status;
        }
        if let Some(jobs) = self.jobs {
            config.defaults.jobs = jobs;
        }
        if let Some(program) = &self.curl_program {
            config.curl.program = program.clone();
        }
        if self.max_time.is_some() {
            config.curl.max_time_seconds = self.max_time;
        }
    }
}

/// A parsed command line: our options plus the opaque curl arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub cli: Cli,
    /// Everything after the `curl` token.
    pub curl_args: Vec<String>,
}

impl Invocation {
    /// Parse a full argv (program name first).
    ///
    /// `--help` and `--version` work without a `curl` token; anything else
    /// without one is a usage error.
    pub fn try_parse_from(argv: Vec<String>) -> Result<Self, clap::Error> {
        let (options, curl_args) = split_at_curl(argv);
        let cli = Cli::try_parse_from(options)?;
        let Some(curl_args) = curl_args else {
            return Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "expected `curl` followed by the arguments to minimize",
            ));
        };
        Ok(Self { cli, curl_args })
    }
}

/// Split argv at the first `curl` token that is not an option value.
///
/// Returns our own argv (program name included) and, if found, the tokens
/// after `curl`.
pub fn split_at_curl(mut argv: Vec<String>) -> (Vec<String>, Option<Vec<String>>) {
    let mut i = 1;
    while i < argv.len() {
        if argv[i] == "curl" {
            let curl_args = argv.split_off(i + 1);
            argv.truncate(i);
            return (argv, Some(curl_args));
        }
        i += if VALUE_OPTIONS.contains(&argv[i].as_str()) { 2 } else { 1 };
    }
    (argv, None)
}
