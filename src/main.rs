use std::process::ExitCode;

use anyhow::Context;

use curl2min::cli::Invocation;
use curl2min::config::Config;
use curl2min::logging::init_tracing;
use curl2min::minimize::{abort_message, MinimizeError};
use curl2min::pipeline::{curl_executor, minimize_command, minimize_options};

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let invocation = match Invocation::try_parse_from(argv) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };

    match run(&invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(cause) = err.downcast_ref::<MinimizeError>() {
                eprintln!("{}", abort_message(cause));
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(invocation: &Invocation) -> anyhow::Result<()> {
    let mut config = load_config(invocation)?;
    invocation.cli.apply(&mut config);
    config.validate().context("invalid command-line options")?;

    init_tracing(config.defaults.quiet);

    let report = minimize_command(
        curl_executor(&config),
        &invocation.curl_args,
        &minimize_options(&config),
    )?;

    if invocation.cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        tracing::info!("Minimal curl is:");
        println!("{}", report.command);
    }
    Ok(())
}

fn load_config(invocation: &Invocation) -> anyhow::Result<Config> {
    match &invocation.cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Config::load().context("loading default config"),
    }
}
