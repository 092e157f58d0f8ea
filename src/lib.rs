//! curl2min: strip a captured curl command down to the arguments the server
//! actually needs to produce the same response.

pub mod args;
pub mod cli;
pub mod config;
pub mod exec;
pub mod logging;
pub mod minimize;
pub mod output;
pub mod pipeline;
