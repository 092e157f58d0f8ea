//! Configuration file support.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, CurlConfig, Defaults};
