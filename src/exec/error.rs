use thiserror::Error;

/// Errors raised while replaying a request.
///
/// None of these are retried: a transport that cannot produce a status line
/// is a defect, not a transient condition.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The transport binary could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// No `< HTTP/x y` line in the verbose diagnostics.
    #[error("No status found in response for: {command}")]
    MissingStatus { command: String },
}
