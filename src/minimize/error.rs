use std::fmt;

use thiserror::Error;

use crate::exec::ExecError;

/// Where every abort message points the user.
pub const TROUBLESHOOTING_URL: &str = "https://github.com/fx2301/curl2min#Troubleshooting";

/// Reasons a minimization run is abandoned. All of them are terminal.
#[derive(Debug, Error)]
pub enum MinimizeError {
    #[error("Status codes vary across identical requests: {first} vs {second}")]
    StatusVaries { first: u16, second: u16 },

    #[error("Response content varies across identical requests: sha256sum {first} vs {second}")]
    ContentVaries { first: String, second: String },

    #[error(
        "Status was {actual} not the expected {expected}. A cause of this could be expired cookies. \
         Use --expected-status {actual} if this is expected."
    )]
    UnexpectedStatus { actual: u16, expected: u16 },

    #[error("Leave one out assumption for arguments failed! A cause of this could be expired cookies.")]
    LeaveOneOutViolated,

    #[error(
        "Cookie disassemble and reassemble assumption failed! A cause of this could be expired cookies."
    )]
    CookieReassemblyFailed,

    #[error("Leave one out assumption for cookies failed! A cause of this could be expired cookies.")]
    CookieLeaveOneOutViolated,

    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// The single user-facing failure format.
pub fn abort_message(cause: impl fmt::Display) -> String {
    format!("Aborting. {} See {}", cause, TROUBLESHOOTING_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_suggests_override() {
        let err = MinimizeError::UnexpectedStatus {
            actual: 403,
            expected: 200,
        };
        let msg = err.to_string();
        assert!(msg.contains("Status was 403 not the expected 200"));
        assert!(msg.contains("--expected-status 403"));
        assert!(msg.contains("expired cookies"));
    }

    #[test]
    fn abort_message_points_to_troubleshooting() {
        let msg = abort_message(MinimizeError::LeaveOneOutViolated);
        assert!(msg.starts_with("Aborting. Leave one out assumption"));
        assert!(msg.ends_with(TROUBLESHOOTING_URL));
    }

    #[test]
    fn exec_errors_pass_through_unchanged() {
        let err = MinimizeError::from(ExecError::MissingStatus {
            command: "curl -v -s".into(),
        });
        assert_eq!(err.to_string(), "No status found in response for: curl -v -s");
    }
}
