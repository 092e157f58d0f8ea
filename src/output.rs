//! Rendering the minimized command.

use std::borrow::Cow;

use serde::Serialize;

use crate::args::ArgUnit;
use crate::minimize::Minimized;

/// Closes the quote, emits a double-quoted `'`, reopens the quote.
const SINGLE_QUOTE_ESCAPE: &str = r#"'"'"'"#;

fn is_bare(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'/' | b'-'))
}

/// Quote `token` for a POSIX shell.
///
/// Tokens made only of `[A-Za-z0-9_/-]` are returned as-is; everything else
/// is single-quoted.
pub fn quote(token: &str) -> Cow<'_, str> {
    if is_bare(token) {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("'{}'", token.replace('\'', SINGLE_QUOTE_ESCAPE)))
    }
}

/// `curl` followed by every token of every unit, each quoted.
pub fn render_command(units: &[ArgUnit]) -> String {
    std::iter::once(Cow::Borrowed("curl"))
        .chain(units.iter().flat_map(|u| u.tokens().iter().map(|t| quote(t))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Machine-readable summary of a run (`--json`).
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub command: String,
    pub args: Vec<ArgUnit>,
    pub status: u16,
    pub sha256: String,
    pub dropped: Vec<ArgUnit>,
    pub dropped_cookies: Vec<String>,
    pub requests: usize,
}

impl Report {
    pub fn new(minimized: &Minimized, requests: usize) -> Self {
        Self {
            command: render_command(&minimized.units),
            args: minimized.units.clone(),
            status: minimized.baseline.status,
            sha256: minimized.baseline.digest_hex(),
            dropped: minimized.dropped.clone(),
            dropped_cookies: minimized.dropped_crumbs.clone(),
            requests,
        }
    }
}
