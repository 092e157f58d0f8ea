//! Shared test utilities: simulated servers that stand in for curl.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};

use curl2min::args::{flatten, ArgUnit};
use curl2min::exec::{ExecError, Executor, Fingerprint, Replay};
use parking_lot::Mutex;

type Respond = dyn Fn(&[String]) -> (u16, String) + Send + Sync;

/// Deterministic in-process "server": the response is a pure function of the
/// replayed tokens. Every request is recorded.
pub struct SimulatedServer {
    respond: Box<Respond>,
    requests: Mutex<Vec<Vec<String>>>,
}

impl SimulatedServer {
    pub fn new(respond: impl Fn(&[String]) -> (u16, String) + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().clone()
    }
}

impl Executor for SimulatedServer {
    fn run(&self, units: &[ArgUnit]) -> Result<Replay, ExecError> {
        let tokens = flatten(units);
        self.requests.lock().push(tokens.clone());
        let (status, body) = (self.respond)(&tokens);
        Ok(Replay {
            fingerprint: Fingerprint::of(status, body.as_bytes()),
            diagnostics: format!("< HTTP/1.1 {} OK\n", status),
        })
    }
}

/// A target whose response alternates between two canned replies.
pub struct Alternating {
    replies: [(u16, &'static str); 2],
    calls: AtomicUsize,
}

impl Alternating {
    pub fn new(first: (u16, &'static str), second: (u16, &'static str)) -> Self {
        Self {
            replies: [first, second],
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Executor for Alternating {
    fn run(&self, _units: &[ArgUnit]) -> Result<Replay, ExecError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let (status, body) = self.replies[n % 2];
        Ok(Replay {
            fingerprint: Fingerprint::of(status, body.as_bytes()),
            diagnostics: String::new(),
        })
    }
}

pub fn raw(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Whether `flag value` appears as adjacent tokens.
pub fn has_pair(tokens: &[String], flag: &str, value: &str) -> bool {
    tokens.windows(2).any(|w| w[0] == flag && w[1] == value)
}

/// Whether `token` appears anywhere.
pub fn has_token(tokens: &[String], token: &str) -> bool {
    tokens.iter().any(|t| t == token)
}

/// All crumbs of all `-H 'Cookie: ...'` headers.
pub fn crumbs(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .filter(|w| w[0] == "-H")
        .filter_map(|w| w[1].strip_prefix("Cookie: "))
        .flat_map(|v| v.split("; "))
        .map(str::to_string)
        .collect()
}

pub fn has_crumb(tokens: &[String], crumb: &str) -> bool {
    crumbs(tokens).iter().any(|c| c == crumb)
}
