//! Request replay: executors and response fingerprints.

mod curl;
mod error;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use sha2::{Digest, Sha256};

use crate::args::ArgUnit;

pub use curl::{parse_status_line, CurlExecutor};
pub use error::ExecError;

/// Identity of a response for equality purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub status: u16,
    pub digest: [u8; 32],
}

impl Fingerprint {
    /// Fingerprint a response from its status and raw body bytes.
    pub fn of(status: u16, body: &[u8]) -> Self {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(body));
        Self { status, digest }
    }

    /// Lower-case hex form of the body digest.
    pub fn digest_hex(&self) -> String {
        self.digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sha256:{}", self.status, self.digest_hex())
    }
}

/// Outcome of one replay.
#[derive(Debug, Clone)]
pub struct Replay {
    pub fingerprint: Fingerprint,
    /// Raw diagnostic output of the transport (curl's verbose stream).
    pub diagnostics: String,
}

/// Capability to replay a request with a given set of argument units.
///
/// `Sync` so leave-one-out trials can share one executor across workers.
pub trait Executor: Sync {
    fn run(&self, units: &[ArgUnit]) -> Result<Replay, ExecError>;
}

impl<E: Executor + ?Sized> Executor for &E {
    fn run(&self, units: &[ArgUnit]) -> Result<Replay, ExecError> {
        (**self).run(units)
    }
}

/// Executor wrapper that counts replays.
#[derive(Debug)]
pub struct CountingExecutor<E> {
    inner: E,
    calls: AtomicUsize,
}

impl<E: Executor> CountingExecutor<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of replays attempted so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E: Executor> Executor for CountingExecutor<E> {
    fn run(&self, units: &[ArgUnit]) -> Result<Replay, ExecError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.run(units)
    }
}
