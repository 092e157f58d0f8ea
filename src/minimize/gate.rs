//! Determinism gate: the baseline every later replay is compared against.

use crate::args::ArgUnit;
use crate::exec::{Executor, Fingerprint};
use crate::minimize::error::MinimizeError;

/// Replay the full argument set twice and return its fingerprint.
///
/// Fails if the two replays disagree, or if the (stable) status is not
/// `expected_status`. Nothing is reduced against an unstable target.
pub fn establish_baseline<E: Executor>(
    executor: &E,
    units: &[ArgUnit],
    expected_status: u16,
) -> Result<Fingerprint, MinimizeError> {
    tracing::info!("Testing for identical results...");
    let first = executor.run(units)?.fingerprint;
    let second = executor.run(units)?.fingerprint;

    if first.status != second.status {
        return Err(MinimizeError::StatusVaries {
            first: first.status,
            second: second.status,
        });
    }
    if first.digest != second.digest {
        return Err(MinimizeError::ContentVaries {
            first: first.digest_hex(),
            second: second.digest_hex(),
        });
    }
    if first.status != expected_status {
        return Err(MinimizeError::UnexpectedStatus {
            actual: first.status,
            expected: expected_status,
        });
    }

    tracing::debug!(baseline = %first, "baseline is stable");
    Ok(first)
}
