//! The minimizer: which argument units (and cookie crumbs) the response
//! actually depends on.
//!
//! ```text
//! units → partition (required / undecided) → determinism gate
//!       → required-only short-circuit → leave-one-out over units
//!       → leave-one-out over cookie crumbs → minimized units
//! ```
//!
//! Request count for `n` undecided units and `c` crumbs is at most
//! `2 + 1 + n + 1 + 1 + c + 1`.

mod cookies;
mod error;
mod gate;
mod leave_one_out;

use crate::args::{cookie_prefix, is_cookie_header, split_crumbs, ArgUnit, COOKIE_PREFIX};
use crate::exec::{ExecError, Executor, Fingerprint};

pub use cookies::{reduce_crumbs, CookieReduction};
pub use error::{abort_message, MinimizeError, TROUBLESHOOTING_URL};
pub use gate::establish_baseline;
pub use leave_one_out::{LeaveOneOut, Reduction};

/// Knobs for a minimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimizeOptions {
    /// Status the stable baseline must have.
    pub expected_status: u16,
    /// Concurrent leave-one-out trials.
    pub jobs: usize,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            expected_status: 200,
            jobs: 1,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimized {
    /// Kept units: positionals, then kept flags, then the rebuilt cookie header.
    pub units: Vec<ArgUnit>,
    pub baseline: Fingerprint,
    /// Units proven inert, in input order.
    pub dropped: Vec<ArgUnit>,
    /// Cookie crumbs proven inert, in input order.
    pub dropped_crumbs: Vec<String>,
}

pub(crate) fn replay_fingerprint<E: Executor>(
    executor: &E,
    units: &[ArgUnit],
) -> Result<Fingerprint, ExecError> {
    Ok(executor.run(units)?.fingerprint)
}

/// Strip `units` down to the ones the response depends on.
pub fn minimize<E: Executor>(
    executor: &E,
    units: &[ArgUnit],
    options: &MinimizeOptions,
) -> Result<Minimized, MinimizeError> {
    let (mut required, undecided): (Vec<ArgUnit>, Vec<ArgUnit>) =
        units.iter().cloned().partition(ArgUnit::is_required);

    let all: Vec<ArgUnit> = required.iter().chain(&undecided).cloned().collect();
    let baseline = establish_baseline(executor, &all, options.expected_status)?;

    tracing::info!("Testing with minimum arguments...");
    if replay_fingerprint(executor, &required)? == baseline {
        return Ok(Minimized {
            units: required,
            baseline,
            dropped: undecided,
            dropped_crumbs: Vec::new(),
        });
    }

    tracing::info!("Testing with leave one out...");
    let reduction = LeaveOneOut::new(&baseline)
        .with_jobs(options.jobs)
        .reduce(&undecided, |kept: &[ArgUnit]| {
            let units: Vec<ArgUnit> = required.iter().chain(kept).cloned().collect();
            replay_fingerprint(executor, &units)
        })?;
    if !reduction.confirmed {
        return Err(MinimizeError::LeaveOneOutViolated);
    }

    let (cookie_headers, others): (Vec<ArgUnit>, Vec<ArgUnit>) =
        reduction.kept.into_iter().partition(is_cookie_header);
    required.extend(others);

    let crumbs = split_crumbs(&cookie_headers);
    let mut dropped_crumbs = Vec::new();
    if crumbs.is_empty() {
        // Valueless cookie headers have nothing to split; keep them whole.
        required.extend(cookie_headers);
    } else {
        let prefix = cookie_prefix(&cookie_headers).unwrap_or_else(|| COOKIE_PREFIX.to_string());
        let cookies = reduce_crumbs(
            executor,
            &required,
            &prefix,
            &crumbs,
            &baseline,
            options.jobs,
        )?;
        required.extend(cookies.header);
        dropped_crumbs = cookies.dropped;
    }

    Ok(Minimized {
        units: required,
        baseline,
        dropped: reduction.dropped,
        dropped_crumbs,
    })
}
