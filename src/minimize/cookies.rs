//! Cookie disaggregation: leave-one-out over the crumbs of kept cookie headers.

use crate::args::{cookie_unit, ArgUnit};
use crate::exec::{Executor, Fingerprint};
use crate::minimize::error::MinimizeError;
use crate::minimize::leave_one_out::LeaveOneOut;
use crate::minimize::replay_fingerprint;

/// Result of the crumb-level pass.
#[derive(Debug, Clone)]
pub struct CookieReduction {
    /// The rebuilt header, `None` when every crumb turned out inert.
    pub header: Option<ArgUnit>,
    pub dropped: Vec<String>,
}

/// Find the crumbs of `crumbs` that `baseline` depends on.
///
/// `required` is every other kept unit; a cookie header starting with
/// `prefix` is appended to it for each replay.
pub fn reduce_crumbs<E: Executor>(
    executor: &E,
    required: &[ArgUnit],
    prefix: &str,
    crumbs: &[String],
    baseline: &Fingerprint,
    jobs: usize,
) -> Result<CookieReduction, MinimizeError> {
    let replay = |crumbs: &[String]| {
        let mut units = required.to_vec();
        units.extend(cookie_unit(prefix, crumbs));
        replay_fingerprint(executor, &units)
    };

    tracing::info!("Verifying cookies disassemble and reassemble...");
    if replay(crumbs)? != *baseline {
        return Err(MinimizeError::CookieReassemblyFailed);
    }

    tracing::info!("Testing with leave one out for cookies...");
    let reduction = LeaveOneOut::new(baseline)
        .with_jobs(jobs)
        .with_label(prefix)
        .reduce(crumbs, replay)?;
    if !reduction.confirmed {
        return Err(MinimizeError::CookieLeaveOneOutViolated);
    }

    Ok(CookieReduction {
        header: cookie_unit(prefix, &reduction.kept),
        dropped: reduction.dropped,
    })
}
