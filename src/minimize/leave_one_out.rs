//! Leave-one-out reduction, generic over the item being tested.
//!
//! The same pass runs over argument units and over cookie crumbs. Each item
//! is removed alone from the full set; if the replay still matches the
//! baseline the item is inert. The kept items are then replayed together
//! once. This is a single pass, not a fixed point: interacting items are only
//! caught by that final confirmation.

use std::fmt;
use std::panic;
use std::thread;

use crate::exec::{ExecError, Fingerprint};

/// Outcome of one leave-one-out pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction<T> {
    /// Items whose removal changed the response, in input order.
    pub kept: Vec<T>,
    /// Items whose removal left the response unchanged, in input order.
    pub dropped: Vec<T>,
    /// Whether replaying only `kept` reproduced the baseline.
    pub confirmed: bool,
}

/// Leave-one-out pass over `items` against `baseline`.
#[derive(Debug, Clone, Copy)]
pub struct LeaveOneOut<'a> {
    baseline: &'a Fingerprint,
    jobs: usize,
    label: &'a str,
}

impl<'a> LeaveOneOut<'a> {
    pub fn new(baseline: &'a Fingerprint) -> Self {
        Self {
            baseline,
            jobs: 1,
            label: "",
        }
    }

    /// Run up to `jobs` trials concurrently. The confirmation replay still
    /// happens once, after every trial has finished.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Prefix for verdict log lines (e.g. `"Cookie: "`).
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Reduce `items`. `replay` maps a subset to the fingerprint it produces.
    pub fn reduce<T, F>(&self, items: &[T], replay: F) -> Result<Reduction<T>, ExecError>
    where
        T: Clone + Sync + fmt::Display,
        F: Fn(&[T]) -> Result<Fingerprint, ExecError> + Sync,
    {
        let needed = self.trials(items, &replay)?;

        let mut kept = Vec::new();
        let mut dropped = Vec::new();
        for (item, needed) in items.iter().zip(needed) {
            if needed {
                tracing::info!("Required: {}{}", self.label, item);
                kept.push(item.clone());
            } else {
                tracing::info!("Not required: {}{}", self.label, item);
                dropped.push(item.clone());
            }
        }

        tracing::info!("Verifying leave one out inferences work in combination...");
        let confirmed = replay(&kept)? == *self.baseline;

        Ok(Reduction {
            kept,
            dropped,
            confirmed,
        })
    }

    /// One verdict per item: `true` when removing it changed the response.
    fn trials<T, F>(&self, items: &[T], replay: &F) -> Result<Vec<bool>, ExecError>
    where
        T: Clone + Sync,
        F: Fn(&[T]) -> Result<Fingerprint, ExecError> + Sync,
    {
        let trial = |skip: usize| -> Result<bool, ExecError> {
            Ok(replay(&without(items, skip))? != *self.baseline)
        };

        let workers = self.jobs.min(items.len());
        if workers <= 1 {
            return (0..items.len()).map(&trial).collect();
        }

        let trial = &trial;
        let results = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    scope.spawn(move || {
                        (worker..items.len())
                            .step_by(workers)
                            .map(|i| trial(i).map(|needed| (i, needed)))
                            .collect::<Result<Vec<_>, ExecError>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
                .collect::<Vec<_>>()
        });

        let mut needed = vec![false; items.len()];
        for worker in results {
            for (i, verdict) in worker? {
                needed[i] = verdict;
            }
        }
        Ok(needed)
    }
}

fn without<T: Clone>(items: &[T], skip: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != skip)
        .map(|(_, item)| item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A "server" whose response depends only on which of `needed` are present.
    fn oracle<'a>(
        needed: &'a [&'a str],
        calls: &'a AtomicUsize,
    ) -> impl Fn(&[String]) -> Result<Fingerprint, ExecError> + Sync + 'a {
        move |items: &[String]| {
            calls.fetch_add(1, Ordering::SeqCst);
            let present: Vec<&str> = needed
                .iter()
                .copied()
                .filter(|n| items.iter().any(|i| i == n))
                .collect();
            Ok(Fingerprint::of(200, present.join(",").as_bytes()))
        }
    }

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn inert_items_are_dropped() {
        let calls = AtomicUsize::new(0);
        let replay = oracle(&["b", "d"], &calls);
        let all = items(&["a", "b", "c", "d"]);
        let baseline = replay(&all).unwrap();

        let reduction = LeaveOneOut::new(&baseline).reduce(&all, &replay).unwrap();

        assert_eq!(reduction.kept, items(&["b", "d"]));
        assert_eq!(reduction.dropped, items(&["a", "c"]));
        assert!(reduction.confirmed);
        // baseline + one trial per item + confirmation
        assert_eq!(calls.load(Ordering::SeqCst), 1 + 4 + 1);
    }

    #[test]
    fn all_needed_items_are_kept() {
        let calls = AtomicUsize::new(0);
        let replay = oracle(&["a", "b"], &calls);
        let all = items(&["a", "b"]);
        let baseline = replay(&all).unwrap();

        let reduction = LeaveOneOut::new(&baseline).reduce(&all, &replay).unwrap();

        assert_eq!(reduction.kept, all);
        assert!(reduction.dropped.is_empty());
        assert!(reduction.confirmed);
    }

    #[test]
    fn redundant_pair_fails_confirmation() {
        // Either "x" or "y" satisfies the server, so each looks inert alone.
        let replay = |items: &[String]| -> Result<Fingerprint, ExecError> {
            let ok = items.iter().any(|i| i == "x" || i == "y");
            Ok(Fingerprint::of(if ok { 200 } else { 401 }, b""))
        };
        let all = items(&["x", "y"]);
        let baseline = replay(&all).unwrap();

        let reduction = LeaveOneOut::new(&baseline).reduce(&all, replay).unwrap();

        assert!(reduction.kept.is_empty());
        assert!(!reduction.confirmed);
    }

    #[test]
    fn parallel_trials_match_sequential() {
        let calls = AtomicUsize::new(0);
        let replay = oracle(&["c", "f", "g"], &calls);
        let all = items(&["a", "b", "c", "d", "e", "f", "g"]);
        let baseline = replay(&all).unwrap();

        let sequential = LeaveOneOut::new(&baseline).reduce(&all, &replay).unwrap();
        let parallel = LeaveOneOut::new(&baseline)
            .with_jobs(3)
            .reduce(&all, &replay)
            .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(parallel.kept, items(&["c", "f", "g"]));
    }

    #[test]
    fn trial_errors_propagate() {
        let replay = |items: &[String]| -> Result<Fingerprint, ExecError> {
            if items.len() < 2 {
                return Err(ExecError::MissingStatus {
                    command: "curl".into(),
                });
            }
            Ok(Fingerprint::of(200, b""))
        };
        let all = items(&["a", "b"]);
        let baseline = Fingerprint::of(200, b"");

        let err = LeaveOneOut::new(&baseline)
            .with_jobs(2)
            .reduce(&all, replay)
            .unwrap_err();
        assert!(matches!(err, ExecError::MissingStatus { .. }));
    }
}
