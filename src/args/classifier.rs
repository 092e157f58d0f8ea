//! Argument classifier: raw curl tokens → argument units.

use crate::args::registry::{flag_arity, FlagArity};
use crate::args::unit::ArgUnit;

/// Result of classifying raw curl tokens.
#[derive(Debug, Clone, Default)]
pub struct ClassifyResult {
    /// Units in input order, covering every kept token exactly once.
    pub units: Vec<ArgUnit>,
    /// Warnings produced during classification (e.g., dangling flags).
    pub warnings: Vec<String>,
}

impl ClassifyResult {
    /// Positional units, kept unconditionally.
    pub fn required(&self) -> Vec<ArgUnit> {
        self.units.iter().filter(|u| u.is_required()).cloned().collect()
    }

    /// Flag units, candidates for removal.
    pub fn undecided(&self) -> Vec<ArgUnit> {
        self.units.iter().filter(|u| !u.is_required()).cloned().collect()
    }
}

/// Group curl tokens (without the leading `curl`) into units.
///
/// Never fails: a paired flag in last position becomes a single-token unit.
pub fn classify(raw_args: &[String]) -> ClassifyResult {
    let mut units = Vec::new();
    let mut warnings = Vec::new();
    let mut iter = raw_args.iter();

    while let Some(arg) = iter.next() {
        match flag_arity(arg) {
            FlagArity::Forced => {
                warnings.push(format!("{}: dropped, verbose output is always captured", arg));
            }
            FlagArity::RequiresValue => match iter.next() {
                Some(value) => units.push(ArgUnit::paired(arg.as_str(), value.as_str())),
                None => {
                    warnings.push(format!("{}: missing value, kept as a bare flag", arg));
                    units.push(ArgUnit::single(arg.as_str()));
                }
            },
            FlagArity::NoValue => units.push(ArgUnit::single(arg.as_str())),
        }
    }

    ClassifyResult { units, warnings }
}
