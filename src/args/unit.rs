//! Argument units: the atoms the minimizer keeps or drops.

use std::fmt;

use serde::Serialize;

/// One logical curl argument: a standalone token, or a flag plus its value.
///
/// Units are never mutated after classification; the minimizer only moves
/// them between collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArgUnit {
    tokens: Vec<String>,
}

impl ArgUnit {
    /// A unit made of a single token.
    pub fn single(token: impl Into<String>) -> Self {
        Self {
            tokens: vec![token.into()],
        }
    }

    /// A flag together with the value it consumes.
    pub fn paired(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tokens: vec![flag.into(), value.into()],
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The leading token (the flag, for flag units).
    pub fn flag(&self) -> &str {
        &self.tokens[0]
    }

    /// The consumed value, if this is a paired unit.
    pub fn value(&self) -> Option<&str> {
        self.tokens.get(1).map(String::as_str)
    }

    /// Positional units are always kept and never tested.
    pub fn is_required(&self) -> bool {
        !self.flag().starts_with('-')
    }
}

impl fmt::Display for ArgUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Flatten units into the token list handed to a process.
pub fn flatten(units: &[ArgUnit]) -> Vec<String> {
    units.iter().flat_map(|u| u.tokens().iter().cloned()).collect()
}
