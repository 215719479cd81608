//! Parity and stability labels for an analyzed integer.

use serde::Serialize;
use std::fmt;

use crate::config::ClassificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: u64) -> Self {
        if n % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Even => "EVEN",
            Self::Odd => "ODD",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the TPEP ratio sits on the stability target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    /// Ratio within tolerance of the target
    Stable,
    /// Ratio anywhere else
    Unstable,
}

impl Stability {
    pub fn classify(tpep_ratio: f64, config: &ClassificationConfig) -> Self {
        if is_close(tpep_ratio, config.target_ratio, config.relative_tolerance) {
            Self::Stable
        } else {
            Self::Unstable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "PERFECT (Stable)",
            Self::Unstable => "IMPERFECT (Unstable)",
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative closeness with no absolute floor: `|a - b| <= rel_tol * max(|a|, |b|)`.
///
/// Identical values are always close. NaN is never close to anything, and
/// an infinity is close only to the same infinity.
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= rel_tol * a.abs().max(b.abs())
}
