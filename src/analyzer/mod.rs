//! The integer analyzer.
//!
//! An [`IntegerAnalyzer`] is built for one positive integer. Construction
//! factors the integer and caches its totient and divisor sum; the derived
//! ratios are pure functions of those cached values.
//!
//! ```rust
//! use tpepmap::analyzer::IntegerAnalyzer;
//!
//! let analyzer = IntegerAnalyzer::new(28).unwrap();
//! assert_eq!(analyzer.phi(), 12);
//! assert_eq!(analyzer.sigma(), 56);
//! assert_eq!(analyzer.perfection_ratio(), 2.0);
//! ```

pub mod arithmetic;
pub mod factorization;
pub mod report;

pub use factorization::Factorization;
pub use report::AnalysisReport;

use crate::classification::{Parity, Stability};
use crate::config::ClassificationConfig;
use crate::errors::{Result, TpepError};

/// Factorization, totient and divisor sum of a fixed positive integer.
///
/// All fields are computed in [`IntegerAnalyzer::new`] and never change.
/// The supported input range is `1..=i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerAnalyzer {
    n: u64,
    factors: Factorization,
    phi: u64,
    sigma: u128,
}

impl IntegerAnalyzer {
    /// Analyze `n`, failing with [`TpepError::InvalidArgument`] when `n < 1`.
    pub fn new(n: i64) -> Result<Self> {
        if n < 1 {
            return Err(TpepError::invalid_argument(format!(
                "TPEP only applies to positive integers, got {n}"
            )));
        }
        let n = n as u64;

        let factors = Factorization::of(n);
        let phi = arithmetic::totient(n, &factors);
        let sigma = arithmetic::divisor_sum(&factors);

        log::debug!("Analyzed {n}: factors={factors}, phi={phi}, sigma={sigma}");

        Ok(Self {
            n,
            factors,
            phi,
            sigma,
        })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn factors(&self) -> &Factorization {
        &self.factors
    }

    /// Euler's totient φ(n).
    pub fn phi(&self) -> u64 {
        self.phi
    }

    /// Sum of divisors σ(n).
    pub fn sigma(&self) -> u128 {
        self.sigma
    }

    /// φ(n) / n, in (0, 1].
    pub fn totient_density(&self) -> f64 {
        self.phi as f64 / self.n as f64
    }

    /// σ(n) / n, the abundancy index. Exactly 2.0 for perfect numbers.
    pub fn perfection_ratio(&self) -> f64 {
        self.sigma as f64 / self.n as f64
    }

    /// σ(n) / φ(n), checked against the stability target.
    ///
    /// φ(n) is at least 1 for every constructible analyzer; a zero totient
    /// is still reported as [`TpepError::DivisionUndefined`] rather than
    /// producing infinity.
    pub fn tpep_ratio(&self) -> Result<f64> {
        ratio(self.sigma, self.phi)
    }

    /// perfection_ratio + totient_density.
    pub fn mirror_gap(&self) -> f64 {
        self.perfection_ratio() + self.totient_density()
    }

    pub fn parity(&self) -> Parity {
        Parity::of(self.n)
    }

    /// σ(n) == 2n, compared exactly.
    pub fn is_perfect(&self) -> bool {
        self.sigma == 2 * u128::from(self.n)
    }

    /// Classify the TPEP ratio against the configured target.
    pub fn stability(&self, config: &ClassificationConfig) -> Result<Stability> {
        Ok(Stability::classify(self.tpep_ratio()?, config))
    }

    /// Snapshot every metric and classification for the output layer.
    pub fn report(&self, config: &ClassificationConfig) -> Result<AnalysisReport> {
        let tpep_ratio = self.tpep_ratio()?;
        Ok(AnalysisReport {
            n: self.n,
            parity: self.parity(),
            factors: self.factors.clone(),
            phi: self.phi,
            sigma: self.sigma,
            totient_density: self.totient_density(),
            perfection_ratio: self.perfection_ratio(),
            tpep_ratio,
            mirror_gap: self.mirror_gap(),
            is_perfect: self.is_perfect(),
            stability: Stability::classify(tpep_ratio, config),
            target_ratio: config.target_ratio,
        })
    }
}

impl TryFrom<i64> for IntegerAnalyzer {
    type Error = TpepError;

    fn try_from(n: i64) -> Result<Self> {
        Self::new(n)
    }
}

fn ratio(numerator: u128, denominator: u64) -> Result<f64> {
    if denominator == 0 {
        return Err(TpepError::division_undefined(
            "totient is zero, sigma/phi has no value",
        ));
    }
    Ok(numerator as f64 / denominator as f64)
}
