use serde::Serialize;

use super::factorization::Factorization;
use crate::classification::{Parity, Stability};

/// Every value the output layer renders for one analyzed integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub n: u64,
    pub parity: Parity,
    pub factors: Factorization,
    pub phi: u64,
    pub sigma: u128,
    pub totient_density: f64,
    pub perfection_ratio: f64,
    pub tpep_ratio: f64,
    pub mirror_gap: f64,
    pub is_perfect: bool,
    pub stability: Stability,
    pub target_ratio: f64,
}
