//! Number-theoretic analysis of positive integers under the
//! Totient-Parity Exclusion Principle (TPEP).
//!
//! [`IntegerAnalyzer`] factors an integer by trial division, derives
//! Euler's totient φ(n) and the divisor sum σ(n), and exposes four ratios:
//! totient density φ/n, perfection ratio σ/n, the TPEP ratio σ/φ and the
//! mirror gap (σ/n + φ/n). An integer is classified stable when its TPEP
//! ratio is within a relative tolerance of 4.0.
//!
//! ```rust
//! use tpepmap::{ClassificationConfig, IntegerAnalyzer, Stability};
//!
//! let analyzer = IntegerAnalyzer::new(945)?;
//! assert_eq!(analyzer.factors().to_string(), "{3: 3, 5: 1, 7: 1}");
//! assert_eq!(analyzer.sigma(), 1920);
//! assert_eq!(
//!     analyzer.stability(&ClassificationConfig::default())?,
//!     Stability::Unstable
//! );
//! # Ok::<(), tpepmap::TpepError>(())
//! ```

pub mod analyzer;
pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;

pub use crate::analyzer::{AnalysisReport, Factorization, IntegerAnalyzer};
pub use crate::classification::{is_close, Parity, Stability};
pub use crate::config::{ClassificationConfig, TpepConfig};
pub use crate::errors::{Result, TpepError};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
