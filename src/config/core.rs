use serde::{Deserialize, Serialize};

use super::classification::ClassificationConfig;
use crate::io::output::OutputFormat;

/// File name searched for by [`super::load_config`].
pub const CONFIG_FILE_NAME: &str = ".tpep.toml";

/// Largest accepted number of decimal places in reports.
pub const MAX_PRECISION: usize = 15;

/// Root configuration structure for tpepmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TpepConfig {
    #[serde(default)]
    pub classification: ClassificationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for ratios
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Format used when no `--format` flag is given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            default_format: None,
        }
    }
}

/// Integers reported by the `demo` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_numbers")]
    pub numbers: Vec<i64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: default_demo_numbers(),
        }
    }
}

pub fn default_precision() -> usize {
    5
}

/// The fourth perfect number, the first odd abundant number, and the
/// product of the odd primes 3 through 13.
pub fn default_demo_numbers() -> Vec<i64> {
    vec![8128, 945, 15015]
}
