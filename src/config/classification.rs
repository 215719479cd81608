use serde::{Deserialize, Serialize};

/// Target and tolerance for the TPEP stability check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Ratio sigma/phi an integer must reach to be called stable
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,

    /// Relative tolerance of the stability comparison, in (0, 1)
    #[serde(default = "default_relative_tolerance")]
    pub relative_tolerance: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            target_ratio: default_target_ratio(),
            relative_tolerance: default_relative_tolerance(),
        }
    }
}

impl ClassificationConfig {
    pub fn with_tolerance(self, relative_tolerance: f64) -> Self {
        Self {
            relative_tolerance,
            ..self
        }
    }
}

pub fn default_target_ratio() -> f64 {
    4.0
}

pub fn default_relative_tolerance() -> f64 {
    1e-9
}
