//! Validation of loaded configuration.
//!
//! All problems are collected so a single run reports every bad field.

use super::core::{TpepConfig, MAX_PRECISION};

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the entire config, accumulating all errors.
pub fn validate_config(config: &TpepConfig) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = [
        validate_target_ratio(config.classification.target_ratio),
        validate_relative_tolerance(config.classification.relative_tolerance),
        validate_precision(config.output.precision),
    ]
    .into_iter()
    .flatten()
    .chain(validate_demo_numbers(&config.demo.numbers))
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_target_ratio(target: f64) -> Option<ValidationError> {
    (!(target.is_finite() && target > 0.0)).then(|| ValidationError {
        field: "classification.target_ratio",
        message: format!("must be a positive finite number, got {target}"),
    })
}

fn validate_relative_tolerance(tolerance: f64) -> Option<ValidationError> {
    (!(tolerance > 0.0 && tolerance < 1.0)).then(|| ValidationError {
        field: "classification.relative_tolerance",
        message: format!("must be between 0.0 and 1.0 (exclusive), got {tolerance}"),
    })
}

fn validate_precision(precision: usize) -> Option<ValidationError> {
    (precision > MAX_PRECISION).then(|| ValidationError {
        field: "output.precision",
        message: format!("must be at most {MAX_PRECISION}, got {precision}"),
    })
}

fn validate_demo_numbers(numbers: &[i64]) -> impl Iterator<Item = ValidationError> + '_ {
    numbers
        .iter()
        .filter(|&&n| n < 1)
        .map(|n| ValidationError {
            field: "demo.numbers",
            message: format!("must contain only positive integers, got {n}"),
        })
}
