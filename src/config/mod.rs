//! Configuration for classification, report output and the demo driver.
//!
//! Settings come from a `.tpep.toml` file discovered in the working
//! directory or one of its ancestors. Every key is optional.

pub mod classification;
mod core;
mod loader;
pub mod validation;

pub use classification::{
    default_relative_tolerance, default_target_ratio, ClassificationConfig,
};
pub use core::{
    default_demo_numbers, default_precision, DemoConfig, OutputConfig, TpepConfig,
    CONFIG_FILE_NAME, MAX_PRECISION,
};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_and_validate_config};
