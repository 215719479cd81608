use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{TpepConfig, CONFIG_FILE_NAME};
use super::validation::validate_config;
use crate::errors::{Result, TpepError};

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and validate every field.
pub fn parse_and_validate_config(contents: &str) -> Result<TpepConfig> {
    let config = toml::from_str::<TpepConfig>(contents)
        .map_err(|e| TpepError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    validate_config(&config).map_err(|errors| {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        TpepError::config(format!("Invalid {CONFIG_FILE_NAME}: {}", details.join("; ")))
    })?;

    Ok(config)
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<TpepConfig> {
    let contents = read_config_file(path)?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TpepConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            Some(TpepConfig::default())
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

pub(crate) fn discover_config(start: PathBuf) -> TpepConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TpepConfig::default()
        })
}

/// Find `.tpep.toml` in the working directory or its ancestors.
///
/// A file that exists but is invalid is logged and replaced by defaults.
pub fn load_config() -> TpepConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            TpepConfig::default()
        }
    }
}
