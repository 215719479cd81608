use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# tpepmap Configuration

[classification]
# sigma/phi value an integer must reach to be classified stable
target_ratio = 4.0
relative_tolerance = 1e-9

[output]
precision = 5
default_format = "terminal"

[demo]
numbers = [8128, 945, 15015]
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    log::info!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
