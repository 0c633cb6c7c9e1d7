use crate::config::defaults::DefaultsConfig;
use crate::config::file::FileConfig;
use crate::error::{CliError, Result};

pub fn run() -> Result<()> {
    print!("{}", render()?);
    Ok(())
}

/// The built-in defaults as a TOML document usable with `--config`.
pub fn render() -> Result<String> {
    FileConfig::from_defaults(&DefaultsConfig::default())
        .to_toml_string()
        .map_err(|e| CliError::Other(e.into()))
}
