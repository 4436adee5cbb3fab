//! Render option loading and saving
//!
//! Uses RON (Rusty Object Notation) so option files stay human-editable.
//! Every field is optional; missing ones fall back to the defaults.

use std::fs;
use std::path::Path;

use crate::rasterizer::RenderOptions;

/// Error type for option files
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load render options from a RON file
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<RenderOptions, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut opts: RenderOptions = ron::from_str(&contents)?;

    // The lighting dot products assume a unit light vector (not enforced
    // by serialization)
    opts.light_dir = opts.light_dir.normalize();

    Ok(opts)
}

/// Save render options to a RON file
pub fn save_options<P: AsRef<Path>>(opts: &RenderOptions, path: P) -> Result<(), ConfigError> {
    let config = ron::ser::PrettyConfig::new()
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(opts, config)?;
    fs::write(path, contents)?;
    Ok(())
}
