use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use crate::models::ThemeSettings;

#[derive(Debug, Deserialize)]
pub struct Site {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub per_page: u32,
}

/// Platform-level defaults shipped with the binary.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub site: Site,
    pub pagination: Pagination,
    pub theme: ThemeSettings,
}

impl Settings {
    /// Loads the embedded `adboard.toml` defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded TOML does not match the expected
    /// sections.
    pub fn new() -> Result<Self, ConfigError> {
        let toml_str = include_str!("../adboard.toml");

        let s = Config::builder()
            .add_source(File::from_str(toml_str, FileFormat::Toml))
            .build()?;

        // Deserialize (and thus freeze) the entire configuration.
        s.try_deserialize()
    }
}
