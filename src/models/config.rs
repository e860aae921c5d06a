//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::{ADMIN_PAGE_SIZE, CATALOG_PAGE_SIZE};

#[derive(Clone, Debug, Deserialize)]
/// Settings for the catalog front-end.
pub struct AppConfig {
    /// JSON dump of the backend's product collection.
    pub products_path: String,
    pub catalog_page_size: usize,
    pub admin_page_size: usize,
    /// Secret used to verify session tokens.
    pub jwt_secret: String,
    /// Session token of the current user, if signed in.
    #[serde(default)]
    pub session_token: Option<String>,
}

impl AppConfig {
    /// Loads the YAML file at `path` (optional) overlaid with `APP_*` variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("catalog_page_size", CATALOG_PAGE_SIZE as u64)?
            .set_default("admin_page_size", ADMIN_PAGE_SIZE as u64)?
            .add_source(File::new(path, FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
