//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::repository::DEFAULT_PER_PAGE;

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_templates_dir() -> String {
    "templates/**/*.html".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob matching the Tera templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Base URL of the customers API, without the `/api/v1` suffix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl ServerConfig {
    /// Loads `{config_dir}/default.yaml`, the optional `{config_dir}/{app_env}.yaml`
    /// overlay and `APP_*` environment variables, in that order of precedence.
    pub fn load(config_dir: &str, app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")))
            .add_source(File::with_name(&format!("{config_dir}/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
