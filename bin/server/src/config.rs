//! Centralized server configuration.
//!
//! Loaded via the `config` crate from environment variables. Nested keys use
//! `__` as separator, e.g. `DIALOG__FOLLOWUP_LIFESPAN=3`.

use factdeck_dialog::RenderConfig;
use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the webhook listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Reply rendering configuration.
    #[serde(default)]
    pub dialog: RenderConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_builder(config::Config::builder().add_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        ))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
