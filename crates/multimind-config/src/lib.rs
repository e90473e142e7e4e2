//! MultiMind configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults, so
//! partial configs work out of the box. The hosted service table is compiled
//! in and lives in [`services`].

pub mod schema;
pub mod services;
pub mod toml_loader;
pub mod validation;

pub use schema::{MultimindConfig, CONFIG_SCHEMA_VERSION};
pub use services::{built_in_services, is_known_service, BUILT_IN_SERVICES};

use multimind_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<MultimindConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<MultimindConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
