//! Configuration sources: an optional TOML file and prefixed environment variables.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Add a TOML config file to the builder if it exists.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        debug!(config_path = %path.display(), "Config file not found, skipping");
        return Ok(builder);
    }

    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(false)))
}

/// Add `{PREFIX}_*` environment variables to the builder.
///
/// `{PREFIX}_ALLOWED_EXTENSIONS` is parsed as a comma-separated list.
pub fn add_environment(
    builder: ConfigBuilder<DefaultState>,
    prefix: &str,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix(prefix)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("allowed_extensions"),
    ))
}
