use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment variables overriding file settings (`FORMKIT__FORMS__DEFAULT_FORM`).
pub const ENV_PREFIX: &str = "FORMKIT";

/// Base name of the optional config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "formkit";

/// Custom error type for config loading.
#[formkit_derive::form_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **File**: an explicit `path` must exist. Without one, `formkit.{toml,json,yaml,..}`
///    in the working directory is used when present and skipped otherwise.
/// 2. **Environment**: variables prefixed with `FORMKIT__` override file values. Nested keys
///    use double underscores (e.g. `FORMKIT__LOGGING__LEVEL` maps to `logging.level`).
///
/// Fields absent from every source fall back to the `#[serde(default)]` of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or malformed, or if the
/// merged values cannot be deserialized into `T`.
///
/// # Example
/// ```rust,no_run
/// use formkit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     default_form: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
