use crate::constants::LEAD;
use crate::fields::FieldList;
use crate::kinds::FormSet;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub forms: FormsConfig,
    pub logging: LoggingConfig,
}

/// Which form types the factory serves.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Form type constructed when the caller does not name one.
    pub default_form: String,
    /// Built-in form types exposed through discovery.
    pub enabled: FormSet,
    /// Extra form types backed by the generic builder, keyed by registry key.
    pub custom: BTreeMap<String, FieldList>,
}

/// Logging knobs for applications.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for every target.
    pub level: String,
    /// Per-target directives such as `"formkit_forms=debug"`. `RUST_LOG` takes precedence.
    pub filter: Option<String>,
    pub json: bool,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for FormsConfig {
    fn default() -> Self {
        Self { default_form: LEAD.to_owned(), enabled: FormSet::ALL, custom: BTreeMap::new() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, json: false, path: None }
    }
}
