mod cli;

use crate::cli::Cli;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use formkit::domain::config::{AppConfig, LoggingConfig};
use formkit::forms::{FormData, FormDirector, FormFactory};
use formkit::kernel::config::load_config;
use formkit_logger::{LevelFilter, Logger};
use serde_json::{Value, json};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: AppConfig = load_config(cli.config.as_deref())?;
    let _logger = init_logger(&config.logging)?;
    debug!(config = ?cli.config, "Configuration loaded");

    let factory = formkit::init(&config.forms);

    if cli.list {
        return list_forms(&factory);
    }

    let key = cli.form.as_deref().unwrap_or(&config.forms.default_form);
    let data = match cli.data.as_deref() {
        Some(raw) => parse_data(raw)?,
        None => sample_data(),
    };

    debug!(form = key, fields = data.len(), "Building form");
    let builder = factory.create(key).with_context(|| format!("Cannot build form '{key}'"))?;
    let form = FormDirector::new(builder).construct(Some(&data));

    let output = if cli.pretty { serde_json::to_string_pretty(&form)? } else { form.to_string() };
    println!("{output}");

    Ok(())
}

fn init_logger(config: &LoggingConfig) -> Result<Logger> {
    let level: LevelFilter = config
        .level
        .parse()
        .map_err(|e| anyhow!("Invalid log level '{}': {e}", config.level))?;

    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level).json(config.json);
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter);
    }
    let logger = match &config.path {
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };

    Ok(logger)
}

fn list_forms(factory: &FormFactory) -> Result<()> {
    for key in factory.keys() {
        let builder = factory.create(&key)?;
        let fields: Vec<_> = builder.fields().iter().collect();
        println!("{key}: {}", fields.join(", "));
    }

    Ok(())
}

fn parse_data(raw: &str) -> Result<FormData> {
    match serde_json::from_str(raw).context("Form data is not valid JSON")? {
        Value::Object(data) => Ok(data),
        other => Err(anyhow!("Form data must be a JSON object, got: {other}")),
    }
}

/// Values used when no `--data` is given.
fn sample_data() -> FormData {
    [
        ("name", "Krish"),
        ("email", "krish@krish.com"),
        ("phone", "9800000000"),
        ("address", "Kathmandu"),
        ("product_id", "P123"),
    ]
    .into_iter()
    .map(|(field, value)| (field.to_owned(), json!(value)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_every_builtin_field() {
        let sample = sample_data();
        assert_eq!(sample.len(), 5);
        for field in ["name", "email", "address", "phone"] {
            assert!(sample[field].is_string(), "missing sample value for {field}");
        }
    }

    #[test]
    fn data_must_be_an_object() {
        assert_eq!(parse_data(r#"{"name":"Krish"}"#).unwrap()["name"], "Krish");
        assert!(parse_data("[1]").is_err());
        assert!(parse_data("{").is_err());
    }
}
