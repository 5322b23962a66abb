//! Subscriber pieces assembled by [`LoggerBuilder::init`](crate::LoggerBuilder::init).

use crate::error::LoggerError;
use crate::settings::Settings;
use std::fs;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::{MakeWriter, layer};
use tracing_subscriber::{EnvFilter, Layer, Registry};

const LOG_FILE_SUFFIX: &str = "log";

pub(crate) type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Human-facing output. `init` passes `io::stderr` so stdout carries nothing but program output.
pub(crate) fn console<W>(writer: W, json: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let console = layer().with_writer(writer).with_target(false);
    if json { console.json().boxed() } else { console.compact().boxed() }
}

/// Rolling `<name>.<date>.log` files under `dir`, written off-thread.
pub(crate) fn rolling_file(
    dir: &Path,
    name: &str,
    settings: &Settings,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Cannot create log directory {}", dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(dir)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = layer().with_writer(writer).with_ansi(false);
    let file = if settings.json { file.json().boxed() } else { file.boxed() };

    Ok((file, guard))
}

/// Resolves the active filter.
///
/// Precedence: non-blank `from_env` (the `RUST_LOG` value), then the configured directives
/// layered over `level`, then `level` alone. Configured directives are validated even when
/// `from_env` wins.
pub(crate) fn filter(
    level: LevelFilter,
    directives: Option<&str>,
    from_env: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let base = || EnvFilter::builder().with_default_directive(level.into());

    let configured = directives
        .map(|directives| {
            base()
                .parse(directives)
                .map(|filter| filter.add_directive(level.into()))
                .map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid env filter '{directives}': {e}").into(),
                    context: None,
                })
        })
        .transpose()?;

    let filter = match from_env.map(str::trim).filter(|env| !env.is_empty()) {
        Some(env) => base().parse_lossy(env),
        None => configured.unwrap_or_else(|| base().parse_lossy("")),
    };

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn emit_with(layer: BoxedLayer) {
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(key = "lead", "Creating form builder");
        });
    }

    #[test]
    fn console_writes_compact_lines_to_its_writer() {
        let captured = Captured::default();
        let sink = captured.clone();
        emit_with(console(move || sink.clone(), false));

        let text = captured.text();
        assert!(text.contains("Creating form builder"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn console_json_lines_parse_as_objects() {
        let captured = Captured::default();
        let sink = captured.clone();
        emit_with(console(move || sink.clone(), true));

        let text = captured.text();
        let line = text.lines().next().unwrap();
        assert!(line.starts_with('{') && line.ends_with('}'));
        assert!(line.contains(r#""message":"Creating form builder""#));
        assert!(line.contains(r#""key":"lead""#));
    }

    #[test]
    fn rust_log_takes_precedence_over_directives() {
        let filter = filter(LevelFilter::WARN, Some("formkit_forms=debug"), Some("formkit=trace"))
            .unwrap()
            .to_string();

        assert!(filter.contains("formkit=trace"));
        assert!(!filter.contains("formkit_forms=debug"));
    }

    #[test]
    fn directives_apply_when_rust_log_is_blank() {
        let filter = filter(LevelFilter::WARN, Some("formkit_forms=debug"), Some("  "))
            .unwrap()
            .to_string();

        assert!(filter.contains("formkit_forms=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn level_alone_is_the_fallback() {
        let filter = filter(LevelFilter::ERROR, None, None).unwrap().to_string();
        assert_eq!(filter, "error");
    }

    #[test]
    fn invalid_directives_fail_even_with_rust_log() {
        let err = filter(LevelFilter::INFO, Some("formkit=notalevel"), Some("info")).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
