//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the `formkit` binary and tests.
//!
//! Output goes to **stderr** only, so a command printing a form on stdout can be piped
//! straight into `jq`. A rolling file can be added with [`LoggerBuilder::path`].
//!
//! ## Filtering
//!
//! The first match wins:
//! 1. `RUST_LOG`, when set and non-blank;
//! 2. [`LoggerBuilder::env_filter`] directives, layered over the builder level;
//! 3. [`LoggerBuilder::level`] alone (`INFO` unless set).
//!
//! Configured directives are validated even when `RUST_LOG` overrides them.
//!
//! ## Example
//!
//! ```rust
//! # use formkit_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("formkit")
//!     .level(LevelFilter::WARN)
//!     .env_filter("formkit_forms=debug")
//!     .init()
//!     .unwrap();
//!
//! tracing::debug!(key = "lead", "Creating form builder");
//! ```

mod error;
mod layers;
mod settings;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use crate::layers::BoxedLayer;
use crate::settings::Settings;
use sealed::Sealed;
use std::env;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod sealed {
    pub trait Sealed {}
}

/// Builder state: no name yet, so `init` is unavailable.
#[derive(Debug)]
pub struct NoName;
/// Builder state: named; the name prefixes rolling log files.
#[derive(Debug)]
pub struct WithName(String);
/// Builder state: console only.
#[derive(Debug)]
pub struct NoFile;
/// Builder state: a log directory was given, so rotation settings apply.
#[derive(Debug)]
pub struct WithFile;

impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Collects logger settings; see the [crate docs](crate) for filter precedence.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    settings: Settings,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { settings: self.settings, name: WithName(name.into()), file: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use = "a logger builder does nothing until `init` is called"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Per-target directives such as `"formkit_forms=debug"`. A non-blank `RUST_LOG` overrides
    /// them; an invalid value makes [`LoggerBuilder::init`] fail either way.
    #[must_use = "a logger builder does nothing until `init` is called"]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    /// Toggles the stderr layer (on by default).
    #[must_use = "a logger builder does nothing until `init` is called"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// One JSON object per event, on the console and in files.
    #[must_use = "a logger builder does nothing until `init` is called"]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Also writes rolling files into `dir`.
    pub fn path(mut self, dir: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        self.settings.dir = Some(dir.into());
        LoggerBuilder { settings: self.settings, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for as long as file output is needed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`]: blank name, zero `max_files`, invalid
    ///   `env_filter` directives or every output disabled.
    /// * [`LoggerError::Internal`] / [`LoggerError::Appender`]: the log directory is unusable.
    /// * [`LoggerError::Subscriber`]: a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: WithName(name), .. } = self;
        validate(&settings, &name)?;

        let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter =
            layers::filter(settings.level, settings.directives.as_deref(), from_env.as_deref())?;

        let mut outputs: Vec<BoxedLayer> = Vec::with_capacity(2);
        if settings.console {
            outputs.push(layers::console(io::stderr, settings.json));
        }

        let guard = match &settings.dir {
            Some(dir) => {
                let (file, guard) = layers::rolling_file(dir, &name, &settings)?;
                outputs.push(file);
                Some(guard)
            }
            None => None,
        };

        if outputs.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "console is disabled and no log directory is set".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(outputs).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Number of rotated files kept in the log directory (10 by default).
    #[must_use = "a logger builder does nothing until `init` is called"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "a logger builder does nothing until `init` is called"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }
}

/// Handle returned by [`LoggerBuilder::init`]. Dropping it flushes pending file output.
#[must_use = "dropping the logger stops file output"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "a logger builder does nothing until `init` is called"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: NoName, file: PhantomData }
    }

    /// The file writer guard; `None` for console-only loggers.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    let problem = if name.trim().is_empty() {
        "logger name is blank"
    } else if settings.max_files == 0 {
        "max_files must be at least 1"
    } else {
        return Ok(());
    };

    Err(LoggerError::InvalidConfiguration { message: problem.into(), context: None })
}
