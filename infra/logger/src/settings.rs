use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;

const DEFAULT_MAX_FILES: usize = 10;

/// Everything a [`LoggerBuilder`](crate::LoggerBuilder) collects before `init`.
#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) console: bool,
    pub(crate) json: bool,
    pub(crate) level: LevelFilter,
    pub(crate) directives: Option<String>,
    pub(crate) dir: Option<PathBuf>,
    pub(crate) rotation: Rotation,
    pub(crate) max_files: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            json: false,
            level: LevelFilter::INFO,
            directives: None,
            dir: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}
