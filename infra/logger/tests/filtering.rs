use formkit_logger::{LevelFilter, Logger};
use tracing::Level;

#[test]
fn directives_raise_single_targets_above_the_level() {
    let logger = Logger::builder()
        .name("formkit")
        .level(LevelFilter::WARN)
        .env_filter("filtering=debug")
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none());
    assert!(tracing::enabled!(Level::DEBUG));
    assert!(!tracing::enabled!(Level::TRACE));
    assert!(tracing::enabled!(target: "formkit_forms", Level::WARN));
    assert!(!tracing::enabled!(target: "formkit_forms", Level::DEBUG));
}
