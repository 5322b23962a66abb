use formkit_logger::{Logger, LoggerError};

#[test]
fn second_install_reports_the_existing_subscriber() {
    let _first = Logger::builder().name("formkit").init().unwrap();

    let err = Logger::builder().name("formkit-again").init().unwrap_err();

    assert!(matches!(err, LoggerError::Subscriber { context: None, .. }));
    assert!(err.to_string().starts_with("Tracing subscriber error: "));
}
