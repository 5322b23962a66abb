use formkit_derive::form_error;
use std::borrow::Cow;

#[form_error]
pub enum DemoError {
    #[error("Unknown form type{}: {key}", format_context(.context))]
    UnknownFormType { key: String, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    raw.parse::<u32>().context("Parsing field count")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (Parsing field count): "));

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err: Result<(), DemoError> =
        Err(DemoError::UnknownFormType { key: "unknown".to_owned(), context: None });
    let err = err.context("lookup").unwrap_err();
    assert_eq!(err.to_string(), "Unknown form type (lookup): unknown");
}
