use std::borrow::Cow;

/// Error types specific to form construction.
#[formkit_derive::form_error]
pub enum FormError {
    /// No builder is registered under the requested key, even after discovery ran.
    #[error("Unknown form type{}: {key}", format_context(.context))]
    UnknownFormType { key: String, context: Option<Cow<'static, str>> },
}
