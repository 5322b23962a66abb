#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `FormKit` crates.
//!
//! ## Usage
//! Add the crate as a regular dependency of any crate that defines its own error enum:
//! ```toml
//! [dependencies]
//! formkit-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// Turns a plain enum into an error type wired for `?` propagation and contextual messages.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **Formatting Helper**: Emits a private `format_context` function rendering the context
///   as ` (context)` or an empty string, for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant must use named fields.
/// 3. Variants with a `source` field (or a field marked `#[source]`/`#[from]`) must also
///    have a `context: Option<Cow<'static, str>>` field.
///
/// # Example
///
/// ```rust,ignore
/// use formkit_derive::form_error;
/// use std::borrow::Cow;
///
/// #[form_error]
/// pub enum FormError {
///     #[error("Unknown form type{}: {key}", format_context(.context))]
///     UnknownFormType { key: String, context: Option<Cow<'static, str>> },
///
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, FormError> {
///     builder.build().context("Loading form settings") // `config::ConfigError` -> `FormError`
/// }
/// ```
#[proc_macro_attribute]
pub fn form_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand_derive(input).into()
}
