//! # Forms
//!
//! Step-by-step construction of key/value forms (`lead`, `customer`, ...) from field tables.
//!
//! ## Architecture
//!
//! 1.  **Contract ([`builder`]):** the [`FormBuilder`] trait with its three steps:
//!     add default fields, populate from caller data, build.
//! 2.  **Generic builder ([`generic`]):** the single implementation, parameterized by a
//!     [`FieldList`](formkit_domain::fields::FieldList). Per-type builders are constructors
//!     supplying a table.
//! 3.  **Registry ([`factory`], [`catalog`]):** [`FormFactory`] maps string keys to builder
//!     constructors. An empty factory loads its [`FormCatalog`] once, on first lookup.
//! 4.  **Director ([`director`]):** drives a builder through the steps in a fixed order.
//!
//! ## Example
//!
//! ```rust
//! use formkit_forms::{FormCatalog, FormFactory, construct};
//! use serde_json::json;
//!
//! let factory = FormFactory::with_catalog(FormCatalog::builtin());
//! let mut builder = factory.create("lead").unwrap();
//!
//! let data = json!({ "name": "Krish", "phone": "9800000000" });
//! let form = construct(builder.as_mut(), data.as_object());
//!
//! assert_eq!(form.to_string(), r#"{"name":"Krish","email":null}"#);
//! ```

pub mod builder;
pub mod catalog;
pub mod director;
mod error;
pub mod factory;
pub mod form;
pub mod generic;

pub use crate::builder::{BuilderConstructor, FormBuilder};
pub use crate::catalog::{CatalogEntry, FormCatalog};
pub use crate::director::{FormDirector, construct};
pub use crate::error::{FormError, FormErrorExt};
pub use crate::factory::FormFactory;
pub use crate::form::{Form, FormData};
pub use crate::generic::GenericFormBuilder;
