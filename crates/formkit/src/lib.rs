//! Facade crate for `FormKit`.
//! Re-exports domain/kernel/forms and wires a ready-to-use [`FormFactory`] from config.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use formkit::domain::config::FormsConfig;
//! use formkit::forms::construct;
//!
//! let factory = formkit::init(&FormsConfig::default());
//! let mut builder = factory.create("customer").unwrap();
//! let form = construct(builder.as_mut(), None);
//! assert_eq!(form.len(), 4);
//! ```

pub use formkit_domain as domain;
pub use formkit_forms as forms;
pub use formkit_kernel as kernel;

use formkit_domain::config::FormsConfig;
use formkit_forms::{FormCatalog, FormFactory};
use tracing::{info, warn};

/// Builds the process-wide factory.
///
/// Initialization order:
/// 1. The built-in catalog, restricted to `config.enabled`, is discovered.
/// 2. `config.custom` form types are registered on top, so a custom entry may replace a
///    built-in one with the same key.
#[must_use]
pub fn init(config: &FormsConfig) -> FormFactory {
    if config.enabled.is_empty() {
        warn!("No built-in form types are enabled");
    }

    let factory = FormFactory::with_catalog(FormCatalog::builtin().restrict(config.enabled));
    factory.autodiscover();

    for (key, fields) in &config.custom {
        factory.register_fields(key.clone(), fields.clone());
    }

    info!(forms = ?factory.keys(), "Form factory initialized");
    factory
}
