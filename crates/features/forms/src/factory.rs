use crate::builder::{BuilderConstructor, FormBuilder};
use crate::catalog::FormCatalog;
use crate::error::FormError;
use crate::generic::GenericFormBuilder;
use formkit_domain::fields::FieldList;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Once};
use tracing::{debug, warn};

/// Creates builders by key.
///
/// Owns the key-to-constructor registry. Entries come from [`FormFactory::register`] or from a
/// one-time discovery pass over the factory's [`FormCatalog`], which runs lazily the first
/// time [`FormFactory::create`] finds the registry empty.
///
/// Each factory is independent; share one by reference for the life of the process.
pub struct FormFactory {
    registry: RwLock<FxHashMap<String, BuilderConstructor>>,
    catalog: Option<FormCatalog>,
    discovery: Once,
}

impl FormFactory {
    /// Creates a factory without a catalog; discovery leaves the registry untouched.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: RwLock::default(), catalog: None, discovery: Once::new() }
    }

    /// Creates a factory that discovers its form types from `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: FormCatalog) -> Self {
        Self { catalog: Some(catalog), ..Self::new() }
    }

    /// Registers `constructor` under `key`, replacing any previous entry.
    pub fn register<F>(&self, key: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn FormBuilder> + Send + Sync + 'static,
    {
        self.insert(key.into(), Arc::new(constructor));
    }

    /// Registers a generic builder for `fields` under `key`.
    pub fn register_fields(&self, key: impl Into<String>, fields: FieldList) {
        self.register(key, move || Box::new(GenericFormBuilder::new(fields.clone())));
    }

    /// Loads every catalog entry into the registry.
    ///
    /// Runs at most once per factory; later calls return immediately. Catalog entries
    /// overwrite registrations made earlier under the same key.
    pub fn autodiscover(&self) {
        self.discovery.call_once(|| {
            let Some(catalog) = &self.catalog else {
                debug!("No form catalog configured, skipping discovery");
                return;
            };

            // One write lock, so concurrent lookups see either nothing or the whole catalog.
            let mut registry = self.registry.write();
            for entry in catalog.entries() {
                registry.insert(entry.key().to_owned(), Arc::clone(entry.constructor()));
            }
            debug!(count = catalog.len(), "Discovered form types");
        });
    }

    /// Returns a fresh builder for `key`.
    ///
    /// An empty registry triggers [`FormFactory::autodiscover`] first.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownFormType`] if nothing is registered under `key`.
    pub fn create(&self, key: &str) -> Result<Box<dyn FormBuilder>, FormError> {
        if self.is_empty() {
            self.autodiscover();
        }

        // Clone the handle so the constructor runs without holding the lock.
        let constructor = self.registry.read().get(key).cloned();
        let Some(constructor) = constructor else {
            warn!(key, "Unknown form type requested");
            return Err(FormError::UnknownFormType { key: key.to_owned(), context: None });
        };

        debug!(key, "Creating form builder");
        Ok(constructor())
    }

    /// Registered keys, sorted. Does not trigger discovery.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.registry.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.registry.read().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    fn insert(&self, key: String, constructor: BuilderConstructor) {
        let replaced = self.registry.write().insert(key.clone(), constructor).is_some();
        debug!(key = %key, replaced, "Registered form builder");
    }
}

impl Default for FormFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFactory")
            .field("keys", &self.keys())
            .field("catalog", &self.catalog)
            .field("discovered", &self.discovery.is_completed())
            .finish()
    }
}
