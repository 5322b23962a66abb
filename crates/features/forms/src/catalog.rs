//! The table of form types a [`FormFactory`](crate::FormFactory) loads during discovery.
//!
//! New form types are added by extending the table, never by touching the lookup logic.

use crate::builder::{BuilderConstructor, FormBuilder};
use crate::generic::GenericFormBuilder;
use formkit_domain::constants::{CUSTOMER, LEAD};
use formkit_domain::fields::FieldList;
use formkit_domain::kinds::FormSet;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A single row of the catalog.
#[derive(Clone)]
pub struct CatalogEntry {
    key: Cow<'static, str>,
    /// Built-in flag, `None` for entries added with [`FormCatalog::with`].
    kind: Option<FormSet>,
    constructor: BuilderConstructor,
}

impl CatalogEntry {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn constructor(&self) -> &BuilderConstructor {
        &self.constructor
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered table of registry key to builder constructor.
#[derive(Debug, Clone, Default)]
pub struct FormCatalog {
    entries: Vec<CatalogEntry>,
}

impl FormCatalog {
    /// An empty table; discovery from it registers nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in form types: `lead` and `customer`.
    #[must_use]
    pub fn builtin() -> Self {
        let builtin = |key: &'static str, kind, build: fn() -> GenericFormBuilder| CatalogEntry {
            key: Cow::Borrowed(key),
            kind: Some(kind),
            constructor: Arc::new(move || Box::new(build()) as Box<dyn FormBuilder>),
        };

        Self {
            entries: vec![
                builtin(LEAD, FormSet::LEAD, GenericFormBuilder::lead),
                builtin(CUSTOMER, FormSet::CUSTOMER, GenericFormBuilder::customer),
            ],
        }
    }

    /// Drops built-in entries whose flag is not in `enabled`. Custom entries are kept.
    #[must_use]
    pub fn restrict(mut self, enabled: FormSet) -> Self {
        self.entries.retain(|entry| entry.kind.is_none_or(|kind| enabled.contains(kind)));
        self
    }

    /// Appends an entry. A later entry with the same key wins once registered.
    #[must_use]
    pub fn with<F>(mut self, key: impl Into<Cow<'static, str>>, constructor: F) -> Self
    where
        F: Fn() -> Box<dyn FormBuilder> + Send + Sync + 'static,
    {
        let entry = CatalogEntry { key: key.into(), kind: None, constructor: Arc::new(constructor) };
        self.entries.push(entry);
        self
    }

    /// Appends a generic-builder entry for `fields`.
    #[must_use]
    pub fn with_fields(self, key: impl Into<Cow<'static, str>>, fields: FieldList) -> Self {
        self.with(key, move || Box::new(GenericFormBuilder::new(fields.clone())))
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CatalogEntry::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_lead_then_customer() {
        assert_eq!(FormCatalog::builtin().keys().collect::<Vec<_>>(), ["lead", "customer"]);
    }

    #[test]
    fn restrict_keeps_custom_entries() {
        let catalog = FormCatalog::builtin()
            .with_fields("partner", FieldList::from(&["name", "company"][..]))
            .restrict(FormSet::CUSTOMER);

        assert_eq!(catalog.keys().collect::<Vec<_>>(), ["customer", "partner"]);
    }

    #[test]
    fn entries_construct_fresh_builders() {
        let catalog = FormCatalog::builtin();
        let customer = &catalog.entries()[1];

        let builder = (customer.constructor())();
        assert_eq!(builder.fields().len(), 4);
    }
}
