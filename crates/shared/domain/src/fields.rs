//! Field tables for the built-in form types.
//!
//! Every table is the shared [`BASE_FIELDS`] followed by the type-specific additions.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

/// Fields every form type carries.
pub const BASE_FIELDS: &[&str] = &["name", "email"];

const LEAD_EXTRA: &[&str] = &[];
const CUSTOMER_EXTRA: &[&str] = &["address", "phone"];

pub static LEAD_FIELDS: LazyLock<FieldList> =
    LazyLock::new(|| FieldList::from(BASE_FIELDS).extend(LEAD_EXTRA.iter().copied()));

pub static CUSTOMER_FIELDS: LazyLock<FieldList> =
    LazyLock::new(|| FieldList::from(BASE_FIELDS).extend(CUSTOMER_EXTRA.iter().copied()));

/// An ordered list of unique field identifiers.
///
/// Duplicates are dropped on construction (first occurrence wins), so a list composed
/// from overlapping parts still names every slot exactly once. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct FieldList(Arc<[String]>);

impl FieldList {
    /// Returns a new list with `extra` appended after the current fields.
    #[must_use]
    pub fn extend<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.iter().cloned().chain(extra.into_iter().map(Into::into)).collect()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for field in iter.into_iter().map(Into::into) {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        Self(unique.into())
    }
}

impl From<Vec<String>> for FieldList {
    fn from(fields: Vec<String>) -> Self {
        fields.into_iter().collect()
    }
}

impl From<&[&str]> for FieldList {
    fn from(fields: &[&str]) -> Self {
        fields.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_start_with_base_fields() {
        assert_eq!(LEAD_FIELDS.as_slice(), ["name", "email"]);
        assert_eq!(CUSTOMER_FIELDS.as_slice(), ["name", "email", "address", "phone"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let fields = FieldList::from(BASE_FIELDS).extend(["phone", "name", "phone"]);
        assert_eq!(fields.as_slice(), ["name", "email", "phone"]);
    }
}
