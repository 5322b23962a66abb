use formkit_domain::fields::FieldList;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Caller-supplied values keyed by arbitrary field names.
pub type FormData = Map<String, Value>;

/// A finished (or in-progress) form: field name to value, in field-table order.
///
/// `Value::Null` marks a slot that has no value yet. Once a builder has added its fields,
/// the key set never changes: populating only overwrites existing slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form(Map<String, Value>);

impl Form {
    /// Sets every field of `fields` to `Value::Null`, keeping the table order.
    pub(crate) fn reset(&mut self, fields: &FieldList) {
        for field in fields.iter() {
            self.0.insert(field.to_owned(), Value::Null);
        }
    }

    /// Overwrites the slots that `data` names; unknown keys are dropped.
    pub(crate) fn overlay(&mut self, data: &FormData) {
        for (key, value) in data {
            if let Some(slot) = self.0.get_mut(key) {
                slot.clone_from(value);
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    #[must_use]
    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` when no slot holds a value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.values().all(Value::is_null)
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Form> for Value {
    fn from(form: Form) -> Self {
        Self::Object(form.0)
    }
}

/// Compact JSON, e.g. `{"name":"Krish","email":null}`.
impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> FormData {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn reset_follows_table_order() {
        let mut form = Form::default();
        form.reset(&FieldList::from(&["email", "name"][..]));

        assert_eq!(form.keys().collect::<Vec<_>>(), ["email", "name"]);
        assert!(form.is_blank());
    }

    #[test]
    fn overlay_only_touches_existing_slots() {
        let mut form = Form::default();
        form.reset(&FieldList::from(&["name", "email"][..]));
        form.overlay(&data(json!({ "name": "Krish", "product_id": "P123" })));

        assert_eq!(form.get("name"), Some(&json!("Krish")));
        assert_eq!(form.get("email"), Some(&Value::Null));
        assert!(!form.contains_key("product_id"));
        assert_eq!(form.to_string(), r#"{"name":"Krish","email":null}"#);
    }
}
