use crate::builder::FormBuilder;
use crate::form::{Form, FormData};
use formkit_domain::fields::{CUSTOMER_FIELDS, FieldList, LEAD_FIELDS};
use std::mem;

/// Builds a form from a provided list of fields.
#[derive(Debug, Clone, Default)]
pub struct GenericFormBuilder {
    fields: FieldList,
    form: Form,
}

impl GenericFormBuilder {
    #[must_use]
    pub fn new(fields: impl Into<FieldList>) -> Self {
        Self { fields: fields.into(), form: Form::default() }
    }

    /// Builder for the `lead` form.
    #[must_use]
    pub fn lead() -> Self {
        Self::new(LEAD_FIELDS.clone())
    }

    /// Builder for the `customer` form.
    #[must_use]
    pub fn customer() -> Self {
        Self::new(CUSTOMER_FIELDS.clone())
    }
}

impl FormBuilder for GenericFormBuilder {
    fn fields(&self) -> &FieldList {
        &self.fields
    }

    fn add_fields(&mut self) {
        self.form.reset(&self.fields);
    }

    fn populate(&mut self, data: &FormData) {
        self.form.overlay(data);
    }

    fn build(&mut self) -> Form {
        mem::take(&mut self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn add_fields_twice_resets_values() {
        let mut builder = GenericFormBuilder::customer();
        builder.add_fields();
        builder.populate(json!({ "name": "Krish" }).as_object().unwrap());
        builder.add_fields();

        let form = builder.build();
        assert_eq!(form.keys().collect::<Vec<_>>(), ["name", "email", "address", "phone"]);
        assert!(form.iter().all(|(_, v)| v == &Value::Null));
    }

    #[test]
    fn populate_before_add_fields_is_a_no_op() {
        let mut builder = GenericFormBuilder::lead();
        builder.populate(json!({ "name": "Krish" }).as_object().unwrap());

        assert!(builder.build().is_empty());
    }

    #[test]
    fn build_hands_off_the_form() {
        let mut builder = GenericFormBuilder::lead();
        builder.add_fields();

        assert_eq!(builder.build().len(), 2);
        assert!(builder.build().is_empty());
    }
}
