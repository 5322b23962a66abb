use crate::builder::FormBuilder;
use crate::form::{Form, FormData};
use tracing::trace;

/// Drives `builder` through its steps: add fields, populate (only when `data` has entries),
/// build.
pub fn construct<B>(builder: &mut B, data: Option<&FormData>) -> Form
where
    B: FormBuilder + ?Sized,
{
    builder.add_fields();

    if let Some(data) = data.filter(|data| !data.is_empty()) {
        trace!(entries = data.len(), "Populating form");
        builder.populate(data);
    }

    builder.build()
}

/// Orchestrates building with an owned builder.
#[derive(Debug)]
pub struct FormDirector {
    builder: Box<dyn FormBuilder>,
}

impl FormDirector {
    #[must_use]
    pub fn new(builder: Box<dyn FormBuilder>) -> Self {
        Self { builder }
    }

    #[must_use]
    pub fn builder(&self) -> &dyn FormBuilder {
        self.builder.as_ref()
    }

    /// Runs [`construct`] and consumes the director along with its builder.
    #[must_use]
    pub fn construct(mut self, data: Option<&FormData>) -> Form {
        construct(self.builder.as_mut(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::GenericFormBuilder;
    use formkit_domain::fields::FieldList;
    use serde_json::json;

    /// Records the order in which the director calls each step.
    #[derive(Debug, Default)]
    struct RecordingBuilder {
        fields: FieldList,
        calls: Vec<&'static str>,
    }

    impl FormBuilder for RecordingBuilder {
        fn fields(&self) -> &FieldList {
            &self.fields
        }

        fn add_fields(&mut self) {
            self.calls.push("add_fields");
        }

        fn populate(&mut self, _data: &FormData) {
            self.calls.push("populate");
        }

        fn build(&mut self) -> Form {
            self.calls.push("build");
            Form::default()
        }
    }

    #[test]
    fn steps_run_in_order() {
        let mut builder = RecordingBuilder::default();
        let data = json!({ "name": "Krish" });

        let _ = construct(&mut builder, data.as_object());
        assert_eq!(builder.calls, ["add_fields", "populate", "build"]);
    }

    #[test]
    fn empty_or_missing_data_skips_populate() {
        let mut builder = RecordingBuilder::default();
        let _ = construct(&mut builder, None);
        let _ = construct(&mut builder, Some(&FormData::new()));

        assert_eq!(builder.calls, ["add_fields", "build", "add_fields", "build"]);
    }

    #[test]
    fn director_owns_its_builder() {
        let director = FormDirector::new(Box::new(GenericFormBuilder::lead()));
        assert_eq!(director.builder().fields().len(), 2);

        let form = director.construct(json!({ "email": "krish@krish.com" }).as_object());
        assert_eq!(form.to_string(), r#"{"name":null,"email":"krish@krish.com"}"#);
    }
}
