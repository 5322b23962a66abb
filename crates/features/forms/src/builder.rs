use crate::form::{Form, FormData};
use formkit_domain::fields::FieldList;
use std::fmt::Debug;
use std::sync::Arc;

/// Zero-argument constructor producing a fresh builder per request.
pub type BuilderConstructor = Arc<dyn Fn() -> Box<dyn FormBuilder> + Send + Sync>;

/// Contract for form builders.
///
/// A builder owns exactly one [`Form`] and fills it in three steps. None of the steps can
/// fail; they are meant to be driven in order by a [`FormDirector`](crate::FormDirector).
pub trait FormBuilder: Debug + Send {
    /// The authoritative key set of the forms this builder produces.
    fn fields(&self) -> &FieldList;

    /// Adds every field with a `null` value.
    ///
    /// Calling it again resets all values to `null`; the key set stays the same.
    fn add_fields(&mut self);

    /// Copies values from `data` into fields that already exist; other keys are ignored.
    fn populate(&mut self, data: &FormData);

    /// Hands off the form without copying it.
    ///
    /// The builder keeps an empty form afterwards, so it should be discarded.
    fn build(&mut self) -> Form;
}
