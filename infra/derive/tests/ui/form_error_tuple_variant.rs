use formkit_derive::form_error;

#[form_error]
pub enum DemoError {
    #[error("Unknown form type: {0}")]
    UnknownFormType(String),
}

fn main() {}
