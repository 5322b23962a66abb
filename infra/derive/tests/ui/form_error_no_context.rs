use formkit_derive::form_error;

#[form_error]
pub enum DemoError {
    #[error("Parse error: {source}")]
    Parse {
        #[source]
        source: std::num::ParseIntError,
    },
}

fn main() {}
