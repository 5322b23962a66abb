//! # CLI Argument Definitions

use clap::Parser;
use std::path::PathBuf;

/// Builds a form and prints it as JSON.
#[derive(Debug, Parser)]
#[command(name = "formkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build key/value forms from registered form types")]
pub(crate) struct Cli {
    /// Form type to build (defaults to `forms.default_form`, i.e. "lead")
    #[arg(short, long)]
    pub(crate) form: Option<String>,

    /// JSON object with the values to fill in (defaults to the built-in sample)
    #[arg(short, long, value_name = "JSON")]
    pub(crate) data: Option<String>,

    /// Config file (toml, json or yaml); `./formkit.*` is used when present
    #[arg(short, long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Pretty-print the resulting form
    #[arg(long)]
    pub(crate) pretty: bool,

    /// List registered form types with their fields and exit
    #[arg(long, conflicts_with_all = ["form", "data"])]
    pub(crate) list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_conflicts_with_form() {
        assert!(Cli::try_parse_from(["formkit", "--list", "--form", "lead"]).is_err());
    }
}
