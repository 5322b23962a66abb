//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use formkit_kernel::config::load_config;
//! use formkit_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("formkit.toml")).unwrap_or_default();
//! ```
pub mod config;

pub use formkit_domain as domain;
