//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or heavy logic, just field tables, form kinds and config models.

pub mod config;
pub mod constants;
pub mod fields;
pub mod kinds;
