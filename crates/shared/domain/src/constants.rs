//! Registry keys of the built-in form types.

pub const LEAD: &str = "lead";
pub const CUSTOMER: &str = "customer";
