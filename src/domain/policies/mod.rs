//! Domain Policies
//!
//! Business rules that govern behavior. Pure functions over domain values.

mod validation_policy;

pub use validation_policy::ValidationPolicy;
