//! Configurable data-shape rules
//!
//! Required-field checks live on the drafts in `model`; this module holds
//! the rules that depend on configuration or on existing records.

pub mod policy;
pub mod validation;

pub use policy::DeletePolicy;
pub use validation::ValidationRules;
