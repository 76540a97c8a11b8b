//! Todoey Engine - orchestration layer
//!
//! Coordinates the core rules with the storage engine:
//! - `queries`: read paths (list categories, list and search items)
//! - `mutations`: create, toggle and delete, each as one atomic change-set
//! - `service`: `TodoService`, the handle collaborators hold, with lifecycle
//!   logging around every operation
//! - `config`: TOML-backed `EngineConfig`

pub mod config;
pub mod mutations;
pub mod queries;
pub mod service;

pub use config::EngineConfig;
pub use service::TodoService;
