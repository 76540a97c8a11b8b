//! Schema bootstrap
//!
//! Provides:
//! - Embedded SQL applied once per database, in order
//! - Checksums recorded per migration and verified on every open

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
