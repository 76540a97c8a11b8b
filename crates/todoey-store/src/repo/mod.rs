//! Repository layer: SQL for Category and Item rows
//!
//! Every function takes a `&Connection`, so the same code runs on a plain
//! connection for reads and on a `Transaction` (which derefs to one) inside
//! `StorageEngine::save`.

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
