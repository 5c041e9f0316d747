//! # jobtrack-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `jobtrack-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the schema on first startup (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `jobtrack-app` (for port traits) and `jobtrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod application_repo;
pub mod error;
pub mod pool;

pub use application_repo::SqliteApplicationRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
