//! workbridge database layer.
//!
//! Owns the `users` table: the local mirror of upstream employees.
//! Provides the connection pool, embedded migrations, and the [`User`]
//! model with its query methods.

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::User;
pub use pool::connect;
