//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the query layer over a SQLite pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Employee, NewEmployee};
pub use sqlite::{EmployeeStore, SqlitePool};

pub use crate::service::employees_actor::{EmployeesHandle, spawn};
