//! SQL DDL for initializing the employee table.

/// SQLite schema with:
/// - `idEmployee` INTEGER PRIMARY KEY AUTOINCREMENT, assigned on insert
/// - every other column nullable TEXT with no uniqueness or format checks
/// - no timestamp columns
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Employees (
    idEmployee INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NULL,
    last_name TEXT NULL,
    email TEXT NULL,
    hashed_password TEXT NULL -- stored verbatim, never hashed here
);
"#;
