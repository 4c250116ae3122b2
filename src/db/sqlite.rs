use crate::db::models::{Employee, NewEmployee};
use crate::db::schema::SQLITE_INIT;
use crate::error::EmployeeError;
use futures::{TryStreamExt, future};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const EMPLOYEE_SELECT_SQL: &str = r#"SELECT idEmployee, first_name, last_name, email, hashed_password
    FROM Employees"#;

#[derive(Clone)]
pub struct EmployeeStore {
    pool: SqlitePool,
}

impl EmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the SQLite database at `database_url` and
    /// make sure the `Employees` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, EmployeeError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)
            .map_err(EmployeeError::Connection)?
            .create_if_missing(true);
        ensure_parent_dir(connect_opts.get_filename())?;

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(EmployeeError::Connection)?;
        let store = Self::new(pool);
        store.init_schema().await?;

        info!(database_url = %database_url, "employee store ready");
        Ok(store)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), EmployeeError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a record from whichever fields are set. Returns the stored row,
    /// including the id SQLite assigned.
    pub async fn create(&self, fields: NewEmployee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"INSERT INTO Employees (first_name, last_name, email, hashed_password)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(fields.first_name)
        .bind(fields.last_name)
        .bind(fields.email)
        .bind(fields.hashed_password)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "employee inserted");

        let row = sqlx::query(&format!("{EMPLOYEE_SELECT_SQL} WHERE idEmployee = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Self::row_to_model(row)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query(&format!("{EMPLOYEE_SELECT_SQL} WHERE idEmployee = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// First row in storage order, `None` when the table is empty.
    pub async fn find_one(&self) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query(&format!("{EMPLOYEE_SELECT_SQL} LIMIT 1"))
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Every row currently in the table. Order is whatever SQLite scans in.
    pub async fn list(&self) -> Result<Vec<Employee>, EmployeeError> {
        sqlx::query(EMPLOYEE_SELECT_SQL)
            .fetch(&self.pool)
            .map_err(EmployeeError::from)
            .and_then(|row| future::ready(Self::row_to_model(row)))
            .try_collect()
            .await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_model(row: SqliteRow) -> Result<Employee, EmployeeError> {
        Ok(Employee {
            id: row.try_get("idEmployee")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            hashed_password: row.try_get("hashed_password")?,
        })
    }
}

/// SQLite creates a missing file but not a missing directory. A directory
/// that cannot be created means the store cannot be opened.
fn ensure_parent_dir(filename: &Path) -> Result<(), EmployeeError> {
    match filename.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            std::fs::create_dir_all(dir)
                .map_err(|e| EmployeeError::Connection(sqlx::Error::Io(e)))?;
            debug!(path = %dir.display(), "created database directory");
            Ok(())
        }
        _ => Ok(()),
    }
}
