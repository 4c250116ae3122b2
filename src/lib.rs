pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;

pub use db::{Employee, NewEmployee};
pub use error::EmployeeError;
