pub mod employees_actor;

pub use employees_actor::{EmployeesHandle, spawn};
