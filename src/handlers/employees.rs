use axum::{Json, extract::State};

use crate::db::Employee;
use crate::{EmployeeError, router::EmployeesState};

/// GET /employees -> every stored employee as a JSON array.
pub async fn list_employees(
    State(state): State<EmployeesState>,
) -> Result<Json<Vec<Employee>>, EmployeeError> {
    let rows = state.handle.list().await?;
    Ok(Json(rows))
}
