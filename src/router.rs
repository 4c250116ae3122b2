use axum::{Router, routing::get};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

use crate::handlers::employees::list_employees;
use crate::EmployeeError;
use crate::service::EmployeesHandle;

#[derive(Clone)]
pub struct EmployeesState {
    pub handle: EmployeesHandle,
}

impl EmployeesState {
    pub fn new(handle: EmployeesHandle) -> Self {
        Self { handle }
    }
}

pub fn employees_router(state: EmployeesState) -> Router {
    Router::new()
        .route("/employees", get(list_employees))
        .with_state(state)
}

/// Serve the router on `listener` until `shutdown` resolves, then stop the
/// store. The store is stopped even when serving fails.
pub async fn serve_until<F>(
    listener: TcpListener,
    handle: EmployeesHandle,
    shutdown: F,
) -> Result<(), EmployeeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = employees_router(EmployeesState::new(handle.clone()));
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    handle.stop().await?;
    served.map_err(EmployeeError::Serve)?;
    info!("HTTP server stopped");
    Ok(())
}
