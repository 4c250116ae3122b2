use crate::db::models::{Employee, NewEmployee};
use crate::db::sqlite::EmployeeStore;
use crate::error::EmployeeError;

use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use tracing::{debug, error, info};

type Reply<T> = RpcReplyPort<Result<T, EmployeeError>>;

/// Public messages handled by the employees actor. Each one is answered on
/// its reply port once the store call finishes, in arrival order.
#[derive(Debug)]
pub enum EmployeesActorMessage {
    /// Insert a record and reply with the stored row.
    Create(NewEmployee, Reply<Employee>),
    /// Fetch a record by primary key.
    Get(i64, Reply<Option<Employee>>),
    /// Fetch the first record in storage order.
    FindOne(Reply<Option<Employee>>),
    /// Full table scan.
    List(Reply<Vec<Employee>>),
}

/// Handle for interacting with the employees actor.
#[derive(Clone)]
pub struct EmployeesHandle {
    actor: ActorRef<EmployeesActorMessage>,
}

impl EmployeesHandle {
    pub async fn create(&self, fields: NewEmployee) -> Result<Employee, EmployeeError> {
        let res = ractor::call!(self.actor, EmployeesActorMessage::Create, fields)
            .map_err(|e| EmployeeError::RactorError(format!("Create RPC failed: {e}")))?;
        res.inspect_err(|e| error!(error = %e, "create employee failed"))
    }

    pub async fn get(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        let res = ractor::call!(self.actor, EmployeesActorMessage::Get, id)
            .map_err(|e| EmployeeError::RactorError(format!("Get RPC failed: {e}")))?;
        res.inspect_err(|e| error!(id, error = %e, "get employee failed"))
    }

    pub async fn find_one(&self) -> Result<Option<Employee>, EmployeeError> {
        let res = ractor::call!(self.actor, EmployeesActorMessage::FindOne)
            .map_err(|e| EmployeeError::RactorError(format!("FindOne RPC failed: {e}")))?;
        res.inspect_err(|e| error!(error = %e, "find employee failed"))
    }

    pub async fn list(&self) -> Result<Vec<Employee>, EmployeeError> {
        let res = ractor::call!(self.actor, EmployeesActorMessage::List)
            .map_err(|e| EmployeeError::RactorError(format!("List RPC failed: {e}")))?;
        res.inspect_err(|e| error!(error = %e, "list employees failed"))
    }

    /// Stop the actor and wait for it to close the store.
    pub async fn stop(&self) -> Result<(), EmployeeError> {
        self.actor
            .stop_and_wait(None, None)
            .await
            .map_err(|e| EmployeeError::RactorError(format!("stop failed: {e}")))
    }
}

struct EmployeesActorState {
    store: EmployeeStore,
}

struct EmployeesActor;

#[ractor::async_trait]
impl Actor for EmployeesActor {
    type Msg = EmployeesActorMessage;
    type State = EmployeesActorState;
    type Arguments = EmployeeStore;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        store: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!("EmployeesActor started");
        Ok(EmployeesActorState { store })
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.store.close().await;
        info!("EmployeesActor stopped; store closed");
        Ok(())
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            EmployeesActorMessage::Create(fields, rp) => {
                let res = state.store.create(fields).await;
                if let Ok(created) = &res {
                    debug!(id = created.id, "employee created");
                }
                let _ = rp.send(res);
            }
            EmployeesActorMessage::Get(id, rp) => {
                let _ = rp.send(state.store.get(id).await);
            }
            EmployeesActorMessage::FindOne(rp) => {
                let _ = rp.send(state.store.find_one().await);
            }
            EmployeesActorMessage::List(rp) => {
                let res = state.store.list().await;
                if let Ok(rows) = &res {
                    debug!(count = rows.len(), "employees listed");
                }
                let _ = rp.send(res);
            }
        }
        Ok(())
    }
}

/// Connect the store at `database_url` and hand it to a fresh actor.
/// Fails with a connection error when the database cannot be opened.
pub async fn spawn(database_url: &str) -> Result<EmployeesHandle, EmployeeError> {
    let store = EmployeeStore::connect(database_url).await?;
    let (actor, _jh) = Actor::spawn(None, EmployeesActor, store)
        .await
        .map_err(|e| EmployeeError::RactorError(format!("failed to spawn EmployeesActor: {e}")))?;
    Ok(EmployeesHandle { actor })
}
