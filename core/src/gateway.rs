//! Implementations of the [`EmployeeGateway`] port.

use async_trait::async_trait;
use roster_common::employee::Employee;
use roster_common::outcome::FetchOutcome;
use roster_common::ports::EmployeeGateway;

use crate::remote::RemoteDataSource;

/// Production gateway: every call is one request through [`RemoteDataSource`].
pub struct HttpEmployeeGateway {
    source: RemoteDataSource,
}

impl HttpEmployeeGateway {
    pub fn new(source: RemoteDataSource) -> Self {
        Self { source }
    }
}

#[async_trait]
impl EmployeeGateway for HttpEmployeeGateway {
    async fn get_employees(&self) -> FetchOutcome {
        self.source.fetch_employees().await.into()
    }
}

/// Answers every call with the same canned outcome.
#[derive(Clone, Debug)]
pub struct InMemoryGateway {
    outcome: FetchOutcome,
}

impl InMemoryGateway {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            outcome: FetchOutcome::Loaded(employees),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: FetchOutcome::Failed(message.into()),
        }
    }
}

#[async_trait]
impl EmployeeGateway for InMemoryGateway {
    async fn get_employees(&self) -> FetchOutcome {
        self.outcome.clone()
    }
}
