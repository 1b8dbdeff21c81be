use async_trait::async_trait;

use crate::outcome::FetchOutcome;

/// Abstract "fetch employees" capability.
///
/// Implementations perform at most one attempt per call and never retry.
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    async fn get_employees(&self) -> FetchOutcome;
}
