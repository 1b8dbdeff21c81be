use crate::employee::Employee;
use crate::error::FetchError;

/// Result of one gateway call. Either the list arrived or a message explains
/// why it did not; there is no state carrying both or neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<Employee>),
    Failed(String),
}

impl FetchOutcome {
    pub fn employees(&self) -> Option<&[Employee]> {
        match self {
            FetchOutcome::Loaded(employees) => Some(employees.as_slice()),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchOutcome::Loaded(_) => None,
            FetchOutcome::Failed(message) => Some(message.as_str()),
        }
    }
}

impl From<Result<Vec<Employee>, FetchError>> for FetchOutcome {
    fn from(result: Result<Vec<Employee>, FetchError>) -> Self {
        match result {
            Ok(employees) => FetchOutcome::Loaded(employees),
            Err(err) => FetchOutcome::Failed(err.message()),
        }
    }
}
