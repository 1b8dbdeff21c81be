//! # Employee Model
//!
//! The wire and domain representation of a directory entry.
//!
//! The endpoint answers with a single object wrapping an ordered array:
//! ```json
//! {"employees": [{"name": "Ada", "profile": "Engineer"}]}
//! ```

use serde::{Deserialize, Serialize};

/// One row of the directory. Has no identity; two records with the same
/// fields are the same record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub profile: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile: profile.into(),
        }
    }
}

/// Envelope of one HTTP response. Only lives for the duration of a parse.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employees: Vec<Employee>,
}

impl EmployeeResponse {
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }
}

impl From<Vec<Employee>> for EmployeeResponse {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}
