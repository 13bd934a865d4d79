use async_trait::async_trait;
use serde::Deserialize;
use shared::types::Employee;
use utoipa::ToSchema;

use crate::error::EmployeeServiceError;

/// Request body for create and update.
///
/// Every field is optional on the wire so that missing values surface as
/// validation messages instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EmployeePayload {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeePayload {
    /// Splits an update payload into its target id and the changes to merge.
    pub fn into_update(self) -> Option<EmployeeUpdate> {
        Some(EmployeeUpdate {
            id: self.id?,
            name: self.name,
            salary: self.salary,
        })
    }
}

/// A validated employee that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub salary: Option<f64>,
}

/// Partial update: `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeUpdate {
    pub id: i32,
    pub name: Option<String>,
    pub salary: Option<f64>,
}

/// Row handed to [`EmployeeRepository::save`]. With an `id` of a stored row
/// the row is overwritten, otherwise a new row with a fresh id is inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveEmployee {
    pub id: Option<i32>,
    pub name: String,
    pub salary: Option<f64>,
}

impl From<NewEmployee> for SaveEmployee {
    fn from(employee: NewEmployee) -> Self {
        Self {
            id: None,
            name: employee.name,
            salary: employee.salary,
        }
    }
}

impl From<Employee> for SaveEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            id: Some(employee.id),
            name: employee.name,
            salary: employee.salary,
        }
    }
}

#[cfg_attr(feature = "test-support", mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, EmployeeServiceError>;
    async fn find_by_name(&self, name: String) -> Result<Vec<Employee>, EmployeeServiceError>;
    async fn save(&self, employee: SaveEmployee) -> Result<Employee, EmployeeServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), EmployeeServiceError>;
}
