use std::sync::Arc;

use shared::types::Employee;

use crate::domain::employee::{EmployeeRepository, EmployeeUpdate, NewEmployee, SaveEmployee};
use crate::error::EmployeeServiceError;

/// Existence checks and merge rules around an [`EmployeeRepository`].
///
/// Each call is a single read or read-then-write against the store; there is
/// no locking, so concurrent updates of the same id resolve last-write-wins
/// at the database.
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        tracing::info!("Fetching all employees");
        self.employee_repo.find_all().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Employee, EmployeeServiceError> {
        self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_id(id))
    }

    /// Exact-name search. An empty match set is reported as `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Employee>, EmployeeServiceError> {
        let output = self.employee_repo.find_by_name(name.to_owned()).await?;

        if output.is_empty() {
            return Err(EmployeeServiceError::NotFound(format!(
                "Employee not found with Name: {name}"
            )));
        }

        tracing::info!(count = output.len(), "Employees found by name");
        Ok(output)
    }

    #[tracing::instrument(skip(self))]
    pub async fn add(&self, employee: NewEmployee) -> Result<Employee, EmployeeServiceError> {
        let output = self.employee_repo.save(employee.into()).await?;

        tracing::info!(id = output.id, "Employee added");
        Ok(output)
    }

    /// Merges the supplied fields into the stored row. A `name` is only
    /// applied when non-empty; omitted fields keep their stored value.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, update: EmployeeUpdate) -> Result<Employee, EmployeeServiceError> {
        let mut existing = self.get_by_id(update.id).await?;

        if let Some(name) = update.name.filter(|name| !name.is_empty()) {
            existing.name = name;
        }
        if let Some(salary) = update.salary {
            existing.salary = Some(salary);
        }

        let output = self.employee_repo.save(SaveEmployee::from(existing)).await?;

        tracing::info!(id = output.id, "Employee updated");
        Ok(output)
    }

    /// Deletes the row and returns what it held before deletion.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<Employee, EmployeeServiceError> {
        let snapshot = self.get_by_id(id).await?;

        self.employee_repo.delete_by_id(id).await?;

        tracing::info!(id, "Employee deleted");
        Ok(snapshot)
    }
}

fn not_found_id(id: i32) -> EmployeeServiceError {
    EmployeeServiceError::NotFound(format!("Employee not found with ID: {id}"))
}
