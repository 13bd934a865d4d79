use async_trait::async_trait;
use shared::types::Employee;
use sqlx::PgPool;

use crate::{
    domain::employee::{EmployeeRepository, SaveEmployee},
    error::EmployeeServiceError,
};

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: SaveEmployee) -> Result<Employee, EmployeeServiceError> {
        let output = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, salary)
            VALUES ($1, $2)
            RETURNING id, name, salary
            "#,
        )
        .bind(employee.name)
        .bind(employee.salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(output)
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        let output = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, salary
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(output)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, EmployeeServiceError> {
        let output = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, salary
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(output)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_name(&self, name: String) -> Result<Vec<Employee>, EmployeeServiceError> {
        let output = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, salary
            FROM employees
            WHERE name = $1
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(output)
    }

    /// Overwrites the row when `id` names an existing one, inserts otherwise.
    /// An `id` that matches no row is not reused; the insert gets a fresh one.
    #[tracing::instrument(skip(self))]
    async fn save(&self, employee: SaveEmployee) -> Result<Employee, EmployeeServiceError> {
        let Some(id) = employee.id else {
            return self.insert(employee).await;
        };

        let updated = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $2,
                salary = $3
            WHERE id = $1
            RETURNING id, name, salary
            "#,
        )
        .bind(id)
        .bind(&employee.name)
        .bind(employee.salary)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(output) => Ok(output),
            None => self.insert(employee).await,
        }
    }

    /// Deleting an id that does not exist is a no-op.
    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, id: i32) -> Result<(), EmployeeServiceError> {
        let output = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if output.rows_affected() == 0 {
            tracing::debug!(id, "No employee row to delete");
        }

        Ok(())
    }
}
