use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use shared::types::Employee;

use crate::{
    api::{message::message, state::EmployeeAppState},
    domain::{
        employee::EmployeePayload,
        validation::{validate_new, validate_update},
    },
    error::EmployeeServiceError,
};

pub const MISSING_ID_MESSAGE: &str = "Employee ID must be provided for update operations.";

#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    operation_id = "list_employees",
    responses(
        (status = 200, description = "List all employees", body = Vec<Employee>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn find_all(
    State(state): State<Arc<EmployeeAppState>>,
) -> Result<impl IntoResponse, EmployeeServiceError> {
    let output = state.employee_service.get_all().await?;

    Ok((
        message("All employees fetched successfully."),
        Json(output),
    ))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    operation_id = "get_employee",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn find_by_id(
    State(state): State<Arc<EmployeeAppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, EmployeeServiceError> {
    let Path(id) = id?;
    let output = state.employee_service.get_by_id(id).await?;

    Ok((
        message(format!("Employee with ID {id} fetched successfully.")),
        Json(output),
    ))
}

#[utoipa::path(
    get,
    path = "/employees/name/{name}",
    tag = "Employees",
    operation_id = "find_employees_by_name",
    params(
        ("name" = String, Path, description = "Exact employee name")
    ),
    responses(
        (status = 200, description = "Employees with that name", body = Vec<Employee>),
        (status = 404, description = "No employee has that name")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn find_by_name(
    State(state): State<Arc<EmployeeAppState>>,
    name: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, EmployeeServiceError> {
    let Path(name) = name?;
    let output = state.employee_service.find_by_name(&name).await?;

    Ok((
        message(format!(
            "{} employee(s) found with name: {name}.",
            output.len()
        )),
        Json(output),
    ))
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    operation_id = "create_employee",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failed, body maps field to message")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<EmployeeAppState>>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, EmployeeServiceError> {
    let Json(payload) = payload?;
    let employee = validate_new(payload)?;

    let output = state.employee_service.add(employee).await?;

    Ok((
        StatusCode::CREATED,
        message(format!("Employee {} added successfully.", output.name)),
        Json(output),
    ))
}

/// Partial update: only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/employees",
    tag = "Employees",
    operation_id = "update_employee",
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Validation failed or id missing"),
        (status = 404, description = "Employee not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn update(
    State(state): State<Arc<EmployeeAppState>>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, EmployeeServiceError> {
    let Json(payload) = payload?;
    validate_update(&payload)?;

    let update = payload
        .into_update()
        .ok_or_else(|| EmployeeServiceError::BadRequest(MISSING_ID_MESSAGE.to_string()))?;

    let output = state.employee_service.update(update).await?;

    Ok((
        message(format!("Employee with ID {} updated successfully.", output.id)),
        Json(output),
    ))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    operation_id = "delete_employee",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<EmployeeAppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, EmployeeServiceError> {
    let Path(id) = id?;
    let deleted = state.employee_service.delete(id).await?;

    Ok((
        StatusCode::NO_CONTENT,
        message(format!("Employee with ID {} deleted successfully.", deleted.id)),
    ))
}
