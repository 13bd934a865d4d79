use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// region: Employee Service Types

/// A persisted employee row.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub salary: Option<f64>,
}

// endregion: Employee Service Types
