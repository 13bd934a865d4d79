use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::employee::{EmployeePayload, NewEmployee};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

pub const NAME_MISSING: &str = "name should be provided";
pub const NAME_BLANK: &str = "name can not be empty";
pub const NAME_LENGTH: &str = "Name should be between 2 and 50 characters.";
pub const SALARY_NOT_POSITIVE: &str = "Salary should be more than 0.";

/// Field name to violation message, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Records a violation; the first violation recorded for a field wins.
    fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_owned())
            .or_insert_with(|| message.to_owned());
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    if name.trim().is_empty() {
        errors.add("name", NAME_BLANK);
    }

    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        errors.add("name", NAME_LENGTH);
    }
}

fn check_salary(salary: Option<f64>, errors: &mut ValidationErrors) {
    if let Some(salary) = salary
        && salary <= 0.0
    {
        errors.add("salary", SALARY_NOT_POSITIVE);
    }
}

/// Validates a create payload. `name` is mandatory; a client supplied `id` is
/// dropped because the store assigns identifiers.
pub fn validate_new(payload: EmployeePayload) -> Result<NewEmployee, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = match payload.name {
        Some(name) => {
            check_name(&name, &mut errors);
            name
        }
        None => {
            errors.add("name", NAME_MISSING);
            String::new()
        }
    };
    check_salary(payload.salary, &mut errors);

    errors.into_result(NewEmployee {
        name,
        salary: payload.salary,
    })
}

/// Validates the fields an update payload carries. Omitted fields are left
/// alone by the merge, so only present values are checked.
///
/// The `id` is not checked here; an update without one is rejected
/// separately after field validation.
pub fn validate_update(payload: &EmployeePayload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(name) = payload.name.as_deref() {
        check_name(name, &mut errors);
    }
    check_salary(payload.salary, &mut errors);

    errors.into_result(())
}
