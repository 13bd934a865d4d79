use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON envelope for error bodies that carry no field-level detail
/// (authentication failures, internal errors).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error_msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error_msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_is_never_successful() {
        let body = ErrorResponse::new("nope");

        assert!(!body.success);
        assert_eq!(body.error, "nope");
    }
}
