use serde::Serialize;
use thiserror::Error;

/// Failures raised by infrastructure collaborators (gateways, adapters).
///
/// The use-case layer catches these at its boundary and downgrades them into
/// the same report shape as validation failures, so callers only ever handle
/// one failure surface.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Standard wording for a missing aggregate, shared with the use-case
    /// layer so adapters do not hand-format the message.
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("{} with ID {} was not found", kind, id))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("Invalid UUID: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_and_message_tags() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["type"], "DatabaseError");
        assert_eq!(json["message"], "connection refused");
    }

    #[test]
    fn not_found_names_the_kind_and_the_id() {
        let error = AppError::not_found("Category", "0192b1a2");

        match &error {
            AppError::NotFound(message) => {
                assert_eq!(message, "Category with ID 0192b1a2 was not found");
            }
            other => panic!("expected the not-found variant, got {:?}", other),
        }
        assert_eq!(
            error.to_string(),
            "Not found: Category with ID 0192b1a2 was not found"
        );
    }

    #[test]
    fn display_summarizes_the_cause() {
        let error = AppError::DatabaseError("constraint violation".to_string());
        assert_eq!(error.to_string(), "Database error: constraint violation");
    }
}
