use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::shared::errors::AppError;

/// Base trait for use cases (command handlers).
///
/// Every use case follows the same protocol: build or load the aggregate,
/// validate it with an accumulating handler, and only then call the gateway.
/// Validation failures short-circuit before any side effect; gateway failures
/// happen after the aggregate state would have been committed. Both land on
/// the same failure surface, [`UseCaseError`].
#[async_trait]
pub trait UseCase<TCommand, TOutput> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> UseCaseResult<TOutput>;
}

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Failure surface shared by every use case.
#[derive(Debug, Clone, Error, Serialize)]
pub enum UseCaseError {
    /// The ordered failure report: validation errors, or a single summarized
    /// entry when the gateway failed after validation passed.
    #[error("could not process the command")]
    Report(Notification),

    /// The requested aggregate does not exist. Produced by lookup paths,
    /// never by a validator.
    #[error("{aggregate} with ID {id} was not found")]
    NotFound { aggregate: &'static str, id: String },
}

impl UseCaseError {
    pub fn not_found(aggregate: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            aggregate,
            id: id.to_string(),
        }
    }

    /// Downgrade a gateway failure into a single-entry report. The caller
    /// sees the same shape as a validation failure; the underlying cause
    /// stays summarized in one message.
    pub fn from_gateway(error: AppError) -> Self {
        Self::Report(Notification::from_error(ValidationError::new(
            error.to_string(),
        )))
    }

    /// Errors carried by the failure report; empty for the not-found kind.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Report(notification) => notification.errors(),
            Self::NotFound { .. } => &[],
        }
    }
}
