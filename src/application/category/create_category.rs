use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, CategoryId};
use crate::domain::gateways::CategoryGateway;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

/// Input for creating a category. Structurally valid by construction;
/// business rules are the aggregate's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Minimal projection returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

pub struct CreateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl CreateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<CreateCategoryCommand, CreateCategoryOutput> for CreateCategoryUseCase {
    async fn execute(&self, command: CreateCategoryCommand) -> UseCaseResult<CreateCategoryOutput> {
        let category = Category::new(command.name, command.description, command.is_active);

        let mut notification = Notification::new();
        let _ = category.validate(&mut notification); // a Notification never raises
        if notification.has_errors() {
            debug!(
                "create category rejected with {} validation error(s)",
                notification.errors().len()
            );
            return Err(UseCaseError::Report(notification));
        }

        match self.gateway.create(&category).await {
            Ok(created) => Ok(CreateCategoryOutput { id: created.id }),
            Err(error) => {
                warn!("category create failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}
