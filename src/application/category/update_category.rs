use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::entities::CategoryId;
use crate::domain::gateways::CategoryGateway;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

pub struct UpdateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl UpdateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<UpdateCategoryCommand, UpdateCategoryOutput> for UpdateCategoryUseCase {
    async fn execute(&self, command: UpdateCategoryCommand) -> UseCaseResult<UpdateCategoryOutput> {
        let mut category = self
            .gateway
            .find_by_id(&command.id)
            .await
            .map_err(UseCaseError::from_gateway)?
            .ok_or_else(|| UseCaseError::not_found("Category", command.id))?;

        category.update(command.name, command.description, command.is_active);

        let mut notification = Notification::new();
        let _ = category.validate(&mut notification); // a Notification never raises
        if notification.has_errors() {
            debug!(
                "update category {} rejected with {} validation error(s)",
                category.id,
                notification.errors().len()
            );
            return Err(UseCaseError::Report(notification));
        }

        match self.gateway.update(&category).await {
            Ok(updated) => Ok(UpdateCategoryOutput { id: updated.id }),
            Err(error) => {
                warn!("category update failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;
    use crate::domain::gateways::MockCategoryGateway;

    #[tokio::test]
    async fn updates_an_existing_category() {
        let existing = Category::new("Film", None, true);
        let id = existing.id;

        let mut gateway = MockCategoryGateway::new();
        let found = existing.clone();
        gateway
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        gateway
            .expect_update()
            .withf(move |category: &Category| {
                category.id == id && category.name == "Filmes" && !category.is_active
            })
            .times(1)
            .returning(|category| Ok(category.clone()));

        let use_case = UpdateCategoryUseCase::new(Arc::new(gateway));
        let output = use_case
            .execute(UpdateCategoryCommand {
                id,
                name: "Filmes".to_string(),
                description: Some("A categoria mais assistida".to_string()),
                is_active: false,
            })
            .await
            .unwrap();

        assert_eq!(output.id, id);
    }

    #[tokio::test]
    async fn missing_category_yields_not_found() {
        let mut gateway = MockCategoryGateway::new();
        gateway.expect_find_by_id().times(1).returning(|_| Ok(None));
        gateway.expect_update().times(0);

        let id = CategoryId::new();
        let use_case = UpdateCategoryUseCase::new(Arc::new(gateway));
        let error = use_case
            .execute(UpdateCategoryCommand {
                id,
                name: "Filmes".to_string(),
                description: None,
                is_active: true,
            })
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            format!("Category with ID {} was not found", id)
        );
    }

    #[tokio::test]
    async fn invalid_update_never_reaches_the_gateway() {
        let existing = Category::new("Filmes", None, true);

        let mut gateway = MockCategoryGateway::new();
        let found = existing.clone();
        gateway
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        gateway.expect_update().times(0);

        let use_case = UpdateCategoryUseCase::new(Arc::new(gateway));
        let error = use_case
            .execute(UpdateCategoryCommand {
                id: existing.id,
                name: "  ".to_string(),
                description: None,
                is_active: true,
            })
            .await
            .unwrap_err();

        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].message(), "'name' should not be empty");
    }
}
