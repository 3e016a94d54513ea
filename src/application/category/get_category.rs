use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, CategoryId};
use crate::domain::gateways::CategoryGateway;
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

/// Full projection of a persisted category, owned by the use-case layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
            deleted_at: category.deleted_at,
        }
    }
}

pub struct GetCategoryByIdUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl GetCategoryByIdUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<CategoryId, CategoryOutput> for GetCategoryByIdUseCase {
    async fn execute(&self, id: CategoryId) -> UseCaseResult<CategoryOutput> {
        let found = match self.gateway.find_by_id(&id).await {
            Ok(found) => found,
            Err(error) => {
                warn!("category lookup failed at the gateway: {}", error);
                return Err(UseCaseError::from_gateway(error));
            }
        };

        found
            .map(CategoryOutput::from)
            .ok_or_else(|| UseCaseError::not_found("Category", id))
    }
}
