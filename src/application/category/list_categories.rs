use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, CategoryId};
use crate::domain::gateways::CategoryGateway;
use crate::shared::application::{Pagination, SearchQuery, UseCase, UseCaseError, UseCaseResult};

/// List projection: the audit trail minus `updated_at`, which listings never
/// show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListItem {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListItem {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
            deleted_at: category.deleted_at,
        }
    }
}

pub struct ListCategoriesUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl ListCategoriesUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<SearchQuery, Pagination<CategoryListItem>> for ListCategoriesUseCase {
    async fn execute(&self, query: SearchQuery) -> UseCaseResult<Pagination<CategoryListItem>> {
        match self.gateway.find_all(&query).await {
            Ok(page) => Ok(page.map(CategoryListItem::from)),
            Err(error) => {
                warn!("category listing failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}
