use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{Category, CategoryId};
use crate::shared::application::{Pagination, SearchQuery};
use crate::shared::errors::AppResult;

/// Persistence contract for categories, implemented by an adapter outside the
/// core. Use cases only call these operations and interpret the outcome; they
/// never touch storage or build queries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn create(&self, category: &Category) -> AppResult<Category>;
    async fn update(&self, category: &Category) -> AppResult<Category>;
    async fn find_by_id(&self, id: &CategoryId) -> AppResult<Option<Category>>;
    /// Adapter-level purge. The delete use case soft-deletes through `update`
    /// and never calls this.
    async fn delete_by_id(&self, id: &CategoryId) -> AppResult<()>;
    async fn find_all(&self, query: &SearchQuery) -> AppResult<Pagination<Category>>;
}
