use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{Genre, GenreId};
use crate::shared::application::{Pagination, SearchQuery};
use crate::shared::errors::AppResult;

/// Persistence contract for genres. The category references travel with the
/// aggregate; whether they resolve to existing categories is the adapter's
/// concern, not checked here.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenreGateway: Send + Sync {
    async fn create(&self, genre: &Genre) -> AppResult<Genre>;
    async fn update(&self, genre: &Genre) -> AppResult<Genre>;
    async fn find_by_id(&self, id: &GenreId) -> AppResult<Option<Genre>>;
    /// Adapter-level purge, unused by the soft-delete use case.
    async fn delete_by_id(&self, id: &GenreId) -> AppResult<()>;
    async fn find_all(&self, query: &SearchQuery) -> AppResult<Pagination<Genre>>;
}
