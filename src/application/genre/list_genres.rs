use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Genre, GenreId};
use crate::domain::gateways::GenreGateway;
use crate::shared::application::{Pagination, SearchQuery, UseCase, UseCaseError, UseCaseResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreListItem {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListItem {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            is_active: genre.is_active,
            created_at: genre.created_at,
            deleted_at: genre.deleted_at,
        }
    }
}

pub struct ListGenresUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl ListGenresUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<SearchQuery, Pagination<GenreListItem>> for ListGenresUseCase {
    async fn execute(&self, query: SearchQuery) -> UseCaseResult<Pagination<GenreListItem>> {
        match self.gateway.find_all(&query).await {
            Ok(page) => Ok(page.map(GenreListItem::from)),
            Err(error) => {
                warn!("genre listing failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}
