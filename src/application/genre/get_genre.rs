use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CategoryId, Genre, GenreId};
use crate::domain::gateways::GenreGateway;
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

/// Full projection of a persisted genre, category references included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            description: genre.description,
            is_active: genre.is_active,
            categories: genre.categories,
            created_at: genre.created_at,
            updated_at: genre.updated_at,
            deleted_at: genre.deleted_at,
        }
    }
}

pub struct GetGenreByIdUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl GetGenreByIdUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<GenreId, GenreOutput> for GetGenreByIdUseCase {
    async fn execute(&self, id: GenreId) -> UseCaseResult<GenreOutput> {
        let found = match self.gateway.find_by_id(&id).await {
            Ok(found) => found,
            Err(error) => {
                warn!("genre lookup failed at the gateway: {}", error);
                return Err(UseCaseError::from_gateway(error));
            }
        };

        found
            .map(GenreOutput::from)
            .ok_or_else(|| UseCaseError::not_found("Genre", id))
    }
}
