use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::domain::entities::GenreId;
use crate::domain::gateways::GenreGateway;
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

/// Soft-deletes a genre, mirroring the category flow: flag, persist through
/// `update`, never remove. Missing ids are a no-op.
pub struct DeleteGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DeleteGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<GenreId, ()> for DeleteGenreUseCase {
    async fn execute(&self, id: GenreId) -> UseCaseResult<()> {
        let Some(mut genre) = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(UseCaseError::from_gateway)?
        else {
            return Ok(());
        };

        genre.delete();

        match self.gateway.update(&genre).await {
            Ok(_) => Ok(()),
            Err(error) => {
                warn!("genre delete failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}
