use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::domain::entities::CategoryId;
use crate::domain::gateways::CategoryGateway;
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

/// Soft-deletes a category: the aggregate is flagged and persisted through
/// `update`; no row is ever removed. Deleting an id that does not exist is a
/// no-op.
pub struct DeleteCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DeleteCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<CategoryId, ()> for DeleteCategoryUseCase {
    async fn execute(&self, id: CategoryId) -> UseCaseResult<()> {
        let Some(mut category) = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(UseCaseError::from_gateway)?
        else {
            return Ok(());
        };

        category.delete();

        match self.gateway.update(&category).await {
            Ok(_) => Ok(()),
            Err(error) => {
                warn!("category delete failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}
