use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::parse_category_ids;
use crate::domain::entities::{Genre, GenreId};
use crate::domain::gateways::GenreGateway;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenreCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// Category references as raw id strings, parsed before validation.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreOutput {
    pub id: GenreId,
}

pub struct CreateGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl CreateGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<CreateGenreCommand, CreateGenreOutput> for CreateGenreUseCase {
    async fn execute(&self, command: CreateGenreCommand) -> UseCaseResult<CreateGenreOutput> {
        let mut notification = Notification::new();
        let category_ids = parse_category_ids(&command.categories, &mut notification);

        let mut genre = Genre::new(command.name, command.description, command.is_active);
        genre.replace_categories(category_ids);

        let _ = genre.validate(&mut notification); // a Notification never raises
        if notification.has_errors() {
            debug!(
                "create genre rejected with {} validation error(s)",
                notification.errors().len()
            );
            return Err(UseCaseError::Report(notification));
        }

        match self.gateway.create(&genre).await {
            Ok(created) => Ok(CreateGenreOutput { id: created.id }),
            Err(error) => {
                warn!("genre create failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}
