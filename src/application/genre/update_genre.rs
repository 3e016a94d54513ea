use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::parse_category_ids;
use crate::domain::entities::GenreId;
use crate::domain::gateways::GenreGateway;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::shared::application::{UseCase, UseCaseError, UseCaseResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGenreCommand {
    pub id: GenreId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// The full replacement list of category references, as raw id strings.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreOutput {
    pub id: GenreId,
}

pub struct UpdateGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl UpdateGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase<UpdateGenreCommand, UpdateGenreOutput> for UpdateGenreUseCase {
    async fn execute(&self, command: UpdateGenreCommand) -> UseCaseResult<UpdateGenreOutput> {
        let mut genre = self
            .gateway
            .find_by_id(&command.id)
            .await
            .map_err(UseCaseError::from_gateway)?
            .ok_or_else(|| UseCaseError::not_found("Genre", command.id))?;

        let mut notification = Notification::new();
        let category_ids = parse_category_ids(&command.categories, &mut notification);

        genre.update(command.name, command.description, command.is_active);
        genre.replace_categories(category_ids);

        let _ = genre.validate(&mut notification); // a Notification never raises
        if notification.has_errors() {
            debug!(
                "update genre {} rejected with {} validation error(s)",
                genre.id,
                notification.errors().len()
            );
            return Err(UseCaseError::Report(notification));
        }

        match self.gateway.update(&genre).await {
            Ok(updated) => Ok(UpdateGenreOutput { id: updated.id }),
            Err(error) => {
                warn!("genre update failed at the gateway: {}", error);
                Err(UseCaseError::from_gateway(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryId, Genre};
    use crate::domain::gateways::MockGenreGateway;

    #[tokio::test]
    async fn replaces_attributes_and_category_references() {
        let mut existing = Genre::new("Acao", None, true);
        existing.add_category(CategoryId::new());
        let id = existing.id;
        let replacement = CategoryId::new();

        let mut gateway = MockGenreGateway::new();
        let found = existing.clone();
        gateway
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        gateway
            .expect_update()
            .withf(move |genre: &Genre| {
                genre.id == id && genre.name == "Ação" && genre.categories == vec![replacement]
            })
            .times(1)
            .returning(|genre| Ok(genre.clone()));

        let use_case = UpdateGenreUseCase::new(Arc::new(gateway));
        let output = use_case
            .execute(UpdateGenreCommand {
                id,
                name: "Ação".to_string(),
                description: None,
                is_active: true,
                categories: vec![replacement.to_string()],
            })
            .await
            .unwrap();

        assert_eq!(output.id, id);
    }

    #[tokio::test]
    async fn missing_genre_yields_not_found() {
        let mut gateway = MockGenreGateway::new();
        gateway.expect_find_by_id().times(1).returning(|_| Ok(None));
        gateway.expect_update().times(0);

        let id = GenreId::new();
        let use_case = UpdateGenreUseCase::new(Arc::new(gateway));
        let error = use_case
            .execute(UpdateGenreCommand {
                id,
                name: "Ação".to_string(),
                description: None,
                is_active: true,
                categories: Vec::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            format!("Genre with ID {} was not found", id)
        );
    }
}
