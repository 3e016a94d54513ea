mod create_genre;
mod delete_genre;
mod get_genre;
mod list_genres;
mod update_genre;

pub use create_genre::{CreateGenreCommand, CreateGenreOutput, CreateGenreUseCase};
pub use delete_genre::DeleteGenreUseCase;
pub use get_genre::{GenreOutput, GetGenreByIdUseCase};
pub use list_genres::{GenreListItem, ListGenresUseCase};
pub use update_genre::{UpdateGenreCommand, UpdateGenreOutput, UpdateGenreUseCase};

use crate::domain::entities::CategoryId;
use crate::domain::validation::{ValidationError, ValidationHandler};

/// Commands carry category references as raw strings; ids that do not parse
/// are reported through the handler alongside the aggregate's own errors.
/// Whether the parsed ids exist is the gateway's concern.
fn parse_category_ids(values: &[String], handler: &mut dyn ValidationHandler) -> Vec<CategoryId> {
    let mut ids = Vec::with_capacity(values.len());
    for value in values {
        match value.parse::<CategoryId>() {
            Ok(id) => ids.push(id),
            Err(_) => {
                let _ = handler.append(ValidationError::new(format!(
                    "'categories' has an invalid id: {}",
                    value
                )));
            }
        }
    }
    ids
}
