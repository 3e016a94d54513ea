mod create_category;
mod delete_category;
mod get_category;
mod list_categories;
mod update_category;

pub use create_category::{CreateCategoryCommand, CreateCategoryOutput, CreateCategoryUseCase};
pub use delete_category::DeleteCategoryUseCase;
pub use get_category::{CategoryOutput, GetCategoryByIdUseCase};
pub use list_categories::{CategoryListItem, ListCategoriesUseCase};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase};
