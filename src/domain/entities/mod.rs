mod category;
mod genre;

pub use category::{Category, CategoryId};
pub use genre::{Genre, GenreId};
