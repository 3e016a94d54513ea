mod category_gateway;
mod genre_gateway;

pub use category_gateway::CategoryGateway;
pub use genre_gateway::GenreGateway;

#[cfg(test)]
pub use category_gateway::MockCategoryGateway;
#[cfg(test)]
pub use genre_gateway::MockGenreGateway;
