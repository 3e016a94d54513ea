//! In-memory gateway doubles backing the end-to-end scenarios.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use catalog_admin::domain::entities::{Category, CategoryId, Genre, GenreId};
use catalog_admin::domain::gateways::{CategoryGateway, GenreGateway};
use catalog_admin::shared::application::{Pagination, SearchQuery, SortDirection};
use catalog_admin::shared::errors::{AppError, AppResult};

pub fn setup() {
    catalog_admin::shared::utils::logger::init_logger();
}

fn paginate<T: Clone>(query: &SearchQuery, mut names: Vec<(String, T)>) -> Pagination<T> {
    names.sort_by(|a, b| a.0.cmp(&b.0));
    if query.direction == SortDirection::Desc {
        names.reverse();
    }
    let total = names.len() as u64;
    let items = names
        .into_iter()
        .skip(query.offset() as usize)
        .take(query.limit() as usize)
        .map(|(_, record)| record)
        .collect();
    Pagination::new(query.page, query.per_page, total, items)
}

#[derive(Default)]
pub struct InMemoryCategoryGateway {
    records: Mutex<BTreeMap<CategoryId, Category>>,
    pub delete_by_id_calls: AtomicUsize,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn stored(&self, id: &CategoryId) -> Option<Category> {
        self.records.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: &Category) -> AppResult<Category> {
        self.records
            .lock()
            .unwrap()
            .insert(category.id, category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> AppResult<Category> {
        let mut records = self.records.lock().unwrap();
        if !records.contains_key(&category.id) {
            return Err(AppError::not_found("Category", category.id));
        }
        records.insert(category.id, category.clone());
        Ok(category.clone())
    }

    async fn find_by_id(&self, id: &CategoryId) -> AppResult<Option<Category>> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> AppResult<()> {
        self.delete_by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().remove(id);
        Ok(())
    }

    async fn find_all(&self, query: &SearchQuery) -> AppResult<Pagination<Category>> {
        let terms = query.terms.to_lowercase();
        let matching: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|category| terms.is_empty() || category.name.to_lowercase().contains(&terms))
            .map(|category| (category.name.clone(), category.clone()))
            .collect();
        Ok(paginate(query, matching))
    }
}

#[derive(Default)]
pub struct InMemoryGenreGateway {
    records: Mutex<BTreeMap<GenreId, Genre>>,
}

impl InMemoryGenreGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn stored(&self, id: &GenreId) -> Option<Genre> {
        self.records.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl GenreGateway for InMemoryGenreGateway {
    async fn create(&self, genre: &Genre) -> AppResult<Genre> {
        self.records.lock().unwrap().insert(genre.id, genre.clone());
        Ok(genre.clone())
    }

    async fn update(&self, genre: &Genre) -> AppResult<Genre> {
        let mut records = self.records.lock().unwrap();
        if !records.contains_key(&genre.id) {
            return Err(AppError::not_found("Genre", genre.id));
        }
        records.insert(genre.id, genre.clone());
        Ok(genre.clone())
    }

    async fn find_by_id(&self, id: &GenreId) -> AppResult<Option<Genre>> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    async fn delete_by_id(&self, id: &GenreId) -> AppResult<()> {
        self.records.lock().unwrap().remove(id);
        Ok(())
    }

    async fn find_all(&self, query: &SearchQuery) -> AppResult<Pagination<Genre>> {
        let terms = query.terms.to_lowercase();
        let matching: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|genre| terms.is_empty() || genre.name.to_lowercase().contains(&terms))
            .map(|genre| (genre.name.clone(), genre.clone()))
            .collect();
        Ok(paginate(query, matching))
    }
}
