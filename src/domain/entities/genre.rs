use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::CategoryId;
use crate::domain::validation::{DomainError, ValidationError, ValidationHandler};

pub const NAME_MAX_LENGTH: usize = 255;

/// Genre identifier, same shape as [`CategoryId`]: UUIDv7, immutable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GenreId(Uuid);

impl GenreId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for GenreId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for GenreId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A genre with weak references to the categories it belongs to.
///
/// The reference list is an ordered set: first-occurrence order, no
/// duplicates. Referential integrity is not checked here; the gateway or the
/// caller is responsible for ensuring referenced categories exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    /// Factory: assigns identity and timestamps, leaves the aggregate
    /// unvalidated and without category references.
    pub fn new(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        let now = Utc::now();
        Self {
            id: GenreId::new(),
            name: name.into(),
            description,
            is_active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check the genre's invariants, appending one error per broken rule.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return handler.append(ValidationError::new("'name' should not be empty"));
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            handler.append(ValidationError::new(
                "'name' must be between 1 and 255 characters",
            ))?;
        }
        Ok(())
    }

    /// Replace the editable attributes. The aggregate is unvalidated again
    /// until `validate` runs.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) {
        self.name = name.into();
        self.description = description;
        self.is_active = is_active;
        self.touch();
    }

    /// Append a category reference. Ids already referenced are ignored, so
    /// the list stays an ordered set.
    pub fn add_category(&mut self, id: CategoryId) {
        if !self.categories.contains(&id) {
            self.categories.push(id);
            self.touch();
        }
    }

    pub fn remove_category(&mut self, id: &CategoryId) {
        let before = self.categories.len();
        self.categories.retain(|reference| reference != id);
        if self.categories.len() != before {
            self.touch();
        }
    }

    /// Swap the whole reference list, deduplicating while keeping the first
    /// occurrence of each id.
    pub fn replace_categories(&mut self, ids: Vec<CategoryId>) {
        self.categories.clear();
        for id in ids {
            if !self.categories.contains(&id) {
                self.categories.push(id);
            }
        }
        self.touch();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    /// Soft delete, same semantics as the category: flagged, never removed,
    /// idempotent.
    pub fn delete(&mut self) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
        }
        self.touch();
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
