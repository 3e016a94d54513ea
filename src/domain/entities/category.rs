use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::validation::{DomainError, ValidationError, ValidationHandler};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Category identifier. UUIDv7 underneath, so ids assigned later sort
/// lexicographically after earlier ones. Immutable once assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CategoryId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content category (e.g. "Filmes"), with audit timestamps and soft-delete
/// state. Construction does not validate; call [`Category::validate`] before
/// trusting the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Factory: assigns identity and timestamps, leaves the aggregate
    /// unvalidated.
    pub fn new(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check the category's invariants, appending one error per broken rule.
    /// With an accumulating handler every rule runs; a fail-fast handler
    /// returns at the first problem.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return handler.append(ValidationError::new("'name' should not be empty"));
        }
        let length = name.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            handler.append(ValidationError::new(
                "'name' must be between 3 and 255 characters",
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

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    /// Soft delete: the record is flagged, never removed. Repeat calls keep
    /// the original deletion instant; only `updated_at` advances.
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
