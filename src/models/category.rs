//! Category model
//!
//! Categories carry only display information: a name, a color token and an
//! icon token. Transactions and budgets refer to them by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ObjectId;

/// Longest accepted category name
pub const MAX_NAME_LEN: usize = 50;

/// Name used for spending without a resolvable category
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// Color used for spending without a resolvable category
pub const UNCATEGORIZED_COLOR: &str = "#999999";

/// Category body as persisted in the categories collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category as seen by callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn from_record(id: ObjectId, record: &CategoryRecord) -> Self {
        Self {
            id: id.to_string(),
            name: record.name.clone(),
            color: record.color.clone(),
            icon: record.icon.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Raw category fields as submitted by a form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// Validate and trim the input
    pub fn validate(&self) -> Result<CategoryInput, CategoryValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryValidationError::MissingName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(name.chars().count()));
        }

        let color = self.color.trim();
        if color.is_empty() {
            return Err(CategoryValidationError::MissingColor);
        }

        let icon = self.icon.trim();
        if icon.is_empty() {
            return Err(CategoryValidationError::MissingIcon);
        }

        Ok(CategoryInput::new(name, color, icon))
    }

    pub fn into_record(self, now: DateTime<Utc>) -> CategoryRecord {
        CategoryRecord {
            name: self.name,
            color: self.color,
            icon: self.icon,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, record: &mut CategoryRecord, now: DateTime<Utc>) {
        record.name = self.name;
        record.color = self.color;
        record.icon = self.icon;
        record.updated_at = now;
    }
}

impl From<&Category> for CategoryInput {
    fn from(category: &Category) -> Self {
        Self::new(&category.name, &category.color, &category.icon)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    MissingName,
    NameTooLong(usize),
    MissingColor,
    MissingIcon,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::MissingColor => write!(f, "Color is required"),
            Self::MissingIcon => write!(f, "Icon is required"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
