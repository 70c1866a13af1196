//! Category repository
//!
//! CRUD for categories. Deleting a category does not touch the
//! transactions or budgets that reference it.

use chrono::Utc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryInput};
use crate::store::Store;

use super::{parse_lookup_id, parse_target_id};

/// Repository for categories
pub struct CategoryRepository<'a> {
    store: &'a Store,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn create(&self, input: &CategoryInput) -> TrackerResult<Category> {
        let valid = input.validate().map_err(|e| {
            tracing::debug!(error = %e, "Rejected category input");
            TrackerError::Validation(e.to_string())
        })?;

        let record = valid.into_record(Utc::now());
        let id = self.store.categories().insert(record.clone())?;

        tracing::info!(%id, name = %record.name, "Created category");
        Ok(Category::from_record(id, &record))
    }

    /// All categories, sorted by name
    pub fn list(&self) -> TrackerResult<Vec<Category>> {
        let mut categories: Vec<_> = self
            .store
            .categories()
            .find_all()?
            .iter()
            .map(|doc| Category::from_record(doc.id, &doc.body))
            .collect();

        categories.sort_by_key(|c| c.name.to_lowercase());
        Ok(categories)
    }

    pub fn get_by_id(&self, id: &str) -> TrackerResult<Option<Category>> {
        let Some(id) = parse_lookup_id(id) else {
            return Ok(None);
        };

        Ok(self
            .store
            .categories()
            .find_by_id(id)?
            .map(|doc| Category::from_record(doc.id, &doc.body)))
    }

    pub fn update(&self, id: &str, input: &CategoryInput) -> TrackerResult<Category> {
        let object_id = parse_target_id("Category", id)?;
        let valid = input
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let now = Utc::now();
        let matched = self
            .store
            .categories()
            .update(object_id, |record| valid.apply_to(record, now))?;
        if !matched {
            return Err(TrackerError::category_not_found(id));
        }

        tracing::info!(id = %object_id, "Updated category");
        self.get_by_id(id)?
            .ok_or_else(|| TrackerError::category_not_found(id))
    }

    pub fn delete(&self, id: &str) -> TrackerResult<()> {
        let object_id = parse_target_id("Category", id)?;

        if !self.store.categories().delete(object_id)? {
            return Err(TrackerError::category_not_found(id));
        }

        tracing::info!(id = %object_id, "Deleted category");
        Ok(())
    }
}
