//! Budget repository
//!
//! Budgets are unique per (category, period). Creating a budget for a pair
//! that already has one overwrites its amount instead of adding a second
//! record.

use chrono::Utc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, BudgetInput};
use crate::store::{Store, UpdateOutcome};

use super::{parse_lookup_id, parse_target_id};

/// Repository for budgets
pub struct BudgetRepository<'a> {
    store: &'a Store,
}

impl<'a> BudgetRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Insert a budget, or overwrite the amount of the one with the same
    /// category and period
    ///
    /// The category is not checked for existence; a budget whose category
    /// is missing is simply left out of the comparison report.
    pub fn create(&self, input: &BudgetInput) -> TrackerResult<Budget> {
        let fields = input.validate().map_err(|e| {
            tracing::debug!(error = %e, "Rejected budget input");
            TrackerError::Validation(e.to_string())
        })?;

        let now = Utc::now();
        let (id, inserted) = self.store.budgets().upsert_one(
            |record| record.has_key(fields.category_id, fields.period),
            |record| {
                record.amount = fields.amount;
                record.updated_at = now;
            },
            fields.into_record(now),
        )?;

        if inserted {
            tracing::info!(%id, period = %fields.period, "Created budget");
        } else {
            tracing::info!(%id, period = %fields.period, "Overwrote existing budget amount");
        }

        self.get_by_id(&id.to_string())?
            .ok_or_else(|| TrackerError::budget_not_found(id.to_string()))
    }

    /// All budgets, in the order they were first created
    pub fn list(&self) -> TrackerResult<Vec<Budget>> {
        Ok(self
            .store
            .budgets()
            .find_all()?
            .iter()
            .map(|doc| Budget::from_record(doc.id, &doc.body))
            .collect())
    }

    pub fn get_by_id(&self, id: &str) -> TrackerResult<Option<Budget>> {
        let Some(id) = parse_lookup_id(id) else {
            return Ok(None);
        };

        Ok(self
            .store
            .budgets()
            .find_by_id(id)?
            .map(|doc| Budget::from_record(doc.id, &doc.body)))
    }

    /// Replace a budget's fields
    ///
    /// Moving a budget onto a (category, period) pair held by another
    /// budget is rejected so the natural key stays unique.
    pub fn update(&self, id: &str, input: &BudgetInput) -> TrackerResult<Budget> {
        let object_id = parse_target_id("Budget", id)?;
        let fields = input
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let (category_id, period) = (fields.category_id, fields.period);
        let now = Utc::now();
        let outcome = self.store.budgets().update_unless(
            object_id,
            |record| record.has_key(category_id, period),
            |record| fields.apply_to(record, now),
        )?;
        match outcome {
            UpdateOutcome::Updated => {}
            UpdateOutcome::Conflict => {
                return Err(TrackerError::Duplicate {
                    entity_type: "Budget",
                    identifier: format!("{} budget for category {}", period, category_id),
                });
            }
            UpdateOutcome::Missing => return Err(TrackerError::budget_not_found(id)),
        }

        tracing::info!(id = %object_id, "Updated budget");
        self.get_by_id(id)?
            .ok_or_else(|| TrackerError::budget_not_found(id))
    }

    pub fn delete(&self, id: &str) -> TrackerResult<()> {
        let object_id = parse_target_id("Budget", id)?;

        if !self.store.budgets().delete(object_id)? {
            return Err(TrackerError::budget_not_found(id));
        }

        tracing::info!(id = %object_id, "Deleted budget");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, ObjectId};
    use crate::store::test_support::create_test_store;

    #[test]
    fn test_create_twice_upserts() {
        let (_temp_dir, store) = create_test_store();
        let repo = BudgetRepository::new(&store);
        let category = ObjectId::new().to_string();

        let first = repo.create(&BudgetInput::monthly(&category, "200")).unwrap();
        let second = repo.create(&BudgetInput::monthly(&category, "350")).unwrap();

        assert_eq!(first.id, second.id);
        let budgets = repo.list().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount.cents(), 35000);
        assert_eq!(budgets[0].created_at, first.created_at);
    }

    #[test]
    fn test_different_period_is_a_separate_budget() {
        let (_temp_dir, store) = create_test_store();
        let repo = BudgetRepository::new(&store);
        let category = ObjectId::new().to_string();

        repo.create(&BudgetInput::monthly(&category, "200")).unwrap();
        repo.create(&BudgetInput::new(&category, "2400", "yearly"))
            .unwrap();

        let budgets = repo.list().unwrap();
        assert_eq!(budgets.len(), 2);
        assert_eq!(budgets[1].period, BudgetPeriod::Yearly);
    }

    #[test]
    fn test_category_existence_not_enforced() {
        let (_temp_dir, store) = create_test_store();
        let repo = BudgetRepository::new(&store);

        let budget = repo
            .create(&BudgetInput::monthly(ObjectId::new().to_string(), "10"))
            .unwrap();
        assert_eq!(repo.get_by_id(&budget.id).unwrap(), Some(budget));
    }

    #[test]
    fn test_validation() {
        let (_temp_dir, store) = create_test_store();
        let repo = BudgetRepository::new(&store);

        let err = repo.create(&BudgetInput::monthly("", "10")).unwrap_err();
        assert_eq!(err.to_string(), "Category is required");

        let err = repo
            .create(&BudgetInput::monthly(ObjectId::new().to_string(), "-1"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Amount must be greater than 0");
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_rejects_natural_key_clash() {
        let (_temp_dir, store) = create_test_store();
        let repo = BudgetRepository::new(&store);
        let category = ObjectId::new().to_string();

        repo.create(&BudgetInput::monthly(&category, "100")).unwrap();
        let yearly = repo
            .create(&BudgetInput::new(&category, "1000", "yearly"))
            .unwrap();

        let err = repo
            .update(&yearly.id, &BudgetInput::monthly(&category, "50"))
            .unwrap_err();
        assert!(matches!(err, TrackerError::Duplicate { .. }));

        let updated = repo
            .update(&yearly.id, &BudgetInput::new(&category, "1200", "yearly"))
            .unwrap();
        assert_eq!(updated.amount.cents(), 120000);
    }

    #[test]
    fn test_rejected_update_leaves_budget_untouched() {
        let (_temp_dir, store) = create_test_store();
        let repo = BudgetRepository::new(&store);
        let category = ObjectId::new().to_string();

        let monthly = repo.create(&BudgetInput::monthly(&category, "100")).unwrap();
        let yearly = repo
            .create(&BudgetInput::new(&category, "1000", "yearly"))
            .unwrap();

        assert!(repo
            .update(&yearly.id, &BudgetInput::monthly(&category, "50"))
            .is_err());
        assert_eq!(repo.get_by_id(&yearly.id).unwrap(), Some(yearly));
        assert_eq!(repo.get_by_id(&monthly.id).unwrap(), Some(monthly.clone()));

        let err = repo
            .update(&ObjectId::new().to_string(), &BudgetInput::monthly(&category, "5"))
            .unwrap_err();
        assert!(err.is_not_found());

        // keeping its own key is not a clash
        let same = repo
            .update(&monthly.id, &BudgetInput::monthly(&category, "125"))
            .unwrap();
        assert_eq!(same.amount.cents(), 12500);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, store) = create_test_store();
        let repo = BudgetRepository::new(&store);
        let budget = repo
            .create(&BudgetInput::monthly(ObjectId::new().to_string(), "10"))
            .unwrap();

        repo.delete(&budget.id).unwrap();
        assert!(repo.list().unwrap().is_empty());
        assert!(repo.delete(&budget.id).unwrap_err().is_not_found());
    }
}
