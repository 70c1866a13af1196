//! Budget model
//!
//! A budget caps spending for one category over a recurring period. The
//! pair (category, period) is the budget's natural key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ObjectId;
use super::money::{Money, MoneyParseError};
use super::period::BudgetPeriod;
use super::transaction::parse_positive_amount;

/// Budget body as persisted in the budgets collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub category_id: ObjectId,
    pub amount: Money,
    pub period: BudgetPeriod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetRecord {
    /// Whether this budget has the given natural key
    pub fn has_key(&self, category_id: ObjectId, period: BudgetPeriod) -> bool {
        self.category_id == category_id && self.period == period
    }
}

/// A budget as seen by callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub amount: Money,
    pub period: BudgetPeriod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn from_record(id: ObjectId, record: &BudgetRecord) -> Self {
        Self {
            id: id.to_string(),
            category_id: record.category_id.to_string(),
            amount: record.amount,
            period: record.period,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.period, self.amount)
    }
}

/// Raw budget fields as submitted by a form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub category_id: String,
    pub amount: String,
    pub period: String,
}

/// Validated budget fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetFields {
    pub category_id: ObjectId,
    pub amount: Money,
    pub period: BudgetPeriod,
}

impl BudgetInput {
    pub fn new(
        category_id: impl Into<String>,
        amount: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            amount: amount.into(),
            period: period.into(),
        }
    }

    /// A monthly budget, the only kind the comparison report computes
    pub fn monthly(category_id: impl Into<String>, amount: impl Into<String>) -> Self {
        Self::new(category_id, amount, BudgetPeriod::Monthly.as_str())
    }

    pub fn validate(&self) -> Result<BudgetFields, BudgetValidationError> {
        let raw_category = self.category_id.trim();
        if raw_category.is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        let category_id = ObjectId::parse(raw_category)
            .map_err(|_| BudgetValidationError::InvalidCategoryId(raw_category.to_string()))?;

        let amount = parse_positive_amount(&self.amount).map_err(|e| match e {
            MoneyParseError::TooLarge(_) => BudgetValidationError::AmountTooLarge,
            _ => BudgetValidationError::NonPositiveAmount,
        })?;

        let raw_period = self.period.trim();
        if raw_period.is_empty() {
            return Err(BudgetValidationError::MissingPeriod);
        }
        let period = raw_period
            .parse()
            .map_err(|_| BudgetValidationError::InvalidPeriod(raw_period.to_string()))?;

        Ok(BudgetFields {
            category_id,
            amount,
            period,
        })
    }
}

impl From<&Budget> for BudgetInput {
    fn from(budget: &Budget) -> Self {
        Self::new(&budget.category_id, budget.amount.to_string(), budget.period.as_str())
    }
}

impl BudgetFields {
    pub fn into_record(self, now: DateTime<Utc>) -> BudgetRecord {
        BudgetRecord {
            category_id: self.category_id,
            amount: self.amount,
            period: self.period,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, record: &mut BudgetRecord, now: DateTime<Utc>) {
        record.category_id = self.category_id;
        record.amount = self.amount;
        record.period = self.period;
        record.updated_at = now;
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
    InvalidCategoryId(String),
    NonPositiveAmount,
    AmountTooLarge,
    MissingPeriod,
    InvalidPeriod(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Category is required"),
            Self::InvalidCategoryId(raw) => write!(f, "Invalid category id: {}", raw),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge => write!(f, "Amount is too large"),
            Self::MissingPeriod => write!(f, "Period is required"),
            Self::InvalidPeriod(raw) => write!(
                f,
                "Invalid period: {} (expected weekly, monthly, quarterly or yearly)",
                raw
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let category = ObjectId::new();
        let fields = BudgetInput::new(category.to_string(), "200", "Monthly")
            .validate()
            .unwrap();
        assert_eq!(fields.category_id, category);
        assert_eq!(fields.amount.cents(), 20000);
        assert_eq!(fields.period, BudgetPeriod::Monthly);
    }

    #[test]
    fn test_validation_errors() {
        let category = ObjectId::new().to_string();

        assert_eq!(
            BudgetInput::new("", "10", "monthly").validate(),
            Err(BudgetValidationError::MissingCategory)
        );
        assert!(matches!(
            BudgetInput::new("abc", "10", "monthly").validate(),
            Err(BudgetValidationError::InvalidCategoryId(_))
        ));
        assert_eq!(
            BudgetInput::new(&category, "0", "monthly").validate(),
            Err(BudgetValidationError::NonPositiveAmount)
        );
        assert_eq!(
            BudgetInput::new(&category, "90000000000000000", "monthly").validate(),
            Err(BudgetValidationError::AmountTooLarge)
        );
        assert_eq!(
            BudgetInput::new(&category, "10", "").validate(),
            Err(BudgetValidationError::MissingPeriod)
        );
        assert!(matches!(
            BudgetInput::new(&category, "10", "daily").validate(),
            Err(BudgetValidationError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_natural_key() {
        let category = ObjectId::new();
        let record = BudgetInput::monthly(category.to_string(), "50")
            .validate()
            .unwrap()
            .into_record(Utc::now());

        assert!(record.has_key(category, BudgetPeriod::Monthly));
        assert!(!record.has_key(category, BudgetPeriod::Yearly));
        assert!(!record.has_key(ObjectId::new(), BudgetPeriod::Monthly));
    }
}
