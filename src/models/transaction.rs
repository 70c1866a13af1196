//! Transaction model
//!
//! A transaction is a single expense: a positive amount spent on a date,
//! with a description and an optional category reference. The reference is
//! weak; deleting the category leaves the transaction pointing at nothing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ObjectId;
use super::money::{Money, MoneyParseError};

/// Transaction body as persisted in the transactions collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<ObjectId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A transaction as seen by callers, with identifiers as strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_record(id: ObjectId, record: &TransactionRecord) -> Self {
        Self {
            id: id.to_string(),
            amount: record.amount,
            date: record.date,
            description: record.description.clone(),
            category_id: record.category_id.map(|c| c.to_string()),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Raw, unvalidated transaction fields as submitted by a form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub amount: String,
    /// `YYYY-MM-DD` or RFC 3339; empty or missing means "now"
    #[serde(default)]
    pub date: Option<String>,
    pub description: String,
    /// Empty or missing means uncategorized
    #[serde(default)]
    pub category_id: Option<String>,
}

/// Validated transaction fields, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: Option<ObjectId>,
}

impl TransactionInput {
    pub fn new(amount: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Validate the input, checking fields in form order
    pub fn validate(
        &self,
        now: DateTime<Utc>,
    ) -> Result<TransactionFields, TransactionValidationError> {
        let amount = parse_positive_amount(&self.amount).map_err(|e| match e {
            MoneyParseError::TooLarge(_) => TransactionValidationError::AmountTooLarge,
            _ => TransactionValidationError::NonPositiveAmount,
        })?;

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => now,
            Some(raw) => parse_timestamp(raw)
                .ok_or_else(|| TransactionValidationError::InvalidDate(raw.to_string()))?,
        };

        let description = self.description.trim();
        if description.is_empty() {
            return Err(TransactionValidationError::MissingDescription);
        }

        let category_id = match self.category_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                ObjectId::parse(raw)
                    .map_err(|_| TransactionValidationError::InvalidCategoryId(raw.to_string()))?,
            ),
        };

        Ok(TransactionFields {
            amount,
            date,
            description: description.to_string(),
            category_id,
        })
    }
}

/// Prefill a form from an existing transaction
impl From<&Transaction> for TransactionInput {
    fn from(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount.to_string(),
            date: Some(txn.date.to_rfc3339()),
            description: txn.description.clone(),
            category_id: txn.category_id.clone(),
        }
    }
}

impl TransactionFields {
    pub fn into_record(self, now: DateTime<Utc>) -> TransactionRecord {
        TransactionRecord {
            amount: self.amount,
            date: self.date,
            description: self.description,
            category_id: self.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every editable field of an existing record
    pub fn apply_to(self, record: &mut TransactionRecord, now: DateTime<Utc>) {
        record.amount = self.amount;
        record.date = self.date;
        record.description = self.description;
        record.category_id = self.category_id;
        record.updated_at = now;
    }
}

/// Parse an amount that must be at least one cent and no more than
/// [`Money::MAX_INPUT`]
pub(crate) fn parse_positive_amount(raw: &str) -> Result<Money, MoneyParseError> {
    let amount = Money::parse(raw)?;
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(MoneyParseError::InvalidFormat(raw.to_string()))
    }
}

/// Accept a bare date (midnight UTC) or a full RFC 3339 timestamp
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount,
    AmountTooLarge,
    InvalidDate(String),
    MissingDescription,
    InvalidCategoryId(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge => write!(f, "Amount is too large"),
            Self::InvalidDate(raw) => write!(f, "Invalid date: {}", raw),
            Self::MissingDescription => write!(f, "Description is required"),
            Self::InvalidCategoryId(raw) => write!(f, "Invalid category id: {}", raw),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
