//! Core data models for the finance tracker
//!
//! Each entity comes in three shapes: a `*Record` persisted in the store, a
//! caller-facing entity with string identifiers, and a `*Input` holding raw
//! form fields that must be validated before anything is written.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetFields, BudgetInput, BudgetRecord, BudgetValidationError};
pub use category::{
    Category, CategoryInput, CategoryRecord, CategoryValidationError, UNCATEGORIZED_COLOR,
    UNCATEGORIZED_NAME,
};
pub use ids::ObjectId;
pub use money::{Money, MoneyParseError};
pub use period::{BudgetPeriod, CalendarMonth};
pub use transaction::{
    Transaction, TransactionFields, TransactionInput, TransactionRecord,
    TransactionValidationError,
};
