use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::category::{ExpenseSubType, ExpenseType};

/// Error type that captures catalog, parsing and configuration failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid category reference: {expense_sub_type} is not a subtype of {expense_type}")]
    InvalidCategoryReference {
        expense_type: ExpenseType,
        expense_sub_type: ExpenseSubType,
    },
    #[error("Unknown expense type: {0}")]
    UnknownExpenseType(String),
    #[error("Unknown expense subtype: {0}")]
    UnknownExpenseSubType(String),
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, ExpenseError>;
