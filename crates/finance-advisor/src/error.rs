//! Error Types for Finance Advisor

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount {
        field: String,
        value: Decimal,
    },

    #[error("{field} exceeds the largest accepted amount (got {value})")]
    AmountTooLarge {
        field: String,
        value: Decimal,
    },

    #[error("Expense category at position {0} has an empty label")]
    EmptyCategory(usize),

    #[error("Invalid savings goal: {0}")]
    InvalidGoal(String),
}
