use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("invalid date range: due date {due_date} must be at least one day after statement date {statement_date}")]
    InvalidDateRange {
        statement_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    },

    #[error("invalid balance: {balance} (must be positive and at most {max})")]
    InvalidBalance {
        balance: Money,
        max: Money,
    },

    #[error("invalid apr: {apr}% (must be between 0 and {max}%)")]
    InvalidApr {
        apr: Decimal,
        max: Decimal,
    },

    #[error("invalid payment amount: {field} is {amount} (must be between 0 and {max})")]
    InvalidPaymentAmount {
        field: &'static str,
        amount: Money,
        max: Money,
    },

    #[error("billing cycle too long: {length_days} days (at most {max_days})")]
    CycleTooLong {
        length_days: u32,
        max_days: u32,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
