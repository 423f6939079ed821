use chrono::{DateTime, Utc};

use crate::errors::{OptimizerError, Result};
use crate::interest::accrual::days_between;
use crate::types::ScenarioKind;

/// a billing cycle running from statement date to due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingCycle {
    pub statement_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub length_days: u32,
}

impl BillingCycle {
    /// due date must fall at least one calendar day after the statement date
    pub fn new(statement_date: DateTime<Utc>, due_date: DateTime<Utc>) -> Result<Self> {
        let length_days = days_between(statement_date, due_date);
        if length_days == 0 {
            log::warn!(
                "rejecting billing cycle: statement {} due {}",
                statement_date,
                due_date
            );
            return Err(OptimizerError::InvalidDateRange {
                statement_date,
                due_date,
            });
        }

        Ok(Self {
            statement_date,
            due_date,
            length_days,
        })
    }

    /// wall-clock midpoint, which may fall partway through a day
    pub fn midpoint(&self) -> DateTime<Utc> {
        self.statement_date + (self.due_date - self.statement_date) / 2
    }

    pub fn payment_date(&self, kind: ScenarioKind) -> DateTime<Utc> {
        match kind {
            ScenarioKind::PayOnStatementDate => self.statement_date,
            ScenarioKind::PayHalfway => self.midpoint(),
            ScenarioKind::PayOnDueDate => self.due_date,
        }
    }

    /// calendar days from statement date to `date`
    pub fn days_until(&self, date: DateTime<Utc>) -> u32 {
        days_between(self.statement_date, date)
    }
}
