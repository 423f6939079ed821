pub mod curves;
pub mod projection;
pub mod scenarios;
pub mod validation;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{SavingsProjection, ScenarioKind};

pub use curves::{accrual_curves, AccrualCurve};
pub use projection::project_savings;
pub use scenarios::calculate_payment_scenarios;
pub use validation::{validate_input, MAX_AMOUNT, MAX_APR_PERCENT, MAX_CYCLE_DAYS};

/// statement details and planned payments for one billing cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptimizerInput {
    pub balance: Money,
    /// annual percentage rate as a percentage, 22.5 meaning 22.5%
    pub apr: Decimal,
    pub statement_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub minimum_payment: Money,
    #[serde(default)]
    pub extra_payment: Money,
}

impl PaymentOptimizerInput {
    /// input with no payments yet; add them with the `with_*` methods
    pub fn new(
        balance: Money,
        apr: Decimal,
        statement_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            balance,
            apr,
            statement_date,
            due_date,
            minimum_payment: Money::ZERO,
            extra_payment: Money::ZERO,
        }
    }

    pub fn with_minimum_payment(mut self, amount: Money) -> Self {
        self.minimum_payment = amount;
        self
    }

    pub fn with_extra_payment(mut self, amount: Money) -> Self {
        self.extra_payment = amount;
        self
    }

    pub fn daily_rate(&self) -> Rate {
        Rate::from_percentage(self.apr).daily_rate()
    }

    /// minimum plus extra payment
    pub fn total_payment(&self) -> Money {
        self.minimum_payment + self.extra_payment
    }
}

/// outcome of paying on one scenario's date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScenario {
    pub scenario_name: ScenarioKind,
    pub payment_date: DateTime<Utc>,
    /// interest for the cycle with minimum and extra payment applied
    pub interest_paid: Money,
    /// interest avoided by the extra payment on the same date
    pub extra_payment_savings: Money,
    /// interest avoided relative to paying on the due date
    pub savings_compared_to_baseline: Money,
}

impl PaymentScenario {
    /// interest for the cycle had only the minimum payment been made
    pub fn interest_with_minimum_only(&self) -> Money {
        self.interest_paid + self.extra_payment_savings
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptimizerResult {
    /// ordered by ascending payment date
    pub scenarios: Vec<PaymentScenario>,
    pub best_scenario: PaymentScenario,
    /// due date interest with minimum and extra payment
    pub baseline_interest: Money,
    pub projections_with_extra: Vec<SavingsProjection>,
    pub projections_min_only: Vec<SavingsProjection>,
}

impl PaymentOptimizerResult {
    pub fn scenario(&self, kind: ScenarioKind) -> Option<&PaymentScenario> {
        self.scenarios.iter().find(|s| s.scenario_name == kind)
    }
}
