use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;

/// months over which monthly savings are extrapolated
pub const PROJECTION_HORIZONS: [u32; 4] = [1, 3, 6, 12];

/// payment timing strategies compared by the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// pay the moment the statement posts
    #[serde(rename = "Pay on Statement Date")]
    PayOnStatementDate,
    /// pay at the wall-clock midpoint of the cycle
    #[serde(rename = "Pay Halfway")]
    PayHalfway,
    /// pay on the due date, the baseline every other scenario is measured against
    #[serde(rename = "Pay on Due Date")]
    PayOnDueDate,
}

impl ScenarioKind {
    /// construction order used by the scenario generator
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::PayOnDueDate,
        ScenarioKind::PayHalfway,
        ScenarioKind::PayOnStatementDate,
    ];

    /// order of payment dates within a cycle, earliest first
    pub const BY_DATE: [ScenarioKind; 3] = [
        ScenarioKind::PayOnStatementDate,
        ScenarioKind::PayHalfway,
        ScenarioKind::PayOnDueDate,
    ];

    /// scenario every other one is measured against
    pub const BASELINE: ScenarioKind = ScenarioKind::PayOnDueDate;

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::PayOnStatementDate => "Pay on Statement Date",
            ScenarioKind::PayHalfway => "Pay Halfway",
            ScenarioKind::PayOnDueDate => "Pay on Due Date",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// which payment amount is applied on the scenario's payment date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentVariant {
    /// minimum payment plus the optional extra payment
    WithExtra,
    /// minimum payment alone
    MinimumOnly,
}

/// savings extrapolated over a number of months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProjection {
    pub months: u32,
    pub projected_savings: Money,
}
