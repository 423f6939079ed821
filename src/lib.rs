pub mod decimal;
pub mod errors;
pub mod interest;
pub mod optimizer;
pub mod serialization;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{OptimizerError, Result};
pub use interest::{accrue_daily, accrue_interest, days_between, BillingCycle, DailyAccrual};
pub use optimizer::{
    accrual_curves, calculate_payment_scenarios, project_savings, validate_input, AccrualCurve,
    PaymentOptimizerInput, PaymentOptimizerResult, PaymentScenario, MAX_AMOUNT, MAX_APR_PERCENT,
    MAX_CYCLE_DAYS,
};
pub use serialization::OptimizerView;
pub use types::{PaymentVariant, SavingsProjection, ScenarioKind, PROJECTION_HORIZONS};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
