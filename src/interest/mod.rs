pub mod accrual;
pub mod cycle;

pub use accrual::{accrue_daily, accrue_interest, days_between, DailyAccrual};
pub use cycle::BillingCycle;
