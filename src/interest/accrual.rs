use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// whole calendar days from `start` to `end`, both truncated to their UTC date
///
/// time of day never contributes, so two instants on the same calendar date are
/// zero days apart. negative spans clamp to zero.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let days = (end.date_naive() - start.date_naive()).num_days();
    days.clamp(0, u32::MAX as i64) as u32
}

/// simple (non-compounding) interest for one billing cycle with a single payment
///
/// the full balance accrues until the payment lands, then whatever remains
/// accrues for the rest of the cycle. a payment that clears the balance stops
/// accrual entirely from that day on.
pub fn accrue_interest(
    balance: Money,
    daily_rate: Rate,
    total_payment: Money,
    days_until_payment: u32,
    cycle_length_days: u32,
) -> Money {
    if !balance.is_positive() || !daily_rate.is_positive() {
        return Money::ZERO;
    }

    let rate = daily_rate.as_decimal();
    let interest_before_payment = balance.as_decimal() * rate * Decimal::from(days_until_payment);

    let remaining_balance = balance.as_decimal() - total_payment.as_decimal();
    if remaining_balance <= Decimal::ZERO {
        return Money::from_decimal(interest_before_payment);
    }

    let days_after_payment = cycle_length_days.saturating_sub(days_until_payment);
    let interest_after_payment = remaining_balance * rate * Decimal::from(days_after_payment);

    Money::from_decimal(interest_before_payment + interest_after_payment)
}

/// running interest at the end of one day of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAccrual {
    /// days since the statement date
    pub day: u32,
    pub date: DateTime<Utc>,
    pub accrued_interest: Money,
}

/// interest accrued so far on every calendar day from statement date to due date
///
/// day `k` is the cycle cut short at `k` days, so the last entry always equals
/// `accrue_interest` over the whole cycle.
pub fn accrue_daily(
    balance: Money,
    daily_rate: Rate,
    total_payment: Money,
    statement_date: DateTime<Utc>,
    days_until_payment: u32,
    cycle_length_days: u32,
) -> Vec<DailyAccrual> {
    (0..=cycle_length_days)
        .map(|day| DailyAccrual {
            day,
            date: statement_date + Duration::days(day as i64),
            accrued_interest: accrue_interest(
                balance,
                daily_rate,
                total_payment,
                days_until_payment.min(day),
                day,
            ),
        })
        .collect()
}
