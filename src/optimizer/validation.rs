use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::Money;
use crate::errors::{OptimizerError, Result};
use crate::interest::BillingCycle;
use crate::optimizer::PaymentOptimizerInput;

/// highest APR accepted from callers, in percent
pub const MAX_APR_PERCENT: Decimal = dec!(100);

/// largest balance or payment accepted from callers
///
/// keeps every product in the accrual well inside `Decimal`'s range, so the
/// engine never overflows on input that passed validation.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// longest billing cycle accepted from callers, in calendar days
pub const MAX_CYCLE_DAYS: u32 = 366;

/// boundary checks a caller runs before handing input to the engine
///
/// the engine itself only rejects bad billing cycles; this covers the rest of
/// the request so transports can reject it with a precise message.
pub fn validate_input(input: &PaymentOptimizerInput) -> Result<()> {
    let max_amount = Money::from_decimal(MAX_AMOUNT);

    if !input.balance.is_positive() || input.balance > max_amount {
        return Err(OptimizerError::InvalidBalance {
            balance: input.balance,
            max: max_amount,
        });
    }

    if input.apr < Decimal::ZERO || input.apr > MAX_APR_PERCENT {
        return Err(OptimizerError::InvalidApr {
            apr: input.apr,
            max: MAX_APR_PERCENT,
        });
    }

    check_payment("minimumPayment", input.minimum_payment)?;
    check_payment("extraPayment", input.extra_payment)?;

    let cycle = BillingCycle::new(input.statement_date, input.due_date)?;
    if cycle.length_days > MAX_CYCLE_DAYS {
        return Err(OptimizerError::CycleTooLong {
            length_days: cycle.length_days,
            max_days: MAX_CYCLE_DAYS,
        });
    }
    Ok(())
}

fn check_payment(field: &'static str, amount: Money) -> Result<()> {
    let max = Money::from_decimal(MAX_AMOUNT);
    if amount.is_negative() || amount > max {
        return Err(OptimizerError::InvalidPaymentAmount { field, amount, max });
    }
    Ok(())
}

impl PaymentOptimizerInput {
    pub fn validate(&self) -> Result<()> {
        validate_input(self)
    }
}
