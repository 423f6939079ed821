use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::{accrue_daily, BillingCycle, DailyAccrual};
use crate::optimizer::PaymentOptimizerInput;
use crate::types::{PaymentVariant, ScenarioKind};

/// day-by-day running interest for one scenario and payment amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccrualCurve {
    pub scenario_name: ScenarioKind,
    pub variant: PaymentVariant,
    pub points: Vec<DailyAccrual>,
}

impl AccrualCurve {
    /// interest at the end of the cycle
    pub fn total_interest(&self) -> Option<Money> {
        self.points.last().map(|p| p.accrued_interest)
    }
}

/// running interest curves for every scenario with the full payment, followed
/// by the halfway scenario with the minimum payment alone for comparison
pub fn accrual_curves(input: &PaymentOptimizerInput) -> Result<Vec<AccrualCurve>> {
    let cycle = BillingCycle::new(input.statement_date, input.due_date)?;

    let curve = |kind: ScenarioKind, variant: PaymentVariant| {
        let payment = match variant {
            PaymentVariant::WithExtra => input.total_payment(),
            PaymentVariant::MinimumOnly => input.minimum_payment,
        };
        AccrualCurve {
            scenario_name: kind,
            variant,
            points: accrue_daily(
                input.balance,
                input.daily_rate(),
                payment,
                cycle.statement_date,
                cycle.days_until(cycle.payment_date(kind)),
                cycle.length_days,
            ),
        }
    };

    let mut curves: Vec<AccrualCurve> = ScenarioKind::BY_DATE
        .iter()
        .map(|&kind| curve(kind, PaymentVariant::WithExtra))
        .collect();
    curves.push(curve(ScenarioKind::PayHalfway, PaymentVariant::MinimumOnly));

    log::trace!("built {} accrual curves over {} days", curves.len(), cycle.length_days);
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::OptimizerError;
    use crate::optimizer::calculate_payment_scenarios;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn input() -> PaymentOptimizerInput {
        PaymentOptimizerInput::new(
            Money::from_major(1_000),
            dec!(22.5),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 29, 0, 0, 0).unwrap(),
        )
        .with_minimum_payment(Money::from_major(25))
        .with_extra_payment(Money::from_major(150))
    }

    #[test]
    fn test_curve_layout() {
        let curves = accrual_curves(&input()).unwrap();
        let labels: Vec<_> = curves.iter().map(|c| (c.scenario_name, c.variant)).collect();
        assert_eq!(
            labels,
            vec![
                (ScenarioKind::PayOnStatementDate, PaymentVariant::WithExtra),
                (ScenarioKind::PayHalfway, PaymentVariant::WithExtra),
                (ScenarioKind::PayOnDueDate, PaymentVariant::WithExtra),
                (ScenarioKind::PayHalfway, PaymentVariant::MinimumOnly),
            ]
        );
        // statement date through due date inclusive
        assert!(curves.iter().all(|c| c.points.len() == 29));
    }

    #[test]
    fn test_curves_end_at_scenario_interest() {
        let input = input();
        let curves = accrual_curves(&input).unwrap();
        let result = calculate_payment_scenarios(&input).unwrap();

        let engine_order: Vec<_> = result.scenarios.iter().map(|s| s.scenario_name).collect();
        let curve_order: Vec<_> = curves[..3].iter().map(|c| c.scenario_name).collect();
        assert_eq!(curve_order, engine_order);

        for curve in &curves {
            let scenario = result.scenario(curve.scenario_name).unwrap();
            let expected = match curve.variant {
                PaymentVariant::WithExtra => scenario.interest_paid,
                PaymentVariant::MinimumOnly => scenario.interest_with_minimum_only(),
            };
            assert_eq!(curve.total_interest(), Some(expected));
        }
    }

    #[test]
    fn test_curves_never_decrease() {
        for curve in accrual_curves(&input()).unwrap() {
            for pair in curve.points.windows(2) {
                assert!(pair[1].accrued_interest >= pair[0].accrued_interest);
            }
        }
    }

    #[test]
    fn test_invalid_cycle_rejected() {
        let mut input = input();
        input.due_date = input.statement_date;
        assert!(matches!(accrual_curves(&input), Err(OptimizerError::InvalidDateRange { .. })));
    }
}
