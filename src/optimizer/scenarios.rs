use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::{accrue_interest, BillingCycle};
use crate::optimizer::projection::project_savings;
use crate::optimizer::{PaymentOptimizerInput, PaymentOptimizerResult, PaymentScenario};
use crate::types::ScenarioKind;

/// compare paying on the statement date, halfway through the cycle and on the
/// due date, and project the savings of the cheapest option
///
/// the only failure is a due date that does not fall at least one calendar day
/// after the statement date; nothing is computed in that case. every other
/// input is taken as already validated (see [`validate_input`]).
///
/// scenarios come back sorted by payment date. the best scenario is the first
/// one in that order with the lowest interest, so ties go to the earliest date.
///
/// [`validate_input`]: crate::optimizer::validate_input
pub fn calculate_payment_scenarios(input: &PaymentOptimizerInput) -> Result<PaymentOptimizerResult> {
    let cycle = BillingCycle::new(input.statement_date, input.due_date)?;
    let daily_rate = input.daily_rate();
    let with_extra = input.total_payment();
    let without_extra = input.minimum_payment;

    log::debug!(
        "cycle of {} days, daily rate {}, payment {} (minimum {})",
        cycle.length_days,
        daily_rate.as_decimal(),
        with_extra,
        without_extra
    );

    let interest_on = |payment: Money, kind: ScenarioKind| {
        cycle_interest(input.balance, daily_rate, payment, &cycle, kind)
    };

    let baseline_interest = interest_on(with_extra, ScenarioKind::BASELINE);

    let mut scenarios: Vec<PaymentScenario> = ScenarioKind::ALL
        .iter()
        .map(|&kind| {
            let interest_paid = interest_on(with_extra, kind);
            let interest_min_only = interest_on(without_extra, kind);
            PaymentScenario {
                scenario_name: kind,
                payment_date: cycle.payment_date(kind),
                interest_paid,
                extra_payment_savings: interest_min_only - interest_paid,
                savings_compared_to_baseline: baseline_interest - interest_paid,
            }
        })
        .collect();

    scenarios.sort_by_key(|s| s.payment_date);

    let best_scenario = scenarios
        .iter()
        .skip(1)
        .fold(scenarios[0], |best, current| {
            if current.interest_paid < best.interest_paid {
                *current
            } else {
                best
            }
        });

    let monthly_savings_min_only = interest_on(without_extra, ScenarioKind::BASELINE)
        - interest_on(without_extra, best_scenario.scenario_name);

    log::debug!(
        "best scenario '{}' saves {} per cycle ({} with minimum only)",
        best_scenario.scenario_name,
        best_scenario.savings_compared_to_baseline,
        monthly_savings_min_only
    );

    Ok(PaymentOptimizerResult {
        projections_with_extra: project_savings(best_scenario.savings_compared_to_baseline),
        projections_min_only: project_savings(monthly_savings_min_only),
        scenarios,
        best_scenario,
        baseline_interest,
    })
}

/// interest for the whole cycle when `payment` lands on the scenario's date
fn cycle_interest(
    balance: Money,
    daily_rate: Rate,
    payment: Money,
    cycle: &BillingCycle,
    kind: ScenarioKind,
) -> Money {
    let days_until_payment = cycle.days_until(cycle.payment_date(kind));
    accrue_interest(balance, daily_rate, payment, days_until_payment, cycle.length_days)
}
