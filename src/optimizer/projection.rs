use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::types::{SavingsProjection, PROJECTION_HORIZONS};

/// straight-line extrapolation of one month's savings over each horizon
pub fn project_savings(monthly_savings: Money) -> Vec<SavingsProjection> {
    PROJECTION_HORIZONS
        .iter()
        .map(|&months| SavingsProjection {
            months,
            projected_savings: monthly_savings * Decimal::from(months),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_horizons() {
        let projections = project_savings(Money::from_str_exact("0.49315068").unwrap());
        let months: Vec<u32> = projections.iter().map(|p| p.months).collect();
        assert_eq!(months, vec![1, 3, 6, 12]);
    }

    #[test]
    fn test_projection_is_linear() {
        let monthly = Money::from_str_exact("2.46575342").unwrap();
        let projections = project_savings(monthly);

        assert_eq!(projections[0].projected_savings, monthly);
        for p in &projections {
            assert_eq!(p.projected_savings, monthly * Decimal::from(p.months));
        }
        assert_eq!(projections[3].projected_savings, Money::from_str_exact("29.58904104").unwrap());
    }

    #[test]
    fn test_zero_savings_project_to_zero() {
        assert!(project_savings(Money::ZERO).iter().all(|p| p.projected_savings.is_zero()));
    }
}
