//! json request and response support for transports

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::optimizer::{
    accrual_curves, calculate_payment_scenarios, AccrualCurve, PaymentOptimizerInput,
    PaymentOptimizerResult,
};

impl PaymentOptimizerInput {
    /// parse a camelCase request; `minimumPayment` and `extraPayment` default to zero
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PaymentOptimizerResult {
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// serializable view of a full optimizer run
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerView {
    #[serde(flatten)]
    pub result: PaymentOptimizerResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accrual_curves: Option<Vec<AccrualCurve>>,
}

impl OptimizerView {
    /// validate the input, run the engine and optionally attach daily curves
    pub fn build(input: &PaymentOptimizerInput, include_curves: bool) -> Result<Self> {
        input.validate()?;
        let result = calculate_payment_scenarios(input)?;
        let accrual_curves = if include_curves {
            Some(accrual_curves(input)?)
        } else {
            None
        };
        Ok(OptimizerView {
            result,
            accrual_curves,
        })
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::errors::OptimizerError;
    use crate::types::ScenarioKind;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    const REQUEST: &str = r#"{
        "balance": 1000,
        "apr": 24,
        "statementDate": "2024-01-01T00:00:00Z",
        "dueDate": "2024-01-31T00:00:00Z",
        "minimumPayment": "25"
    }"#;

    #[test]
    fn test_parse_request() {
        let input = PaymentOptimizerInput::from_json(REQUEST).unwrap();
        assert_eq!(input.balance, Money::from_major(1_000));
        assert_eq!(input.apr, dec!(24));
        assert_eq!(input.statement_date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(input.due_date, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
        assert_eq!(input.minimum_payment, Money::from_major(25));
        assert_eq!(input.extra_payment, Money::ZERO);
    }

    #[test]
    fn test_malformed_request() {
        let err = PaymentOptimizerInput::from_json(r#"{"balance": 1000}"#).unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidRequest(_)));

        let err = PaymentOptimizerInput::from_json(r#"{"balance": 1000, "apr": 20, "statementDate": "yesterday", "dueDate": "2024-01-31T00:00:00Z"}"#).unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidRequest(_)));
    }

    #[test]
    fn test_result_json_shape() {
        let input = PaymentOptimizerInput::from_json(REQUEST).unwrap();
        let view = OptimizerView::build(&input, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&view.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["scenarios"].as_array().unwrap().len(), 3);
        assert_eq!(json["scenarios"][0]["scenarioName"], "Pay on Statement Date");
        assert_eq!(json["scenarios"][0]["paymentDate"], "2024-01-01T00:00:00Z");
        assert_eq!(json["scenarios"][2]["scenarioName"], "Pay on Due Date");
        assert_eq!(json["bestScenario"]["scenarioName"], "Pay on Statement Date");
        assert!(json["scenarios"][1].get("extraPaymentSavings").is_some());
        assert!(json.get("baselineInterest").is_some());
        assert_eq!(json["projectionsWithExtra"][3]["months"], 12);
        assert_eq!(json["projectionsMinOnly"].as_array().unwrap().len(), 4);
        assert!(json.get("accrualCurves").is_none());
    }

    #[test]
    fn test_view_with_curves() {
        let input = PaymentOptimizerInput::from_json(REQUEST).unwrap();
        let view = OptimizerView::build(&input, true).unwrap();
        let curves = view.accrual_curves.as_ref().unwrap();
        assert_eq!(curves.len(), 4);
        assert_eq!(curves[2].scenario_name, ScenarioKind::PayOnDueDate);
        assert_eq!(curves[2].total_interest(), Some(view.result.baseline_interest));

        let json: serde_json::Value = serde_json::to_value(&view).unwrap();
        assert_eq!(json["accrualCurves"][3]["variant"], "minimumOnly");
        assert_eq!(json["accrualCurves"][0]["points"][0]["day"], 0);
    }

    #[test]
    fn test_view_rejects_invalid_input() {
        let mut input = PaymentOptimizerInput::from_json(REQUEST).unwrap();
        input.apr = dec!(150);
        assert!(matches!(
            OptimizerView::build(&input, false),
            Err(OptimizerError::InvalidApr { .. })
        ));
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let input = PaymentOptimizerInput::from_json(REQUEST).unwrap();
        let result = calculate_payment_scenarios(&input).unwrap();
        let parsed: PaymentOptimizerResult = serde_json::from_str(&result.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, result);
    }
}
