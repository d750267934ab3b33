//! Typed optimization requests
//!
//! Each mode has one constructor that turns raw form values into a request
//! body. Tickers are always trimmed, and numeric fields that do not parse
//! fail with an `InvalidInput` error instead of reaching the optimizer.

use serde::Serialize;

use crate::error::{FrontendError, Result};
use crate::types::{
    FormValues, OptimizationMode, TARGET_CVAR_FIELD, TARGET_RETURN_FIELD, TARGET_VOLATILITY_FIELD,
    TICKERS_FIELD, TOTAL_PORTFOLIO_VALUE_FIELD,
};

/// Request body for one optimizer endpoint.
///
/// Serializes to a flat JSON object holding only the fields the mode needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptimizationRequest {
    MinVolatility {
        tickers: Vec<String>,
        total_portfolio_value: u64,
    },
    MaxSharpe {
        tickers: Vec<String>,
    },
    MaximizeReturnGivenRisk {
        tickers: Vec<String>,
        target_volatility: f64,
    },
    MinimizeRiskGivenReturn {
        tickers: Vec<String>,
        target_return: f64,
    },
    EfficientSemivariance {
        tickers: Vec<String>,
        target_return: f64,
    },
    EfficientCvar {
        tickers: Vec<String>,
        target_cvar: f64,
    },
    Hrp {
        tickers: Vec<String>,
    },
}

impl OptimizationRequest {
    /// Build the request for `mode` from a submitted form
    pub fn from_form(mode: OptimizationMode, form: &FormValues) -> Result<Self> {
        let tickers = parse_tickers(form.get(TICKERS_FIELD))?;

        let request = match mode {
            OptimizationMode::MinVolatility => OptimizationRequest::MinVolatility {
                tickers,
                total_portfolio_value: parse_amount(
                    TOTAL_PORTFOLIO_VALUE_FIELD,
                    form.get(TOTAL_PORTFOLIO_VALUE_FIELD),
                )?,
            },
            OptimizationMode::MaxSharpe => OptimizationRequest::MaxSharpe { tickers },
            OptimizationMode::MaximizeReturnGivenRisk => {
                OptimizationRequest::MaximizeReturnGivenRisk {
                    tickers,
                    target_volatility: parse_decimal(
                        TARGET_VOLATILITY_FIELD,
                        form.get(TARGET_VOLATILITY_FIELD),
                    )?,
                }
            }
            OptimizationMode::MinimizeRiskGivenReturn => {
                OptimizationRequest::MinimizeRiskGivenReturn {
                    tickers,
                    target_return: parse_decimal(TARGET_RETURN_FIELD, form.get(TARGET_RETURN_FIELD))?,
                }
            }
            OptimizationMode::EfficientSemivariance => OptimizationRequest::EfficientSemivariance {
                tickers,
                target_return: parse_decimal(TARGET_RETURN_FIELD, form.get(TARGET_RETURN_FIELD))?,
            },
            OptimizationMode::EfficientCvar => OptimizationRequest::EfficientCvar {
                tickers,
                target_cvar: parse_decimal(TARGET_CVAR_FIELD, form.get(TARGET_CVAR_FIELD))?,
            },
            OptimizationMode::Hrp => OptimizationRequest::Hrp { tickers },
        };

        Ok(request)
    }

    /// Mode this request targets
    pub fn mode(&self) -> OptimizationMode {
        match self {
            OptimizationRequest::MinVolatility { .. } => OptimizationMode::MinVolatility,
            OptimizationRequest::MaxSharpe { .. } => OptimizationMode::MaxSharpe,
            OptimizationRequest::MaximizeReturnGivenRisk { .. } => {
                OptimizationMode::MaximizeReturnGivenRisk
            }
            OptimizationRequest::MinimizeRiskGivenReturn { .. } => {
                OptimizationMode::MinimizeRiskGivenReturn
            }
            OptimizationRequest::EfficientSemivariance { .. } => {
                OptimizationMode::EfficientSemivariance
            }
            OptimizationRequest::EfficientCvar { .. } => OptimizationMode::EfficientCvar,
            OptimizationRequest::Hrp { .. } => OptimizationMode::Hrp,
        }
    }

    /// Ticker symbols, in form order
    pub fn tickers(&self) -> &[String] {
        match self {
            OptimizationRequest::MinVolatility { tickers, .. }
            | OptimizationRequest::MaxSharpe { tickers }
            | OptimizationRequest::MaximizeReturnGivenRisk { tickers, .. }
            | OptimizationRequest::MinimizeRiskGivenReturn { tickers, .. }
            | OptimizationRequest::EfficientSemivariance { tickers, .. }
            | OptimizationRequest::EfficientCvar { tickers, .. }
            | OptimizationRequest::Hrp { tickers } => tickers,
        }
    }
}

fn parse_tickers(raw: Option<&str>) -> Result<Vec<String>> {
    let tickers: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    if tickers.is_empty() {
        return Err(FrontendError::invalid_input(
            TICKERS_FIELD,
            "enter at least one ticker symbol",
        ));
    }
    Ok(tickers)
}

fn required<'a>(field: &'static str, raw: Option<&'a str>) -> Result<&'a str> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FrontendError::invalid_input(field, "a value is required")),
    }
}

fn parse_amount(field: &'static str, raw: Option<&str>) -> Result<u64> {
    let value = required(field, raw)?;
    match value.parse::<u64>() {
        Ok(0) => Err(FrontendError::invalid_input(field, "must be greater than zero")),
        Ok(amount) => Ok(amount),
        Err(_) => Err(FrontendError::invalid_input(
            field,
            format!("expected a whole number, got {value:?}"),
        )),
    }
}

fn parse_decimal(field: &'static str, raw: Option<&str>) -> Result<f64> {
    let value = required(field, raw)?;
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(FrontendError::invalid_input(
            field,
            format!("expected a number, got {value:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_min_volatility_request_body() {
        let request = OptimizationRequest::from_form(
            OptimizationMode::MinVolatility,
            &form(&[("tickers", "MSFT, AMZN ,KO"), ("totalPortfolioValue", "20000")]),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "tickers": ["MSFT", "AMZN", "KO"], "total_portfolio_value": 20000 })
        );
    }

    #[test]
    fn test_ticker_only_modes_send_only_tickers() {
        for mode in [OptimizationMode::MaxSharpe, OptimizationMode::Hrp] {
            let request =
                OptimizationRequest::from_form(mode, &form(&[("tickers", " AAPL ,, TSLA ")]))
                    .unwrap();
            assert_eq!(request.mode(), mode);
            assert_eq!(
                serde_json::to_value(&request).unwrap(),
                json!({ "tickers": ["AAPL", "TSLA"] })
            );
        }
    }

    #[test]
    fn test_target_fields_are_named_per_mode() {
        let cases = [
            (OptimizationMode::MaximizeReturnGivenRisk, "targetVolatility", "target_volatility"),
            (OptimizationMode::MinimizeRiskGivenReturn, "targetReturn", "target_return"),
            (OptimizationMode::EfficientSemivariance, "targetReturn", "target_return"),
            (OptimizationMode::EfficientCvar, "targetCVaR", "target_cvar"),
        ];

        for (mode, field, key) in cases {
            let request =
                OptimizationRequest::from_form(mode, &form(&[("tickers", "AAPL"), (field, "0.25")]))
                    .unwrap();
            let body = serde_json::to_value(&request).unwrap();
            let object = body.as_object().unwrap();
            assert_eq!(object.len(), 2, "{mode}");
            assert_eq!(object[key], json!(0.25), "{mode}");
        }
    }

    #[test]
    fn test_empty_tickers_rejected() {
        let err = OptimizationRequest::from_form(OptimizationMode::Hrp, &form(&[("tickers", " , ")]))
            .unwrap_err();
        assert!(matches!(err, FrontendError::InvalidInput { field: "tickers", .. }));
    }

    #[test]
    fn test_unparseable_number_rejected() {
        let err = OptimizationRequest::from_form(
            OptimizationMode::EfficientCvar,
            &form(&[("tickers", "AAPL"), ("targetCVaR", "abc")]),
        )
        .unwrap_err();
        assert!(matches!(err, FrontendError::InvalidInput { field: "targetCVaR", .. }));

        let err = OptimizationRequest::from_form(
            OptimizationMode::MaximizeReturnGivenRisk,
            &form(&[("tickers", "AAPL"), ("targetVolatility", "NaN")]),
        )
        .unwrap_err();
        assert!(matches!(err, FrontendError::InvalidInput { .. }));
    }

    #[test]
    fn test_portfolio_value_must_be_positive_integer() {
        for raw in ["0", "-5", "1000.5", ""] {
            let result = OptimizationRequest::from_form(
                OptimizationMode::MinVolatility,
                &form(&[("tickers", "AAPL"), ("totalPortfolioValue", raw)]),
            );
            assert!(
                matches!(
                    result,
                    Err(FrontendError::InvalidInput { field: "totalPortfolioValue", .. })
                ),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = OptimizationRequest::from_form(
            OptimizationMode::MinimizeRiskGivenReturn,
            &form(&[("tickers", "AAPL")]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid targetReturn: a value is required");
    }
}
