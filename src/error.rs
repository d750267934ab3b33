//! Error types for the optimizer front end
//!
//! Uses thiserror for ergonomic error definitions.
//! Every failure is scoped to a single dispatch; none is fatal to the page.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, FrontendError>;

/// Shown for every failure that happened on the wire.
const TRANSPORT_MESSAGE: &str =
    "Could not reach the optimization service. Please try again.";

/// Shown when the service answered with something we cannot render.
const MALFORMED_MESSAGE: &str =
    "The optimization service returned an unexpected response.";

/// Front end errors
#[derive(Error, Debug)]
pub enum FrontendError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A form field could not be parsed into its typed value
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Network-level request failures
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success HTTP status from the optimizer API
    #[error("Optimizer API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Top-level `message` returned by the optimizer
    #[error("Optimization failed: {0}")]
    Application(String),

    /// Response decoded but violates the response contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser binding errors
    #[error("DOM error: {0}")]
    Dom(String),
}

impl FrontendError {
    /// Shorthand for an input error on `field`.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        FrontendError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for failures of the exchange itself (unreachable or bad status).
    pub fn is_transport(&self) -> bool {
        matches!(self, FrontendError::Http(_) | FrontendError::Api { .. })
    }

    /// Text shown to the user in place of the allocation card.
    ///
    /// Application messages are surfaced verbatim, transport failures get a
    /// generic message.
    pub fn user_message(&self) -> String {
        match self {
            FrontendError::Application(message) => message.clone(),
            FrontendError::Http(_) | FrontendError::Api { .. } => TRANSPORT_MESSAGE.to_string(),
            FrontendError::MalformedResponse(_) | FrontendError::Json(_) => {
                MALFORMED_MESSAGE.to_string()
            }
            FrontendError::InvalidInput { .. }
            | FrontendError::Config(_)
            | FrontendError::Dom(_) => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for FrontendError {
    fn from(err: reqwest::Error) -> Self {
        FrontendError::Http(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FrontendError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FrontendError::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl From<FrontendError> for wasm_bindgen::JsValue {
    fn from(err: FrontendError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrontendError::invalid_input("targetReturn", "expected a number, got \"abc\"");
        assert_eq!(
            err.to_string(),
            "Invalid targetReturn: expected a number, got \"abc\""
        );
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: FrontendError = json_err.into();
        assert!(matches!(err, FrontendError::Json(_)));
    }

    #[test]
    fn test_application_message_is_verbatim() {
        let err = FrontendError::Application("tickers not found".into());
        assert_eq!(err.user_message(), "tickers not found");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_message_is_generic() {
        let err = FrontendError::Api {
            status: 500,
            body: "Traceback (most recent call last)".into(),
        };
        assert!(err.is_transport());
        assert_eq!(err.user_message(), TRANSPORT_MESSAGE);
        assert!(!err.user_message().contains("Traceback"));
    }
}
