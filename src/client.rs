//! Optimizer API client
//!
//! One POST per optimization mode against a fixed origin, JSON in and out.
//! No retries and no timeouts: a failed exchange is reported once and the
//! user resubmits.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{FrontendError, Result};
use crate::request::OptimizationRequest;
use crate::response::OptimizationResponse;

/// Anything that can answer an optimization request.
///
/// Futures are local: in the browser they run on the single-threaded event
/// loop.
pub trait OptimizerApi {
    fn optimize<'a>(
        &'a self,
        request: &'a OptimizationRequest,
    ) -> LocalBoxFuture<'a, Result<OptimizationResponse>>;
}

/// HTTP client for the optimizer service
pub struct OptimizerClient {
    http: reqwest::Client,
    origin: String,
}

impl OptimizerClient {
    /// Create a client for the API at `origin`
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_origin.clone())
    }

    /// Full URL of a mode's endpoint
    pub fn endpoint_url(&self, request: &OptimizationRequest) -> String {
        format!("{}{}", self.origin, request.mode().endpoint())
    }

    /// Send one optimization request
    pub async fn send(&self, request: &OptimizationRequest) -> Result<OptimizationResponse> {
        let url = self.endpoint_url(request);
        debug!(
            "POST {url} ({} tickers)",
            request.tickers().len()
        );
        self.post(&url, request).await
    }

    /// Perform POST request
    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response, checking for errors
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        decode_body(status.as_u16(), &body)
    }
}

impl OptimizerApi for OptimizerClient {
    fn optimize<'a>(
        &'a self,
        request: &'a OptimizationRequest,
    ) -> LocalBoxFuture<'a, Result<OptimizationResponse>> {
        self.send(request).boxed_local()
    }
}

fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(FrontendError::Api {
            status,
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(FrontendError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FormValues, OptimizationMode};

    fn request(mode: OptimizationMode) -> OptimizationRequest {
        let form: FormValues = [
            ("tickers", "AAPL,KO"),
            ("totalPortfolioValue", "1000"),
            ("targetVolatility", "0.2"),
            ("targetReturn", "0.1"),
            ("targetCVaR", "0.05"),
        ]
        .into_iter()
        .collect();
        OptimizationRequest::from_form(mode, &form).unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        let client = OptimizerClient::new("http://127.0.0.1:5000/");
        assert_eq!(
            client.endpoint_url(&request(OptimizationMode::Hrp)),
            "http://127.0.0.1:5000/optimize_hrp"
        );
        assert_eq!(
            client.endpoint_url(&request(OptimizationMode::EfficientCvar)),
            "http://127.0.0.1:5000/efficient_cvar"
        );
    }

    #[test]
    fn test_decode_success_body() {
        let response: OptimizationResponse =
            decode_body(200, r#"{"allocations": {"AAPL": "buy 1 shares of AAPL"}, "leftover": 3.5}"#)
                .unwrap();
        assert_eq!(response.leftover, Some(3.5));
    }

    #[test]
    fn test_decode_error_status() {
        let err = decode_body::<OptimizationResponse>(500, "Internal Server Error").unwrap_err();
        assert!(matches!(err, FrontendError::Api { status: 500, .. }));
        assert!(err.is_transport());
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_body::<OptimizationResponse>(200, "<html>").unwrap_err();
        assert!(matches!(err, FrontendError::Json(_)));
    }

    #[test]
    fn test_reqwest_failure_is_transport_error() {
        let failure = reqwest::Client::new().post("not a url").build().unwrap_err();
        let err = FrontendError::from(failure);
        assert!(matches!(err, FrontendError::Http(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_send_failure_is_transport_error() {
        // an origin that is not a URL fails before any connection is attempted
        let client = OptimizerClient::new("not a url");
        let err = client
            .send(&request(OptimizationMode::MaxSharpe))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
