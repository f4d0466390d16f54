//! Razorpay API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{GatewayOrder, OrderRequest};
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;

/// Implementation of the Razorpay orders API client
pub struct RazorpayClientImpl {
    http: Client,
    base_url: String,
    key_id: String,
    key_secret: String,
    timeout: Duration,
}

impl RazorpayClientImpl {
    pub fn new(
        base_url: String,
        key_id: String,
        key_secret: String,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            key_id,
            key_secret,
            timeout,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.timeout.as_millis() as u64)
        } else {
            GatewayError::Request(e)
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GatewayError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GatewayError::Unauthorized)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GatewayError::Api {
                status: status.as_u16(),
                message: error_description(&body),
            })
        }
    }
}

/// Razorpay error envelope: `{"error": {"code": ..., "description": ...}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Pull the human-readable description out of an error body, falling back
/// to the raw text
fn error_description(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody {
                description: Some(description),
                ..
            },
        }) => description,
        Ok(ErrorEnvelope {
            error: ErrorBody {
                code: Some(code), ..
            },
        }) => code,
        _ if body.trim().is_empty() => "Payment gateway returned an empty error".to_string(),
        _ => body.to_string(),
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClientImpl {
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
        tracing::debug!(
            amount = request.amount,
            currency = %request.currency,
            "Creating gateway order"
        );

        let response = self
            .http
            .post(self.api_url("/orders"))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        self.handle_response(response).await
    }
}
