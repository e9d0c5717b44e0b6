//! HTTP implementation of the contract creation endpoint

use crate::error::{FleetDeskError, Result};
use crate::negotiation::{ContractOutcome, ContractRequest};
use async_trait::async_trait;
use serde::Deserialize;

/// Remote contract-creation capability
///
/// The single external seam of the negotiation core. Timeouts and retries at
/// the transport level are this collaborator's concern; the controller only
/// distinguishes "resolved with outcome" from "rejected with error".
#[async_trait]
pub trait ContractService: Send + Sync {
    async fn create(&self, request: &ContractRequest) -> Result<ContractOutcome>;
}

/// Error body shape used by the rental API for non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// REST client for the rental API
pub struct HttpContractService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContractService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ContractService for HttpContractService {
    async fn create(&self, request: &ContractRequest) -> Result<ContractOutcome> {
        let url = format!("{}/contract", self.base_url.trim_end_matches('/'));
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| FleetDeskError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FleetDeskError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FleetDeskError::ServerRejection(server_error_message(
                status.as_u16(),
                &body,
            )));
        }

        let outcome = serde_json::from_str(&body)?;
        Ok(outcome)
    }
}

/// Extract the `error` field from a rejection body, falling back to a
/// generic message when the body is not the expected shape
fn server_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => format!("request failed with status {}", status),
    }
}
