use reqwest::Client;
use serde_json::Value;
use shared::{error::SubmitError, protocol::FilterResponse};
use tracing::{debug, error};
use url::Url;

/// Production filter endpoint; override with `--endpoint` at startup.
pub const DEFAULT_ENDPOINT: &str = "https://restapi-production-21c8.up.railway.app/bfhl";

/// Validate raw form text into the payload that will be POSTed.
///
/// The full parsed object is forwarded to the endpoint, not just `data`, so
/// extra fields pass through untouched. Both failure modes reject before any
/// network call is attempted.
pub fn parse_submission(raw: &str) -> Result<Value, SubmitError> {
    let payload: Value =
        serde_json::from_str(raw).map_err(|err| SubmitError::syntax(err.to_string()))?;

    match payload.get("data") {
        Some(Value::Array(_)) => Ok(payload),
        _ => Err(SubmitError::Shape),
    }
}

/// Wrapper around the single outbound call of the app.
pub struct FilterApiClient {
    http: Client,
    endpoint: Url,
}

impl FilterApiClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One POST, one outcome: no retry, no cancellation. `reqwest::json`
    /// serializes the payload and sets `Content-Type: application/json`.
    pub async fn submit(&self, payload: &Value) -> Result<FilterResponse, SubmitError> {
        debug!(endpoint = %self.endpoint, "submitting payload");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| transport_failure("failed to reach filter endpoint", &err))?
            .error_for_status()
            .map_err(|err| transport_failure("filter endpoint returned error status", &err))?;

        response
            .json::<FilterResponse>()
            .await
            .map_err(|err| transport_failure("invalid filter endpoint response payload", &err))
    }
}

fn transport_failure(stage: &str, err: &reqwest::Error) -> SubmitError {
    error!("{stage}: {err}");
    SubmitError::transport(format!("{stage}: {err}"))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
