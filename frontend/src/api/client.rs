use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, utils::storage as storage_utils};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.resolved_base_url().await, path.trim_start_matches('/'))
    }

    /// Attaches the stored bearer token, if any.
    pub(super) fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match storage_utils::access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API rejected the stored session, clearing it");
            storage_utils::clear_session();
        }
    }

    pub(super) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error(response).await)
        }
    }

    pub(super) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error(response).await)
        }
    }

    async fn map_error(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => match status {
                StatusCode::UNAUTHORIZED => ApiError::unauthorized("Please sign in again."),
                StatusCode::FORBIDDEN => {
                    ApiError::forbidden("You do not have permission to do that.")
                }
                other => ApiError::request_failed(format!(
                    "Request failed with status {}",
                    other.as_u16()
                )),
            },
        }
    }
}
