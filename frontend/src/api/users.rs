use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, MakeAdminRequest, UserResponse},
};
use crate::utils::storage as storage_utils;

fn persist_session(response: &LoginResponse) -> Result<(), ApiError> {
    storage_utils::set(storage_utils::ACCESS_TOKEN_KEY, &response.access_token)
        .map_err(ApiError::unknown)?;
    let user = serde_json::to_string(&response.user)
        .map_err(|e| ApiError::unknown(format!("Failed to store user: {}", e)))?;
    storage_utils::set(storage_utils::CURRENT_USER_KEY, &user).map_err(ApiError::unknown)
}

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(&request))
            .await?;
        let login: LoginResponse = self.map_json_response(response).await?;
        persist_session(&login)?;
        Ok(login)
    }

    pub fn logout(&self) {
        storage_utils::clear_session();
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        if storage_utils::access_token().is_none() {
            return Err(ApiError::unauthorized("Not signed in"));
        }
        let url = self.endpoint("users/me").await;
        let response = self.send(self.with_auth(self.http_client().get(url))).await?;
        self.map_json_response(response).await
    }

    pub async fn make_admin(&self, request: &MakeAdminRequest) -> Result<(), ApiError> {
        let url = self.endpoint("users/admin").await;
        let response = self
            .send(self.with_auth(self.http_client().put(url).json(request)))
            .await?;
        self.map_empty_response(response).await
    }
}
