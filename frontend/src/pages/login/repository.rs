use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    pub fn logout(&self) {
        self.client.logout();
    }
}
