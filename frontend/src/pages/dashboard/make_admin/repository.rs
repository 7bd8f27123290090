use crate::api::{ApiClient, ApiError, MakeAdminRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct MakeAdminRepository {
    client: Rc<ApiClient>,
}

impl MakeAdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn promote(&self, request: MakeAdminRequest) -> Result<MakeAdminRequest, ApiError> {
        self.client.make_admin(&request).await?;
        Ok(request)
    }
}
