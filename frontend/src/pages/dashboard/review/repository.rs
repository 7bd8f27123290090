use crate::api::{Acknowledgement, ApiClient, ApiError, NewReview};
use std::rc::Rc;

#[derive(Clone)]
pub struct ReviewRepository {
    client: Rc<ApiClient>,
}

impl ReviewRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, review: NewReview) -> Result<Acknowledgement, ApiError> {
        self.client.create_review(&review).await
    }
}
