use super::{
    client::ApiClient,
    types::{Acknowledgement, ApiError, NewReview},
};

impl ApiClient {
    pub async fn create_review(&self, review: &NewReview) -> Result<Acknowledgement, ApiError> {
        let url = self.endpoint("reviews").await;
        let response = self
            .send(self.with_auth(self.http_client().post(url).json(review)))
            .await?;
        self.map_json_response(response).await
    }
}
