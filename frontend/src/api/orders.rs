use super::{
    client::ApiClient,
    types::{ApiError, Order, OrderStatus, UpdateOrderStatus},
};

impl ApiClient {
    /// Orders placed with `email`.
    pub async fn get_orders_for(&self, email: &str) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint("orders").await;
        let request = self.http_client().get(url).query(&[("email", email)]);
        let response = self.send(self.with_auth(request)).await?;
        self.map_json_response(response).await
    }

    /// Every order; admin only.
    pub async fn get_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoint("orders").await;
        let response = self.send(self.with_auth(self.http_client().get(url))).await?;
        self.map_json_response(response).await
    }

    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("orders/{}", id)).await;
        let request = self
            .http_client()
            .put(url)
            .json(&UpdateOrderStatus { status });
        let response = self.send(self.with_auth(request)).await?;
        self.map_empty_response(response).await
    }

    pub async fn cancel_order(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("orders/{}", id)).await;
        let response = self
            .send(self.with_auth(self.http_client().delete(url)))
            .await?;
        self.map_empty_response(response).await
    }
}
