use crate::api::{ApiClient, ApiError, Order, OrderStatus, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct OrdersRepository {
    client: Rc<ApiClient>,
}

impl OrdersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Admins see every order; everyone else sees their own.
    pub async fn fetch_orders(&self, viewer: &UserResponse) -> Result<Vec<Order>, ApiError> {
        if viewer.is_admin() {
            self.client.get_all_orders().await
        } else {
            self.client.get_orders_for(&viewer.email).await
        }
    }

    pub async fn fetch_own_orders(&self, email: &str) -> Result<Vec<Order>, ApiError> {
        self.client.get_orders_for(email).await
    }

    pub async fn cancel(&self, order_id: &str) -> Result<(), ApiError> {
        self.client.cancel_order(order_id).await
    }

    pub async fn approve(&self, order_id: &str) -> Result<(), ApiError> {
        self.client
            .update_order_status(order_id, OrderStatus::Approved)
            .await
    }
}
