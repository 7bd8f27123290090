use crate::api::Order;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountDue {
    pub orders: Vec<Order>,
    pub total: f64,
}

/// Pending orders and their summed price. Orders without a price add nothing.
pub fn amount_due(orders: Vec<Order>) -> AmountDue {
    let orders: Vec<Order> = orders.into_iter().filter(Order::is_pending).collect();
    let total = orders.iter().filter_map(|order| order.price).sum();
    AmountDue { orders, total }
}
