use crate::api::Order;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    Cancel(String),
    Approve(String),
}

impl OrderAction {
    pub fn order_id(&self) -> &str {
        match self {
            OrderAction::Cancel(id) | OrderAction::Approve(id) => id,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            OrderAction::Cancel(_) => "Order cancelled",
            OrderAction::Approve(_) => "Order approved",
        }
    }
}

/// Actions offered for `order`. Only pending orders can change state.
pub fn available_actions(order: &Order, viewer_is_admin: bool) -> Vec<OrderAction> {
    if !order.is_pending() {
        return Vec::new();
    }
    let mut actions = Vec::with_capacity(2);
    if viewer_is_admin {
        actions.push(OrderAction::Approve(order.id.clone()));
    }
    actions.push(OrderAction::Cancel(order.id.clone()));
    actions
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.fract() == 0.0 => format!("${}", value as i64),
        Some(value) => format!("${:.2}", value),
        None => "-".into(),
    }
}

pub fn format_ordered_at(order: &Order) -> String {
    order
        .ordered_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".into())
}
