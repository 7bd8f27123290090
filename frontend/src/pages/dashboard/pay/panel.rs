use super::{utils::AmountDue, view_model::use_pay_view_model};
use crate::{
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::dashboard::orders::utils::format_price,
};
use leptos::*;

#[component]
pub fn PayPanel() -> impl IntoView {
    let vm = use_pay_view_model();
    let resource = vm.due_resource;

    let body = move || match resource.get() {
        None => view! { <LoadingSpinner width="48px" height="48px" /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
        Some(Ok(due)) => view! { <PaymentSummary due=due /> }.into_view(),
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold text-fg">"Payment"</h2>
            {body}
        </div>
    }
}

#[component]
pub fn PaymentSummary(due: AmountDue) -> impl IntoView {
    if due.orders.is_empty() {
        return view! {
            <p class="text-sm text-fg-muted">"You have nothing to pay right now."</p>
        }
        .into_view();
    }
    let total = format_price(Some(due.total));
    view! {
        <ul class="divide-y divide-border">
            {due
                .orders
                .into_iter()
                .map(|order| view! {
                    <li class="flex justify-between py-2 text-sm" data-order-id=order.id.clone()>
                        <span class="text-fg">{order.car_name.clone()}</span>
                        <span class="text-fg-muted">{format_price(order.price)}</span>
                    </li>
                })
                .collect_view()}
        </ul>
        <p class="font-semibold text-fg" data-total=total.clone()>"Total due: " {total}</p>
        <p class="text-sm text-fg-muted">"Online payment is not available yet."</p>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{Order, OrderStatus};
    use crate::pages::dashboard::pay::utils::amount_due;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn summary_lists_pending_orders_and_total() {
        let due = amount_due(vec![
            Order {
                id: "o1".into(),
                car_id: None,
                car_name: "Civic".into(),
                price: Some(20000.0),
                email: "member@carzone.test".into(),
                status: OrderStatus::Pending,
                ordered_at: None,
            },
            Order {
                id: "o2".into(),
                car_id: None,
                car_name: "Golf".into(),
                price: Some(5000.0),
                email: "member@carzone.test".into(),
                status: OrderStatus::Pending,
                ordered_at: None,
            },
        ]);
        let html = render_to_string(move || view! { <PaymentSummary due=due /> });
        assert_eq!(html.matches("data-order-id=").count(), 2);
        assert!(html.contains("data-total=\"$25000\""));
        assert!(html.contains("not available yet"));
    }

    #[test]
    fn empty_summary_says_nothing_is_due() {
        let html = render_to_string(|| view! { <PaymentSummary due=AmountDue::default() /> });
        assert!(html.contains("nothing to pay"));
    }
}
