use super::{
    utils::{available_actions, format_ordered_at, format_price, OrderAction},
    view_model::use_orders_view_model,
};
use crate::{
    api::Order,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    state::notification::ProcessOutcome,
};
use leptos::*;

#[component]
pub fn OrdersPanel(on_outcome: Callback<ProcessOutcome>) -> impl IntoView {
    let vm = use_orders_view_model(on_outcome);
    let resource = vm.orders_resource;
    let orders = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let error = Signal::derive(move || {
        resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.to_string())
    });
    let loading = resource.loading();
    let busy = vm.order_action.pending();
    let on_action = Callback::new(move |action: OrderAction| vm.order_action.dispatch(action));

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold text-fg">
                {move || if vm.is_admin.get() { "All orders" } else { "My orders" }}
            </h2>
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <Show when=move || loading.get()>
                <LoadingSpinner width="48px" height="48px" />
            </Show>
            <OrderList
                orders=orders
                viewer_is_admin=vm.is_admin.into()
                busy=busy.into()
                on_action=on_action
            />
        </div>
    }
}

#[component]
pub fn OrderList(
    orders: Signal<Vec<Order>>,
    viewer_is_admin: Signal<bool>,
    busy: Signal<bool>,
    on_action: Callback<OrderAction>,
) -> impl IntoView {
    let row = move |order: Order| {
        let actions = available_actions(&order, viewer_is_admin.get_untracked());
        view! {
            <tr data-order-id=order.id.clone()>
                <td class="px-4 py-3 text-sm text-fg">{order.car_name.clone()}</td>
                <td class="px-4 py-3 text-sm text-fg-muted">{order.email.clone()}</td>
                <td class="px-4 py-3 text-sm text-fg">{format_price(order.price)}</td>
                <td class="px-4 py-3 text-sm text-fg-muted">{format_ordered_at(&order)}</td>
                <td class="px-4 py-3 text-sm">{order.status.label()}</td>
                <td class="px-4 py-3 text-sm space-x-2">
                    {actions
                        .into_iter()
                        .map(|action| {
                            let (label, kind) = match action {
                                OrderAction::Cancel(_) => ("Cancel", "cancel"),
                                OrderAction::Approve(_) => ("Approve", "approve"),
                            };
                            view! {
                                <button
                                    type="button"
                                    data-action=kind
                                    class="px-3 py-1 rounded border border-border hover:bg-action-ghost-bg-hover disabled:opacity-50"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_action.call(action.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </td>
            </tr>
        }
    };

    view! {
        <Show
            when=move || !orders.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="No orders yet" icon="fas fa-receipt" /> }
        >
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Car"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Email"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Price"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Ordered"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For each=move || orders.get() key=|order| order.id.clone() children=row />
                </tbody>
            </table>
        </Show>
    }
}
