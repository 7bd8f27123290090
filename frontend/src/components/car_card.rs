use crate::api::Car;
use leptos::*;

const PLACEHOLDER_IMAGE: &str = "/images/car-placeholder.png";

#[component]
pub fn CarCard(car: Car) -> impl IntoView {
    let price = car.display_price();
    let image = car.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let subtitle = match (car.brand.as_deref(), car.model_year) {
        (Some(brand), Some(year)) => Some(format!("{} · {}", brand, year)),
        (Some(brand), None) => Some(brand.to_string()),
        (None, Some(year)) => Some(year.to_string()),
        (None, None) => None,
    };

    view! {
        <article class="bg-surface-elevated shadow rounded-lg overflow-hidden flex flex-col" data-car-id=car.id.clone()>
            <img src=image alt=car.name.clone() class="h-48 w-full object-cover"/>
            <div class="p-4 flex-1 flex flex-col gap-2">
                <h3 class="text-lg font-semibold text-fg">{car.name.clone()}</h3>
                {subtitle.map(|text| view! { <p class="text-xs text-fg-muted">{text}</p> })}
                {car.description.clone().map(|text| view! { <p class="text-sm text-fg-muted flex-1">{text}</p> })}
                <span class="mt-2 text-xl font-bold text-action-primary-bg">{price}</span>
            </div>
        </article>
    }
}
