use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use zhi_domain::metrics;

use crate::components::StatCard;

/// Overview page: three placeholder metric cards, re-drawn on every mount.
#[component]
pub fn Dashboard() -> impl IntoView {
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    let cards = metrics::generate_cards(&mut rng);

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {cards
                .into_iter()
                .map(|card| view! { <StatCard label=card.label value=card.value/> })
                .collect_view()}
        </div>
    }
}
