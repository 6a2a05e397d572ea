//! Stat card component for displaying a labelled numeric value.

use leptos::prelude::*;

/// A card displaying a label and a numeric value.
#[component]
pub fn StatCard(
    /// The label shown as the card title.
    #[prop(into)]
    label: String,
    /// The numeric value to display.
    value: u32,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <h2 class="card-title">{label}</h2>
                <p class="text-3xl font-bold">{value}</p>
            </div>
        </div>
    }
}
