use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::{Sidebar, Topbar};

/// Authenticated layout: sidebar on the left, top bar above the routed view.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="flex h-screen bg-base-100">
            <Sidebar/>
            <div class="flex-1 flex flex-col">
                <Topbar/>
                <main class="p-6 overflow-auto">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
