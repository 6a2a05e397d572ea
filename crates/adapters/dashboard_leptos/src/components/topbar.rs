use leptos::prelude::*;
use leptos_router::hooks::use_location;
use zhi_domain::route::AdminRoute;

use super::ThemeSelector;

/// Title shown when the location matches no route.
const NOT_FOUND_TITLE: &str = "页面不存在";

#[component]
pub fn Topbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let title =
        move || AdminRoute::resolve(&pathname.get()).map_or(NOT_FOUND_TITLE, AdminRoute::title);

    view! {
        <header class="flex items-center justify-between bg-base-200 px-6 py-4 shadow">
            <h1 class="text-xl font-semibold">{title}</h1>
            <div class="flex items-center space-x-4">
                <ThemeSelector/>
                <div class="avatar online">
                    <div class="w-8 rounded-full">
                        <img src="/admin/assets/icon.svg" alt="User avatar"/>
                    </div>
                </div>
            </div>
        </header>
    }
}
