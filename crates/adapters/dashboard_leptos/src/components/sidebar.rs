//! Sidebar navigation with exact-match active highlighting.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use zhi_domain::nav::NAV_ITEMS;
use zhi_domain::route::AdminRoute;

const ACTIVE: &str = "w-full rounded-lg bg-secondary text-white transition-colors";
const IDLE: &str = "w-full rounded-lg hover:bg-secondary-focus hover:text-white transition-colors";

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let logout = move |_| {
        navigate(&AdminRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <aside class="w-54 bg-primary p-4 flex flex-col shadow-lg">
            <nav class="flex-1">
                <ul class="menu menu-vertical space-y-2 w-46">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let class = move || {
                                if item.is_active(&pathname.get()) { ACTIVE } else { IDLE }
                            };
                            view! {
                                <li class=class>
                                    <A href=item.href()>{item.label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class="mt-auto">
                <button class="btn btn-outline btn-sm w-full rounded-lg" on:click=logout>
                    "退出登录"
                </button>
            </div>
        </aside>
    }
}
