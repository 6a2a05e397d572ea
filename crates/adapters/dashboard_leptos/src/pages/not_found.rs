use leptos::prelude::*;
use leptos_router::components::A;
use zhi_domain::route::AdminRoute;

/// Shown inside the shell when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found text-center py-12">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="mb-6">"您访问的页面不存在。"</p>
            <A href=AdminRoute::Dashboard.path() attr:class="btn btn-primary">
                "返回仪表盘"
            </A>
        </div>
    }
}
