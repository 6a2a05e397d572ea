use leptos::prelude::*;

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <h2 class="card-title">"设置"</h2>
                <p class="opacity-60">"暂无可配置项。主题可在顶部栏切换。"</p>
            </div>
        </div>
    }
}
