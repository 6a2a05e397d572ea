use leptos::prelude::*;

/// Device list. No backend is attached yet, so the table is always empty.
#[component]
pub fn Devices() -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th>"设备"</th>
                        <th>"型号"</th>
                        <th>"固件版本"</th>
                        <th>"状态"</th>
                    </tr>
                </thead>
                <tbody></tbody>
            </table>
            <p class="empty-state py-6 text-center opacity-60">"暂无设备"</p>
        </div>
    }
}
