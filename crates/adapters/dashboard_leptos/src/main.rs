use zhi_adapter_dashboard_leptos::App;

fn main() {
    console_error_panic_hook::set_once();
    // Routes `tracing` events from zhi-app (e.g. theme fallback) to the console.
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
