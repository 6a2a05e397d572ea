//! Toast notifications for transient error messages.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen.
const TOAST_TTL_MS: u32 = 5000;

/// A single toast message.
#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    /// The message body to display.
    pub text: String,
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    toasts: RwSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u32>,
}

impl ToastProvider {
    /// Push a new error toast. It dismisses itself after [`TOAST_TTL_MS`].
    pub fn push(&self, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.update(|list| list.push(ToastMessage { id, text }));

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Provides toast context and renders active toasts in the corner.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let provider = ToastProvider {
        toasts: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(provider);

    view! {
        {children()}
        <div class="toast toast-end toast-bottom z-50">
            {move || {
                provider
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div role="alert" class="alert alert-error">
                                <span>{toast.text}</span>
                                <button
                                    class="btn btn-ghost btn-xs"
                                    on:click=move |_| provider.dismiss(id)
                                >
                                    "\u{00D7}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
