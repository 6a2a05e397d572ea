//! Two-phase login screen: an intro panel, then the credentials form.
//!
//! Phase changes come from [`LoginPhase::apply`]; this view only adds the
//! exit animation. While a panel is leaving, further events are ignored.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use zhi_domain::login::{LoginEvent, LoginPhase};

/// Duration of the exit animation (`.login-exit` in the stylesheet).
const EXIT_MS: u32 = 500;

#[component]
pub fn Login() -> impl IntoView {
    let phase = RwSignal::new(LoginPhase::default());
    let leaving = RwSignal::new(false);

    let dispatch = move |event: LoginEvent| {
        if leaving.get_untracked() {
            return;
        }
        let next = phase.get_untracked().apply(event);
        if next == phase.get_untracked() {
            return;
        }
        leaving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(EXIT_MS).await;
            phase.set(next);
            leaving.set(false);
        });
    };

    let panel_class = move |base: &'static str| {
        let motion = if leaving.get() { "login-exit" } else { "login-enter" };
        format!("{base} {motion}")
    };

    let intro = move || {
        view! {
            <div class=move || panel_class("text-white text-center max-w-2xl")>
                <img src="/admin/assets/bot.svg" class="mx-auto w-48 mb-6" alt="Logo"/>
                <h1 class="text-5xl font-bold mb-4">"欢迎来到 小智管理后台！"</h1>
                <p class="text-lg mb-8">
                    "支持在线升级，快速、安全、便捷，助你更高效管理智能终端。"
                </p>
                <button
                    class="btn btn-neutral px-10 py-3 text-lg rounded-full shadow-lg"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        dispatch(LoginEvent::Enter);
                    }
                >
                    "立即进入"
                </button>
            </div>
        }
    };

    let form = move || {
        view! {
            <div
                class=move || {
                    panel_class(
                        "w-full max-w-md bg-white/10 backdrop-blur-xl p-8 rounded-2xl shadow-2xl border border-white/20 text-white",
                    )
                }
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    dispatch(LoginEvent::ClickInside);
                }
            >
                <h2 class="text-3xl font-bold mb-6 text-center">"登录"</h2>
                <form
                    class="space-y-5"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        dispatch(LoginEvent::Submit);
                        leptos::logging::warn!("login submitted but no authentication backend is attached");
                    }
                >
                    <div>
                        <label class="block text-sm mb-1">"用户名"</label>
                        <input
                            type="text"
                            class="input input-bordered w-full text-black"
                            placeholder="请输入用户名"
                        />
                    </div>
                    <div>
                        <label class="block text-sm mb-1">"密码"</label>
                        <input
                            type="password"
                            class="input input-bordered w-full text-black"
                            placeholder="请输入密码"
                        />
                    </div>
                    <button type="submit" class="btn btn-neutral primary-content w-full">
                        "登录"
                    </button>
                </form>
            </div>
        }
    };

    view! {
        <div class="relative min-h-screen overflow-hidden bg-gradient-to-r from-primary via-secondary to-accent">
            <div class="absolute inset-0 z-0 pointer-events-none">
                <div class="absolute w-72 h-72 bg-pink-400 rounded-full opacity-20 blur-3xl animate-blob1"></div>
                <div class="absolute w-96 h-96 bg-blue-400 rounded-full opacity-20 blur-3xl animate-blob2"></div>
                <div class="absolute w-80 h-80 bg-purple-500 rounded-full opacity-20 blur-3xl animate-blob3"></div>
            </div>

            <div
                class="relative z-10 flex items-center justify-center min-h-screen p-6"
                on:click=move |_| dispatch(LoginEvent::ClickOutside)
            >
                {move || {
                    if phase.get().shows_form() { form().into_any() } else { intro().into_any() }
                }}
            </div>
        </div>
    }
}
