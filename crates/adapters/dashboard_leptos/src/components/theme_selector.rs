//! Theme dropdown: one radio option per token, mutually exclusive.

use leptos::prelude::*;
use zhi_domain::theme::Theme;

use super::use_toasts;
use crate::theme::use_theme;

/// Dropdown listing every [`Theme`]; the checked option follows the
/// active token.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let theme = use_theme();
    let toasts = use_toasts();

    let options = Theme::ALL
        .into_iter()
        .map(|option| {
            let reader = theme.clone();
            let writer = theme.clone();
            let on_change = move |_| {
                if let Err(err) = writer.select(option) {
                    leptos::logging::warn!("theme {option} not applied: {err}");
                    toasts.push(format!("主题切换失败：{err}"));
                }
            };
            view! {
                <li>
                    <input
                        type="radio"
                        name="theme-dropdown"
                        class="theme-controller w-full btn btn-sm btn-block btn-ghost justify-start"
                        aria-label=option.label()
                        value=option.token()
                        prop:checked=move || reader.current() == option
                        on:change=on_change
                    />
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="dropdown">
            <div tabindex="0" role="button" class="btn m-1 bg-base-100">
                "主题"
                <svg
                    width="12px"
                    height="12px"
                    class="inline-block h-2 w-2 fill-current opacity-60"
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 2048 2048"
                >
                    <path d="M1799 349l242 241-1017 1017L7 590l242-241 775 775 775-775z"></path>
                </svg>
            </div>
            <ul tabindex="0" class="dropdown-content bg-base-100 rounded-box z-1 w-22 p-2 shadow-2xl">
                {options}
            </ul>
        </div>
    }
}
