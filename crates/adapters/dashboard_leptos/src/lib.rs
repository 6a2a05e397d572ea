//! # zhi-adapter-dashboard-leptos
//!
//! Client-side rendered admin console for Zhi-Server.
//!
//! ## Responsibilities
//! - Route every `/admin/*` location to exactly one view
//! - Render the shell (sidebar + top bar) around every view except login
//! - Own the browser side of theming: `localStorage` persistence and the
//!   `data-theme` attribute on `<html>`
//!
//! ## Dependency rule
//! Canonical paths, titles, navigation items and theme tokens come from
//! `zhi-domain`;
//! theme state goes through `zhi-app`'s `ThemeService`. This crate only
//! renders and wires browser APIs.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{NavigateOptions, path};
use zhi_domain::route::AdminRoute;

mod components;
mod pages;
pub mod theme;

use components::{Shell, ToastContainer};
use pages::{ColorPalette, Dashboard, Devices, Login, NotFound, Settings};

/// Root application component.
///
/// Login renders alone. Every other `/admin` path renders inside the shell,
/// unknown ones as a not-found page. Paths outside `/admin` go to the
/// dashboard.
#[component]
pub fn App() -> impl IntoView {
    theme::provide_theme_context();

    view! {
        <ToastContainer>
            <Router>
                <CanonicalPath/>
                <Routes fallback=|| view! { <Redirect path=AdminRoute::Dashboard.path()/> }>
                    <Route path=path!("/admin/login") view=Login/>
                    <ParentRoute path=path!("/admin") view=Shell>
                        <Route path=path!("") view=Dashboard/>
                        <Route path=path!("devices") view=Devices/>
                        <Route path=path!("settings") view=Settings/>
                        <Route path=path!("color") view=ColorPalette/>
                        <Route path=path!("*any") view=NotFound/>
                    </ParentRoute>
                </Routes>
            </Router>
        </ToastContainer>
    }
}

/// Replaces route aliases (`/admin`, `/admin/devices/`) with the canonical
/// path so the sidebar highlight always matches the rendered view.
#[component]
fn CanonicalPath() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(target) = AdminRoute::canonical_redirect(&pathname.get()) {
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
