//! Route guard for authenticated pages

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;

use crate::context::{login_redirect_url, requested_path, use_auth};

/// Renders the nested route when logged in, otherwise replaces the
/// location with the login page carrying the requested path.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    move || {
        if auth.is_authenticated.get() {
            view! { <Outlet /> }.into_any()
        } else {
            let requested = requested_path(&location.pathname.get_untracked(), &location.search.get_untracked());
            log::info!("[Auth] unauthenticated access to {}", requested);
            let options = NavigateOptions { replace: true, ..Default::default() };
            view! { <Redirect path=login_redirect_url(&requested) options=options /> }.into_any()
        }
    }
}
