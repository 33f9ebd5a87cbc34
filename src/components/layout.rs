//! Admin Layout Component
//!
//! Collapsible side menu, header and the routed content outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::context::use_auth;
use crate::toast::use_toaster;

struct MenuItem {
    key: &'static str,
    icon: &'static str,
    label: &'static str,
    disabled: bool,
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { key: "/table", icon: "▦", label: "Questions", disabled: false },
    MenuItem { key: "/generation", icon: "⧗", label: "Generation", disabled: false },
    MenuItem { key: "/statistics", icon: "▥", label: "Statistics", disabled: false },
    MenuItem { key: "/settings", icon: "⚙", label: "Settings", disabled: true },
];

/// Menu entry to highlight for `pathname`; `/` highlights the question table
pub fn selected_menu_key(pathname: &str) -> String {
    if pathname == "/" {
        return "/table".to_string();
    }
    MENU_ITEMS
        .iter()
        .map(|item| item.key)
        .find(|key| pathname.starts_with(key))
        .unwrap_or(pathname)
        .to_string()
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let location = use_location();
    let navigate = use_navigate();
    let auth = use_auth();
    let toaster = use_toaster();
    let selected = Memo::new(move |_| selected_menu_key(&location.pathname.get()));

    view! {
        <div class="admin-layout">
            <aside class=move || if collapsed.get() { "sider collapsed" } else { "sider" }>
                <div class="sider-avatar">"👤"</div>
                <nav class="menu">
                    {MENU_ITEMS.iter().map(|item| {
                        let key = item.key;
                        let navigate = navigate.clone();
                        view! {
                            <button
                                class=move || if selected.get() == key { "menu-item selected" } else { "menu-item" }
                                disabled=item.disabled
                                title=item.label
                                on:click=move |_| navigate(key, NavigateOptions::default())
                            >
                                <span class="menu-icon">{item.icon}</span>
                                <Show when=move || !collapsed.get()>
                                    <span class="menu-label">{item.label}</span>
                                </Show>
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <button
                    class="sider-trigger"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </aside>
            <div class="main">
                <header class="header">
                    <span class="logo">"LQ"</span>
                    <h2>"LogiQ Administration"</h2>
                    <button class="btn btn-link logout-btn" on:click=move |_| {
                        auth.logout();
                        toaster.info("Logged out");
                    }>
                        "Log out"
                    </button>
                </header>
                <main class="content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_menu_key() {
        assert_eq!(selected_menu_key("/"), "/table");
        assert_eq!(selected_menu_key("/table"), "/table");
        assert_eq!(selected_menu_key("/statistics/extra"), "/statistics");
        assert_eq!(selected_menu_key("/unknown"), "/unknown");
    }
}
