//! LogiQ Admin Frontend App
//!
//! Root component: context providers and the route table.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::{NavigateOptions, StaticSegment};
use reactive_stores::Store;

use crate::components::{AdminLayout, RequireAuth};
use crate::context::AuthContext;
use crate::pages::{GenerationPage, LoginPage, StatisticsPage, TablePage};
use crate::store::TableState;
use crate::toast::{ToastHost, Toaster};

#[component]
fn HomeRedirect() -> impl IntoView {
    let options = NavigateOptions { replace: true, ..Default::default() };
    view! { <Redirect path="/table" options=options /> }
}

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    auth.listen();

    // Provide context to all children
    provide_context(auth);
    provide_context(Toaster::new());
    provide_context(Store::new(TableState::default()));

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage />
                <ParentRoute path=StaticSegment("") view=RequireAuth>
                    <ParentRoute path=StaticSegment("") view=AdminLayout>
                        <Route path=StaticSegment("") view=HomeRedirect />
                        <Route path=StaticSegment("table") view=TablePage />
                        <Route path=StaticSegment("generation") view=GenerationPage />
                        <Route path=StaticSegment("statistics") view=StatisticsPage />
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost />
    }
}
