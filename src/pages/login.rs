//! Login page: email/password form that stores the admin token.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::api;
use crate::context::{redirect_target, use_auth};
use crate::toast::use_toaster;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Trimmed email and the raw password, or the messages to show per field
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), LoginFieldErrors> {
    let email = email.trim();
    let errors = LoginFieldErrors {
        email: email.is_empty().then_some("Please enter your email"),
        password: password.is_empty().then_some("Please enter your password"),
    };
    if errors.is_empty() {
        Ok((email.to_string(), password.to_string()))
    } else {
        Err(errors)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let query = use_query_map();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(LoginFieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (email, password) = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(field_errors) => {
                set_errors.set(field_errors);
                return;
            }
        };
        set_errors.set(LoginFieldErrors::default());
        set_submitting.set(true);

        let target = redirect_target(query.with_untracked(|q| q.get("redirect")));
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login_admin(&email, &password).await {
                Ok(token) => {
                    auth.login(&token);
                    log::info!("[Login] redirecting to {}", target);
                    navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    log::warn!("[Login] failed: {}", e);
                    toaster.error(&e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <div class="login-header">
                    <h3>"Welcome Back"</h3>
                    <p class="text-secondary">"Sign in with your email and password to continue."</p>
                </div>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <label class="form-item">
                        <span class="form-label">"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || errors.with(|e| e.email).map(|msg| view! { <span class="form-error">{msg}</span> })}
                    </label>
                    <label class="form-item">
                        <span class="form-label">"Password"</span>
                        <input
                            type="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || errors.with(|e| e.password).map(|msg| view! { <span class="form-error">{msg}</span> })}
                    </label>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
