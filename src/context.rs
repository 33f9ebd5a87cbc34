//! Auth Context
//!
//! Session state provided via Leptos Context API. The flag follows the stored
//! token: it is set on login, cleared on logout, cleared when the API client
//! reports a 401, and re-derived when another tab changes the token.

use leptos::ev;
use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::session::{self, AUTH_TOKEN_KEY, LOGOUT_EVENT};

pub const LOGIN_PATH: &str = "/login";

/// Characters left readable in the `redirect` query value
const REDIRECT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'/').remove(b'-').remove(b'_').remove(b'.');

/// App-wide auth signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub is_authenticated: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            is_authenticated: RwSignal::new(session::read_token().is_some()),
        }
    }

    pub fn login(&self, token: &str) {
        session::store_token(token);
        self.is_authenticated.set(true);
        log::info!("[Auth] logged in");
    }

    pub fn logout(&self) {
        session::clear_token();
        self.is_authenticated.set(false);
        log::info!("[Auth] logged out");
    }

    /// Attach the window listeners that keep the flag in sync
    pub fn listen(&self) {
        let flag = self.is_authenticated;

        let logout_handle = window_event_listener_untyped(LOGOUT_EVENT, move |_| {
            log::info!("[Auth] session ended by API client");
            flag.set(false);
        });

        let storage_handle = window_event_listener(ev::storage, move |e| {
            if e.key().as_deref() == Some(AUTH_TOKEN_KEY) {
                let present = e.new_value().is_some_and(|v| !v.trim().is_empty());
                log::debug!("[Auth] token changed in another tab, authenticated={}", present);
                flag.set(present);
            }
        });

        on_cleanup(move || {
            logout_handle.remove();
            storage_handle.remove();
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Login URL that returns to `path` (path plus query) afterwards
pub fn login_redirect_url(path: &str) -> String {
    let mut url = String::from(LOGIN_PATH);
    if !path.is_empty() && path != "/" {
        url.push_str("?redirect=");
        url.extend(utf8_percent_encode(path, REDIRECT_ENCODE_SET));
    }
    url
}

/// Path plus query of the current location; `search` may carry its `?`
pub fn requested_path(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, query)
    }
}

/// Where to go after login: a same-origin path that is not the login page
pub fn redirect_target(raw: Option<String>) -> String {
    match raw {
        Some(path) if is_safe_redirect(&path) => path,
        _ => "/".to_string(),
    }
}

fn is_safe_redirect(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") || path.starts_with("/\\") {
        return false;
    }
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    bare.trim_end_matches('/') != LOGIN_PATH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_path() {
        assert_eq!(requested_path("/table", ""), "/table");
        assert_eq!(requested_path("/table", "?page=2"), "/table?page=2");
        assert_eq!(requested_path("/table", "page=2"), "/table?page=2");
    }

    #[test]
    fn test_redirect_target_accepts_paths() {
        assert_eq!(redirect_target(Some("/table".into())), "/table");
        assert_eq!(redirect_target(Some("/statistics?tab=1".into())), "/statistics?tab=1");
    }

    #[test]
    fn test_login_redirect_url() {
        assert_eq!(login_redirect_url("/"), "/login");
        assert_eq!(login_redirect_url("/table"), "/login?redirect=/table");
        assert_eq!(
            login_redirect_url("/statistics?tab=a&b=1"),
            "/login?redirect=/statistics%3Ftab%3Da%26b%3D1"
        );
    }

    #[test]
    fn test_redirect_target_rejects_unsafe() {
        assert_eq!(redirect_target(None), "/");
        assert_eq!(redirect_target(Some("".into())), "/");
        assert_eq!(redirect_target(Some("https://evil.test".into())), "/");
        assert_eq!(redirect_target(Some("//evil.test/x".into())), "/");
        assert_eq!(redirect_target(Some("/login".into())), "/");
        assert_eq!(redirect_target(Some("/login/?redirect=/table".into())), "/");
    }
}
