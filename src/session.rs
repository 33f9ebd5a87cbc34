//! Session Token Storage
//!
//! The admin token lives in `localStorage` so it survives reloads and is
//! shared between tabs.

/// localStorage key holding the bearer token
pub const AUTH_TOKEN_KEY: &str = "logiq_admin_token";
/// Window event fired when the API client drops the session (HTTP 401)
pub const LOGOUT_EVENT: &str = "auth:logout";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored token, ignoring blank values
pub fn read_token() -> Option<String> {
    storage()?
        .get_item(AUTH_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

pub fn store_token(token: &str) {
    match storage() {
        Some(s) => {
            if s.set_item(AUTH_TOKEN_KEY, token).is_err() {
                log::error!("[Session] failed to persist token");
            }
        }
        None => log::error!("[Session] localStorage unavailable"),
    }
}

pub fn clear_token() {
    if let Some(s) = storage() {
        let _ = s.remove_item(AUTH_TOKEN_KEY);
    }
}

/// Clear the token and tell the auth context the session is gone
pub fn force_logout() {
    clear_token();
    let Some(window) = web_sys::window() else { return };
    match web_sys::CustomEvent::new(LOGOUT_EVENT) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::error!("[Session] could not create {} event: {:?}", LOGOUT_EVENT, e),
    }
}

/// `Authorization` header value for a token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }
}
