//! Backend API Client
//!
//! Thin wrappers over the admin REST endpoints, organized by domain. Every
//! request carries the stored bearer token, is bounded by the configured
//! timeout, and a 401 response ends the session globally.

mod auth;
mod question;
mod stats;

use std::time::Duration;

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::sleep;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::config;
use crate::error::ApiError;
use crate::session;

// Re-export all public items
pub use auth::*;
pub use question::*;
pub use stats::*;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match session::read_token() {
        Some(token) => builder.header("Authorization", &session::bearer(&token)),
        None => builder,
    }
}

/// Send a request, enforcing the timeout and mapping non-2xx statuses
async fn send(request: Request) -> Result<Response, ApiError> {
    let timeout_ms = config().request_timeout_ms;
    let send = Box::pin(request.send());
    let timeout = Box::pin(sleep(Duration::from_millis(u64::from(timeout_ms))));

    let response = match select(send, timeout).await {
        Either::Left((result, _)) => result?,
        Either::Right(_) => return Err(ApiError::Timeout(timeout_ms)),
    };

    let status = response.status();
    if status == 401 {
        log::warn!("[API] 401 from {}, ending session", response.url());
        let body = response.text().await.unwrap_or_default();
        session::force_logout();
        return Err(ApiError::from_unauthorized(&body));
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
    let url = config().url(path);
    log::debug!("[API] GET {}", url);
    let builder = Request::get(&url).query(query.iter().map(|(k, v)| (*k, v.as_str())));
    let request = with_auth(builder).build()?;
    decode(send(request).await?).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    decode(post(path, body).await?).await
}

/// POST whose response body is ignored
pub(crate) async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    post(path, body).await.map(|_| ())
}

async fn post<B: Serialize>(path: &str, body: &B) -> Result<Response, ApiError> {
    let url = config().url(path);
    log::debug!("[API] POST {}", url);
    let request = with_auth(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await
}
