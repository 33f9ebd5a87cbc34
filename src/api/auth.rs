//! Auth Endpoints

use serde::{Deserialize, Serialize};

use super::post_json;
use crate::error::ApiError;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

/// The backend answers with a bare JSON string; older builds wrap it
#[derive(Deserialize)]
#[serde(untagged)]
enum LoginResponse {
    Bare(String),
    Wrapped { token: String },
}

impl LoginResponse {
    fn into_token(self) -> Result<String, ApiError> {
        let token = match self {
            LoginResponse::Bare(token) | LoginResponse::Wrapped { token } => token,
        };
        if token.trim().is_empty() {
            return Err(ApiError::InvalidToken);
        }
        Ok(token)
    }
}

pub async fn login_admin(email: &str, password: &str) -> Result<String, ApiError> {
    let response: LoginResponse = post_json("/auth/login-admin", &LoginArgs { email, password }).await?;
    response.into_token()
}
