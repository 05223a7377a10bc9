use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok};
use crate::shared::error::ApiError;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)?
        .send()
        .await?;

    Ok(ensure_ok(response).await?.json::<LoginResponse>().await?)
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&request)?
        .send()
        .await?;

    Ok(ensure_ok(response).await?.json::<RefreshResponse>().await?)
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&request)?
        .send()
        .await?;

    ensure_ok(response).await?;
    Ok(())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await?;

    Ok(ensure_ok(response).await?.json::<UserInfo>().await?)
}
