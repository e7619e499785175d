use crate::error::ApiError;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::user::UserStatus;
use log::{debug, error, info};
use reqwest::Client;

use super::decode_outcome;

pub async fn get_user_status(client: &Client, base_url: &str) -> Result<UserStatus, ApiError> {
    let url = format!("{}/user-status", base_url);
    let resp = client.get(&url).send().await?;
    if resp.status().is_success() {
        let response = resp.json::<UserStatus>().await?;
        info!("User status received");
        Ok(response)
    } else {
        error!("Failed to get user status: {}", resp.status());
        Err(ApiError::Status(resp.status()))
    }
}

pub async fn login(
    client: &Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    debug!("Logging in as {}", email);
    let url = format!("{}/login", base_url);
    let request = LoginRequest { email, password };
    let resp = client.post(&url).json(&request).send().await?;
    let response = decode_outcome::<AuthResponse>(resp).await?;
    if response.success {
        info!("Login succeeded");
    } else {
        error!("Login rejected: {:?}", response.message);
    }
    Ok(response)
}

pub async fn register(
    client: &Client,
    base_url: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    debug!("Registering {}", email);
    let url = format!("{}/register", base_url);
    let request = RegisterRequest {
        name,
        email,
        password,
    };
    let resp = client.post(&url).json(&request).send().await?;
    let response = decode_outcome::<AuthResponse>(resp).await?;
    if response.success {
        info!("Registration succeeded");
    } else {
        error!("Registration rejected: {:?}", response.message);
    }
    Ok(response)
}

pub async fn logout(client: &Client, base_url: &str) -> Result<(), ApiError> {
    let url = format!("{}/logout", base_url);
    let resp = client.get(&url).send().await?;
    if resp.status().is_success() {
        info!("Logged out");
        Ok(())
    } else {
        error!("Logout failed: {}", resp.status());
        Err(ApiError::Status(resp.status()))
    }
}
