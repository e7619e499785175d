use serde::{Deserialize, Serialize};

use super::user::Identity;
use crate::error::ApiError;

#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Shared by `/login` and `/register`.
#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    pub fn into_identity(self) -> Result<Identity, ApiError> {
        match (self.success, self.user) {
            (true, Some(user)) => Ok(user),
            _ => Err(ApiError::Rejected {
                message: self.message,
            }),
        }
    }
}
