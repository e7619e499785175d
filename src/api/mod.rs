use std::future::Future;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::auth::AuthResponse;
use crate::models::stats::{Results, Stats, VotingPatterns};
use crate::models::user::UserStatus;
use crate::models::vote::{VoteRequest, VoteResponse};

pub mod auth;
pub mod stats;
pub mod vote;

/// The voting server as seen by the controller.
pub trait VotingApi: Send + Sync + 'static {
    fn user_status(&self) -> impl Future<Output = Result<UserStatus, ApiError>> + Send;

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>> + Send;

    fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn vote(
        &self,
        request: VoteRequest,
    ) -> impl Future<Output = Result<VoteResponse, ApiError>> + Send;

    fn results(&self) -> impl Future<Output = Result<Results, ApiError>> + Send;

    fn stats(&self) -> impl Future<Output = Result<Stats, ApiError>> + Send;

    fn voting_patterns(&self) -> impl Future<Output = Result<VotingPatterns, ApiError>> + Send;
}

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// The cookie store carries the server-side session between calls.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl VotingApi for HttpApi {
    async fn user_status(&self) -> Result<UserStatus, ApiError> {
        auth::get_user_status(&self.client, &self.base_url).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        auth::login(&self.client, &self.base_url, email, password).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        auth::register(&self.client, &self.base_url, name, email, password).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        auth::logout(&self.client, &self.base_url).await
    }

    async fn vote(&self, request: VoteRequest) -> Result<VoteResponse, ApiError> {
        vote::cast_vote(&self.client, &self.base_url, &request).await
    }

    async fn results(&self) -> Result<Results, ApiError> {
        stats::get_results(&self.client, &self.base_url).await
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        stats::get_stats(&self.client, &self.base_url).await
    }

    async fn voting_patterns(&self) -> Result<VotingPatterns, ApiError> {
        stats::get_voting_patterns(&self.client, &self.base_url).await
    }
}

/// `/login`, `/register` and `/vote` answer non-2xx statuses with a structured
/// body, so the body is decoded first and the status only matters when it isn't.
async fn decode_outcome<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    match serde_json::from_slice::<T>(&body) {
        Ok(outcome) => Ok(outcome),
        Err(_) if !status.is_success() => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e)),
    }
}
